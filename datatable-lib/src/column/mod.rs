//! Column configuration, registry and value resolution

mod config;
mod handler;
mod registry;

pub use config::*;
pub use handler::*;
pub use registry::*;
