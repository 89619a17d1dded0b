//! Row model and value helpers

mod row;
mod value;

pub use row::*;
pub use value::*;
