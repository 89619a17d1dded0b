//! Headless data table
//!
//! The data-presentation core of a paginated, searchable, sortable,
//! column-configurable table: it turns a raw row collection into the rows
//! and columns a renderer should draw, and can hand filtering and paging
//! off to an external data provider through events.
//!
//! - [`table::DataTable`] - the state machine tying everything together
//! - [`column`] - column configuration, visibility and cell values
//! - [`query`] - filtering, ordering and pagination
//! - [`events`] - the outbound event protocol
//! - [`config`] - inbound configuration

pub mod column;
pub mod config;
pub mod error;
pub mod events;
pub mod model;
pub mod query;
pub mod style;
pub mod table;

pub use config::TableConfig;
pub use table::DataTable;
