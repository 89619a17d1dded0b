//! Named value-derivation functions

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::model::Row;
use crate::model::Value;

/// A value-derivation function: computes a cell value from the whole row.
pub type DataHandler = Arc<dyn Fn(&Row) -> Value + Send + Sync>;

/// Registry of data handlers, looked up by the name a column's
/// `dataHandler` refers to.
///
/// A name with no registered function is skipped and the cell falls back
/// to the row's raw value.
///
/// # Example
///
/// ```
/// use datatable_lib::column::DataHandlers;
/// use datatable_lib::model::{Row, Value};
///
/// let handlers = DataHandlers::new().register("full_name", |row: &Row| {
///     let first = row.get("first").and_then(Value::as_str).unwrap_or_default();
///     let last = row.get("last").and_then(Value::as_str).unwrap_or_default();
///     Value::from(format!("{first} {last}"))
/// });
///
/// let row = Row::new().set("first", "Ada").set("last", "Lovelace");
/// assert_eq!(handlers.call("full_name", &row), Some(Value::from("Ada Lovelace")));
/// assert_eq!(handlers.call("missing", &row), None);
/// ```
#[derive(Clone, Default)]
pub struct DataHandlers {
    handlers: HashMap<String, DataHandler>,
}

impl DataHandlers {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a handler under `name` (builder style).
    pub fn register<F>(mut self, name: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&Row) -> Value + Send + Sync + 'static,
    {
        self.insert(name, handler);
        self
    }

    /// Registers a handler under `name`, replacing any previous one.
    pub fn insert<F>(&mut self, name: impl Into<String>, handler: F)
    where
        F: Fn(&Row) -> Value + Send + Sync + 'static,
    {
        self.handlers.insert(name.into(), Arc::new(handler));
    }

    /// Invokes the handler registered under `name`, if any.
    pub fn call(&self, name: &str, row: &Row) -> Option<Value> {
        self.handlers.get(name).map(|handler| handler(row))
    }
}

impl fmt::Debug for DataHandlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.handlers.keys().collect();
        names.sort();
        f.debug_struct("DataHandlers").field("names", &names).finish()
    }
}
