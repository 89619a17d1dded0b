//! Ordered column registry

use indexmap::IndexMap;
use log::debug;
use serde::Deserialize;
use serde::Serialize;

use super::Column;
use super::ColumnKind;
use super::DataHandlers;
use crate::model::Row;
use crate::model::Value;
use crate::model::is_truthy;

/// What a cell shows for a given row and column.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// A markup fragment (HTML columns).
    Html(String),
    /// A data value (raw, or derived by a handler).
    Data(Value),
    /// Nothing to show.
    Null,
}

impl CellValue {
    /// Returns `true` for [`CellValue::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }
}

/// Column configurations keyed by column key.
///
/// Iteration order is insertion order, which is also render order. Every
/// change to visibility bumps [`revision`](ColumnRegistry::revision) so
/// observers can tell a new snapshot apart from the old one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnRegistry {
    columns: IndexMap<String, Column>,
    #[serde(skip)]
    revision: u64,
}

impl ColumnRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a column (builder style). Re-adding a key replaces the
    /// column but keeps its original position.
    pub fn with(mut self, key: impl Into<String>, column: Column) -> Self {
        self.insert(key, column);
        self
    }

    /// Inserts or replaces a column.
    pub fn insert(&mut self, key: impl Into<String>, column: Column) {
        self.columns.insert(key.into(), column);
        self.revision += 1;
    }

    /// Applies the max-visible-column policy.
    ///
    /// Columns past the first `max_columns` (in configuration order) that are
    /// not `show_always` are hidden. Nothing is reordered; `None` or `0`
    /// leaves every column untouched.
    pub fn initialize(&mut self, max_columns: Option<usize>) {
        if let Some(max) = max_columns.filter(|&max| max > 0) {
            for (index, (key, column)) in self.columns.iter_mut().enumerate() {
                if index >= max && !column.show_always {
                    debug!("Column '{}' hidden by max columns ({})", key, max);
                    column.show = Some(false);
                }
            }
        }
        self.revision += 1;
    }

    /// Returns the column registered under `key`.
    pub fn get(&self, key: &str) -> Option<&Column> {
        self.columns.get(key)
    }

    /// Iterates over `(key, column)` pairs in render order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Column)> {
        self.columns.iter().map(|(key, column)| (key.as_str(), column))
    }

    /// Iterates over column keys in render order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    /// Iterates over visible columns in render order.
    pub fn visible(&self) -> impl Iterator<Item = (&str, &Column)> {
        self.iter().filter(|(_, column)| column.is_visible())
    }

    /// Iterates over columns offered by the column picker.
    pub fn pickable(&self) -> impl Iterator<Item = (&str, &Column)> {
        self.iter().filter(|(_, column)| column.is_pickable())
    }

    /// Number of registered columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns `true` if no columns are registered.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Visible unless explicitly hidden. Unknown keys are not visible.
    pub fn is_visible(&self, key: &str) -> bool {
        self.get(key).is_some_and(Column::is_visible)
    }

    /// Pickable unless explicitly excluded. Unknown keys are not pickable.
    pub fn is_pickable(&self, key: &str) -> bool {
        self.get(key).is_some_and(Column::is_pickable)
    }

    /// Sets a single column's visibility. Unknown keys are ignored.
    pub fn set_visibility(&mut self, key: &str, visible: bool) {
        if let Some(column) = self.columns.get_mut(key) {
            column.show = Some(visible);
            self.revision += 1;
        }
    }

    /// Flips a single column's visibility. Unknown keys are ignored.
    pub fn toggle_visibility(&mut self, key: &str) {
        let visible = self.is_visible(key);
        self.set_visibility(key, !visible);
    }

    /// Snapshot counter, bumped on every change.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Resolves what a cell shows.
    ///
    /// 1. HTML columns: the row's own `{"html": ...}` fragment, else the
    ///    column's static fragment, else empty markup.
    /// 2. Columns with a registered data handler: the handler's result.
    /// 3. Otherwise the row's value, or [`CellValue::Null`] when it is
    ///    absent or falsy.
    pub fn value_for(&self, row: &Row, key: &str, handlers: &DataHandlers) -> CellValue {
        let Some(column) = self.get(key) else {
            return CellValue::Null;
        };

        if column.kind == ColumnKind::Html {
            let fragment = row
                .get(key)
                .and_then(|value| value.get("html"))
                .and_then(Value::as_str)
                .filter(|html| !html.is_empty())
                .or(column.html.as_deref())
                .unwrap_or_default();
            return CellValue::Html(fragment.to_string());
        }

        if let Some(value) = column
            .data_handler
            .as_deref()
            .and_then(|name| handlers.call(name, row))
        {
            return CellValue::Data(value);
        }

        match row.get(key) {
            Some(value) if is_truthy(value) => CellValue::Data(value.clone()),
            _ => CellValue::Null,
        }
    }
}

impl FromIterator<(String, Column)> for ColumnRegistry {
    fn from_iter<I: IntoIterator<Item = (String, Column)>>(iter: I) -> Self {
        Self {
            columns: iter.into_iter().collect(),
            revision: 0,
        }
    }
}
