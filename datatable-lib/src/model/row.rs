//! Table rows

use std::collections::HashMap;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Map;

use super::Value;
use super::display_text;
use crate::error::DataError;

/// One row of a table: an open, insertion-ordered mapping from column key
/// to value.
///
/// A row may also carry style-class overrides keyed by element tag (for
/// example `"tbody tr td"`). On the wire these live under the reserved
/// `_rowCSSClass` key; they are never treated as data.
///
/// # Example
///
/// ```
/// use datatable_lib::model::Row;
///
/// let row = Row::new()
///     .set("name", "Ada")
///     .set("age", 36)
///     .with_css_class("tbody tr", "highlight");
///
/// assert_eq!(row.get("name").and_then(|v| v.as_str()), Some("Ada"));
/// assert_eq!(row.css_class("tbody tr"), Some("highlight"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Row {
    #[serde(rename = "_rowCSSClass", default, skip_serializing_if = "HashMap::is_empty")]
    pub(crate) css_classes: HashMap<String, String>,

    #[serde(flatten)]
    pub(crate) fields: Map<String, Value>,
}

impl Row {
    /// Creates an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field value (builder style).
    pub fn set(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Adds a style-class override for an element tag (builder style).
    pub fn with_css_class(mut self, tag: impl Into<String>, class: impl Into<String>) -> Self {
        self.css_classes.insert(tag.into(), class.into());
        self
    }

    /// Returns the value stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Returns all fields in insertion order.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Returns the row-level style-class override for an element tag.
    pub fn css_class(&self, tag: &str) -> Option<&str> {
        self.css_classes.get(tag).map(String::as_str)
    }

    /// Space-joined display text of every value, in field order.
    ///
    /// This is the haystack free-text search matches against.
    pub fn searchable_text(&self) -> String {
        self.fields.values().map(display_text).collect::<Vec<_>>().join(" ")
    }

    /// Returns the row's fields as a JSON object.
    pub fn to_value(&self) -> Value {
        Value::Object(self.fields.clone())
    }
}

impl FromIterator<(String, Value)> for Row {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            css_classes: HashMap::new(),
            fields: iter.into_iter().collect(),
        }
    }
}

/// Parses a JSON array of objects into rows.
pub fn rows_from_json_str(json: &str) -> Result<Vec<Row>, DataError> {
    let value: Value = serde_json::from_str(json)?;
    rows_from_value(value)
}

/// Converts a JSON array of objects into rows.
pub fn rows_from_value(value: Value) -> Result<Vec<Row>, DataError> {
    let Value::Array(items) = value else {
        return Err(DataError::NotAnArray);
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            if !item.is_object() {
                return Err(DataError::NotAnObject { index });
            }
            Ok(serde_json::from_value(item)?)
        })
        .collect()
}
