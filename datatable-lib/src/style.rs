//! Style-class resolution
//!
//! The core does no rendering, but it owns the lookup rules that decide
//! which class a renderer puts on each table element.

use std::collections::HashMap;

use serde::Deserialize;
use serde::Serialize;

use crate::column::Column;
use crate::model::Row;

/// Scope key holding classes that apply to every column.
pub const DEFAULT_SCOPE: &str = "_default";

/// Table elements that accept a class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableElement {
    Table,
    Thead,
    TheadRow,
    TheadCell,
    TheadCellLabel,
    Tbody,
    TbodyRow,
    TbodyCell,
    TbodyCellLabel,
}

impl TableElement {
    /// The tag path used as key in class mappings.
    pub fn tag(self) -> &'static str {
        match self {
            TableElement::Table => "table",
            TableElement::Thead => "thead",
            TableElement::TheadRow => "thead tr",
            TableElement::TheadCell => "thead tr th",
            TableElement::TheadCellLabel => "thead tr th span",
            TableElement::Tbody => "tbody",
            TableElement::TbodyRow => "tbody tr",
            TableElement::TbodyCell => "tbody tr td",
            TableElement::TbodyCellLabel => "tbody tr td span",
        }
    }
}

/// Table element classes keyed by scope (a column key or
/// [`DEFAULT_SCOPE`]) and then by element tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TableClasses {
    scopes: HashMap<String, HashMap<String, String>>,
}

impl TableClasses {
    /// Sets the class for an element tag within a scope.
    pub fn insert(&mut self, scope: impl Into<String>, element: impl Into<String>, class: impl Into<String>) {
        self.scopes
            .entry(scope.into())
            .or_default()
            .insert(element.into(), class.into());
    }

    /// Class for an element tag: the column's own entry, then the
    /// [`DEFAULT_SCOPE`] entry, else empty.
    pub fn resolve(&self, element: &str, column: Option<&str>) -> &str {
        column
            .and_then(|key| self.lookup(key, element))
            .or_else(|| self.lookup(DEFAULT_SCOPE, element))
            .unwrap_or_default()
    }

    fn lookup(&self, scope: &str, element: &str) -> Option<&str> {
        self.scopes
            .get(scope)
            .and_then(|classes| classes.get(element))
            .map(String::as_str)
    }
}

/// Class for a body element: the row's own override, then the column's
/// `rowCSSClass` entry, else empty. Row-level elements pass no column.
pub fn row_class<'a>(column: Option<&'a Column>, row: &'a Row, element: &str) -> &'a str {
    row.css_class(element)
        .or_else(|| column.and_then(|c| c.row_css_class.get(element)).map(String::as_str))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_prefers_column_scope() {
        let mut classes = TableClasses::default();
        classes.insert(DEFAULT_SCOPE, "thead tr th", "th");
        classes.insert("price", "thead tr th", "th-right");

        assert_eq!(classes.resolve(TableElement::TheadCell.tag(), Some("price")), "th-right");
        assert_eq!(classes.resolve(TableElement::TheadCell.tag(), Some("name")), "th");
        assert_eq!(classes.resolve(TableElement::TheadCell.tag(), None), "th");
        assert_eq!(classes.resolve(TableElement::Table.tag(), None), "");
    }

    #[test]
    fn test_row_class_prefers_row_override() {
        let column = Column::new("Price").row_css_class("tbody tr td", "num");
        let plain = Row::new().set("price", 3);
        let flagged = Row::new().set("price", 3).with_css_class("tbody tr td", "alert");

        assert_eq!(row_class(Some(&column), &plain, "tbody tr td"), "num");
        assert_eq!(row_class(Some(&column), &flagged, "tbody tr td"), "alert");
        assert_eq!(row_class(Some(&column), &plain, "tbody tr td span"), "");
        assert_eq!(row_class(None, &flagged, "tbody tr"), "");
    }
}
