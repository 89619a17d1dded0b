//! Per-column configuration

use std::collections::HashMap;

use serde::Deserialize;
use serde::Serialize;

/// How a column's cells are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    /// Cells show the row's value (or a data handler's result).
    #[default]
    Plain,
    /// Cells show a markup fragment, per row or static.
    Html,
}

/// Column configuration.
///
/// Unset `show` and `can_be_picked` are permissive: a column is visible and
/// pickable unless explicitly switched off.
///
/// # Examples
///
/// ```
/// use datatable_lib::column::Column;
///
/// let name = Column::new("Name");
/// let actions = Column::html("Actions", "<button>Edit</button>").show_always();
/// let total = Column::new("Total").data_handler("format_total").not_pickable();
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Column {
    /// Header label.
    pub title: String,
    /// Explicit visibility; `None` means visible.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,
    /// Exempts the column from max-column truncation.
    pub show_always: bool,
    /// Whether the header label is drawn; `None` means drawn.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_head_title: Option<bool>,
    /// Cell kind.
    #[serde(rename = "type")]
    pub kind: ColumnKind,
    /// Static markup used by HTML columns when a row has no fragment of its own.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    /// Name of a registered [`DataHandlers`](super::DataHandlers) function.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_handler: Option<String>,
    /// Explicit pickability; `None` means pickable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_be_picked: Option<bool>,
    /// Cell style classes keyed by element tag.
    #[serde(rename = "rowCSSClass", alias = "styleClass", skip_serializing_if = "HashMap::is_empty")]
    pub row_css_class: HashMap<String, String>,
}

impl Column {
    /// Creates a plain column with a header title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Creates an HTML column with a static markup fragment.
    pub fn html(title: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            kind: ColumnKind::Html,
            html: Some(html.into()),
            ..Default::default()
        }
    }

    /// Sets explicit visibility.
    pub fn show(mut self, show: bool) -> Self {
        self.show = Some(show);
        self
    }

    /// Exempts the column from max-column truncation.
    pub fn show_always(mut self) -> Self {
        self.show_always = true;
        self
    }

    /// Hides the header label.
    pub fn hide_head_title(mut self) -> Self {
        self.show_head_title = Some(false);
        self
    }

    /// Derives cell values through a named handler.
    pub fn data_handler(mut self, name: impl Into<String>) -> Self {
        self.data_handler = Some(name.into());
        self
    }

    /// Removes the column from the column picker.
    pub fn not_pickable(mut self) -> Self {
        self.can_be_picked = Some(false);
        self
    }

    /// Adds a cell style class for an element tag.
    pub fn row_css_class(mut self, tag: impl Into<String>, class: impl Into<String>) -> Self {
        self.row_css_class.insert(tag.into(), class.into());
        self
    }

    /// Visible unless explicitly hidden.
    pub fn is_visible(&self) -> bool {
        self.show != Some(false)
    }

    /// Pickable unless explicitly excluded.
    pub fn is_pickable(&self) -> bool {
        self.can_be_picked != Some(false)
    }

    /// Whether the header label is drawn.
    pub fn shows_head_title(&self) -> bool {
        self.show_head_title != Some(false)
    }

    /// HTML columns are typed `html` or carry a static fragment.
    pub fn is_html(&self) -> bool {
        self.kind == ColumnKind::Html || self.html.is_some()
    }
}
