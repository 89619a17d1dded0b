//! Table configuration
//!
//! [`TableConfig`] carries everything the embedding application supplies
//! besides the rows themselves. It deserializes from the same camelCase JSON
//! shape the component's properties use, or can be built in code.

use std::path::Path;

use serde::Deserialize;
use serde::Serialize;

use crate::column::Column;
use crate::column::ColumnRegistry;
use crate::error::ConfigError;
use crate::events::EventScope;
use crate::style::TableClasses;

/// Default rows per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Optional table features.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Plugin {
    /// Free-text search box.
    Search,
    /// Clickable column headers cycling the ordering.
    Order,
    /// Local page windowing and the page-link bar.
    Pagination,
    /// Column picker for toggling visibility.
    Picker,
}

/// Enablement of one plugin.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginConfig {
    /// Whether the plugin is active.
    pub status: bool,
    /// Display label (search placeholder, picker button text).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl PluginConfig {
    /// An enabled plugin without a label.
    pub fn enabled() -> Self {
        Self {
            status: true,
            label: None,
        }
    }

    /// Sets the label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Plugin enablement flags. An absent plugin is disabled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Plugins {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<PluginConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<PluginConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PluginConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picker: Option<PluginConfig>,
}

impl Plugins {
    fn slot(&self, plugin: Plugin) -> Option<&PluginConfig> {
        match plugin {
            Plugin::Search => self.search.as_ref(),
            Plugin::Order => self.order.as_ref(),
            Plugin::Pagination => self.pagination.as_ref(),
            Plugin::Picker => self.picker.as_ref(),
        }
    }

    fn slot_mut(&mut self, plugin: Plugin) -> &mut Option<PluginConfig> {
        match plugin {
            Plugin::Search => &mut self.search,
            Plugin::Order => &mut self.order,
            Plugin::Pagination => &mut self.pagination,
            Plugin::Picker => &mut self.picker,
        }
    }

    /// Returns `true` if the plugin is configured with `status: true`.
    pub fn is_enabled(&self, plugin: Plugin) -> bool {
        self.slot(plugin).is_some_and(|config| config.status)
    }

    /// Returns the plugin's label, if configured.
    pub fn label(&self, plugin: Plugin) -> Option<&str> {
        self.slot(plugin).and_then(|config| config.label.as_deref())
    }

    /// Replaces a plugin's configuration.
    pub fn set(&mut self, plugin: Plugin, config: PluginConfig) {
        *self.slot_mut(plugin) = Some(config);
    }
}

/// Inbound configuration for a [`DataTable`](crate::table::DataTable).
///
/// # Example
///
/// ```
/// use datatable_lib::column::Column;
/// use datatable_lib::config::{Plugin, TableConfig};
///
/// let config = TableConfig::new()
///     .with_page_size(25)
///     .with_column("name", Column::new("Name"))
///     .with_column("email", Column::new("Email"))
///     .enable(Plugin::Search)
///     .enable(Plugin::Pagination);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TableConfig {
    /// Identifier stamped on dispatched events.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Delegate filtering, ordering and paging to the owner via events.
    pub has_external_data_provider: bool,
    /// Rows per page; must be greater than zero.
    pub page_size: usize,
    /// Total row count, authoritative only with an external provider.
    pub total_rows: usize,
    /// Maximum number of initially visible columns.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_columns: Option<usize>,
    /// Column configuration, in render order.
    pub columns: ColumnRegistry,
    /// Plugin enablement.
    pub plugins: Plugins,
    /// Table element classes, per column key or `_default`.
    #[serde(rename = "tableCSSClass")]
    pub table_css_class: TableClasses,
    /// Stylesheet URLs the renderer should link.
    pub css_files: Vec<String>,
    /// Where emitted events are dispatched.
    pub event_scope: EventScope,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            id: None,
            has_external_data_provider: false,
            page_size: DEFAULT_PAGE_SIZE,
            total_rows: 0,
            max_columns: None,
            columns: ColumnRegistry::new(),
            plugins: Plugins::default(),
            table_css_class: TableClasses::default(),
            css_files: Vec::new(),
            event_scope: EventScope::default(),
        }
    }
}

impl TableConfig {
    /// Creates a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses and validates a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
        Self::from_json_str(&json)
    }

    /// Checks invariants serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::InvalidPageSize(self.page_size));
        }
        Ok(())
    }

    /// Sets the table id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Enables or disables the external data provider mode.
    pub fn with_external_data_provider(mut self, external: bool) -> Self {
        self.has_external_data_provider = external;
        self
    }

    /// Sets rows per page.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Sets the externally known total row count.
    pub fn with_total_rows(mut self, total_rows: usize) -> Self {
        self.total_rows = total_rows;
        self
    }

    /// Sets the maximum number of initially visible columns.
    pub fn with_max_columns(mut self, max_columns: usize) -> Self {
        self.max_columns = Some(max_columns);
        self
    }

    /// Replaces the column configuration.
    pub fn with_columns(mut self, columns: ColumnRegistry) -> Self {
        self.columns = columns;
        self
    }

    /// Appends a column.
    pub fn with_column(mut self, key: impl Into<String>, column: Column) -> Self {
        self.columns.insert(key, column);
        self
    }

    /// Configures a plugin.
    pub fn with_plugin(mut self, plugin: Plugin, config: PluginConfig) -> Self {
        self.plugins.set(plugin, config);
        self
    }

    /// Enables a plugin without a label.
    pub fn enable(self, plugin: Plugin) -> Self {
        self.with_plugin(plugin, PluginConfig::enabled())
    }

    /// Sets a table element class for a column key, or `_default`.
    pub fn with_table_class(
        mut self,
        scope: impl Into<String>,
        element: impl Into<String>,
        class: impl Into<String>,
    ) -> Self {
        self.table_css_class.insert(scope, element, class);
        self
    }

    /// Adds a stylesheet URL.
    pub fn with_css_file(mut self, url: impl Into<String>) -> Self {
        self.css_files.push(url.into());
        self
    }

    /// Sets where events are dispatched.
    pub fn with_event_scope(mut self, scope: EventScope) -> Self {
        self.event_scope = scope;
        self
    }
}
