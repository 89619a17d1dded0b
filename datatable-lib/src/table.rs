//! The data table state machine
//!
//! [`DataTable`] owns the raw rows, the current (filtered and ordered)
//! dataset and the visible page window. Every transition is an explicit
//! method call that runs to completion; when an external data provider is
//! configured, filtering and paging turn into queued request events instead.

use std::ops::Range;

use log::debug;

use crate::column::CellValue;
use crate::column::Column;
use crate::column::ColumnRegistry;
use crate::column::DataHandlers;
use crate::config::Plugin;
use crate::config::Plugins;
use crate::config::TableConfig;
use crate::error::ConfigError;
use crate::events::CellClick;
use crate::events::DataRequest;
use crate::events::DispatchedEvent;
use crate::events::TableEvent;
use crate::model::Row;
use crate::model::Value;
use crate::query::OrderIcon;
use crate::query::OrderState;
use crate::query::PageLink;
use crate::query::Pagination;
use crate::query::filter_rows;
use crate::query::sort_rows;
use crate::style::TableElement;
use crate::style::row_class;

/// A paginated, searchable, sortable table over a row collection.
///
/// # Example
///
/// ```
/// use datatable_lib::column::Column;
/// use datatable_lib::config::{Plugin, TableConfig};
/// use datatable_lib::model::Row;
/// use datatable_lib::table::DataTable;
///
/// let config = TableConfig::new()
///     .with_page_size(2)
///     .with_column("name", Column::new("Name"))
///     .enable(Plugin::Order)
///     .enable(Plugin::Pagination);
///
/// let mut table = DataTable::new(config).unwrap();
/// table.set_data(vec![
///     Row::new().set("name", "carol"),
///     Row::new().set("name", "alice"),
///     Row::new().set("name", "bob"),
/// ]);
/// table.set_order("name");
///
/// let names: Vec<_> = table
///     .visible_rows()
///     .iter()
///     .filter_map(|row| row.get("name").and_then(|v| v.as_str()))
///     .collect();
/// assert_eq!(names, vec!["alice", "bob"]);
/// assert_eq!(table.pagination().total_pages(), 2);
/// ```
#[derive(Debug)]
pub struct DataTable {
    config: TableConfig,
    handlers: DataHandlers,

    /// Rows as last pushed by the owner; never modified.
    raw: Vec<Row>,
    /// The current dataset: a filtered and ordered copy of `raw`.
    data: Vec<Row>,
    /// Indexes of `data` shown on the current page.
    window: Range<usize>,

    search: Option<String>,
    order: OrderState,
    pagination: Pagination,

    picker_open: bool,
    revision: u64,
    events: Vec<DispatchedEvent>,
}

impl DataTable {
    /// Creates a table from a validated configuration.
    ///
    /// Applies the max-column policy to the configured columns.
    pub fn new(config: TableConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut config = config;
        config.columns.initialize(config.max_columns);

        let mut pagination = Pagination::new(config.page_size);
        pagination.set_total_rows(config.total_rows);

        Ok(Self {
            config,
            handlers: DataHandlers::new(),
            raw: Vec::new(),
            data: Vec::new(),
            window: 0..0,
            search: None,
            order: OrderState::new(),
            pagination,
            picker_open: false,
            revision: 0,
            events: Vec::new(),
        })
    }

    /// Attaches the data handlers columns refer to by name.
    pub fn with_handlers(mut self, handlers: DataHandlers) -> Self {
        self.handlers = handlers;
        self
    }

    // =========================================================================
    // Configuration accessors
    // =========================================================================

    /// Returns the configuration (columns reflect current visibility).
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Returns the table id.
    pub fn id(&self) -> Option<&str> {
        self.config.id.as_deref()
    }

    /// Returns the column registry.
    pub fn columns(&self) -> &ColumnRegistry {
        &self.config.columns
    }

    /// Returns the plugin flags.
    pub fn plugins(&self) -> &Plugins {
        &self.config.plugins
    }

    /// Stylesheet URLs the renderer should link.
    pub fn css_files(&self) -> &[String] {
        &self.config.css_files
    }

    /// Returns `true` when filtering and paging are delegated to the owner.
    pub fn has_external_data_provider(&self) -> bool {
        self.config.has_external_data_provider
    }

    // =========================================================================
    // Data pipeline
    // =========================================================================

    /// Replaces the raw rows.
    ///
    /// The current dataset becomes a fresh copy of `rows` (the active search
    /// and order are applied again only by the next filter run), the row
    /// count is recomputed unless an external provider supplies it, and the
    /// current page is redisplayed.
    pub fn set_data(&mut self, rows: Vec<Row>) {
        debug!("Refreshing table with {} rows", rows.len());
        self.raw = rows;
        self.data = self.raw.clone();
        self.init_pages();
        self.display_page(None);
    }

    /// Sets the search text and reruns the filter pipeline.
    ///
    /// An empty string clears the search.
    pub fn set_search(&mut self, search: impl Into<String>) {
        let search = search.into();
        self.search = (!search.is_empty()).then_some(search);
        self.apply_filter();
    }

    /// Advances the ordering of `field` and reruns the filter pipeline.
    ///
    /// Does nothing when the order plugin is disabled.
    pub fn set_order(&mut self, field: &str) {
        if !self.config.plugins.is_enabled(Plugin::Order) {
            return;
        }

        self.order.toggle(field);
        debug!("Order is now {:?}", self.order);
        self.apply_filter();
    }

    /// Reruns the filter pipeline with the current search and order.
    ///
    /// Locally this always starts again from the raw rows, so the result only
    /// depends on the current search and order, and resets to page 1. With
    /// an external provider a `filterData` request for page 1 is queued
    /// instead and nothing local changes.
    pub fn apply_filter(&mut self) {
        if self.config.has_external_data_provider {
            debug!("Delegating filter to external provider");
            let request = self.data_request(1);
            self.emit(TableEvent::FilterData(request));
            return;
        }

        let mut rows = self.raw.clone();
        if let Some(search) = &self.search {
            rows = filter_rows(rows, search);
        }
        if let Some(key) = self.order.key() {
            rows = sort_rows(rows, key);
        }

        debug!(
            "Filtered {} rows down to {} (search: {:?})",
            self.raw.len(),
            rows.len(),
            self.search
        );

        self.data = rows;
        self.init_pages();
        self.display_page(Some(1));
    }

    // =========================================================================
    // Pagination
    // =========================================================================

    /// Requests a page.
    ///
    /// Locally the window moves to `page` straight away. With an external
    /// provider a `pageRequest` is queued and local state is untouched until
    /// the owner pushes the page's rows. Pages out of range are not clamped.
    pub fn request_page(&mut self, page: usize) {
        if self.config.has_external_data_provider {
            debug!("Requesting page {} from external provider", page);
            let request = self.data_request(page);
            self.emit(TableEvent::PageRequest(request));
            return;
        }

        self.display_page(Some(page));
    }

    /// Sets which page the current data represents.
    ///
    /// Used by an external provider's owner after pushing a page of rows.
    pub fn set_page(&mut self, page: usize) {
        self.display_page(Some(page));
    }

    /// Sets the total row count reported by an external provider.
    ///
    /// Ignored without an external provider, where the count is always the
    /// length of the current dataset.
    pub fn set_total_rows(&mut self, total_rows: usize) {
        if !self.config.has_external_data_provider {
            debug!("Ignoring total rows {}: no external data provider", total_rows);
            return;
        }

        self.config.total_rows = total_rows;
        self.init_pages();
        self.revision += 1;
    }

    /// Returns the pagination state.
    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    /// Page-link bar for the current page; empty when pagination is disabled.
    pub fn page_links(&self) -> Vec<PageLink> {
        if !self.config.plugins.is_enabled(Plugin::Pagination) {
            return Vec::new();
        }
        self.pagination.links()
    }

    fn init_pages(&mut self) {
        if !self.config.has_external_data_provider {
            self.config.total_rows = self.data.len();
        }
        self.pagination.set_total_rows(self.config.total_rows);
    }

    fn display_page(&mut self, page: Option<usize>) {
        if let Some(page) = page {
            self.pagination.set_page(page);
        }

        self.window = if self.config.has_external_data_provider
            || !self.config.plugins.is_enabled(Plugin::Pagination)
        {
            0..self.data.len()
        } else {
            self.pagination.window(self.data.len())
        };
        self.revision += 1;

        debug!(
            "Displaying page {} (rows {:?} of {})",
            self.pagination.page(),
            self.window,
            self.data.len()
        );
    }

    // =========================================================================
    // Current state
    // =========================================================================

    /// Rows shown on the current page, in display order.
    pub fn visible_rows(&self) -> &[Row] {
        self.data.get(self.window.clone()).unwrap_or_default()
    }

    /// The whole current dataset (filtered and ordered, not paged).
    pub fn rows(&self) -> &[Row] {
        &self.data
    }

    /// The rows as last pushed by the owner.
    pub fn raw_rows(&self) -> &[Row] {
        &self.raw
    }

    /// Active search text.
    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    /// Active ordering.
    pub fn order(&self) -> &OrderState {
        &self.order
    }

    /// Header icon for a column; `None` when the order plugin is disabled.
    pub fn order_icon(&self, key: &str) -> Option<OrderIcon> {
        if !self.config.plugins.is_enabled(Plugin::Order) {
            return None;
        }
        Some(self.order.icon_for(key))
    }

    /// Counter bumped whenever the current dataset, the visible window or
    /// the columns change.
    pub fn revision(&self) -> u64 {
        self.revision + self.config.columns.revision()
    }

    // =========================================================================
    // Columns
    // =========================================================================

    /// Returns `true` if the column is visible.
    pub fn is_column_visible(&self, key: &str) -> bool {
        self.config.columns.is_visible(key)
    }

    /// Returns `true` if the column is offered by the column picker.
    pub fn is_column_pickable(&self, key: &str) -> bool {
        self.config.columns.is_pickable(key)
    }

    /// Sets a column's visibility.
    pub fn set_column_visibility(&mut self, key: &str, visible: bool) {
        debug!("Column '{}' visibility set to {}", key, visible);
        self.config.columns.set_visibility(key, visible);
    }

    /// Flips a column's visibility.
    pub fn toggle_column(&mut self, key: &str) {
        self.config.columns.toggle_visibility(key);
    }

    /// Visible columns in render order.
    pub fn visible_columns(&self) -> impl Iterator<Item = (&str, &Column)> {
        self.config.columns.visible()
    }

    /// Columns offered by the column picker, in render order.
    pub fn pickable_columns(&self) -> impl Iterator<Item = (&str, &Column)> {
        self.config.columns.pickable()
    }

    /// Opens or closes the column picker.
    pub fn toggle_picker(&mut self) {
        self.picker_open = !self.picker_open;
    }

    /// Returns `true` while the column picker is open.
    pub fn is_picker_open(&self) -> bool {
        self.picker_open
    }

    /// What a cell shows for a row and column.
    pub fn value_for(&self, row: &Row, key: &str) -> CellValue {
        self.config.columns.value_for(row, key, &self.handlers)
    }

    // =========================================================================
    // Styling
    // =========================================================================

    /// Class for a table-level element, optionally scoped to a column.
    pub fn table_class(&self, element: TableElement, column: Option<&str>) -> &str {
        self.config.table_css_class.resolve(element.tag(), column)
    }

    /// Class for a body element of `row`, optionally within a column.
    pub fn row_class<'a>(&'a self, column: Option<&str>, row: &'a Row, element: TableElement) -> &'a str {
        let column = column.and_then(|key| self.config.columns.get(key));
        row_class(column, row, element.tag())
    }

    // =========================================================================
    // Events
    // =========================================================================

    /// Activates the cell at `index` of the visible rows in column `key`.
    ///
    /// Queues a `cell-click` event carrying the whole row for HTML columns
    /// and the column's raw value otherwise. Unknown rows or columns are
    /// ignored.
    pub fn cell_click(&mut self, index: usize, key: &str) {
        let Some(column) = self.config.columns.get(key) else {
            return;
        };
        let Some(row) = self.visible_rows().get(index) else {
            return;
        };

        let event_data = if column.is_html() {
            row.to_value()
        } else {
            row.get(key).cloned().unwrap_or(Value::Null)
        };
        let click = CellClick {
            col_key: key.to_string(),
            event_data,
            data_handler: column.data_handler.clone(),
        };

        self.emit(TableEvent::CellClick(click));
    }

    /// Takes every queued event, oldest first.
    pub fn drain_events(&mut self) -> Vec<DispatchedEvent> {
        std::mem::take(&mut self.events)
    }

    /// Queued events not yet drained.
    pub fn pending_events(&self) -> &[DispatchedEvent] {
        &self.events
    }

    fn data_request(&self, page: usize) -> DataRequest {
        DataRequest {
            search: self.search.clone(),
            order: self.order.clone(),
            page,
        }
    }

    fn emit(&mut self, event: TableEvent) {
        debug!("Emitting {} event", event.name());
        self.events.push(DispatchedEvent {
            scope: self.config.event_scope,
            target: self.config.id.clone(),
            event,
        });
    }
}
