//! Outbound event protocol
//!
//! The table never calls back into its owner. Instead it queues
//! [`DispatchedEvent`]s which the owner drains after each operation and
//! forwards to whatever event system it renders into.

use serde::Deserialize;
use serde::Serialize;

use crate::model::Value;
use crate::query::OrderState;

/// Where events are dispatched in the host environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventScope {
    /// On the table itself, bubbling to its ancestors.
    #[default]
    Component,
    /// On the whole document.
    Document,
}

/// Payload of a cell activation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellClick {
    /// Key of the activated column.
    pub col_key: String,
    /// The whole row for HTML columns, else the column's raw value.
    pub event_data: Value,
    /// The column's data handler name, if any.
    pub data_handler: Option<String>,
}

/// Payload asking an external data provider for rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataRequest {
    /// Active search text, if any.
    pub search: Option<String>,
    /// Active ordering.
    pub order: OrderState,
    /// Requested one-based page.
    pub page: usize,
}

/// Events emitted by a table.
///
/// Serializes as `{"type": <name>, "detail": <payload>}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "detail")]
pub enum TableEvent {
    /// A rendered cell was activated.
    #[serde(rename = "cell-click")]
    CellClick(CellClick),
    /// Search or ordering changed while an external provider is active.
    #[serde(rename = "filterData")]
    FilterData(DataRequest),
    /// A page was requested while an external provider is active.
    #[serde(rename = "pageRequest")]
    PageRequest(DataRequest),
}

impl TableEvent {
    /// The event name as the host sees it.
    pub fn name(&self) -> &'static str {
        match self {
            TableEvent::CellClick(_) => "cell-click",
            TableEvent::FilterData(_) => "filterData",
            TableEvent::PageRequest(_) => "pageRequest",
        }
    }
}

/// An event together with its dispatch scope and originating table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DispatchedEvent {
    pub scope: EventScope,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(flatten)]
    pub event: TableEvent,
}
