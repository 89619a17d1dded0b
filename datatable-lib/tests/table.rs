use datatable_lib::column::{CellValue, Column, DataHandlers};
use datatable_lib::config::{Plugin, PluginConfig, TableConfig};
use datatable_lib::events::{EventScope, TableEvent};
use datatable_lib::model::{Row, Value, rows_from_value};
use datatable_lib::query::{Direction, OrderIcon, OrderState, PageLink};
use datatable_lib::style::TableElement;
use datatable_lib::DataTable;
use serde_json::json;

fn numbered_rows(count: usize) -> Vec<Row> {
    (0..count)
        .map(|i| Row::new().set("id", i as u64).set("name", format!("row {i}")))
        .collect()
}

fn ids(rows: &[Row]) -> Vec<u64> {
    rows.iter().filter_map(|r| r.get("id").and_then(Value::as_u64)).collect()
}

fn names(rows: &[Row]) -> Vec<&str> {
    rows.iter().filter_map(|r| r.get("name").and_then(Value::as_str)).collect()
}

fn local_config(page_size: usize) -> TableConfig {
    TableConfig::new()
        .with_page_size(page_size)
        .with_column("id", Column::new("ID"))
        .with_column("name", Column::new("Name"))
        .enable(Plugin::Search)
        .enable(Plugin::Order)
        .enable(Plugin::Pagination)
}

fn people() -> Vec<Row> {
    rows_from_value(json!([
        {"name": "carol", "city": "Paris", "age": 41},
        {"name": "Alice", "city": "London", "age": 29},
        {"name": "bob", "city": "Berlin"},
        {"name": "dave", "city": "Lisbon", "age": 35}
    ]))
    .unwrap()
}

// ============================================================================
// Pagination
// ============================================================================

#[test]
fn test_twelve_rows_second_page() {
    let mut table = DataTable::new(local_config(5)).unwrap();
    table.set_data(numbered_rows(12));
    table.request_page(2);

    assert_eq!(ids(table.visible_rows()), vec![5, 6, 7, 8, 9]);
    assert_eq!(table.pagination().total_pages(), 3);

    let labels: Vec<String> = table.page_links().iter().map(PageLink::label).collect();
    assert_eq!(labels, vec!["«", "1", "2", "3", "»"]);
}

#[test]
fn test_first_page_after_data() {
    let mut table = DataTable::new(local_config(5)).unwrap();
    table.set_data(numbered_rows(12));

    assert_eq!(table.pagination().page(), 1);
    assert_eq!(ids(table.visible_rows()), vec![0, 1, 2, 3, 4]);
    assert_eq!(table.pagination().total_rows(), 12);
}

#[test]
fn test_refresh_keeps_current_page() {
    let mut table = DataTable::new(local_config(5)).unwrap();
    table.set_data(numbered_rows(12));
    table.request_page(3);
    table.set_data(numbered_rows(14));

    assert_eq!(table.pagination().page(), 3);
    assert_eq!(ids(table.visible_rows()), vec![10, 11, 12, 13]);
}

#[test]
fn test_page_past_the_end_is_empty() {
    let mut table = DataTable::new(local_config(5)).unwrap();
    table.set_data(numbered_rows(12));
    table.request_page(9);

    assert_eq!(table.pagination().page(), 9);
    assert!(table.visible_rows().is_empty());

    table.request_page(0);
    assert!(table.visible_rows().is_empty());
}

#[test]
fn test_pages_partition_the_dataset() {
    let mut table = DataTable::new(local_config(4)).unwrap();
    table.set_data(numbered_rows(11));

    let mut seen = Vec::new();
    for page in 1..=table.pagination().total_pages() {
        table.request_page(page);
        seen.extend(ids(table.visible_rows()));
    }
    assert_eq!(seen, (0..11).collect::<Vec<u64>>());
}

#[test]
fn test_pagination_disabled_shows_everything() {
    let config = TableConfig::new()
        .with_page_size(5)
        .with_column("id", Column::new("ID"));
    let mut table = DataTable::new(config).unwrap();
    table.set_data(numbered_rows(12));

    assert_eq!(table.visible_rows().len(), 12);
    assert!(table.page_links().is_empty());
    assert_eq!(table.pagination().total_pages(), 3);
}

#[test]
fn test_zero_page_size_is_rejected() {
    assert!(DataTable::new(TableConfig::new().with_page_size(0)).is_err());
}

// ============================================================================
// Filtering and ordering
// ============================================================================

#[test]
fn test_search_filters_case_insensitively() {
    let mut table = DataTable::new(local_config(10)).unwrap();
    table.set_data(people());
    table.set_search("LI");

    assert_eq!(names(table.rows()), vec!["Alice", "bob", "dave"]);
    assert_eq!(table.pagination().total_rows(), 3);
    assert_eq!(table.search(), Some("LI"));
}

#[test]
fn test_search_is_not_cumulative() {
    let mut table = DataTable::new(local_config(10)).unwrap();
    table.set_data(people());
    table.set_search("paris");
    assert_eq!(names(table.rows()), vec!["carol"]);

    table.set_search("london");
    assert_eq!(names(table.rows()), vec!["Alice"]);

    table.set_search("");
    assert_eq!(table.rows(), people().as_slice());
    assert_eq!(table.search(), None);
}

#[test]
fn test_filter_resets_to_first_page() {
    let mut table = DataTable::new(local_config(2)).unwrap();
    table.set_data(people());
    table.request_page(2);
    table.set_search("a");

    assert_eq!(table.pagination().page(), 1);
}

#[test]
fn test_order_cycle() {
    let mut table = DataTable::new(local_config(10)).unwrap();
    table.set_data(people());

    table.set_order("name");
    assert_eq!(table.order(), &OrderState::ordered("name", Direction::Asc));
    assert_eq!(names(table.rows()), vec!["Alice", "bob", "carol", "dave"]);
    assert_eq!(table.order_icon("name"), Some(OrderIcon::UpChevron));
    assert_eq!(table.order_icon("city"), Some(OrderIcon::UpDownArrow));

    table.set_order("name");
    assert_eq!(table.order(), &OrderState::ordered("name", Direction::Desc));
    assert_eq!(names(table.rows()), vec!["dave", "carol", "bob", "Alice"]);
    assert_eq!(table.order_icon("name"), Some(OrderIcon::DownChevron));

    table.set_order("name");
    assert_eq!(table.order(), &OrderState::new());
    assert_eq!(names(table.rows()), vec!["carol", "Alice", "bob", "dave"]);
    assert_eq!(table.order_icon("name"), Some(OrderIcon::UpDownArrow));
}

#[test]
fn test_order_keeps_rows_missing_the_field_in_place() {
    let mut table = DataTable::new(local_config(10)).unwrap();
    table.set_data(people());
    table.set_order("age");

    // bob has no age and ties with everything, which pins dave behind him.
    assert_eq!(names(table.rows()), vec!["Alice", "carol", "bob", "dave"]);
}

#[test]
fn test_order_combines_with_search() {
    let mut table = DataTable::new(local_config(10)).unwrap();
    table.set_data(people());
    table.set_order("name");
    table.set_order("name");
    table.set_search("l");

    assert_eq!(names(table.rows()), vec!["dave", "carol", "bob", "Alice"]);

    table.set_search("is");
    assert_eq!(names(table.rows()), vec!["dave", "carol"]);
}

#[test]
fn test_order_disabled_is_a_no_op() {
    let config = TableConfig::new().with_column("name", Column::new("Name"));
    let mut table = DataTable::new(config).unwrap();
    table.set_data(people());
    table.set_order("name");

    assert!(!table.order().is_ordered());
    assert_eq!(table.order_icon("name"), None);
    assert_eq!(table.rows(), people().as_slice());
}

#[test]
fn test_refilter_is_repeatable() {
    let mut table = DataTable::new(local_config(10)).unwrap();
    table.set_data(people());
    table.set_order("name");
    table.set_search("a");
    let first = table.rows().to_vec();

    table.apply_filter();
    table.apply_filter();
    assert_eq!(table.rows(), first.as_slice());
}

#[test]
fn test_raw_rows_are_never_modified() {
    let mut table = DataTable::new(local_config(2)).unwrap();
    table.set_data(people());
    table.set_order("name");
    table.set_search("o");

    assert_eq!(table.raw_rows(), people().as_slice());
}

// ============================================================================
// External data provider
// ============================================================================

fn external_table() -> DataTable {
    let config = local_config(5)
        .with_id("remote")
        .with_external_data_provider(true)
        .with_total_rows(42)
        .with_event_scope(EventScope::Document);
    let mut table = DataTable::new(config).unwrap();
    table.set_data(numbered_rows(5));
    table
}

#[test]
fn test_external_page_request_only_emits() {
    let mut table = external_table();
    let before = table.rows().to_vec();

    table.request_page(4);

    assert_eq!(table.rows(), before.as_slice());
    assert_eq!(table.pagination().page(), 1);

    let events = table.drain_events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].scope, EventScope::Document);
    assert_eq!(events[0].target.as_deref(), Some("remote"));
    match &events[0].event {
        TableEvent::PageRequest(request) => {
            assert_eq!(request.page, 4);
            assert_eq!(request.search, None);
            assert_eq!(request.order, OrderState::new());
        }
        other => panic!("unexpected event {other:?}"),
    }
    assert!(table.pending_events().is_empty());
}

#[test]
fn test_external_filter_emits_first_page_request() {
    let mut table = external_table();
    table.set_search("row 3");
    table.set_order("name");

    let events = table.drain_events();
    assert_eq!(events.len(), 2);

    let TableEvent::FilterData(last) = &events[1].event else {
        panic!("expected filterData, got {:?}", events[1].event);
    };
    assert_eq!(last.search.as_deref(), Some("row 3"));
    assert_eq!(last.order, OrderState::ordered("name", Direction::Asc));
    assert_eq!(last.page, 1);

    // Nothing was filtered locally.
    assert_eq!(table.rows().len(), 5);
}

#[test]
fn test_external_shows_pushed_rows_as_is() {
    let mut table = external_table();

    assert_eq!(table.visible_rows().len(), 5);
    assert_eq!(table.pagination().total_rows(), 42);
    assert_eq!(table.pagination().total_pages(), 9);

    table.set_data(numbered_rows(5));
    table.set_page(4);
    table.set_total_rows(18);
    assert_eq!(table.pagination().page(), 4);
    assert_eq!(table.pagination().total_pages(), 4);
    assert_eq!(table.visible_rows().len(), 5);

    let labels: Vec<String> = table.page_links().iter().map(PageLink::label).collect();
    assert_eq!(labels, vec!["«", "1", "2", "3", "4"]);
}

#[test]
fn test_total_rows_ignored_locally() {
    let mut table = DataTable::new(local_config(5)).unwrap();
    table.set_data(numbered_rows(7));
    table.set_total_rows(100);

    assert_eq!(table.pagination().total_rows(), 7);
}

// ============================================================================
// Columns
// ============================================================================

#[test]
fn test_max_columns_applied_on_creation() {
    let config = TableConfig::new()
        .with_max_columns(2)
        .with_column("a", Column::new("A"))
        .with_column("b", Column::new("B"))
        .with_column("c", Column::new("C"))
        .with_column("d", Column::new("D").show_always());
    let table = DataTable::new(config).unwrap();

    let visible: Vec<&str> = table.visible_columns().map(|(key, _)| key).collect();
    assert_eq!(visible, vec!["a", "b", "d"]);
}

#[test]
fn test_column_picker() {
    let config = local_config(5)
        .with_column("secret", Column::new("Secret").not_pickable())
        .with_plugin(Plugin::Picker, PluginConfig::enabled().with_label("Columns"));
    let mut table = DataTable::new(config).unwrap();

    assert!(!table.is_picker_open());
    table.toggle_picker();
    assert!(table.is_picker_open());
    assert_eq!(table.plugins().label(Plugin::Picker), Some("Columns"));

    let pickable: Vec<&str> = table.pickable_columns().map(|(key, _)| key).collect();
    assert_eq!(pickable, vec!["id", "name"]);

    let before = table.revision();
    table.toggle_column("name");
    assert!(!table.is_column_visible("name"));
    assert!(table.revision() > before);

    table.set_column_visibility("name", true);
    assert!(table.is_column_visible("name"));
    assert!(!table.is_column_pickable("secret"));
}

#[test]
fn test_value_for_uses_handlers() {
    let config = TableConfig::new()
        .with_column("name", Column::new("Name"))
        .with_column("shout", Column::new("Shout").data_handler("shout"))
        .with_column("edit", Column::html("Edit", "<button>edit</button>"));
    let handlers = DataHandlers::new().register("shout", |row: &Row| {
        let name = row.get("name").and_then(Value::as_str).unwrap_or_default();
        Value::from(name.to_uppercase())
    });
    let table = DataTable::new(config).unwrap().with_handlers(handlers);
    let row = Row::new().set("name", "ada");

    assert_eq!(table.value_for(&row, "name"), CellValue::Data(json!("ada")));
    assert_eq!(table.value_for(&row, "shout"), CellValue::Data(json!("ADA")));
    assert_eq!(table.value_for(&row, "edit"), CellValue::Html("<button>edit</button>".into()));
}

// ============================================================================
// Cell clicks and styling
// ============================================================================

#[test]
fn test_cell_click_payloads() {
    let config = local_config(10)
        .with_column("total", Column::new("Total").data_handler("format_total"))
        .with_column("edit", Column::html("Edit", "<button>edit</button>"));
    let mut table = DataTable::new(config).unwrap();
    table.set_data(vec![Row::new().set("id", 7).set("name", "ada").set("total", 12)]);

    table.cell_click(0, "name");
    table.cell_click(0, "total");
    table.cell_click(0, "edit");
    table.cell_click(3, "name");
    table.cell_click(0, "nope");

    let clicks: Vec<_> = table
        .drain_events()
        .into_iter()
        .map(|event| match event.event {
            TableEvent::CellClick(click) => click,
            other => panic!("unexpected event {other:?}"),
        })
        .collect();

    assert_eq!(clicks.len(), 3);
    assert_eq!(clicks[0].col_key, "name");
    assert_eq!(clicks[0].event_data, json!("ada"));
    assert_eq!(clicks[0].data_handler, None);
    assert_eq!(clicks[1].event_data, json!(12));
    assert_eq!(clicks[1].data_handler.as_deref(), Some("format_total"));
    assert_eq!(clicks[2].event_data, json!({"id": 7, "name": "ada", "total": 12}));
}

#[test]
fn test_style_resolution() {
    let config = local_config(10)
        .with_table_class("_default", "thead tr th", "th")
        .with_table_class("id", "thead tr th", "th-narrow")
        .with_column("price", Column::new("Price").row_css_class("tbody tr td", "num"))
        .with_css_file("/static/table.css");
    let table = DataTable::new(config).unwrap();
    let row = Row::new().set("price", 3).with_css_class("tbody tr", "sale");

    assert_eq!(table.table_class(TableElement::TheadCell, Some("id")), "th-narrow");
    assert_eq!(table.table_class(TableElement::TheadCell, Some("name")), "th");
    assert_eq!(table.table_class(TableElement::Table, None), "");
    assert_eq!(table.row_class(None, &row, TableElement::TbodyRow), "sale");
    assert_eq!(table.row_class(Some("price"), &row, TableElement::TbodyCell), "num");
    assert_eq!(table.css_files(), ["/static/table.css".to_string()]);
}
