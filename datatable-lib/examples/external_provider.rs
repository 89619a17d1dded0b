//! An owner serving pages to a table in external-provider mode.
//!
//! The table never filters or slices locally here: every search, order
//! change or page click becomes a request event, and the owner answers by
//! pushing the matching page of rows back.

use simplelog::{Config, LevelFilter, SimpleLogger};

use datatable_lib::column::Column;
use datatable_lib::config::{Plugin, TableConfig};
use datatable_lib::events::{DataRequest, TableEvent};
use datatable_lib::model::Row;
use datatable_lib::query::{filter_rows, sort_rows};
use datatable_lib::DataTable;

const PAGE_SIZE: usize = 3;

/// Stand-in for a remote data source.
struct Backend {
    rows: Vec<Row>,
}

impl Backend {
    fn query(&self, request: &DataRequest) -> (Vec<Row>, usize) {
        let mut rows = filter_rows(self.rows.clone(), request.search.as_deref().unwrap_or_default());
        if let Some(key) = request.order.key() {
            rows = sort_rows(rows, key);
        }
        let total = rows.len();
        let start = request.page.saturating_sub(1) * PAGE_SIZE;
        let page = rows.into_iter().skip(start).take(PAGE_SIZE).collect();
        (page, total)
    }
}

fn serve(table: &mut DataTable, backend: &Backend) {
    for dispatched in table.drain_events() {
        let (TableEvent::FilterData(request) | TableEvent::PageRequest(request)) = dispatched.event else {
            continue;
        };
        let (rows, total) = backend.query(&request);
        table.set_data(rows);
        table.set_total_rows(total);
        table.set_page(request.page);
    }
}

fn print(table: &DataTable) {
    let names: Vec<_> = table
        .visible_rows()
        .iter()
        .filter_map(|row| row.get("name").and_then(|v| v.as_str()))
        .collect();
    println!(
        "page {}/{}: {:?}",
        table.pagination().page(),
        table.pagination().total_pages(),
        names
    );
}

fn main() {
    SimpleLogger::init(LevelFilter::Debug, Config::default()).expect("Failed to initialize logger");

    let backend = Backend {
        rows: ["mercury", "venus", "earth", "mars", "jupiter", "saturn", "uranus", "neptune"]
            .iter()
            .map(|name| Row::new().set("name", *name))
            .collect(),
    };

    let config = TableConfig::new()
        .with_external_data_provider(true)
        .with_page_size(PAGE_SIZE)
        .with_column("name", Column::new("Planet"))
        .enable(Plugin::Search)
        .enable(Plugin::Order)
        .enable(Plugin::Pagination);
    let mut table = DataTable::new(config).expect("valid config");

    table.apply_filter();
    serve(&mut table, &backend);
    print(&table);

    table.set_order("name");
    serve(&mut table, &backend);
    print(&table);

    table.request_page(2);
    serve(&mut table, &backend);
    print(&table);

    table.set_search("ur");
    serve(&mut table, &backend);
    print(&table);
}
