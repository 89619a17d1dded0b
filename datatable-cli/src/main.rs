mod args;
mod error;
mod render;

use std::fs::File;
use std::process::ExitCode;

use clap::Parser;
use datatable_lib::DataTable;
use datatable_lib::TableConfig;
use datatable_lib::column::Column;
use datatable_lib::config::Plugin;
use datatable_lib::model::Row;
use datatable_lib::model::rows_from_json_str;
use log::{LevelFilter, info};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode, WriteLogger};

use crate::args::CliArgs;
use crate::error::CliError;

fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn init_logging(args: &CliArgs) -> Result<(), CliError> {
    let level = level_for(args.verbose);
    match &args.log_file {
        Some(path) => {
            let log_file = File::create(path).map_err(|source| CliError::Io {
                path: path.clone(),
                source,
            })?;
            WriteLogger::init(level.max(LevelFilter::Debug), Config::default(), log_file)?;
        }
        None => {
            TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto)?;
        }
    }
    Ok(())
}

/// Every plugin on, one column per key of the first row.
fn default_config(rows: &[Row]) -> TableConfig {
    let mut config = TableConfig::new()
        .enable(Plugin::Search)
        .enable(Plugin::Order)
        .enable(Plugin::Pagination)
        .enable(Plugin::Picker);
    if let Some(first) = rows.first() {
        for key in first.fields().keys() {
            config = config.with_column(key.clone(), Column::new(key.clone()));
        }
    }
    config
}

fn run(args: CliArgs) -> Result<(), CliError> {
    init_logging(&args)?;

    let json = std::fs::read_to_string(&args.data).map_err(|source| CliError::Io {
        path: args.data.clone(),
        source,
    })?;
    let rows = rows_from_json_str(&json)?;
    info!("Loaded {} rows from {}", rows.len(), args.data.display());

    let config = match &args.config {
        Some(path) => TableConfig::from_path(path)?,
        None => default_config(&rows),
    };

    let mut table = DataTable::new(config)?;
    table.set_data(rows);

    if let Some(search) = &args.search {
        table.set_search(search.as_str());
    }
    for field in &args.order {
        table.set_order(field);
    }
    for key in &args.toggle_column {
        table.toggle_column(key);
    }
    if let Some(page) = args.page {
        table.request_page(page);
    }
    for cell in &args.click {
        table.cell_click(cell.row, &cell.column);
    }

    print!("{}", render::render_table(&table));

    if args.events {
        for event in table.drain_events() {
            println!("{}", serde_json::to_string(&event)?);
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = CliArgs::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
