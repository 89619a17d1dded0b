use std::path::PathBuf;

use clap::{ArgAction, Parser};

/// A cell to activate, given as `ROW:COLUMN` (row index within the page).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellRef {
    pub row: usize,
    pub column: String,
}

fn parse_cell_ref(s: &str) -> Result<CellRef, String> {
    let (row, column) = s
        .split_once(':')
        .ok_or_else(|| format!("expected ROW:COLUMN, got '{s}'"))?;
    let row = row
        .parse()
        .map_err(|_| format!("row '{row}' is not a non-negative integer"))?;
    if column.is_empty() {
        return Err("column key must not be empty".to_string());
    }
    Ok(CellRef {
        row,
        column: column.to_string(),
    })
}

#[derive(Parser, Debug, Clone)]
#[command(
    name = "datatable",
    version,
    about = "Render a paginated, searchable, sortable table from JSON",
    long_about = "Loads a JSON array of row objects and a JSON table configuration, applies search, ordering, column and page selections, and prints the visible page.\n\nExamples:\n  datatable -d rows.json -c table.json\n  datatable -d rows.json -c table.json -s lisbon -o name -p 2\n  datatable -d rows.json -c table.json -o age -o age --events"
)]
pub struct CliArgs {
    #[arg(
        short = 'd',
        long = "data",
        value_name = "FILE",
        help_heading = "Input",
        help = "JSON array of row objects."
    )]
    pub data: PathBuf,

    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help_heading = "Input",
        help = "JSON table configuration (columns, plugins, page size...)."
    )]
    pub config: Option<PathBuf>,

    #[arg(
        short = 's',
        long = "search",
        value_name = "TEXT",
        help_heading = "View",
        help = "Free-text search, case-insensitive."
    )]
    pub search: Option<String>,

    #[arg(
        short = 'o',
        long = "order",
        value_name = "COLUMN",
        action = ArgAction::Append,
        help_heading = "View",
        help = "Click a column header: unordered -> ascending -> descending (repeatable)."
    )]
    pub order: Vec<String>,

    #[arg(
        short = 'p',
        long = "page",
        value_name = "N",
        help_heading = "View",
        help = "Page to show (one-based)."
    )]
    pub page: Option<usize>,

    #[arg(
        long = "toggle-column",
        value_name = "COLUMN",
        action = ArgAction::Append,
        help_heading = "View",
        help = "Flip a column's visibility, as the column picker does (repeatable)."
    )]
    pub toggle_column: Vec<String>,

    #[arg(
        long = "click",
        value_name = "ROW:COLUMN",
        value_parser = parse_cell_ref,
        action = ArgAction::Append,
        help_heading = "Events",
        help = "Activate a cell of the visible page (repeatable)."
    )]
    pub click: Vec<CellRef>,

    #[arg(
        long = "events",
        help_heading = "Events",
        help = "Print emitted events as JSON lines after the table."
    )]
    pub events: bool,

    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        help_heading = "Output",
        help = "Increase log verbosity (-v, -vv, -vvv)."
    )]
    pub verbose: u8,

    #[arg(
        long = "log-file",
        value_name = "FILE",
        help_heading = "Output",
        help = "Write logs to a file instead of stderr."
    )]
    pub log_file: Option<PathBuf>,
}
