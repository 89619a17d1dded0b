//! Plain-text rendering of a table's visible page.

use datatable_lib::DataTable;
use datatable_lib::column::CellValue;
use datatable_lib::model::display_text;
use datatable_lib::query::PageLink;

const COLUMN_GAP: &str = " | ";

fn cell_text(value: CellValue) -> String {
    match value {
        CellValue::Html(html) => html,
        CellValue::Data(value) => display_text(&value),
        CellValue::Null => String::new(),
    }
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{text}{}", " ".repeat(width.saturating_sub(len)))
}

/// Renders header, visible rows and the page-link bar.
pub fn render_table(table: &DataTable) -> String {
    let columns: Vec<_> = table.visible_columns().collect();

    let header: Vec<String> = columns
        .iter()
        .map(|(key, column)| {
            let title = if column.shows_head_title() { column.title.as_str() } else { "" };
            match table.order_icon(key) {
                Some(icon) => format!("{title} {}", icon.glyph()),
                None => title.to_string(),
            }
        })
        .collect();

    let body: Vec<Vec<String>> = table
        .visible_rows()
        .iter()
        .map(|row| {
            columns
                .iter()
                .map(|(key, _)| cell_text(table.value_for(row, key)))
                .collect()
        })
        .collect();

    let widths: Vec<usize> = (0..columns.len())
        .map(|i| {
            body.iter()
                .map(|cells| cells[i].chars().count())
                .chain(std::iter::once(header[i].chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let line = |cells: &[String]| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| pad(cell, *width))
            .collect::<Vec<_>>()
            .join(COLUMN_GAP)
            .trim_end()
            .to_string()
    };

    let mut out = String::new();
    out.push_str(&line(&header));
    out.push('\n');
    let rule_width = widths.iter().sum::<usize>() + COLUMN_GAP.len() * widths.len().saturating_sub(1);
    out.push_str(&"-".repeat(rule_width));
    out.push('\n');
    for cells in &body {
        out.push_str(&line(cells));
        out.push('\n');
    }

    let links = render_page_links(&table.page_links());
    if !links.is_empty() {
        out.push('\n');
        out.push_str(&links);
        out.push('\n');
    }

    let pagination = table.pagination();
    out.push_str(&format!(
        "page {} of {} ({} rows)\n",
        pagination.page(),
        pagination.total_pages(),
        pagination.total_rows()
    ));
    out
}

/// Renders the page-link bar, marking the current page with brackets.
pub fn render_page_links(links: &[PageLink]) -> String {
    links
        .iter()
        .map(|link| match link {
            PageLink::Page { number, current: true } => format!("[{number}]"),
            other => other.label(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
