//! Free-text row filtering

use log::trace;

use crate::model::Row;

/// Keeps the rows whose searchable text contains `search`, ignoring case.
///
/// The haystack is every value of the row rendered as display text and
/// joined with single spaces (see [`Row::searchable_text`]). An empty search
/// keeps every row in its original order.
///
/// # Example
///
/// ```
/// use datatable_lib::model::Row;
/// use datatable_lib::query::filter_rows;
///
/// let rows = vec![
///     Row::new().set("name", "Ada Lovelace"),
///     Row::new().set("name", "Alan Turing"),
/// ];
///
/// let hits = filter_rows(rows, "LOVE");
/// assert_eq!(hits.len(), 1);
/// ```
pub fn filter_rows(rows: Vec<Row>, search: &str) -> Vec<Row> {
    if search.is_empty() {
        return rows;
    }

    let needle = search.to_lowercase();
    rows.into_iter()
        .filter(|row| {
            let hit = matches(row, &needle);
            trace!("search '{}' {} row {:?}", needle, if hit { "keeps" } else { "drops" }, row.fields());
            hit
        })
        .collect()
}

/// Returns `true` if the row's searchable text contains the already
/// lowercased `needle`.
pub fn matches(row: &Row, needle: &str) -> bool {
    row.searchable_text().to_lowercase().contains(needle)
}
