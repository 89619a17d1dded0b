//! Pagination state and page-link windowing

use std::ops::Range;

/// How many page links are shown on each side of the current page.
pub const PAGE_LINK_SPAN: usize = 5;

/// Pagination state.
///
/// `page` is one-based. It is never clamped against
/// [`total_pages`](Pagination::total_pages): requesting a page past the end
/// (or page `0`) yields an empty window instead of an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: usize,
    page_size: usize,
    total_rows: usize,
}

impl Pagination {
    /// Creates pagination at page 1 with no rows.
    ///
    /// `page_size` must be greater than zero; callers validate it up front
    /// (see [`TableConfig::validate`](crate::config::TableConfig::validate)).
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size,
            total_rows: 0,
        }
    }

    /// Current one-based page.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Rows per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Total number of rows across all pages.
    pub fn total_rows(&self) -> usize {
        self.total_rows
    }

    /// `ceil(total_rows / page_size)`.
    pub fn total_pages(&self) -> usize {
        if self.page_size == 0 {
            return 0;
        }
        self.total_rows.div_ceil(self.page_size)
    }

    /// Sets the current page.
    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    /// Sets the total row count.
    pub fn set_total_rows(&mut self, total_rows: usize) {
        self.total_rows = total_rows;
    }

    /// Index range of the current page within a dataset of `len` rows.
    ///
    /// The range covers `[(page - 1) * page_size, page * page_size)` cut to
    /// `len`; a partial last page is allowed and an out-of-range page gives
    /// an empty range.
    pub fn window(&self, len: usize) -> Range<usize> {
        let Some(first) = self.page.checked_sub(1) else {
            return 0..0;
        };
        let start = first.saturating_mul(self.page_size).min(len);
        let end = self.page.saturating_mul(self.page_size).min(len);
        start..end
    }

    /// Navigation links around the current page.
    ///
    /// Up to [`PAGE_LINK_SPAN`] pages ending at the current page, never below
    /// page 1, preceded by a previous link when not on the first page; then
    /// up to [`PAGE_LINK_SPAN`] pages after it, never past the last page,
    /// followed by a next link when not on the last page. Empty when there
    /// are no pages.
    ///
    /// # Example
    ///
    /// ```
    /// use datatable_lib::query::{PageLink, Pagination};
    ///
    /// let mut pagination = Pagination::new(5);
    /// pagination.set_total_rows(12);
    /// pagination.set_page(2);
    ///
    /// assert_eq!(
    ///     pagination.links(),
    ///     vec![
    ///         PageLink::Previous(1),
    ///         PageLink::Page { number: 1, current: false },
    ///         PageLink::Page { number: 2, current: true },
    ///         PageLink::Page { number: 3, current: false },
    ///         PageLink::Next(3),
    ///     ]
    /// );
    /// ```
    pub fn links(&self) -> Vec<PageLink> {
        let total_pages = self.total_pages();
        if total_pages == 0 {
            return Vec::new();
        }

        let page = self.page;
        let mut links = Vec::new();

        if page > 1 {
            links.push(PageLink::Previous(page - 1));
        }

        let left_start = page.saturating_sub(PAGE_LINK_SPAN - 1).max(1);
        for number in left_start..=page {
            links.push(PageLink::Page {
                number,
                current: number == page,
            });
        }

        let right_end = page.saturating_add(PAGE_LINK_SPAN).min(total_pages);
        for number in page + 1..=right_end {
            links.push(PageLink::Page {
                number,
                current: false,
            });
        }

        if page < total_pages {
            links.push(PageLink::Next(page + 1));
        }

        links
    }
}

/// A single entry of the page-link bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    /// "«": go to the given (previous) page.
    Previous(usize),
    /// A direct link to a page.
    Page { number: usize, current: bool },
    /// "»": go to the given (next) page.
    Next(usize),
}

impl PageLink {
    /// The page this link requests.
    pub fn target(&self) -> usize {
        match *self {
            PageLink::Previous(page) | PageLink::Next(page) => page,
            PageLink::Page { number, .. } => number,
        }
    }

    /// Text label for this link.
    pub fn label(&self) -> String {
        match self {
            PageLink::Previous(_) => "«".to_string(),
            PageLink::Next(_) => "»".to_string(),
            PageLink::Page { number, .. } => number.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pagination(page: usize, page_size: usize, total_rows: usize) -> Pagination {
        let mut pagination = Pagination::new(page_size);
        pagination.set_total_rows(total_rows);
        pagination.set_page(page);
        pagination
    }

    fn labels(pagination: &Pagination) -> Vec<String> {
        pagination.links().iter().map(PageLink::label).collect()
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(pagination(1, 5, 0).total_pages(), 0);
        assert_eq!(pagination(1, 5, 5).total_pages(), 1);
        assert_eq!(pagination(1, 5, 12).total_pages(), 3);
        assert_eq!(pagination(1, 1, 7).total_pages(), 7);
    }

    #[test]
    fn test_window_second_page() {
        assert_eq!(pagination(2, 5, 12).window(12), 5..10);
    }

    #[test]
    fn test_window_partial_last_page() {
        assert_eq!(pagination(3, 5, 12).window(12), 10..12);
    }

    #[test]
    fn test_window_out_of_range() {
        assert_eq!(pagination(4, 5, 12).window(12), 12..12);
        assert_eq!(pagination(100, 5, 12).window(12), 12..12);
        assert_eq!(pagination(0, 5, 12).window(12), 0..0);
    }

    #[test]
    fn test_windows_cover_every_row_once() {
        for page_size in 1..=7 {
            for len in 0..=23 {
                let total_pages = pagination(1, page_size, len).total_pages();
                let covered: usize = (1..=total_pages)
                    .map(|page| pagination(page, page_size, len).window(len).len())
                    .sum();
                assert_eq!(covered, len, "page_size={page_size} len={len}");
            }
        }
    }

    #[test]
    fn test_links_scenario() {
        assert_eq!(labels(&pagination(2, 5, 12)), vec!["«", "1", "2", "3", "»"]);
    }

    #[test]
    fn test_links_first_and_last_page() {
        assert_eq!(labels(&pagination(1, 5, 12)), vec!["1", "2", "3", "»"]);
        assert_eq!(labels(&pagination(3, 5, 12)), vec!["«", "1", "2", "3"]);
        assert_eq!(labels(&pagination(1, 5, 3)), vec!["1"]);
    }

    #[test]
    fn test_links_are_windowed() {
        let labels = labels(&pagination(10, 1, 30));
        assert_eq!(
            labels,
            vec!["«", "6", "7", "8", "9", "10", "11", "12", "13", "14", "15", "»"]
        );
    }

    #[test]
    fn test_links_mark_current() {
        let links = pagination(2, 5, 12).links();
        let current: Vec<_> = links
            .iter()
            .filter(|l| matches!(l, PageLink::Page { current: true, .. }))
            .map(PageLink::target)
            .collect();
        assert_eq!(current, vec![2]);
        assert_eq!(links.first().map(PageLink::target), Some(1));
        assert_eq!(links.last().map(PageLink::target), Some(3));
    }

    #[test]
    fn test_no_links_without_pages() {
        assert!(pagination(1, 5, 0).links().is_empty());
    }

    #[test]
    fn test_links_past_the_end() {
        assert_eq!(labels(&pagination(5, 5, 12)), vec!["«", "1", "2", "3", "4", "5"]);
    }
}
