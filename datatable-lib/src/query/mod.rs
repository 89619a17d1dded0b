//! Data pipeline building blocks: filtering, ordering and pagination.
//!
//! - [`filter_rows`] - case-insensitive free-text search over a row collection
//! - [`OrderState`] / [`sort_rows`] - three-state single-column ordering
//! - [`Pagination`] / [`PageLink`] - page windows and the page-link bar
//!
//! These are pure functions and small state types; [`DataTable`](crate::table::DataTable)
//! wires them together.

mod filter;
mod order;
mod page;

pub use filter::filter_rows;
pub use filter::matches;
pub use order::Direction;
pub use order::OrderIcon;
pub use order::OrderState;
pub use order::SortKey;
pub use order::sort_rows;
pub use page::PAGE_LINK_SPAN;
pub use page::PageLink;
pub use page::Pagination;
