//! Ordering state and row comparison

use std::cmp::Ordering;

use serde::Deserialize;
use serde::Serialize;

use crate::model::Row;
use crate::model::compare_values;
use crate::model::is_truthy;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    /// Ascending order (A-Z, 0-9).
    Asc,
    /// Descending order (Z-A, 9-0).
    Desc,
}

/// The active ordering: one field and its direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortKey {
    pub field: String,
    pub direction: Direction,
}

impl SortKey {
    /// Creates a sort key.
    pub fn new(field: impl Into<String>, direction: Direction) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    /// Compares two rows by this key.
    ///
    /// Rows missing the field, or holding a falsy value for it, on either
    /// side compare equal so they keep their relative position.
    pub fn compare(&self, a: &Row, b: &Row) -> Ordering {
        let (Some(a), Some(b)) = (a.get(&self.field), b.get(&self.field)) else {
            return Ordering::Equal;
        };
        if !is_truthy(a) || !is_truthy(b) {
            return Ordering::Equal;
        }

        let ordering = compare_values(a, b);
        match self.direction {
            Direction::Asc => ordering,
            Direction::Desc => ordering.reverse(),
        }
    }
}

/// Header icon reflecting a column's ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderIcon {
    /// Not the ordered column, or unordered.
    UpDownArrow,
    /// Ordered ascending.
    UpChevron,
    /// Ordered descending.
    DownChevron,
}

impl OrderIcon {
    /// A single-character rendition for text output.
    pub fn glyph(self) -> &'static str {
        match self {
            OrderIcon::UpDownArrow => "↕",
            OrderIcon::UpChevron => "▲",
            OrderIcon::DownChevron => "▼",
        }
    }
}

/// Table-wide ordering state: either unordered or ordered by exactly one
/// field.
///
/// Serializes as `{}` when unordered and `{"field": .., "direction": ..}`
/// otherwise.
///
/// # Example
///
/// ```
/// use datatable_lib::query::{Direction, OrderState};
///
/// let mut order = OrderState::default();
/// order.toggle("name");
/// assert_eq!(order.direction_of("name"), Some(Direction::Asc));
/// order.toggle("name");
/// assert_eq!(order.direction_of("name"), Some(Direction::Desc));
/// order.toggle("name");
/// assert!(!order.is_ordered());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderState {
    #[serde(flatten)]
    key: Option<SortKey>,
}

impl OrderState {
    /// Creates an unordered state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a state ordered by `field`.
    pub fn ordered(field: impl Into<String>, direction: Direction) -> Self {
        Self {
            key: Some(SortKey::new(field, direction)),
        }
    }

    /// Returns the active sort key, if any.
    pub fn key(&self) -> Option<&SortKey> {
        self.key.as_ref()
    }

    /// Returns the ordered field, if any.
    pub fn field(&self) -> Option<&str> {
        self.key.as_ref().map(|key| key.field.as_str())
    }

    /// Returns `true` when a field is ordered.
    pub fn is_ordered(&self) -> bool {
        self.key.is_some()
    }

    /// Returns the direction `field` is ordered in, if it is the active field.
    pub fn direction_of(&self, field: &str) -> Option<Direction> {
        self.key
            .as_ref()
            .filter(|key| key.field == field)
            .map(|key| key.direction)
    }

    /// Advances `field` through unordered → ascending → descending →
    /// unordered. Switching to a different field starts at ascending.
    pub fn toggle(&mut self, field: &str) {
        let next = match self.direction_of(field) {
            None => Some(Direction::Asc),
            Some(Direction::Asc) => Some(Direction::Desc),
            Some(Direction::Desc) => None,
        };
        self.key = next.map(|direction| SortKey::new(field, direction));
    }

    /// Icon for a column header.
    pub fn icon_for(&self, field: &str) -> OrderIcon {
        match self.direction_of(field) {
            None => OrderIcon::UpDownArrow,
            Some(Direction::Asc) => OrderIcon::UpChevron,
            Some(Direction::Desc) => OrderIcon::DownChevron,
        }
    }
}

/// Stable-sorts rows by a sort key.
///
/// The comparator is not a total order (missing values tie with
/// everything), so this uses a merge sort rather than `slice::sort_by`,
/// which may panic on such comparators.
pub fn sort_rows(rows: Vec<Row>, key: &SortKey) -> Vec<Row> {
    merge_sort(rows, &mut |a, b| key.compare(a, b))
}

fn merge_sort<T>(mut items: Vec<T>, compare: &mut impl FnMut(&T, &T) -> Ordering) -> Vec<T> {
    if items.len() <= 1 {
        return items;
    }

    let right = items.split_off(items.len() / 2);
    let left = merge_sort(items, compare);
    let right = merge_sort(right, compare);

    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    while let (Some(l), Some(r)) = (left.peek(), right.peek()) {
        // Ties take from the left run.
        if compare(r, l) == Ordering::Less {
            merged.extend(right.next());
        } else {
            merged.extend(left.next());
        }
    }
    merged.extend(left);
    merged.extend(right);
    merged
}
