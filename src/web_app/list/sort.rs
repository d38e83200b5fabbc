// web_app/list/sort.rs - Client-side row ordering
//
// Sorting only reorders rows already held by the list. It never touches
// the total count and never fetches.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// `"ascending"` sorts ascending; every other label sorts descending.
    pub fn from_label(label: &str) -> Self {
        if label.eq_ignore_ascii_case("ascending") {
            SortDirection::Ascending
        } else {
            SortDirection::Descending
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Ascending => write!(f, "ascending"),
            SortDirection::Descending => write!(f, "descending"),
        }
    }
}

/// Three-way comparator over an extracted key.
///
/// Equal keys compare `Equal` in both directions, so pairing this with a
/// stable sort keeps duplicates in their original relative order.
pub fn compare_by<T, K, F>(key: F, direction: SortDirection) -> impl Fn(&T, &T) -> Ordering
where
    K: Ord,
    F: Fn(&T) -> K,
{
    move |a, b| direction.apply(key(a).cmp(&key(b)))
}

/// Stable in-place sort of `rows` by `key`
pub fn sort_rows<T, K, F>(rows: &mut [T], key: F, direction: SortDirection)
where
    K: Ord,
    F: Fn(&T) -> K,
{
    rows.sort_by(compare_by(key, direction));
}
