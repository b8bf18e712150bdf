//! Elementary in-place sorts keyed by price, plus timing instrumentation.
//!
//! Both algorithms work over any `[T: Priced]` and are deliberately simple:
//! they exist to show how input ordering affects quadratic sorts, not to
//! compete with `slice::sort`.

pub mod bubble;
pub mod complexity;
pub mod insertion;
pub mod timing;

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use storefront_core::{DomainError, Priced};

pub use bubble::BubbleSort;
pub use complexity::{analyze, CaseOrdering, ComplexityReport};
pub use insertion::InsertionSort;
pub use timing::{measure, measure_with, timed_sort, TimedSort};

/// Work counters collected while sorting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortStats {
    /// Price comparisons performed.
    pub comparisons: u64,
    /// Element moves (a swap or a one-slot shift counts as one).
    pub moves: u64,
}

/// An in-place comparison sort ordering items by ascending price.
pub trait Sorter {
    /// Short, stable name used in logs and reports.
    fn name(&self) -> &'static str;

    /// Sort `items` in place and report the work done.
    fn sort<T: Priced>(&self, items: &mut [T]) -> SortStats;
}

/// The sort routines available to the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortAlgorithm {
    Bubble,
    Insertion,
}

impl SortAlgorithm {
    pub const ALL: [SortAlgorithm; 2] = [SortAlgorithm::Bubble, SortAlgorithm::Insertion];

    pub fn name(self) -> &'static str {
        match self {
            SortAlgorithm::Bubble => BubbleSort.name(),
            SortAlgorithm::Insertion => InsertionSort.name(),
        }
    }

    /// Dispatch to the matching [`Sorter`].
    pub fn sort<T: Priced>(self, items: &mut [T]) -> SortStats {
        match self {
            SortAlgorithm::Bubble => BubbleSort.sort(items),
            SortAlgorithm::Insertion => InsertionSort.sort(items),
        }
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SortAlgorithm {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bubble" => Ok(SortAlgorithm::Bubble),
            "insertion" => Ok(SortAlgorithm::Insertion),
            other => Err(DomainError::validation(format!(
                "unknown sort algorithm: {other}"
            ))),
        }
    }
}

/// Whether `items` is non-decreasing by price.
pub fn is_sorted_by_price<T: Priced>(items: &[T]) -> bool {
    items.windows(2).all(|w| w[0].price() <= w[1].price())
}
