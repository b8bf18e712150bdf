//! Best/worst/average case timing of a sort over the same data.
//!
//! The data set is rearranged into each [`CaseOrdering`] in turn and the
//! chosen algorithm is timed on it. Presorting uses the standard library
//! sort so only the algorithm under study is measured.

use core::fmt;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;
use storefront_core::Priced;

use crate::timing::{timed_sort, TimedSort};
use crate::SortAlgorithm;

/// Input ordering used to exercise a sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseOrdering {
    /// Ascending by price (best case).
    Sorted,
    /// Descending by price (worst case).
    Reversed,
    /// Random permutation (average case).
    Shuffled,
}

impl CaseOrdering {
    pub const ALL: [CaseOrdering; 3] = [
        CaseOrdering::Sorted,
        CaseOrdering::Reversed,
        CaseOrdering::Shuffled,
    ];

    /// The case this ordering stands for.
    pub fn label(self) -> &'static str {
        match self {
            CaseOrdering::Sorted => "best",
            CaseOrdering::Reversed => "worst",
            CaseOrdering::Shuffled => "average",
        }
    }

    /// Rearrange `items` into this ordering.
    pub fn arrange<T: Priced, R: Rng + ?Sized>(self, items: &mut [T], rng: &mut R) {
        match self {
            CaseOrdering::Sorted => items.sort_by(|a, b| a.price().total_cmp(&b.price())),
            CaseOrdering::Reversed => items.sort_by(|a, b| b.price().total_cmp(&a.price())),
            CaseOrdering::Shuffled => items.shuffle(rng),
        }
    }
}

/// Timings of one algorithm across the three orderings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComplexityReport {
    pub algorithm: SortAlgorithm,
    pub len: usize,
    pub best: TimedSort,
    pub worst: TimedSort,
    pub average: TimedSort,
}

impl ComplexityReport {
    pub fn case(&self, ordering: CaseOrdering) -> &TimedSort {
        match ordering {
            CaseOrdering::Sorted => &self.best,
            CaseOrdering::Reversed => &self.worst,
            CaseOrdering::Shuffled => &self.average,
        }
    }
}

impl fmt::Display for ComplexityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} sort over {} products:", self.algorithm, self.len)?;
        for ordering in CaseOrdering::ALL {
            let run = self.case(ordering);
            write!(
                f,
                " {} case {:.6}s ({} comparisons)",
                ordering.label(),
                run.elapsed_secs(),
                run.stats.comparisons
            )?;
            if ordering != CaseOrdering::Shuffled {
                f.write_str(",")?;
            }
        }
        Ok(())
    }
}

/// Arrange `items` into `ordering`, then time `algorithm` on them.
pub fn time_case<T: Priced, R: Rng + ?Sized>(
    items: &mut [T],
    algorithm: SortAlgorithm,
    ordering: CaseOrdering,
    rng: &mut R,
) -> TimedSort {
    ordering.arrange(items, rng);
    let run = timed_sort(items, algorithm);
    tracing::info!(
        algorithm = algorithm.name(),
        case = ordering.label(),
        elapsed_secs = run.elapsed_secs(),
        "{} case time: {:.6} seconds",
        ordering.label(),
        run.elapsed_secs()
    );
    run
}

/// Time `algorithm` on sorted, reverse-sorted and shuffled `items`.
///
/// `items` ends up sorted ascending by price.
pub fn analyze<T: Priced, R: Rng + ?Sized>(
    items: &mut [T],
    algorithm: SortAlgorithm,
    rng: &mut R,
) -> ComplexityReport {
    let best = time_case(items, algorithm, CaseOrdering::Sorted, rng);
    let worst = time_case(items, algorithm, CaseOrdering::Reversed, rng);
    let average = time_case(items, algorithm, CaseOrdering::Shuffled, rng);

    ComplexityReport {
        algorithm,
        len: items.len(),
        best,
        worst,
        average,
    }
}
