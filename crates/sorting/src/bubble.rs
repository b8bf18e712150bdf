//! Naive bubble sort.

use storefront_core::Priced;

use crate::{SortStats, Sorter};

/// Classic O(n²) bubble sort.
///
/// Every pass runs to completion even when the previous pass made no swaps,
/// so already-sorted input still costs n(n-1)/2 comparisons. The best-case
/// timing demonstration depends on this; do not add an early exit.
#[derive(Debug, Clone, Copy, Default)]
pub struct BubbleSort;

impl Sorter for BubbleSort {
    fn name(&self) -> &'static str {
        "bubble"
    }

    fn sort<T: Priced>(&self, items: &mut [T]) -> SortStats {
        let mut stats = SortStats::default();
        let n = items.len();

        for i in 0..n {
            for j in 0..n - i - 1 {
                stats.comparisons += 1;
                if items[j].price() > items[j + 1].price() {
                    items.swap(j, j + 1);
                    stats.moves += 1;
                }
            }
        }

        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorted_input_still_costs_quadratic_comparisons() {
        let mut data: Vec<f64> = (0..100).map(f64::from).collect();
        let stats = BubbleSort.sort(&mut data);
        assert_eq!(stats.comparisons, 100 * 99 / 2);
        assert_eq!(stats.moves, 0);
    }

    #[test]
    fn reversed_input_swaps_every_pair() {
        let mut data: Vec<f64> = (0..50).rev().map(f64::from).collect();
        let stats = BubbleSort.sort(&mut data);
        assert_eq!(stats.comparisons, 50 * 49 / 2);
        assert_eq!(stats.moves, 50 * 49 / 2);
        assert_eq!(data.first(), Some(&0.0));
        assert_eq!(data.last(), Some(&49.0));
    }

    #[test]
    fn empty_slice_is_a_no_op() {
        let mut data: Vec<f64> = Vec::new();
        assert_eq!(BubbleSort.sort(&mut data), SortStats::default());
    }
}
