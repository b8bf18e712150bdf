//! Shift-and-insert sort.

use storefront_core::Priced;

use crate::{SortStats, Sorter};

/// Insertion sort: each element is shifted left past every strictly more
/// expensive predecessor. Stable, and linear on already-sorted input.
#[derive(Debug, Clone, Copy, Default)]
pub struct InsertionSort;

impl Sorter for InsertionSort {
    fn name(&self) -> &'static str {
        "insertion"
    }

    fn sort<T: Priced>(&self, items: &mut [T]) -> SortStats {
        let mut stats = SortStats::default();

        for i in 1..items.len() {
            let key = items[i].price();
            let mut j = i;
            while j > 0 {
                stats.comparisons += 1;
                if key < items[j - 1].price() {
                    j -= 1;
                } else {
                    break;
                }
            }

            if j < i {
                // Shift items[j..i] one slot right and drop the key at j.
                items[j..=i].rotate_right(1);
                stats.moves += (i - j) as u64;
            }
        }

        stats
    }
}
