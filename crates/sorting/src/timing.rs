//! Wall-clock timing around sort invocations.

use std::time::{Duration, Instant};

use serde::{Serialize, Serializer};
use storefront_core::Priced;

use crate::{SortAlgorithm, SortStats};

/// Run `f` and return how long it took on the monotonic clock.
pub fn measure<F: FnOnce()>(f: F) -> Duration {
    measure_with(f).1
}

/// Run `f` and return its output together with the elapsed time.
pub fn measure_with<R, F: FnOnce() -> R>(f: F) -> (R, Duration) {
    let start = Instant::now();
    let out = f();
    (out, start.elapsed())
}

/// Outcome of one timed sort invocation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimedSort {
    pub algorithm: SortAlgorithm,
    pub len: usize,
    #[serde(rename = "elapsed_secs", serialize_with = "as_secs")]
    pub elapsed: Duration,
    #[serde(flatten)]
    pub stats: SortStats,
}

impl TimedSort {
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// Sort `items` with `algorithm` and time the call.
pub fn timed_sort<T: Priced>(items: &mut [T], algorithm: SortAlgorithm) -> TimedSort {
    let len = items.len();
    let (stats, elapsed) = measure_with(|| algorithm.sort(items));
    tracing::debug!(
        algorithm = algorithm.name(),
        len,
        comparisons = stats.comparisons,
        moves = stats.moves,
        elapsed_secs = elapsed.as_secs_f64(),
        "sort finished"
    );
    TimedSort {
        algorithm,
        len,
        elapsed,
        stats,
    }
}

pub(crate) fn as_secs<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_f64(d.as_secs_f64())
}
