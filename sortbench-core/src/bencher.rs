//! Timing Harness
//!
//! Runs one sort against one base dataset a fixed number of times and
//! reports the average wall-clock seconds per run. A single timer spans the
//! whole batch; the average is `total / repeats`. There is no warmup and no
//! outlier rejection: raise `repeats` for steadier numbers.

use crate::dataset::{Dataset, DatasetKind};
use crate::measure::{Clock, MonotonicClock, Timer};
use crate::sort::Algorithm;
use serde::{Deserialize, Serialize};

/// Default number of runs averaged per result
pub const DEFAULT_REPEATS: usize = 3;

/// Averaged timing for one (algorithm, kind, size) combination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmResult {
    /// Algorithm that was timed
    pub algorithm: Algorithm,
    /// Dataset shape
    pub kind: DatasetKind,
    /// Number of values sorted per run
    pub n: usize,
    /// Mean wall-clock seconds per run
    pub avg_seconds: f64,
}

/// Times sort functions against a clock
#[derive(Debug, Clone)]
pub struct TimingHarness<C: Clock = MonotonicClock> {
    clock: C,
    repeats: usize,
}

impl TimingHarness {
    /// Harness on the real monotonic clock
    pub fn new(repeats: usize) -> Self {
        Self::with_clock(MonotonicClock::new(), repeats)
    }
}

impl<C: Clock> TimingHarness<C> {
    /// Harness on an arbitrary clock. `repeats` is clamped to at least 1.
    pub fn with_clock(clock: C, repeats: usize) -> Self {
        Self {
            clock,
            repeats: repeats.max(1),
        }
    }

    /// Number of runs per measurement
    pub fn repeats(&self) -> usize {
        self.repeats
    }

    /// Run `sort_fn(values)` `repeats` times and return mean seconds per run.
    ///
    /// Sorted outputs are discarded.
    #[inline]
    pub fn measure<F, R>(&self, mut sort_fn: F, values: &[i64]) -> f64
    where
        F: FnMut(&[i64]) -> R,
    {
        let timer = Timer::start(&self.clock);
        for _ in 0..self.repeats {
            let _ = std::hint::black_box(sort_fn(std::hint::black_box(values)));
        }
        let total = timer.stop();

        total.as_secs_f64() / self.repeats as f64
    }

    /// Time `algorithm` against `dataset`
    pub fn run(&self, algorithm: Algorithm, dataset: &Dataset) -> AlgorithmResult {
        let avg_seconds = self.measure(algorithm.sort_fn(), dataset.values());
        tracing::debug!(
            algorithm = algorithm.name(),
            kind = dataset.kind().as_str(),
            n = dataset.size(),
            avg_seconds,
            "timed"
        );

        AlgorithmResult {
            algorithm,
            kind: dataset.kind(),
            n: dataset.size(),
            avg_seconds,
        }
    }
}

/// Average seconds per run of `sort_fn` over `values`, on the real clock.
///
/// `repeats` is clamped to at least 1, so `repeats = 0` times a single run.
/// Configured runs reject zero before reaching the harness.
pub fn time_algorithm<F, R>(sort_fn: F, values: &[i64], repeats: usize) -> f64
where
    F: FnMut(&[i64]) -> R,
{
    TimingHarness::new(repeats).measure(sort_fn, values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sort::insertion_sort;
    use std::cell::Cell;
    use std::time::Duration;

    /// Advances by a fixed step every time it is read
    struct StepClock {
        reads: Cell<u32>,
        step: Duration,
    }

    impl StepClock {
        fn new(step: Duration) -> Self {
            Self {
                reads: Cell::new(0),
                step,
            }
        }
    }

    impl Clock for StepClock {
        fn now(&self) -> Duration {
            let r = self.reads.get();
            self.reads.set(r + 1);
            self.step * r
        }
    }

    #[test]
    fn test_average_is_total_over_repeats() {
        // start reads 0s, stop reads 6s
        for k in [1, 2, 3, 4, 10] {
            let harness = TimingHarness::with_clock(StepClock::new(Duration::from_secs(6)), k);
            let avg = harness.measure(insertion_sort::<i64>, &[3, 2, 1]);
            assert!((avg - 6.0 / k as f64).abs() < 1e-12, "k={k}: {avg}");
        }
    }

    #[test]
    fn test_runs_exactly_repeats_times() {
        let calls = Cell::new(0);
        let harness = TimingHarness::with_clock(StepClock::new(Duration::from_millis(1)), 7);
        harness.measure(
            |v: &[i64]| {
                calls.set(calls.get() + 1);
                v.to_vec()
            },
            &[1, 2, 3],
        );
        assert_eq!(calls.get(), 7);
    }

    #[test]
    fn test_each_run_sees_unsorted_input() {
        let input = vec![5, 4, 3, 2, 1];
        let harness = TimingHarness::new(4);
        harness.measure(
            |v: &[i64]| {
                assert_eq!(v, &[5, 4, 3, 2, 1]);
                insertion_sort(v)
            },
            &input,
        );
    }

    #[test]
    fn test_zero_repeats_is_clamped() {
        let harness = TimingHarness::with_clock(StepClock::new(Duration::from_secs(2)), 0);
        assert_eq!(harness.repeats(), 1);
        assert_eq!(harness.measure(insertion_sort::<i64>, &[1]), 2.0);
    }

    #[test]
    fn test_run_builds_result() {
        let ds = Dataset::generate(DatasetKind::Sorted, 64, 1);
        let harness = TimingHarness::with_clock(StepClock::new(Duration::from_millis(30)), 3);
        let result = harness.run(Algorithm::Merge, &ds);

        assert_eq!(result.algorithm, Algorithm::Merge);
        assert_eq!(result.kind, DatasetKind::Sorted);
        assert_eq!(result.n, 64);
        assert!((result.avg_seconds - 0.01).abs() < 1e-12);
    }

    #[test]
    fn test_time_algorithm_zero_repeats_runs_once() {
        let calls = Cell::new(0);
        let avg = time_algorithm(
            |v: &[i64]| {
                calls.set(calls.get() + 1);
                v.to_vec()
            },
            &[2, 1],
            0,
        );
        assert_eq!(calls.get(), 1);
        assert!(avg >= 0.0);
    }

    #[test]
    fn test_real_clock_is_non_negative() {
        let avg = time_algorithm(Algorithm::Reference.sort_fn(), &[3, 1, 2], 2);
        assert!(avg >= 0.0);
    }
}
