//! Benchmark Execution
//!
//! Drives the cross product of the plan: for every case one base dataset is
//! generated with the configured seed, then every algorithm in
//! [`Algorithm::ALL`] order is timed against that same dataset.
//!
//! ## Data Flow
//!
//! ```text
//! ExecutionPlan (sizes × kinds)
//!        │
//!        ▼
//! ┌───────────────────┐
//! │ Dataset::generate │  one base dataset per case
//! └────────┬──────────┘
//!          │
//!          ▼
//! ┌──────────────────┐
//! │  TimingHarness   │  repeats × each algorithm
//! └────────┬─────────┘
//!          │
//!          ▼
//!  Vec<AlgorithmResult> (size, kind, algorithm order)
//! ```

use crate::planner::{ExecutionPlan, PlanError, build_plan};
use indicatif::{ProgressBar, ProgressStyle};
use sortbench_core::{
    Algorithm, AlgorithmResult, Clock, DEFAULT_REPEATS, DEFAULT_SEED, Dataset, MonotonicClock,
    TimingHarness,
};
use std::path::PathBuf;

/// Fully resolved settings for one benchmark run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkConfig {
    /// Dataset sizes, in run order
    pub sizes: Vec<usize>,
    /// Dataset kind identifiers, in run order
    pub kinds: Vec<String>,
    /// Runs averaged per result
    pub repeats: usize,
    /// Generator seed shared by every case
    pub seed: u64,
    /// Where to save CSV results, if anywhere
    pub output_path: Option<PathBuf>,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            sizes: crate::config::default_sizes(),
            kinds: crate::config::default_kinds(),
            repeats: DEFAULT_REPEATS,
            seed: DEFAULT_SEED,
            output_path: None,
        }
    }
}

impl BenchmarkConfig {
    /// Validate the settings and expand them into a plan
    pub fn plan(&self) -> Result<ExecutionPlan, PlanError> {
        if self.repeats == 0 {
            return Err(PlanError::InvalidRepeats);
        }
        build_plan(&self.sizes, &self.kinds)
    }

    /// Executor settings derived from this configuration
    pub fn execution_config(&self) -> ExecutionConfig {
        ExecutionConfig {
            repeats: self.repeats,
            seed: self.seed,
            show_progress: false,
        }
    }
}

/// Configuration for benchmark execution
#[derive(Debug, Clone)]
pub struct ExecutionConfig {
    /// Runs averaged per result
    pub repeats: usize,
    /// Generator seed
    pub seed: u64,
    /// Draw a progress bar on stderr
    pub show_progress: bool,
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            repeats: DEFAULT_REPEATS,
            seed: DEFAULT_SEED,
            show_progress: false,
        }
    }
}

/// Execute a plan and produce results
pub struct Executor<C: Clock = MonotonicClock> {
    config: ExecutionConfig,
    harness: TimingHarness<C>,
}

impl Executor {
    /// Executor timing against the real monotonic clock
    pub fn new(config: ExecutionConfig) -> Self {
        Self::with_clock(config, MonotonicClock::new())
    }
}

impl<C: Clock> Executor<C> {
    /// Executor timing against `clock`
    pub fn with_clock(config: ExecutionConfig, clock: C) -> Self {
        let harness = TimingHarness::with_clock(clock, config.repeats);
        Self { config, harness }
    }

    /// Execute every case of the plan, in order
    pub fn execute(&self, plan: &ExecutionPlan) -> Vec<AlgorithmResult> {
        let pb = if self.config.show_progress {
            let pb = ProgressBar::new(plan.result_count() as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template(
                        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
                    )
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("#>-"),
            );
            pb
        } else {
            ProgressBar::hidden()
        };

        let mut results = Vec::with_capacity(plan.result_count());
        for case in &plan.cases {
            tracing::debug!(n = case.n, kind = case.kind.as_str(), "generating dataset");
            let dataset = Dataset::generate(case.kind, case.n, self.config.seed);

            for algorithm in Algorithm::ALL {
                pb.set_message(format!("{} {} n={}", algorithm, case.kind, case.n));
                results.push(self.harness.run(algorithm, &dataset));
                pb.inc(1);
            }
        }

        pb.finish_and_clear();
        results
    }
}

/// Validate, plan and execute a benchmark on the real clock.
///
/// Nothing is timed unless the whole configuration is valid.
pub fn run_suite(config: &BenchmarkConfig) -> Result<Vec<AlgorithmResult>, PlanError> {
    let plan = config.plan()?;
    Ok(Executor::new(config.execution_config()).execute(&plan))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sortbench_core::{DatasetError, DatasetKind};
    use std::time::Duration;

    struct FixedClock;

    impl Clock for FixedClock {
        fn now(&self) -> Duration {
            Duration::ZERO
        }
    }

    fn config(sizes: &[usize], kinds: &[&str], repeats: usize) -> BenchmarkConfig {
        BenchmarkConfig {
            sizes: sizes.to_vec(),
            kinds: kinds.iter().map(|k| k.to_string()).collect(),
            repeats,
            ..Default::default()
        }
    }

    #[test]
    fn test_result_order_and_count() {
        let cfg = config(&[4, 8], &["reversed", "random"], 1);
        let plan = cfg.plan().unwrap();
        let results = Executor::with_clock(cfg.execution_config(), FixedClock).execute(&plan);

        assert_eq!(results.len(), 2 * 2 * 3);
        let keys: Vec<_> = results.iter().map(|r| (r.n, r.kind, r.algorithm)).collect();
        assert_eq!(keys[0], (4, DatasetKind::Reversed, Algorithm::Insertion));
        assert_eq!(keys[1], (4, DatasetKind::Reversed, Algorithm::Merge));
        assert_eq!(keys[2], (4, DatasetKind::Reversed, Algorithm::Reference));
        assert_eq!(keys[3], (4, DatasetKind::Random, Algorithm::Insertion));
        assert_eq!(keys[6], (8, DatasetKind::Reversed, Algorithm::Insertion));
        assert_eq!(keys[11], (8, DatasetKind::Random, Algorithm::Reference));
        assert!(results.iter().all(|r| r.avg_seconds == 0.0));
    }

    #[test]
    fn test_run_suite_small_sorted() {
        let results = run_suite(&config(&[5], &["sorted"], 1)).unwrap();

        assert_eq!(results.len(), 3);
        for (r, algo) in results.iter().zip(Algorithm::ALL) {
            assert_eq!(r.algorithm, algo);
            assert_eq!(r.n, 5);
            assert_eq!(r.kind, DatasetKind::Sorted);
            assert!(r.avg_seconds >= 0.0);
        }
    }

    #[test]
    fn test_invalid_kind_aborts_before_timing() {
        let err = run_suite(&config(&[5], &["sorted", "bogus"], 1)).unwrap_err();
        assert!(matches!(
            err,
            PlanError::Dataset(DatasetError::InvalidDatasetKind { ref kind }) if kind == "bogus"
        ));
    }

    #[test]
    fn test_zero_repeats_rejected() {
        assert_eq!(
            run_suite(&config(&[5], &["sorted"], 0)),
            Err(PlanError::InvalidRepeats)
        );
    }
}
