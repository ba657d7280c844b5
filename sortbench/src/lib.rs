#![warn(missing_docs)]
//! # SortBench
//!
//! Benchmark harness comparing sorting algorithms on synthetic workloads.
//!
//! - **Algorithms**: insertion sort, bottom-up merge sort, and the standard
//!   library sort as the baseline. All take `&[T]` and return a new `Vec<T>`.
//! - **Workloads**: seeded `random`, `sorted`, `reversed` and `almost`
//!   (sorted with `max(1, n/10)` random swaps) datasets.
//! - **Methodology**: each algorithm sorts the same base dataset `repeats`
//!   times; the report gives mean wall-clock seconds per run.
//! - **Output**: aligned console table, CSV and JSON.
//!
//! ## Quick Start
//!
//! ```
//! use sortbench::{Algorithm, DatasetKind, TimingHarness, Dataset};
//!
//! let dataset = Dataset::generate(DatasetKind::Almost, 1_000, 123);
//! let harness = TimingHarness::new(3);
//! for algorithm in Algorithm::ALL {
//!     let result = harness.run(algorithm, &dataset);
//!     assert!(result.avg_seconds >= 0.0);
//! }
//! ```

// Re-export core types
pub use sortbench_core::{
    Algorithm, AlgorithmResult, Clock, Dataset, DatasetError, DatasetKind, MonotonicClock,
    SortFn, Timer, TimingHarness, generate, generate_named, insertion_sort, insertion_sort_by,
    merge_sort, merge_sort_by, reference_sort, time_algorithm,
};

// Re-export reporting
pub use sortbench_report::{
    OutputFormat, Report, format_table, generate_csv, generate_json_report, write_csv,
};

// Re-export orchestration
pub use sortbench_cli::{BenchmarkConfig, ExecutionPlan, PlanError, build_plan, run_suite};

/// Run the SortBench command line interface.
///
/// Call this from a binary's `main()`:
/// ```ignore
/// fn main() -> anyhow::Result<()> {
///     sortbench::run()
/// }
/// ```
pub use sortbench_cli::run;
