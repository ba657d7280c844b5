#![warn(missing_docs)]
//! SortBench Core
//!
//! The measurable parts of the benchmark:
//! - [`dataset`]: seeded synthetic workloads (`random`, `sorted`, `reversed`, `almost`)
//! - [`sort`]: insertion sort, merge sort and the standard library reference sort
//! - [`measure`]: injectable monotonic clock and timer
//! - [`bencher`]: the timing harness that averages repeated runs

pub mod bencher;
pub mod dataset;
pub mod measure;
pub mod sort;

pub use bencher::{AlgorithmResult, DEFAULT_REPEATS, TimingHarness, time_algorithm};
pub use dataset::{
    DEFAULT_SEED, Dataset, DatasetError, DatasetKind, RANDOM_VALUE_MAX, almost_sorted_swaps,
    generate, generate_named,
};
pub use measure::{Clock, MonotonicClock, Timer};
pub use sort::{
    Algorithm, SortFn, insertion_sort, insertion_sort_by, merge_sort, merge_sort_by,
    reference_sort,
};
