//! Sorting Algorithms
//!
//! Every algorithm borrows its input and returns a freshly sorted `Vec`, so
//! repeated runs against one base dataset always see the same unsorted data.

mod insertion;
mod merge;

pub use insertion::{insertion_sort, insertion_sort_by};
pub use merge::{merge_sort, merge_sort_by};

use serde::{Deserialize, Serialize};

/// Standard library sort on a copy of `input`, used as the baseline.
pub fn reference_sort<T: Ord + Clone>(input: &[T]) -> Vec<T> {
    let mut a = input.to_vec();
    a.sort();
    a
}

/// Signature shared by all benchmarked sorts
pub type SortFn = fn(&[i64]) -> Vec<i64>;

/// Algorithms under benchmark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// Insertion sort
    Insertion,
    /// Bottom-up merge sort
    Merge,
    /// `slice::sort`
    Reference,
}

impl Algorithm {
    /// All algorithms, in the order they are run for every case
    pub const ALL: [Algorithm; 3] = [Algorithm::Insertion, Algorithm::Merge, Algorithm::Reference];

    /// Display name used in tables and CSV
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Insertion => "Insertion",
            Algorithm::Merge => "Merge",
            Algorithm::Reference => "Reference",
        }
    }

    /// Function pointer for this algorithm
    pub fn sort_fn(self) -> SortFn {
        match self {
            Algorithm::Insertion => insertion_sort::<i64>,
            Algorithm::Merge => merge_sort::<i64>,
            Algorithm::Reference => reference_sort::<i64>,
        }
    }

    /// Sort a copy of `input`
    pub fn sort(self, input: &[i64]) -> Vec<i64> {
        (self.sort_fn())(input)
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.name())
    }
}
