//! Dataset Generator
//!
//! Produces deterministic synthetic integer sequences. Generation is a pure
//! function of `(kind, n, seed)`: the random source is a locally seeded
//! `StdRng`, never a thread-global generator.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Upper bound (inclusive) for values of the `random` kind
pub const RANDOM_VALUE_MAX: i64 = 1_000_000_000;

/// Seed used when none is configured
pub const DEFAULT_SEED: u64 = 123;

/// Errors from dataset generation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatasetError {
    /// The kind identifier is not one of the supported shapes
    #[error("invalid dataset kind '{kind}' (expected one of: random, sorted, reversed, almost)")]
    InvalidDatasetKind {
        /// The rejected identifier
        kind: String,
    },
}

/// Shape of a generated dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetKind {
    /// Uniform draws over `0..=RANDOM_VALUE_MAX`
    Random,
    /// `0, 1, ..., n-1`
    Sorted,
    /// `n, n-1, ..., 1`
    Reversed,
    /// Sorted, then `max(1, n/10)` random pairwise swaps
    Almost,
}

impl DatasetKind {
    /// Every kind, in default run order
    pub const ALL: [DatasetKind; 4] = [
        DatasetKind::Random,
        DatasetKind::Sorted,
        DatasetKind::Reversed,
        DatasetKind::Almost,
    ];

    /// Canonical identifier as accepted on the command line
    pub fn as_str(self) -> &'static str {
        match self {
            DatasetKind::Random => "random",
            DatasetKind::Sorted => "sorted",
            DatasetKind::Reversed => "reversed",
            DatasetKind::Almost => "almost",
        }
    }
}

impl std::fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // `pad` so table columns honour width and alignment flags
        f.pad(self.as_str())
    }
}

impl std::str::FromStr for DatasetKind {
    type Err = DatasetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "random" => Ok(DatasetKind::Random),
            "sorted" => Ok(DatasetKind::Sorted),
            "reversed" => Ok(DatasetKind::Reversed),
            "almost" | "almost-sorted" | "almost_sorted" => Ok(DatasetKind::Almost),
            _ => Err(DatasetError::InvalidDatasetKind {
                kind: s.to_string(),
            }),
        }
    }
}

/// Number of pairwise swaps applied to an `almost` dataset of length `n`
pub fn almost_sorted_swaps(n: usize) -> usize {
    (n / 10).max(1)
}

/// Generate `n` values of the given kind.
pub fn generate(kind: DatasetKind, n: usize, seed: u64) -> Vec<i64> {
    match kind {
        DatasetKind::Random => {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..n).map(|_| rng.gen_range(0..=RANDOM_VALUE_MAX)).collect()
        }
        DatasetKind::Sorted => (0..n as i64).collect(),
        DatasetKind::Reversed => (1..=n as i64).rev().collect(),
        DatasetKind::Almost => {
            let mut values: Vec<i64> = (0..n as i64).collect();
            if n == 0 {
                return values;
            }
            let mut rng = StdRng::seed_from_u64(seed);
            for _ in 0..almost_sorted_swaps(n) {
                let i = rng.gen_range(0..n);
                let j = rng.gen_range(0..n);
                values.swap(i, j);
            }
            values
        }
    }
}

/// Generate from a kind identifier, rejecting unknown kinds.
pub fn generate_named(kind: &str, n: usize, seed: u64) -> Result<Vec<i64>, DatasetError> {
    Ok(generate(kind.parse()?, n, seed))
}

/// A generated base sequence shared by every algorithm of one benchmark case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    kind: DatasetKind,
    seed: u64,
    values: Vec<i64>,
}

impl Dataset {
    /// Generate a dataset of `n` values
    pub fn generate(kind: DatasetKind, n: usize, seed: u64) -> Self {
        Self {
            kind,
            seed,
            values: generate(kind, n, seed),
        }
    }

    /// Shape of this dataset
    pub fn kind(&self) -> DatasetKind {
        self.kind
    }

    /// Number of values
    pub fn size(&self) -> usize {
        self.values.len()
    }

    /// Seed the dataset was generated with
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Read-only view of the values
    pub fn values(&self) -> &[i64] {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_ignores_seed() {
        for seed in [0, 1, 42, u64::MAX] {
            assert_eq!(generate(DatasetKind::Sorted, 6, seed), vec![0, 1, 2, 3, 4, 5]);
        }
    }

    #[test]
    fn test_reversed_ignores_seed() {
        for seed in [0, 7, 123] {
            assert_eq!(generate(DatasetKind::Reversed, 5, seed), vec![5, 4, 3, 2, 1]);
        }
    }

    #[test]
    fn test_random_is_deterministic() {
        let a = generate(DatasetKind::Random, 1000, 99);
        let b = generate(DatasetKind::Random, 1000, 99);
        assert_eq!(a, b);
        assert!(a.iter().all(|v| (0..=RANDOM_VALUE_MAX).contains(v)));
    }

    #[test]
    fn test_random_differs_by_seed() {
        let a = generate(DatasetKind::Random, 100, 1);
        let b = generate(DatasetKind::Random, 100, 2);
        assert_ne!(a, b);
    }

    #[test]
    fn test_almost_is_near_sorted_permutation() {
        for n in [1, 2, 9, 10, 57, 1000] {
            let values = generate(DatasetKind::Almost, n, 123);

            let mut sorted = values.clone();
            sorted.sort();
            assert_eq!(sorted, (0..n as i64).collect::<Vec<_>>());

            let displaced = values
                .iter()
                .enumerate()
                .filter(|&(i, &v)| i as i64 != v)
                .count();
            assert!(displaced <= 2 * almost_sorted_swaps(n), "n={n}: {displaced} displaced");
        }
    }

    #[test]
    fn test_swap_count_truncates() {
        assert_eq!(almost_sorted_swaps(0), 1);
        assert_eq!(almost_sorted_swaps(9), 1);
        assert_eq!(almost_sorted_swaps(19), 1);
        assert_eq!(almost_sorted_swaps(20), 2);
        assert_eq!(almost_sorted_swaps(10_000), 1000);
    }

    #[test]
    fn test_empty_datasets() {
        for kind in DatasetKind::ALL {
            assert!(generate(kind, 0, 5).is_empty());
        }
    }

    #[test]
    fn test_parse_kinds() {
        assert_eq!("random".parse::<DatasetKind>(), Ok(DatasetKind::Random));
        assert_eq!("Sorted".parse::<DatasetKind>(), Ok(DatasetKind::Sorted));
        assert_eq!("almost-sorted".parse::<DatasetKind>(), Ok(DatasetKind::Almost));
        assert_eq!(
            "bogus".parse::<DatasetKind>(),
            Err(DatasetError::InvalidDatasetKind {
                kind: "bogus".to_string()
            })
        );
    }

    #[test]
    fn test_generate_named_rejects_unknown() {
        let err = generate_named("bogus", 10, 1).unwrap_err();
        assert!(err.to_string().contains("bogus"));
        assert_eq!(generate_named("sorted", 3, 1).unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn test_dataset_accessors() {
        let ds = Dataset::generate(DatasetKind::Reversed, 4, 11);
        assert_eq!(ds.kind(), DatasetKind::Reversed);
        assert_eq!(ds.size(), 4);
        assert_eq!(ds.seed(), 11);
        assert_eq!(ds.values(), &[4, 3, 2, 1]);
    }
}
