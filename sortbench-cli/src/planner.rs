//! Benchmark Planner
//!
//! Validates the requested sizes and kinds and expands them into the ordered
//! list of cases to run.
//!
//! Ordering: size-major, then kind, each in the order given. Every kind is
//! parsed here, before any dataset is generated or timed, so an unknown kind
//! aborts the whole run up front.

use sortbench_core::{Algorithm, DatasetError, DatasetKind};
use thiserror::Error;

/// Reasons a benchmark cannot be planned
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// No sizes were requested
    #[error("at least one dataset size is required")]
    EmptySizes,
    /// A size of zero was requested
    #[error("dataset sizes must be positive (got 0)")]
    ZeroSize,
    /// No kinds were requested
    #[error("at least one dataset kind is required")]
    EmptyKinds,
    /// `repeats` was zero
    #[error("repeats must be at least 1")]
    InvalidRepeats,
    /// A kind identifier was not recognised
    #[error(transparent)]
    Dataset(#[from] DatasetError),
}

/// One (size, kind) combination; every algorithm runs against it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchCase {
    /// Dataset size
    pub n: usize,
    /// Dataset shape
    pub kind: DatasetKind,
}

/// Execution plan for a benchmark run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionPlan {
    /// Sizes in run order
    pub sizes: Vec<usize>,
    /// Distinct kinds in run order
    pub kinds: Vec<DatasetKind>,
    /// Cases in run order
    pub cases: Vec<BenchCase>,
}

impl ExecutionPlan {
    /// Number of results the plan will produce
    pub fn result_count(&self) -> usize {
        self.cases.len() * Algorithm::ALL.len()
    }
}

/// Build execution plan from requested sizes and kind identifiers
///
/// Repeated kinds are kept once, at their first position.
pub fn build_plan<S: AsRef<str>>(sizes: &[usize], kinds: &[S]) -> Result<ExecutionPlan, PlanError> {
    if sizes.is_empty() {
        return Err(PlanError::EmptySizes);
    }
    if sizes.contains(&0) {
        return Err(PlanError::ZeroSize);
    }
    if kinds.is_empty() {
        return Err(PlanError::EmptyKinds);
    }

    let mut parsed: Vec<DatasetKind> = Vec::with_capacity(kinds.len());
    for k in kinds {
        let kind: DatasetKind = k.as_ref().parse()?;
        if !parsed.contains(&kind) {
            parsed.push(kind);
        }
    }

    let cases = sizes
        .iter()
        .flat_map(|&n| parsed.iter().map(move |&kind| BenchCase { n, kind }))
        .collect();

    Ok(ExecutionPlan {
        sizes: sizes.to_vec(),
        kinds: parsed,
        cases,
    })
}
