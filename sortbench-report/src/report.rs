//! Report Data Structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sortbench_core::{AlgorithmResult, DatasetKind};

/// Complete benchmark report for one invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Run metadata
    pub meta: ReportMeta,
    /// Results in generation order: size, then kind, then algorithm
    pub results: Vec<AlgorithmResult>,
    /// Counts and wall time
    pub summary: ReportSummary,
}

/// Report metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMeta {
    /// Crate version that produced the report
    pub version: String,
    /// When the report was generated
    pub timestamp: DateTime<Utc>,
    /// Host the benchmark ran on
    pub system: SystemInfo,
    /// Settings the run used
    pub config: ReportConfig,
}

/// Benchmark settings captured in report metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Dataset sizes, in run order
    pub sizes: Vec<usize>,
    /// Distinct dataset kinds, in run order
    pub kinds: Vec<DatasetKind>,
    /// Runs averaged per result
    pub repeats: usize,
    /// Generator seed
    pub seed: u64,
}

/// System information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemInfo {
    /// Operating system
    pub os: String,
    /// CPU architecture
    pub arch: String,
    /// CPU model name, or "Unknown"
    pub cpu: String,
    /// Available parallelism
    pub cpu_cores: u32,
}

/// Report summary
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Number of (size, kind) cases
    pub cases: usize,
    /// Number of timing results
    pub total_results: usize,
    /// Wall time of the whole run in milliseconds
    pub total_duration_ms: f64,
}

impl Report {
    /// Assemble a report, deriving the summary counts from `results`
    pub fn new(meta: ReportMeta, results: Vec<AlgorithmResult>, total_duration_ms: f64) -> Self {
        let summary = ReportSummary {
            cases: meta.config.sizes.len() * meta.config.kinds.len(),
            total_results: results.len(),
            total_duration_ms,
        };
        Self {
            meta,
            results,
            summary,
        }
    }
}
