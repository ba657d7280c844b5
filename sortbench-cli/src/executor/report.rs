//! Report Building
//!
//! Wraps execution results with run metadata and a summary, ready for
//! table, CSV or JSON output.

use super::execution::BenchmarkConfig;
use super::metadata::build_report_meta;
use crate::planner::ExecutionPlan;
use sortbench_core::AlgorithmResult;
use sortbench_report::Report;

/// Build a complete Report from execution results
///
/// # Arguments
/// * `results` - Results in generation order
/// * `config` - Settings the run used
/// * `plan` - The executed plan
/// * `total_duration_ms` - Wall time of the whole run in milliseconds
pub fn build_report(
    results: Vec<AlgorithmResult>,
    config: &BenchmarkConfig,
    plan: &ExecutionPlan,
    total_duration_ms: f64,
) -> Report {
    Report::new(build_report_meta(config, plan), results, total_duration_ms)
}
