//! Benchmark Executor
//!
//! Runs a validated plan and turns the results into a report.
//!
//! ## Pipeline Overview
//!
//! ```text
//! BenchmarkConfig (CLI + sortbench.toml)
//!       │
//!       ▼
//! ┌─────────────┐
//! │   planner   │  Validate sizes/kinds/repeats, order cases
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │  execution  │  Per case: generate base dataset, time each algorithm
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │   report    │  Attach metadata and summary
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │ formatting  │  Banner + table for the terminal
//! └─────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`execution`] - Orchestration of generation and timing
//! - [`report`] - Report assembly
//! - [`formatting`] - Human-readable output
//! - [`metadata`] - System metadata collection

mod execution;
mod formatting;
mod metadata;
mod report;

// Re-export public API
pub use execution::{BenchmarkConfig, ExecutionConfig, Executor, run_suite};
pub use formatting::{format_banner, format_human_output};
pub use metadata::build_report_meta;
pub use report::build_report;
