#![deny(missing_docs)]
//! SortBench Report - Output Formats
//!
//! Renders benchmark results as:
//! - Human (aligned console table)
//! - CSV (spreadsheet-compatible, one row per result)
//! - JSON (full report with metadata)

mod csv;
mod json;
mod report;
mod table;

pub use csv::{CSV_HEADER, generate_csv, write_csv};
pub use json::generate_json_report;
pub use report::{Report, ReportConfig, ReportMeta, ReportSummary, SystemInfo};
pub use table::format_table;

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Aligned console table
    Human,
    /// Comma-separated values
    Csv,
    /// JSON with full metadata
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" | "text" | "table" => Ok(OutputFormat::Human),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}
