//! Output Formatting
//!
//! Human-readable terminal output: a one-line banner describing the run,
//! a blank line, then the results table.

use sortbench_report::{Report, format_table};

/// One-line description of the run settings
pub fn format_banner(report: &Report) -> String {
    let cfg = &report.meta.config;
    let kinds: Vec<&str> = cfg.kinds.iter().map(|k| k.as_str()).collect();
    format!(
        "Sorting benchmark: sizes={:?} kinds=[{}] repeats={} seed={}",
        cfg.sizes,
        kinds.join(", "),
        cfg.repeats,
        cfg.seed
    )
}

/// Format a report for human-readable terminal display
pub fn format_human_output(report: &Report) -> String {
    let mut output = String::new();
    output.push_str(&format_banner(report));
    output.push_str("\n\n");
    output.push_str(&format_table(&report.results));
    output
}
