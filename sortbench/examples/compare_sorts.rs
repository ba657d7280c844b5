//! Library usage without the CLI: time every algorithm on every kind at one
//! size and print the table.
//!
//! Run with: cargo run --example compare_sorts --release

use sortbench::{BenchmarkConfig, format_table, run_suite};

fn main() -> anyhow::Result<()> {
    let config = BenchmarkConfig {
        sizes: vec![2_000],
        repeats: 5,
        ..Default::default()
    };

    let results = run_suite(&config)?;
    print!("{}", format_table(&results));

    Ok(())
}
