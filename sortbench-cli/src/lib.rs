#![warn(missing_docs)]
//! SortBench CLI Library
//!
//! Command line driver for the sorting benchmark. Resolves settings from
//! built-in defaults, an optional `sortbench.toml` and command line flags,
//! validates them, runs every (size, kind) case against every algorithm and
//! prints the results.
//!
//! # Example
//!
//! ```ignore
//! fn main() -> anyhow::Result<()> {
//!     sortbench_cli::run()
//! }
//! ```

mod config;
mod executor;
mod planner;

pub use config::*;
pub use executor::{
    BenchmarkConfig, ExecutionConfig, Executor, build_report, build_report_meta, format_banner,
    format_human_output, run_suite,
};
pub use planner::{BenchCase, ExecutionPlan, PlanError, build_plan};

use clap::{Parser, Subcommand};
use sortbench_core::Algorithm;
use sortbench_report::{OutputFormat, Report, generate_csv, generate_json_report, write_csv};
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// SortBench CLI arguments
#[derive(Parser, Debug)]
#[command(name = "sortbench")]
#[command(
    version,
    about = "Compare insertion sort, merge sort and the standard library sort on synthetic data"
)]
pub struct Cli {
    /// Optional subcommand (Run, Init); defaults to Run
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Dataset sizes [default: 1000 5000 10000]
    #[arg(long, num_args = 1..)]
    pub sizes: Option<Vec<usize>>,

    /// Dataset kinds: random, sorted, reversed, almost [default: all]
    #[arg(long, num_args = 1..)]
    pub kinds: Option<Vec<String>>,

    /// Runs averaged per result [default: 3]
    #[arg(long)]
    pub repeats: Option<usize>,

    /// Seed for the random and almost-sorted generators [default: 123]
    #[arg(long)]
    pub seed: Option<u64>,

    /// Save results as CSV to this path
    #[arg(long)]
    pub save_csv: Option<PathBuf>,

    /// Output format: human, csv, json [default: human]
    #[arg(long)]
    pub format: Option<String>,

    /// Write the formatted report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Configuration file (default: discover sortbench.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Dry run - print the plan without timing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the benchmark (default)
    Run,
    /// Print a default sortbench.toml
    Init,
}

/// Run the SortBench CLI with the process arguments.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_with_cli(cli)
}

/// Run the SortBench CLI with pre-parsed arguments.
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    init_logging(cli.verbose);

    if let Some(Commands::Init) = cli.command {
        print!("{}", SortBenchConfig::default_toml());
        return Ok(());
    }

    // An explicit --config must load; a discovered one is best effort
    let config = match cli.config {
        Some(ref path) => SortBenchConfig::load(path).map_err(|e| {
            anyhow::anyhow!("failed to load config {}: {}", path.display(), e)
        })?,
        None => SortBenchConfig::discover().unwrap_or_default(),
    };

    let bench = build_benchmark_config(&cli, &config);

    if cli.dry_run {
        print_plan(&bench)?;
        return Ok(());
    }

    let format = cli
        .format
        .as_deref()
        .unwrap_or(&config.output.format)
        .parse::<OutputFormat>()
        .map_err(|e| anyhow::anyhow!(e))?;
    let show_progress = config.output.progress && !cli.no_progress;

    let report = run_benchmarks(&bench, show_progress)?;

    // Generate output
    let output = match format {
        OutputFormat::Human => format_human_output(&report),
        OutputFormat::Csv => generate_csv(&report.results),
        OutputFormat::Json => generate_json_report(&report)?,
    };

    // Write output
    if let Some(ref path) = cli.output {
        let mut file = std::fs::File::create(path)?;
        file.write_all(output.as_bytes())?;
        println!("Report written to: {}", path.display());
    } else {
        print!("{}", output);
    }

    if let Some(ref path) = bench.output_path {
        write_csv(path, &report.results)
            .map_err(|e| anyhow::anyhow!("failed to write CSV {}: {}", path.display(), e))?;
        if format == OutputFormat::Human {
            println!("\nCSV saved to: {}", path.display());
        } else {
            tracing::info!(path = %path.display(), "CSV saved");
        }
    }

    Ok(())
}

/// Initialise the tracing subscriber on stderr.
///
/// `RUST_LOG` takes precedence over the verbosity flag. A subscriber that is
/// already installed is left in place.
fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "sortbench=debug"
    } else {
        "sortbench=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Build a BenchmarkConfig by layering: defaults → sortbench.toml → CLI overrides.
pub fn build_benchmark_config(cli: &Cli, config: &SortBenchConfig) -> BenchmarkConfig {
    BenchmarkConfig {
        sizes: cli
            .sizes
            .clone()
            .unwrap_or_else(|| config.bench.sizes.clone()),
        kinds: cli
            .kinds
            .clone()
            .unwrap_or_else(|| config.bench.kinds.clone()),
        repeats: cli.repeats.unwrap_or(config.bench.repeats),
        seed: cli.seed.unwrap_or(config.bench.seed),
        output_path: cli
            .save_csv
            .clone()
            .or_else(|| config.output.csv_path.clone()),
    }
}

/// Validate `bench`, then execute it and assemble the report.
///
/// Invalid settings (including unknown dataset kinds) are rejected before
/// anything is generated or timed.
pub fn run_benchmarks(bench: &BenchmarkConfig, show_progress: bool) -> anyhow::Result<Report> {
    let plan = bench.plan()?;

    tracing::info!(
        cases = plan.cases.len(),
        results = plan.result_count(),
        repeats = bench.repeats,
        seed = bench.seed,
        "running benchmark"
    );

    let start_time = Instant::now();
    let exec_config = ExecutionConfig {
        show_progress,
        ..bench.execution_config()
    };
    let results = Executor::new(exec_config).execute(&plan);
    let total_duration_ms = start_time.elapsed().as_secs_f64() * 1000.0;

    tracing::info!(total_duration_ms, "benchmark complete");

    Ok(build_report(results, bench, &plan, total_duration_ms))
}

fn print_plan(bench: &BenchmarkConfig) -> anyhow::Result<()> {
    let plan = bench.plan()?;
    print!("{}", format_plan(&plan, bench));
    Ok(())
}

/// Render the plan as a tree of sizes and kinds, with totals.
pub fn format_plan(plan: &ExecutionPlan, bench: &BenchmarkConfig) -> String {
    let algorithms: Vec<&str> = Algorithm::ALL.iter().map(|a| a.name()).collect();
    let mut output = String::from("SortBench Plan:\n");

    for &n in &plan.sizes {
        output.push_str(&format!("├── n={}\n", n));
        for kind in &plan.kinds {
            output.push_str(&format!("│   ├── {}: {}\n", kind, algorithms.join(", ")));
        }
    }
    output.push_str(&format!(
        "{} cases, {} results ({} repeats each, seed {}).\n",
        plan.cases.len(),
        plan.result_count(),
        bench.repeats,
        bench.seed
    ));
    if let Some(ref path) = bench.output_path {
        output.push_str(&format!("CSV: {}\n", path.display()));
    }

    output
}
