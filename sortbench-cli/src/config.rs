//! Configuration loading from sortbench.toml
//!
//! Settings can be placed in a `sortbench.toml` file. The file is discovered
//! by walking up from the current directory, or given explicitly with
//! `--config`. Command line flags override anything set here.

use serde::{Deserialize, Serialize};
use sortbench_core::{DEFAULT_REPEATS, DEFAULT_SEED, DatasetKind};
use std::path::{Path, PathBuf};

/// File name looked up during discovery
pub const CONFIG_FILE_NAME: &str = "sortbench.toml";

/// SortBench configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SortBenchConfig {
    /// Workload configuration
    #[serde(default)]
    pub bench: BenchConfig,
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Workload configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchConfig {
    /// Dataset sizes, run in the listed order
    #[serde(default = "default_sizes")]
    pub sizes: Vec<usize>,
    /// Dataset kinds, run in the listed order
    #[serde(default = "default_kinds")]
    pub kinds: Vec<String>,
    /// Runs averaged per result
    #[serde(default = "default_repeats")]
    pub repeats: usize,
    /// Seed for the random and almost-sorted generators
    #[serde(default = "default_seed")]
    pub seed: u64,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            sizes: default_sizes(),
            kinds: default_kinds(),
            repeats: default_repeats(),
            seed: default_seed(),
        }
    }
}

/// Default dataset sizes
pub fn default_sizes() -> Vec<usize> {
    vec![1000, 5000, 10000]
}
/// Default dataset kinds (all of them)
pub fn default_kinds() -> Vec<String> {
    DatasetKind::ALL
        .iter()
        .map(|k| k.as_str().to_string())
        .collect()
}
fn default_repeats() -> usize {
    DEFAULT_REPEATS
}
fn default_seed() -> u64 {
    DEFAULT_SEED
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Stdout format: "human", "csv" or "json"
    #[serde(default = "default_format")]
    pub format: String,
    /// Write results as CSV to this path
    #[serde(default)]
    pub csv_path: Option<PathBuf>,
    /// Show a progress bar on stderr
    #[serde(default = "default_progress")]
    pub progress: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            csv_path: None,
            progress: default_progress(),
        }
    }
}

fn default_format() -> String {
    "human".to_string()
}
fn default_progress() -> bool {
    true
}

impl SortBenchConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Try to discover and load configuration by walking up from current directory
    pub fn discover() -> Option<Self> {
        Self::discover_from(std::env::current_dir().ok()?)
    }

    /// Walk up from `start` and load the first `sortbench.toml` found.
    ///
    /// A file that fails to load is reported with a warning and yields `None`.
    pub fn discover_from(start: impl Into<PathBuf>) -> Option<Self> {
        let mut dir = start.into();
        loop {
            let config_path = dir.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                tracing::debug!(path = %config_path.display(), "loading config");
                return match Self::load(&config_path) {
                    Ok(config) => Some(config),
                    Err(e) => {
                        tracing::warn!(
                            path = %config_path.display(),
                            error = %e,
                            "ignoring unreadable config, using defaults"
                        );
                        None
                    }
                };
            }
            if !dir.pop() {
                break;
            }
        }
        None
    }

    /// Generate a default configuration as TOML string
    pub fn default_toml() -> String {
        r#"# SortBench Configuration

[bench]
# Dataset sizes, in run order
sizes = [1000, 5000, 10000]
# Dataset kinds: random, sorted, reversed, almost
kinds = ["random", "sorted", "reversed", "almost"]
# Runs averaged per (algorithm, kind, size)
repeats = 3
# Seed for the random and almost-sorted generators
seed = 123

[output]
# Stdout format: human, csv, json
format = "human"
# Save results as CSV (uncomment to enable)
# csv_path = "results.csv"
# Show a progress bar on stderr
progress = true
"#
        .to_string()
    }
}
