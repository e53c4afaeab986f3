//! Command-line interface definition and argument parsing.
//!
//! This module defines all command-line arguments and options using the
//! [clap](https://docs.rs/clap/) library.
//!
//! Helper methods on [`Cli`] accept a [`FileConfig`] reference so that config-file
//! values act as defaults that CLI arguments can override (layered config).

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use sizescan::config::file::{FileConfig, expand_tilde};
use sizescan::config::{
    DEFAULT_MAX_ERRORS, DEFAULT_MAX_WORKERS, ReportOptions, ScanOptions, SortKey,
};

/// Command-line arguments controlling how entries are listed and sized.
#[derive(Parser)]
struct ScanningArgs {
    /// File/directory names or glob patterns to ignore
    ///
    /// Each pattern is matched against both the bare entry name and its full
    /// path. Accepts several patterns after one flag (`--ignore "*.tmp" "*.log"`)
    /// and may be repeated.
    #[arg(long, num_args = 0.., action = clap::ArgAction::Append)]
    ignore: Vec<String>,

    /// Maximum number of worker threads used to size entries (default: 4)
    #[arg(long, value_parser = parse_worker_count)]
    max_workers: Option<usize>,

    /// Show diagnostic logging on stderr
    #[arg(short = 'v', long)]
    verbose: bool,
}

/// Command-line arguments controlling the report.
#[derive(Parser)]
struct OutputArgs {
    /// Sort order of the report (default: largest first)
    #[arg(long, value_enum)]
    sort: Option<SortKey>,

    /// Show the modification time of every entry
    #[arg(long)]
    show_history: bool,

    /// Output results as a single JSON object for scripting/piping
    ///
    /// When enabled, all human-readable output (colors, progress bars, emojis)
    /// is suppressed and a single JSON document is printed to stdout.
    #[arg(long)]
    json: bool,
}

/// Top-level subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Inspect or initialise the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Subcommands for `config`.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration (file values + defaults for unset keys)
    Show,
    /// Write a default config.toml if none exists yet
    Init,
    /// Print the path to the config file
    Path,
}

/// Main command-line interface structure.
#[derive(Parser)]
#[command(name = "sizescan")]
#[command(about = "Analyze the sizes of files and directories in a directory")]
#[command(
    after_help = "Examples:
  sizescan                              # Analyze current directory
  sizescan -p /home/user/Documents      # Analyze specific directory
  sizescan --sort size_desc             # Sort by size (largest first)
  sizescan --sort name                  # Sort by name
  sizescan --show-history               # Show modification times
  sizescan --ignore \"*.tmp\" \"*.log\"     # Ignore temp and log files"
)]
#[command(version)]
pub struct Cli {
    /// Subcommand (e.g. `config`)
    #[command(subcommand)]
    pub subcommand: Option<Commands>,

    /// Path to directory to analyze (default: current directory)
    #[arg(short = 'p', long)]
    path: Option<PathBuf>,

    /// Scanning options
    #[command(flatten)]
    scanning: ScanningArgs,

    /// Output options
    #[command(flatten)]
    output: OutputArgs,
}

/// Parse a worker-pool width, rejecting zero.
fn parse_worker_count(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

impl Cli {
    /// Whether `--json` structured output mode is enabled.
    #[must_use]
    pub const fn json(&self) -> bool {
        self.output.json
    }

    /// Resolve the directory to scan.
    ///
    /// Priority: CLI `--path` > config file `path` (tilde-expanded) > current directory.
    #[must_use]
    pub fn directory(&self, config: &FileConfig) -> PathBuf {
        if let Some(ref path) = self.path {
            return path.clone();
        }

        config
            .path
            .as_deref()
            .map_or_else(|| PathBuf::from("."), expand_tilde)
    }

    /// Extract scanning options from CLI args and config file.
    ///
    /// - **`max_workers`**: CLI > config (if positive) > `4`
    /// - **verbose**: CLI flag `||` config value `||` `false`
    /// - **ignore**: merged from both sources (config patterns first, then CLI)
    #[must_use]
    pub fn scan_options(&self, config: &FileConfig) -> ScanOptions {
        let mut ignore = config.scanning.ignore.clone().unwrap_or_default();
        ignore.extend(self.scanning.ignore.iter().cloned());

        ScanOptions {
            verbose: self.scanning.verbose || config.scanning.verbose.unwrap_or(false),
            max_workers: self
                .scanning
                .max_workers
                .or(config.scanning.max_workers.filter(|&n| n > 0))
                .unwrap_or(DEFAULT_MAX_WORKERS),
            ignore,
        }
    }

    /// Extract report options from CLI args and config file.
    ///
    /// Priority: CLI argument > config file > default (`size_desc`, no history).
    /// An unknown sort name in the config file falls back to the default.
    #[must_use]
    pub fn report_options(&self, config: &FileConfig) -> ReportOptions {
        ReportOptions {
            sort: self
                .output
                .sort
                .or_else(|| {
                    config
                        .output
                        .sort
                        .as_ref()
                        .and_then(|s| SortKey::from_str(s, true).ok())
                })
                .unwrap_or_default(),
            show_history: self.output.show_history
                || config.output.show_history.unwrap_or(false),
            max_errors: config.output.max_errors.unwrap_or(DEFAULT_MAX_ERRORS),
        }
    }
}
