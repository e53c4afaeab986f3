//! # sizescan
//!
//! A fast CLI tool that shows how much disk space every file and directory
//! inside a directory takes up.
//!
//! Each immediate child of the scanned directory is sized in parallel
//! (directories recursively), then listed in a sorted table together with a
//! summary and any entries that could not be read.
//!
//! ## Usage
//!
//! ```bash
//! # Analyze the current directory
//! sizescan
//!
//! # Analyze a specific directory, newest entries first, with timestamps
//! sizescan -p ~/Downloads --sort history --show-history
//!
//! # Skip logs and temporary files, use 8 worker threads
//! sizescan --ignore "*.log" "*.tmp" --max-workers 8
//! ```

mod cli;

use std::{
    path::{Path, PathBuf},
    process::exit,
};

use anyhow::{Context, Ok, Result, bail};
use clap::Parser;
use cli::{Cli, Commands, ConfigCommand};
use colored::Colorize;
use sizescan::{
    config::FileConfig, filtering::sort_entries, output::JsonOutput, report, scanner::Scanner,
};
use tracing_subscriber::EnvFilter;

/// Entry point for the sizescan application.
///
/// This function handles all errors gracefully by calling [`inner_main`] and printing
/// any errors to stderr before exiting with a non-zero status code.
fn main() {
    if let Err(err) = inner_main() {
        eprintln!("Error: {err}");

        exit(1);
    }
}

/// Main application logic that can return errors.
///
/// This function orchestrates the full pipeline: parse arguments, validate
/// the root directory, scan, sort, and render either the table or JSON.
///
/// # Errors
///
/// Returns errors for an invalid root directory, a failure to install the
/// interrupt handler or build the worker pool, and JSON serialization.
fn inner_main() -> Result<()> {
    let args = Cli::parse();

    if let Some(Commands::Config { command }) = &args.subcommand {
        return handle_config_command(command);
    }

    let json_mode = args.json();
    let file_config = load_config(json_mode);

    let scan_options = args.scan_options(&file_config);
    let report_options = args.report_options(&file_config);

    setup_logging(scan_options.verbose);
    install_interrupt_handler()?;

    let dir = resolve_root(&args.directory(&file_config))?;

    if !json_mode {
        report::print_header(&dir);
    }

    let scanner = Scanner::new(scan_options).with_quiet(json_mode);
    let mut scan = scanner.scan_directory(&dir)?;
    sort_entries(&mut scan.entries, report_options.sort);

    if json_mode {
        let output = JsonOutput::from_report(&scan);
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if let Some(err) = &scan.listing_error {
        println!("{}", format!("Error accessing directory: {err}").red());
    }

    if scan.is_empty() {
        println!("{}", "No files found to analyze.".yellow());
        report::print_errors(&scan.errors, report_options.max_errors);
        return Ok(());
    }

    println!();
    report::print_summary(&scan);
    println!();
    report::print_table(&scan.entries, report_options.show_history);
    report::print_errors(&scan.errors, report_options.max_errors);

    Ok(())
}

// ── Helper functions ────────────────────────────────────────────────────

/// Check that the scan root exists and is a directory, and make it absolute.
fn resolve_root(path: &Path) -> Result<PathBuf> {
    let shown = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());

    if !path.exists() {
        bail!("Directory '{}' does not exist.", shown.display());
    }

    if !path.is_dir() {
        bail!("'{}' is not a directory.", shown.display());
    }

    std::fs::canonicalize(path)
        .with_context(|| format!("Failed to resolve '{}'", shown.display()))
}

/// Install the tracing subscriber; diagnostics go to stderr.
///
/// `RUST_LOG` takes precedence over the `--verbose` default.
fn setup_logging(verbose: bool) {
    let default = if verbose {
        "sizescan=debug,warn"
    } else {
        "sizescan=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Report Ctrl-C distinctly from other failures and exit with status 1.
fn install_interrupt_handler() -> Result<()> {
    ctrlc::set_handler(|| {
        eprintln!("\n{}", "Analysis interrupted by user.".red());
        exit(1);
    })
    .context("Failed to set signal handler")
}

/// Load the configuration file, falling back to defaults on failure.
fn load_config(json_mode: bool) -> FileConfig {
    FileConfig::load().unwrap_or_else(|e| {
        if !json_mode {
            eprintln!("{} {e}", "Warning: Failed to load config file:".yellow());
        }
        FileConfig::default()
    })
}

// ── Config subcommand ────────────────────────────────────────────────

/// Default config file template written by `config init`.
const CONFIG_TEMPLATE: &str = r#"# sizescan configuration
# All values shown are their defaults. Uncomment and change as needed.

# Default directory to analyze (defaults to the current directory when not set)
# path = "."

[scanning]
# Number of worker threads used to size entries
# max_workers = 4

# File/directory names or glob patterns to ignore
# ignore = []

# Show diagnostic logging on stderr
# verbose = false

[output]
# Sort entries by: size_asc, size_desc, name, history
# sort = "size_desc"

# Show modification times
# show_history = false

# Number of errors listed before the rest are summarised
# max_errors = 10
"#;

/// Dispatch a `config` subcommand.
fn handle_config_command(cmd: &ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Path => match FileConfig::config_path() {
            Some(path) => println!("{}", path.display()),
            None => bail!("Could not determine the config directory on this platform"),
        },
        ConfigCommand::Show => show_config()?,
        ConfigCommand::Init => init_config()?,
    }
    Ok(())
}

/// Print the effective configuration (file values merged with defaults).
fn show_config() -> Result<()> {
    let path = FileConfig::config_path();

    let (file_exists, config) = match &path {
        Some(p) if p.exists() => (true, FileConfig::load()?),
        _ => (false, FileConfig::default()),
    };

    match &path {
        Some(p) if file_exists => println!("Config file: {} (found)", p.display()),
        Some(p) => println!(
            "Config file: {} (not found - showing defaults)",
            p.display()
        ),
        None => println!("Config file: (cannot determine path on this platform)"),
    }

    println!();
    println!("{}", format_config(&config));
    Ok(())
}

/// Format a [`FileConfig`] as a human-readable table, showing defaults for `None` fields.
fn format_config(config: &FileConfig) -> String {
    fn show_str(val: Option<&str>, default: &str) -> String {
        val.map_or_else(
            || format!("\"{default}\"  (default)"),
            |v| format!("\"{v}\""),
        )
    }
    fn show_bool(val: Option<bool>, default: bool) -> String {
        val.map_or_else(|| format!("{default}  (default)"), |v| v.to_string())
    }
    fn show_usize(val: Option<usize>, default: usize) -> String {
        val.map_or_else(|| format!("{default}  (default)"), |v| v.to_string())
    }
    fn show_patterns(val: Option<&[String]>) -> String {
        match val {
            Some(v) if !v.is_empty() => {
                let items: Vec<String> = v.iter().map(|p| format!("\"{p}\"")).collect();
                format!("[{}]", items.join(", "))
            }
            _ => "[]  (default)".to_string(),
        }
    }

    let path_str = config.path.as_ref().map_or_else(
        || "\".\"  (default)".to_string(),
        |p| format!("\"{}\"", p.display()),
    );

    format!(
        "\
path          = {path}

[scanning]
max_workers   = {max_workers}
ignore        = {ignore}
verbose       = {verbose}

[output]
sort          = {sort}
show_history  = {show_history}
max_errors    = {max_errors}",
        path = path_str,
        max_workers = show_usize(
            config.scanning.max_workers,
            sizescan::config::DEFAULT_MAX_WORKERS
        ),
        ignore = show_patterns(config.scanning.ignore.as_deref()),
        verbose = show_bool(config.scanning.verbose, false),
        sort = show_str(config.output.sort.as_deref(), "size_desc"),
        show_history = show_bool(config.output.show_history, false),
        max_errors = show_usize(
            config.output.max_errors,
            sizescan::config::DEFAULT_MAX_ERRORS
        ),
    )
}

/// Write a default config template to the config file path if it does not exist yet.
fn init_config() -> Result<()> {
    let Some(path) = FileConfig::config_path() else {
        bail!("Could not determine the config directory on this platform");
    };

    if path.exists() {
        println!("Config file already exists at: {}", path.display());
        println!("Remove it first if you want to regenerate it.");
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create config directory {}: {e}",
                parent.display()
            )
        })?;
    }

    std::fs::write(&path, CONFIG_TEMPLATE)
        .map_err(|e| anyhow::anyhow!("Failed to write config file {}: {e}", path.display()))?;

    println!("Config file written to: {}", path.display());
    Ok(())
}
