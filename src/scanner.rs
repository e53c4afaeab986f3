//! Concurrent directory sizing.
//!
//! This module provides the core scanning logic: list the immediate children
//! of a root directory, size each of them on a dedicated worker pool, and fold
//! every result into a single aggregate. Per-entry failures are recorded and
//! never abort the scan.

use std::{
    fs,
    path::Path,
    sync::{Mutex, PoisonError},
    time::Duration,
};

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

use crate::{
    config::ScanOptions,
    entry::{Aggregate, Entry, EntryError, ScanReport, SizeOutcome},
    filtering::IgnoreSet,
    lister::list_candidates,
    utils::calculate_dir_size,
};

/// Directory scanner that sizes every entry of a root directory.
///
/// The `Scanner` owns the scan configuration: the ignore patterns applied
/// while listing and the width of the worker pool used for sizing.
#[derive(Debug)]
pub struct Scanner {
    /// Configuration options for scanning behavior
    scan_options: ScanOptions,

    /// Compiled form of `scan_options.ignore`
    ignore: IgnoreSet,

    /// When `true`, suppresses progress output (used by `--json` mode).
    quiet: bool,
}

impl Scanner {
    /// Create a new scanner with the specified options.
    ///
    /// # Arguments
    ///
    /// * `scan_options` - Worker-pool width, ignore patterns and verbosity
    ///
    /// # Examples
    ///
    /// ```
    /// # use sizescan::{Scanner, ScanOptions};
    /// let scanner = Scanner::new(ScanOptions {
    ///     verbose: false,
    ///     max_workers: 4,
    ///     ignore: vec!["*.log".to_string()],
    /// });
    /// ```
    #[must_use]
    pub fn new(scan_options: ScanOptions) -> Self {
        let ignore = IgnoreSet::new(&scan_options.ignore);
        Self {
            scan_options,
            ignore,
            quiet: false,
        }
    }

    /// Enable or disable quiet mode (suppresses progress spinners and bars).
    #[must_use]
    pub const fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Size every entry directly under `root`.
    ///
    /// The scan runs in two phases:
    /// 1. List the immediate children of `root`, dropping ignored ones
    /// 2. Size each child on a pool of `max_workers` threads, folding each
    ///    outcome into the aggregate as soon as it completes
    ///
    /// If `root` cannot be listed, the returned report is empty and carries
    /// the failure in `listing_error`.
    ///
    /// # Errors
    ///
    /// Returns an error only if the worker pool cannot be created.
    ///
    /// # Panics
    ///
    /// This method may panic if a progress bar template string is invalid,
    /// though this should not occur under normal circumstances as the
    /// templates are hardcoded and valid.
    pub fn scan_directory(&self, root: &Path) -> Result<ScanReport> {
        let candidates = match self.discover(root) {
            Ok(candidates) => candidates,
            Err(err) => {
                tracing::warn!("cannot list {}: {err}", root.display());
                return Ok(ScanReport::listing_failed(root.to_path_buf(), err.to_string()));
            }
        };

        tracing::debug!(
            "sizing {} entries of {} with {} workers",
            candidates.len(),
            root.display(),
            self.scan_options.max_workers
        );

        if candidates.is_empty() {
            return Ok(Aggregate::new().into_report(root.to_path_buf()));
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.scan_options.max_workers.max(1))
            .thread_name(|i| format!("sizescan-worker-{i}"))
            .build()
            .context("Failed to create the sizing worker pool")?;

        let progress = self.sizing_progress(candidates.len());
        let aggregate = Mutex::new(Aggregate::new());

        pool.install(|| {
            candidates
                .par_iter()
                .with_max_len(1)
                .for_each(|path| {
                    let outcome = size_entry(path);
                    if let SizeOutcome::Failed(err) = &outcome {
                        tracing::debug!("{err}");
                    }

                    aggregate
                        .lock()
                        .unwrap_or_else(PoisonError::into_inner)
                        .record(outcome);

                    progress.inc(1);
                });
        });

        progress.finish_with_message("✅ Analysis complete");

        let report = aggregate
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
            .into_report(root.to_path_buf());

        tracing::debug!(
            "sized {} entries ({} bytes, {} errors)",
            report.entries.len(),
            report.total_size,
            report.errors.len()
        );

        Ok(report)
    }

    /// List scan candidates behind a spinner.
    fn discover(&self, root: &Path) -> std::io::Result<Vec<std::path::PathBuf>> {
        let spinner = if self.quiet {
            ProgressBar::hidden()
        } else {
            let pb = ProgressBar::new_spinner();
            pb.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner:.green} {msg}")
                    .unwrap(),
            );
            pb.set_message("Discovering files...");
            pb.enable_steady_tick(Duration::from_millis(100));
            pb
        };

        let result = list_candidates(root, &self.ignore);
        spinner.finish_and_clear();
        result
    }

    /// Progress bar advanced once per sized entry.
    fn sizing_progress(&self, total: usize) -> ProgressBar {
        if self.quiet {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(total as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} Analyzing files... {bar:40.cyan/blue} {percent:>3}% • {pos}/{len} • {elapsed_precise}")
                .unwrap()
                .progress_chars("█▉▊▋▌▍▎▏  "),
        );
        pb
    }
}

/// Size a single top-level path.
///
/// The path's own metadata is read first (following a top-level symlink);
/// if that fails the outcome is [`SizeOutcome::Failed`] and nothing else is
/// attempted. Files take their size from the metadata, directories from the
/// sum of every regular file in their subtree.
#[must_use]
pub fn size_entry(path: &Path) -> SizeOutcome {
    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(err) => {
            return SizeOutcome::Failed(EntryError {
                path: path.to_path_buf(),
                message: err.to_string(),
            });
        }
    };

    let modified: DateTime<Local> = metadata
        .modified()
        .map_or_else(|_| Local::now(), DateTime::from);

    let is_dir = metadata.is_dir();
    let size = if is_dir {
        calculate_dir_size(path)
    } else {
        metadata.len()
    };

    SizeOutcome::Sized(Entry {
        path: path.to_path_buf(),
        size,
        modified,
        is_dir,
    })
}
