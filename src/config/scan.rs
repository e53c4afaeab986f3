//! Scanning configuration for directory sizing.
//!
//! This module defines the options that control which entries are listed
//! and how many worker threads size them.

/// Worker-pool width used when neither the CLI nor the config file sets one.
pub const DEFAULT_MAX_WORKERS: usize = 4;

/// Configuration for directory scanning behavior.
///
/// This struct contains options that control how the root directory is
/// listed and how the listed entries are sized.
#[derive(Clone, Debug)]
pub struct ScanOptions {
    /// Whether to show verbose diagnostics while scanning
    pub verbose: bool,

    /// Number of worker threads used to size entries (always at least 1)
    pub max_workers: usize,

    /// Glob patterns matched against entry names and paths; matches are skipped
    pub ignore: Vec<String>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            verbose: false,
            max_workers: DEFAULT_MAX_WORKERS,
            ignore: Vec::new(),
        }
    }
}
