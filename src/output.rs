//! Structured JSON output for scripting and piping.
//!
//! When the `--json` flag is passed, the finished [`ScanReport`] is
//! serialized to stdout as a single JSON object instead of the table.

use serde::Serialize;

use crate::entry::{Entry, ScanReport};
use crate::utils::format_bytes;

/// Top-level JSON output emitted when `--json` is active.
#[derive(Serialize, Debug)]
pub struct JsonOutput {
    /// Absolute path of the scanned directory.
    pub root: String,

    /// Aggregated summary statistics.
    pub summary: JsonSummary,

    /// Sized entries, in report order.
    pub entries: Vec<JsonEntry>,

    /// One message per entry that could not be sized.
    pub errors: Vec<String>,

    /// Present only when the root directory itself could not be listed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listing_error: Option<String>,
}

/// Aggregated summary across all sized entries.
#[derive(Serialize, Debug)]
pub struct JsonSummary {
    /// Number of sized entries that are not directories.
    pub total_files: usize,

    /// Number of sized entries that are directories.
    pub total_directories: usize,

    /// Total size in bytes.
    pub total_size: u64,

    /// Human-readable formatted total size (e.g. `"1.23 GiB"`).
    pub total_size_formatted: String,

    /// Number of entries that could not be sized.
    pub error_count: usize,
}

/// A single entry in the JSON output.
#[derive(Serialize, Debug)]
pub struct JsonEntry {
    /// Bare file name.
    pub name: String,

    /// Absolute path.
    pub path: String,

    /// Whether the entry is a directory.
    pub is_dir: bool,

    /// Size in bytes.
    pub size: u64,

    /// Human-readable formatted size.
    pub size_formatted: String,

    /// Last modification time, RFC 3339.
    pub modified: String,
}

impl JsonOutput {
    /// Build a `JsonOutput` from a finished scan report.
    #[must_use]
    pub fn from_report(report: &ScanReport) -> Self {
        Self {
            root: report.root.display().to_string(),
            summary: JsonSummary {
                total_files: report.total_files,
                total_directories: report.total_directories(),
                total_size: report.total_size,
                total_size_formatted: format_bytes(report.total_size),
                error_count: report.errors.len(),
            },
            entries: report.entries.iter().map(JsonEntry::from_entry).collect(),
            errors: report.errors.clone(),
            listing_error: report.listing_error.clone(),
        }
    }
}

impl JsonEntry {
    /// Convert an `Entry` into a `JsonEntry`.
    #[must_use]
    pub fn from_entry(entry: &Entry) -> Self {
        Self {
            name: entry.name(),
            path: entry.path.display().to_string(),
            is_dir: entry.is_dir,
            size: entry.size,
            size_formatted: format_bytes(entry.size),
            modified: entry.modified.to_rfc3339(),
        }
    }
}
