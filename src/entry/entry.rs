//! Core entry data structures.
//!
//! This module defines how the size of a single top-level path is represented
//! once it has been measured.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

/// A top-level path whose size was measured successfully.
///
/// For a file, `size` is the file's length. For a directory, it is the sum of
/// the lengths of every regular file in its subtree; descendants that could
/// not be read contribute nothing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    /// Absolute path of the entry
    pub path: PathBuf,

    /// Size in bytes
    pub size: u64,

    /// Last modification time of the entry itself (never of its descendants)
    pub modified: DateTime<Local>,

    /// Whether the entry is a directory
    pub is_dir: bool,
}

impl Entry {
    /// The entry's bare file name, or the full path if it has none.
    #[must_use]
    pub fn name(&self) -> String {
        self.path.file_name().map_or_else(
            || self.path.display().to_string(),
            |name| name.to_string_lossy().into_owned(),
        )
    }

    /// The directory containing the entry.
    #[must_use]
    pub fn parent(&self) -> &Path {
        self.path.parent().unwrap_or(&self.path)
    }
}

/// A top-level path whose metadata could not be read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntryError {
    /// Path that failed
    pub path: PathBuf,

    /// The underlying failure, rendered as text
    pub message: String,
}

impl std::fmt::Display for EntryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.message)
    }
}

/// Result of sizing one top-level path.
///
/// Failures carry no size at all, so they cannot leak into the scan totals.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SizeOutcome {
    /// The path was sized
    Sized(Entry),

    /// The path's own metadata could not be read
    Failed(EntryError),
}
