//! Size measurement and formatting utilities.
//!
//! This module measures directory subtrees on disk and formats the byte
//! sizes and counts that appear in the report.

use std::{fs, path::Path};

use humansize::{BINARY, format_size};
use walkdir::WalkDir;

/// Calculate the total size of a directory and all its contents, in bytes.
///
/// Recursively traverses the directory tree using `walkdir` and sums the sizes
/// of all regular files found. A symlink to a regular file counts with the
/// size of its target; symlinked directories are never descended into.
/// Errors for individual entries (permission denied, entries vanishing
/// mid-walk, etc.) are silently skipped so the function always returns a
/// result.
///
/// Returns `0` if the path does not exist or cannot be traversed at the root level.
#[must_use]
pub fn calculate_dir_size(path: &Path) -> u64 {
    let mut total = 0u64;

    for entry in WalkDir::new(path) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::trace!("skipping unreadable descendant: {err}");
                continue;
            }
        };

        let file_type = entry.file_type();
        let metadata = if file_type.is_file() {
            entry.metadata().map_err(std::io::Error::from)
        } else if file_type.is_symlink() {
            fs::metadata(entry.path())
        } else {
            continue;
        };

        match metadata {
            Ok(metadata) if metadata.is_file() => total = total.saturating_add(metadata.len()),
            Ok(_) => {}
            Err(err) => {
                tracing::trace!("skipping {}: {err}", entry.path().display());
            }
        }
    }

    total
}

/// Format a byte count with binary units (`B`, `KiB`, `MiB`, ...).
#[must_use]
pub fn format_bytes(size: u64) -> String {
    format_size(size, BINARY)
}

/// Format a count with `,` thousands separators (e.g. `1,234,567`).
#[must_use]
pub fn format_count(count: usize) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i).is_multiple_of(3) {
            out.push(',');
        }
        out.push(ch);
    }

    out
}
