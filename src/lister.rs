//! Scan candidate listing.
//!
//! The first phase of a scan: enumerate the immediate children of the root
//! directory and drop everything an ignore pattern matches.

use std::{fs, io, path::Path, path::PathBuf};

use crate::filtering::IgnoreSet;

/// List the immediate children of `root` that are not ignored.
///
/// Paths are returned in directory-iteration order, each one being `root`
/// joined with the child's name.
///
/// # Errors
///
/// Fails as a whole if `root` cannot be opened or if reading any of its
/// entries fails partway through; no partial listing is returned.
pub fn list_candidates(root: &Path, ignore: &IgnoreSet) -> io::Result<Vec<PathBuf>> {
    let mut candidates = Vec::new();

    for entry in fs::read_dir(root)? {
        let path = entry?.path();

        if ignore.is_ignored(&path) {
            tracing::trace!("ignoring {}", path.display());
            continue;
        }

        candidates.push(path);
    }

    Ok(candidates)
}
