//! Aggregate state folded from size outcomes.
//!
//! An [`Aggregate`] is created fresh for every scan, written once per outcome
//! (by the scanner, under a lock) and turned into a read-only [`ScanReport`]
//! after every sizing task has completed.

use std::path::PathBuf;

use super::{Entry, SizeOutcome};

/// Running totals and collections for a scan in progress.
#[derive(Debug, Default)]
pub struct Aggregate {
    entries: Vec<Entry>,
    total_size: u64,
    total_files: usize,
    errors: Vec<String>,
}

impl Aggregate {
    /// Create an empty aggregate.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one outcome into the aggregate.
    ///
    /// Sized entries are appended and their size added to the total; only
    /// non-directories bump the file count. Failures are recorded as
    /// `"<path>: <message>"` and touch no counter.
    pub fn record(&mut self, outcome: SizeOutcome) {
        match outcome {
            SizeOutcome::Sized(entry) => {
                self.total_size = self.total_size.saturating_add(entry.size);
                if !entry.is_dir {
                    self.total_files += 1;
                }
                self.entries.push(entry);
            }
            SizeOutcome::Failed(error) => {
                self.errors.push(error.to_string());
            }
        }
    }

    /// Finish the scan, producing the read-only report.
    #[must_use]
    pub fn into_report(self, root: PathBuf) -> ScanReport {
        ScanReport {
            root,
            entries: self.entries,
            total_size: self.total_size,
            total_files: self.total_files,
            errors: self.errors,
            listing_error: None,
        }
    }
}

/// The finished result of scanning one directory.
#[derive(Debug)]
pub struct ScanReport {
    /// The directory that was scanned
    pub root: PathBuf,

    /// Sized entries, in completion order until sorted
    pub entries: Vec<Entry>,

    /// Sum of the sizes of every sized entry
    pub total_size: u64,

    /// Number of sized entries that are not directories
    pub total_files: usize,

    /// One message per entry whose metadata could not be read
    pub errors: Vec<String>,

    /// Set when the root itself could not be listed; the report is then empty
    pub listing_error: Option<String>,
}

impl ScanReport {
    /// An empty report for a root that could not be listed.
    #[must_use]
    pub const fn listing_failed(root: PathBuf, message: String) -> Self {
        Self {
            root,
            entries: Vec::new(),
            total_size: 0,
            total_files: 0,
            errors: Vec::new(),
            listing_error: Some(message),
        }
    }

    /// Number of sized entries that are directories.
    #[must_use]
    pub fn total_directories(&self) -> usize {
        self.entries.iter().filter(|e| e.is_dir).count()
    }

    /// Whether the scan produced no sized entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::EntryError;
    use chrono::Local;

    fn sized(path: &str, size: u64, is_dir: bool) -> SizeOutcome {
        SizeOutcome::Sized(Entry {
            path: PathBuf::from(path),
            size,
            modified: Local::now(),
            is_dir,
        })
    }

    fn failed(path: &str) -> SizeOutcome {
        SizeOutcome::Failed(EntryError {
            path: PathBuf::from(path),
            message: "No such file or directory (os error 2)".to_string(),
        })
    }

    #[test]
    fn test_record_files_and_directories() {
        let mut aggregate = Aggregate::new();
        aggregate.record(sized("/r/a.txt", 100, false));
        aggregate.record(sized("/r/d", 200, true));
        aggregate.record(sized("/r/b.log", 50, false));

        let report = aggregate.into_report(PathBuf::from("/r"));

        assert_eq!(report.entries.len(), 3);
        assert_eq!(report.total_size, 350);
        assert_eq!(report.total_files, 2);
        assert_eq!(report.total_directories(), 1);
        assert!(report.errors.is_empty());
        assert!(report.listing_error.is_none());
    }

    #[test]
    fn test_failures_never_touch_totals() {
        let mut aggregate = Aggregate::new();
        aggregate.record(sized("/r/a.txt", 100, false));
        aggregate.record(failed("/r/gone"));

        let report = aggregate.into_report(PathBuf::from("/r"));

        assert_eq!(report.entries.len(), 1);
        assert_eq!(report.total_size, 100);
        assert_eq!(report.total_files, 1);
        assert_eq!(
            report.errors,
            vec!["/r/gone: No such file or directory (os error 2)".to_string()]
        );
    }

    #[test]
    fn test_entries_keep_record_order() {
        let mut aggregate = Aggregate::new();
        aggregate.record(sized("/r/z", 1, false));
        aggregate.record(sized("/r/a", 2, false));

        let report = aggregate.into_report(PathBuf::from("/r"));
        let names: Vec<_> = report.entries.iter().map(Entry::name).collect();
        assert_eq!(names, vec!["z", "a"]);
    }

    #[test]
    fn test_empty_aggregate() {
        let report = Aggregate::new().into_report(PathBuf::from("/r"));

        assert!(report.is_empty());
        assert_eq!(report.total_size, 0);
        assert_eq!(report.total_files, 0);
        assert!(report.errors.is_empty());
    }

    #[test]
    fn test_listing_failed_report() {
        let report = ScanReport::listing_failed(
            PathBuf::from("/r"),
            "Permission denied (os error 13)".to_string(),
        );

        assert!(report.is_empty());
        assert_eq!(
            report.listing_error.as_deref(),
            Some("Permission denied (os error 13)")
        );
    }
}
