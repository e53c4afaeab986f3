//! Report configuration: sort order and display options.
//!
//! This module defines the sorting keys and the options that control how the
//! sized entries are presented once a scan has finished.

use clap::ValueEnum;

/// Number of error messages shown before the summary collapses the rest.
pub const DEFAULT_MAX_ERRORS: usize = 10;

/// Enumeration of supported sorting keys for the entry table.
///
/// Each key has a fixed direction:
/// - `SizeAsc`: smallest first
/// - `SizeDesc`: largest first
/// - `Name`: alphabetical, case-insensitive
/// - `History`: most recently modified first
#[derive(Clone, Copy, PartialEq, Eq, Debug, ValueEnum, Default)]
pub enum SortKey {
    /// Sort by size, smallest first
    #[value(name = "size_asc")]
    SizeAsc,

    /// Sort by size, largest first
    #[default]
    #[value(name = "size_desc")]
    SizeDesc,

    /// Sort by entry name (case-insensitive)
    Name,

    /// Sort by modification time, newest first
    History,
}

/// Configuration for rendering the scan results.
#[derive(Clone, Debug)]
pub struct ReportOptions {
    /// The key the entry table is sorted by
    pub sort: SortKey,

    /// Whether to include a modification time column
    pub show_history: bool,

    /// How many error messages to print before summarising the remainder
    pub max_errors: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            sort: SortKey::default(),
            show_history: false,
            max_errors: DEFAULT_MAX_ERRORS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_key_default() {
        assert_eq!(SortKey::default(), SortKey::SizeDesc);
    }

    #[test]
    fn test_sort_key_value_names() {
        assert_eq!(SortKey::from_str("size_asc", true), Ok(SortKey::SizeAsc));
        assert_eq!(SortKey::from_str("size_desc", true), Ok(SortKey::SizeDesc));
        assert_eq!(SortKey::from_str("name", true), Ok(SortKey::Name));
        assert_eq!(SortKey::from_str("history", true), Ok(SortKey::History));
        assert!(SortKey::from_str("size-asc", true).is_err());
    }

    #[test]
    fn test_sort_key_case_insensitive_parse() {
        assert_eq!(SortKey::from_str("SIZE_ASC", true), Ok(SortKey::SizeAsc));
        assert_eq!(SortKey::from_str("History", true), Ok(SortKey::History));
    }

    #[test]
    fn test_report_options_default() {
        let opts = ReportOptions::default();

        assert_eq!(opts.sort, SortKey::SizeDesc);
        assert!(!opts.show_history);
        assert_eq!(opts.max_errors, 10);
    }
}
