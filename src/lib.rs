//! # sizescan
//!
//! A fast CLI tool that measures how much disk space every entry of a
//! directory takes up and prints a sorted, human-readable report.
//!
//! The immediate children of the scanned directory are listed (minus anything
//! matching an ignore pattern) and then sized in parallel on a fixed-width
//! worker pool. Files are sized from their metadata, directories by summing
//! every regular file in their subtree. Entries that cannot be read are
//! reported separately and never count toward the totals.
//!
//! ## Main Parts
//!
//! - [`lister`] - Enumerates scan candidates and applies ignore patterns
//! - [`scanner`] - Sizes candidates concurrently and aggregates the results
//! - [`entry`] - Entry, size outcome and aggregate state types
//! - [`filtering`] - Ignore pattern matching and entry sorting
//! - [`report`] / [`output`] - Human-readable and JSON rendering
//! - [`config`] - Scan/report options and the persistent config file

pub mod config;
pub mod entry;
pub mod filtering;
pub mod lister;
pub mod output;
pub mod report;
pub mod scanner;
pub mod utils;

pub use config::{FileConfig, ReportOptions, ScanOptions, SortKey};
pub use entry::{Entry, EntryError, ScanReport, SizeOutcome};
pub use scanner::Scanner;
