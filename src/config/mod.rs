//! Configuration types for scanning and reporting.
//!
//! - [`ScanOptions`] controls listing and sizing
//! - [`ReportOptions`] controls sorting and presentation
//! - [`FileConfig`] is the persistent TOML configuration file

pub mod file;
pub mod report;
pub mod scan;

pub use file::FileConfig;
pub use report::{DEFAULT_MAX_ERRORS, ReportOptions, SortKey};
pub use scan::{DEFAULT_MAX_WORKERS, ScanOptions};
