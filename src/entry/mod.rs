//! Entry and aggregate data structures.
//!
//! ## Main Parts
//!
//! - [`Entry`] - A successfully sized top-level path
//! - [`EntryError`] - A top-level path whose metadata could not be read
//! - [`SizeOutcome`] - The result of sizing one path
//! - [`Aggregate`] - Running totals folded from every outcome of a scan
//! - [`ScanReport`] - The finished, read-only result of a scan

pub mod aggregate;
#[allow(clippy::module_inception)]
pub mod entry;

pub use aggregate::{Aggregate, ScanReport};
pub use entry::{Entry, EntryError, SizeOutcome};
