//! Utility functions and helpers.
//!
//! This module contains utility functions used throughout the application,
//! such as directory size measurement and size formatting helpers.

pub mod size;

pub use size::{calculate_dir_size, format_bytes, format_count};
