//! Human-readable report rendering.
//!
//! Prints the scan header, the summary block, the entry table and the capped
//! error list. The cell contents are computed by plain functions so that the
//! layout can be checked without a terminal; colors are applied only when
//! printing.

use std::path::Path;

use colored::{ColoredString, Colorize};

use crate::entry::{Entry, ScanReport};
use crate::utils::{format_bytes, format_count};

const MIB: u64 = 1024 * 1024;
const GIB: u64 = 1024 * MIB;

/// Entries above this size get the "large" icon and a yellow size.
pub const LARGE_THRESHOLD: u64 = 100 * MIB;

/// Entries above this size get a red size.
pub const HUGE_THRESHOLD: u64 = GIB;

/// Timestamp layout of the Modified column.
pub const HISTORY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Minimum width of the Name column.
const MIN_NAME_WIDTH: usize = 20;

/// Width of the Size column.
const SIZE_WIDTH: usize = 12;

/// Width of the Type column, sized to its header.
const TYPE_WIDTH: usize = 4;

/// Terminal columns taken by one icon; the emoji are double-width.
const ICON_WIDTH: usize = 2;

/// How prominently a size is highlighted in the table.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SizeTier {
    /// Up to [`LARGE_THRESHOLD`]
    Normal,
    /// Above [`LARGE_THRESHOLD`]
    Large,
    /// Above [`HUGE_THRESHOLD`]
    Huge,
}

impl SizeTier {
    /// Classify a size in bytes.
    #[must_use]
    pub const fn of(size: u64) -> Self {
        if size > HUGE_THRESHOLD {
            Self::Huge
        } else if size > LARGE_THRESHOLD {
            Self::Large
        } else {
            Self::Normal
        }
    }

    fn paint(self, text: &str) -> ColoredString {
        match self {
            Self::Normal => text.green(),
            Self::Large => text.yellow(),
            Self::Huge => text.red(),
        }
    }
}

/// Return the icon shown in the Type column for an entry.
#[must_use]
pub const fn entry_icon(entry: &Entry) -> &'static str {
    if entry.is_dir {
        "📁"
    } else if entry.size > LARGE_THRESHOLD {
        "📊"
    } else {
        "📄"
    }
}

/// Pad an icon so it fills the Type column.
#[must_use]
pub fn type_cell(icon: &str) -> String {
    format!("{icon}{}", " ".repeat(TYPE_WIDTH - ICON_WIDTH))
}

/// Column headers of the entry table.
#[must_use]
pub fn table_header(show_history: bool) -> Vec<&'static str> {
    let mut header = vec!["Type", "Name", "Size"];
    if show_history {
        header.push("Modified");
    }
    header.push("Path");
    header
}

/// Uncolored cell contents for every entry, in table order.
///
/// Columns are `Type, Name, Size, [Modified,] Path`, where Path is the
/// directory containing the entry.
#[must_use]
pub fn table_rows(entries: &[Entry], show_history: bool) -> Vec<Vec<String>> {
    entries
        .iter()
        .map(|entry| {
            let mut row = vec![
                entry_icon(entry).to_string(),
                entry.name(),
                format_bytes(entry.size),
            ];
            if show_history {
                row.push(entry.modified.format(HISTORY_FORMAT).to_string());
            }
            row.push(entry.parent().display().to_string());
            row
        })
        .collect()
}

/// Lines of the error summary: at most `limit` messages, then a count of the rest.
#[must_use]
pub fn error_lines(errors: &[String], limit: usize) -> Vec<String> {
    let mut lines: Vec<String> = errors
        .iter()
        .take(limit)
        .map(|error| format!("  • {error}"))
        .collect();

    if errors.len() > limit {
        lines.push(format!("  ... and {} more errors", errors.len() - limit));
    }

    lines
}

/// Print the banner naming the directory being analyzed.
pub fn print_header(root: &Path) {
    println!("{}", "📂 File Size Analyzer".bold().blue());
    println!("   Analyzing: {}", root.display().to_string().cyan());
}

/// Print the summary statistics block.
///
/// # Output Format
///
/// ```text
/// 📊 Summary
///   Directory:          /home/user/Downloads
///   Total files:        1,204
///   Total directories:  37
///   Total size:         18.41 GiB
///   Errors:             2
/// ```
pub fn print_summary(report: &ScanReport) {
    println!("{}", "📊 Summary".bold());
    summary_row("Directory:", &report.root.display().to_string().green());
    summary_row("Total files:", &format_count(report.total_files).green());
    summary_row(
        "Total directories:",
        &format_count(report.total_directories()).green(),
    );
    summary_row(
        "Total size:",
        &format_bytes(report.total_size).bright_green().bold(),
    );

    if !report.errors.is_empty() {
        summary_row("Errors:", &report.errors.len().to_string().red());
    }
}

fn summary_row(label: &str, value: &ColoredString) {
    println!("  {}{value}", format!("{label:<20}").cyan());
}

/// Print the entry table.
pub fn print_table(entries: &[Entry], show_history: bool) {
    let rows = table_rows(entries, show_history);
    let name_width = rows
        .iter()
        .map(|row| row[1].chars().count())
        .max()
        .unwrap_or(0)
        .max(MIN_NAME_WIDTH);

    let header = table_header(show_history);
    let mut header_line = format!(
        "{:<TYPE_WIDTH$}  {:<name_width$}  {:>SIZE_WIDTH$}",
        header[0], header[1], header[2]
    );
    if show_history {
        header_line.push_str(&format!("  {:<19}", header[3]));
    }
    header_line.push_str(&format!("  {}", header[header.len() - 1]));
    println!("{}", header_line.bold().magenta());

    for (entry, row) in entries.iter().zip(&rows) {
        let tier = SizeTier::of(entry.size);
        let name = format!("{:<name_width$}", row[1]);
        let size = format!("{:>SIZE_WIDTH$}", row[2]);

        let mut line = format!(
            "{}  {}  {}",
            type_cell(&row[0]),
            name.white(),
            tier.paint(&size)
        );
        if show_history {
            line.push_str(&format!("  {}", row[3].yellow()));
        }
        line.push_str(&format!("  {}", row[row.len() - 1].dimmed()));
        println!("{line}");
    }
}

/// Print the capped list of entries that could not be sized.
pub fn print_errors(errors: &[String], limit: usize) {
    if errors.is_empty() {
        return;
    }

    println!("\n{}", "Errors encountered:".red());
    for line in error_lines(errors, limit) {
        println!("{}", line.dimmed());
    }
}
