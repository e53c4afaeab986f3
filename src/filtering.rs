//! Entry filtering and sorting.
//!
//! This module provides the ignore-pattern matcher used while listing the
//! scan root, and the sort applied to sized entries before they are rendered.

use std::cmp::Reverse;
use std::path::Path;

use glob::{MatchOptions, Pattern};

use crate::config::SortKey;
use crate::entry::Entry;

/// Shell-style matching: case-sensitive, `*` may cross `/` and match a leading `.`.
const FNMATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: false,
    require_literal_leading_dot: false,
};

/// A compiled set of glob-style ignore patterns.
///
/// A path is ignored when either its bare file name or its full path string
/// matches any of the patterns.
#[derive(Debug, Default, Clone)]
pub struct IgnoreSet {
    patterns: Vec<Pattern>,
}

impl IgnoreSet {
    /// Compile a set of ignore patterns.
    ///
    /// Runs of `*` are collapsed to a single `*`, which matches the same
    /// strings when `*` may cross `/`. Patterns the glob syntax still rejects
    /// (for example an unclosed `[`) are matched literally instead.
    ///
    /// # Examples
    ///
    /// ```
    /// # use std::path::Path;
    /// # use sizescan::filtering::IgnoreSet;
    /// let ignore = IgnoreSet::new(&["*.log"]);
    /// assert!(ignore.is_ignored(Path::new("/tmp/temp.log")));
    /// assert!(!ignore.is_ignored(Path::new("/tmp/notes.txt")));
    /// ```
    #[must_use]
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Self {
        let patterns = patterns
            .iter()
            .filter_map(|raw| {
                let raw = raw.as_ref();
                Pattern::new(&collapse_stars(raw))
                    .or_else(|err| {
                        tracing::debug!("ignore pattern {raw:?} is not a valid glob ({err}), matching literally");
                        Pattern::new(&Pattern::escape(raw))
                    })
                    .ok()
            })
            .collect();

        Self { patterns }
    }

    /// Whether no patterns are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Check whether a path should be skipped.
    #[must_use]
    pub fn is_ignored(&self, path: &Path) -> bool {
        if self.patterns.is_empty() {
            return false;
        }

        let name = path
            .file_name()
            .map(std::ffi::OsStr::to_string_lossy)
            .unwrap_or_default();
        let full = path.to_string_lossy();

        self.patterns.iter().any(|pattern| {
            pattern.matches_with(&name, FNMATCH_OPTIONS)
                || pattern.matches_with(&full, FNMATCH_OPTIONS)
        })
    }
}

/// Replace every run of consecutive `*` with a single `*`.
fn collapse_stars(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    for ch in pattern.chars() {
        if ch == '*' && out.ends_with('*') {
            continue;
        }
        out.push(ch);
    }
    out
}

/// Sort entries in place by the given key.
///
/// All sorts are stable, so entries that compare equal keep their relative
/// (completion) order:
/// - `SizeAsc`: smallest first
/// - `SizeDesc`: largest first
/// - `Name`: bare name, case-insensitive
/// - `History`: newest modification time first
pub fn sort_entries(entries: &mut [Entry], key: SortKey) {
    match key {
        SortKey::SizeAsc => entries.sort_by_key(|e| e.size),
        SortKey::SizeDesc => entries.sort_by_key(|e| Reverse(e.size)),
        SortKey::Name => entries.sort_by_cached_key(|e| e.name().to_lowercase()),
        SortKey::History => entries.sort_by_key(|e| Reverse(e.modified)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Local};
    use std::path::PathBuf;

    fn create_test_entry(path: &str, size: u64, age_days: i64) -> Entry {
        Entry {
            path: PathBuf::from(path),
            size,
            modified: Local::now() - Duration::days(age_days),
            is_dir: false,
        }
    }

    fn names(entries: &[Entry]) -> Vec<String> {
        entries.iter().map(Entry::name).collect()
    }

    // ── Ignore pattern tests ────────────────────────────────────────────

    #[test]
    fn test_empty_ignore_set_matches_nothing() {
        let ignore = IgnoreSet::new::<&str>(&[]);

        assert!(ignore.is_empty());
        assert!(!ignore.is_ignored(Path::new("/data/anything")));
    }

    #[test]
    fn test_ignore_by_bare_name() {
        let ignore = IgnoreSet::new(&["*.log"]);

        assert!(ignore.is_ignored(Path::new("/data/temp.log")));
        assert!(!ignore.is_ignored(Path::new("/data/temp.txt")));
    }

    #[test]
    fn test_ignore_by_full_path() {
        let ignore = IgnoreSet::new(&["/data/cache*"]);

        assert!(ignore.is_ignored(Path::new("/data/cache")));
        assert!(ignore.is_ignored(Path::new("/data/cache-old")));
        assert!(!ignore.is_ignored(Path::new("/other/cache")));
    }

    #[test]
    fn test_star_crosses_separators_like_fnmatch() {
        let ignore = IgnoreSet::new(&["*/build"]);

        assert!(ignore.is_ignored(Path::new("/home/user/project/build")));
        assert!(!ignore.is_ignored(Path::new("/home/user/project/builder")));
    }

    #[test]
    fn test_double_star_behaves_like_single_star() {
        let ignore = IgnoreSet::new(&["**.log", "cache**"]);

        assert!(ignore.is_ignored(Path::new("/srv/app.log")));
        assert!(ignore.is_ignored(Path::new("/srv/cache-old")));
        assert!(!ignore.is_ignored(Path::new("/srv/app.txt")));
        assert!(!ignore.is_ignored(Path::new("/srv/old-cach")));
    }

    #[test]
    fn test_collapse_stars() {
        assert_eq!(collapse_stars("**.log"), "*.log");
        assert_eq!(collapse_stars("a***b*c"), "a*b*c");
        assert_eq!(collapse_stars("plain"), "plain");
    }

    #[test]
    fn test_ignore_is_case_sensitive() {
        let ignore = IgnoreSet::new(&["*.LOG"]);

        assert!(ignore.is_ignored(Path::new("/data/a.LOG")));
        assert!(!ignore.is_ignored(Path::new("/data/a.log")));
    }

    #[test]
    fn test_star_matches_leading_dot() {
        let ignore = IgnoreSet::new(&["*"]);
        assert!(ignore.is_ignored(Path::new("/data/.git")));

        let ignore = IgnoreSet::new(&[".*"]);
        assert!(ignore.is_ignored(Path::new("/data/.cache")));
        assert!(!ignore.is_ignored(Path::new("/data/cache")));
    }

    #[test]
    fn test_question_mark_and_character_classes() {
        let ignore = IgnoreSet::new(&["file?.txt", "[ab]*.bin", "[!x]y"]);

        assert!(ignore.is_ignored(Path::new("/d/file1.txt")));
        assert!(!ignore.is_ignored(Path::new("/d/file10.txt")));
        assert!(ignore.is_ignored(Path::new("/d/a-data.bin")));
        assert!(ignore.is_ignored(Path::new("/d/b.bin")));
        assert!(!ignore.is_ignored(Path::new("/d/c.bin")));
        assert!(ignore.is_ignored(Path::new("/d/zy")));
        assert!(!ignore.is_ignored(Path::new("/d/xy")));
    }

    #[test]
    fn test_exact_name_pattern() {
        let ignore = IgnoreSet::new(&["node_modules"]);

        assert!(ignore.is_ignored(Path::new("/project/node_modules")));
        assert!(!ignore.is_ignored(Path::new("/project/node_modules_backup")));
    }

    #[test]
    fn test_invalid_pattern_matches_literally() {
        let ignore = IgnoreSet::new(&["[oops"]);

        assert!(!ignore.is_empty());
        assert!(ignore.is_ignored(Path::new("/d/[oops")));
        assert!(!ignore.is_ignored(Path::new("/d/oops")));
    }

    #[test]
    fn test_any_pattern_suffices() {
        let ignore = IgnoreSet::new(&["*.tmp", "*.log"]);

        assert!(ignore.is_ignored(Path::new("/d/a.tmp")));
        assert!(ignore.is_ignored(Path::new("/d/a.log")));
        assert!(!ignore.is_ignored(Path::new("/d/a.txt")));
    }

    // ── Sorting tests ───────────────────────────────────────────────────

    #[test]
    fn test_sort_by_size_descending() {
        let mut entries = vec![
            create_test_entry("/r/small", 100, 0),
            create_test_entry("/r/large", 300, 0),
            create_test_entry("/r/medium", 200, 0),
        ];

        sort_entries(&mut entries, SortKey::SizeDesc);

        assert_eq!(names(&entries), vec!["large", "medium", "small"]);
    }

    #[test]
    fn test_sort_by_size_ascending() {
        let mut entries = vec![
            create_test_entry("/r/small", 100, 0),
            create_test_entry("/r/large", 300, 0),
            create_test_entry("/r/medium", 200, 0),
        ];

        sort_entries(&mut entries, SortKey::SizeAsc);

        assert_eq!(names(&entries), vec!["small", "medium", "large"]);
    }

    #[test]
    fn test_sort_by_size_is_stable() {
        let mut entries = vec![
            create_test_entry("/r/first", 10, 0),
            create_test_entry("/r/big", 99, 0),
            create_test_entry("/r/second", 10, 0),
            create_test_entry("/r/third", 10, 0),
        ];

        sort_entries(&mut entries, SortKey::SizeDesc);
        assert_eq!(names(&entries), vec!["big", "first", "second", "third"]);

        sort_entries(&mut entries, SortKey::SizeAsc);
        assert_eq!(names(&entries), vec!["first", "second", "third", "big"]);
    }

    #[test]
    fn test_sort_by_name_case_insensitive() {
        let mut entries = vec![
            create_test_entry("/r/banana", 1, 0),
            create_test_entry("/r/Apple", 2, 0),
            create_test_entry("/r/cherry", 3, 0),
            create_test_entry("/r/apricot", 4, 0),
        ];

        sort_entries(&mut entries, SortKey::Name);

        assert_eq!(names(&entries), vec!["Apple", "apricot", "banana", "cherry"]);
    }

    #[test]
    fn test_sort_by_name_ignores_parent_directory() {
        let mut entries = vec![
            create_test_entry("/a/zeta", 1, 0),
            create_test_entry("/z/alpha", 1, 0),
        ];

        sort_entries(&mut entries, SortKey::Name);

        assert_eq!(names(&entries), vec!["alpha", "zeta"]);
    }

    #[test]
    fn test_sort_by_history_newest_first() {
        let mut entries = vec![
            create_test_entry("/r/old", 1, 30),
            create_test_entry("/r/new", 1, 0),
            create_test_entry("/r/mid", 1, 7),
        ];

        sort_entries(&mut entries, SortKey::History);

        assert_eq!(names(&entries), vec!["new", "mid", "old"]);
    }

    #[test]
    fn test_sort_keeps_every_entry() {
        let mut entries: Vec<Entry> = (0..50)
            .map(|i| create_test_entry(&format!("/r/e{i}"), (i * 37) % 11, i as i64 % 5))
            .collect();
        let mut expected = names(&entries);
        expected.sort();

        for key in [
            SortKey::SizeAsc,
            SortKey::SizeDesc,
            SortKey::Name,
            SortKey::History,
        ] {
            sort_entries(&mut entries, key);
            let mut got = names(&entries);
            got.sort();
            assert_eq!(got, expected, "{key:?} lost or duplicated entries");
        }
    }

    #[test]
    fn test_sort_size_desc_is_non_increasing() {
        let mut entries: Vec<Entry> = (0..20)
            .map(|i| create_test_entry(&format!("/r/e{i}"), (i * 7919) % 101, 0))
            .collect();

        sort_entries(&mut entries, SortKey::SizeDesc);

        assert!(entries.windows(2).all(|w| w[0].size >= w[1].size));
    }

    #[test]
    fn test_sort_empty_slice() {
        let mut entries: Vec<Entry> = Vec::new();
        sort_entries(&mut entries, SortKey::Name);
        assert!(entries.is_empty());
    }
}
