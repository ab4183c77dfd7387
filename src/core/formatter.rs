//! Sorting, filtering, and display formatting for listing rows.
//!
//! The [Formatter] struct holds the rules for filtering directory children and ordering the
//! inspected records, based on user preferences from the rex.toml configuration.
//!
//! Also holds the character budgets for names and type tags, date formatting and the header
//! path shortener.

use crate::core::{DisplayRecord, FileEntry};

use chrono::{DateTime, Local};
use unicode_width::UnicodeWidthChar;

use std::cmp::Ordering;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Visible characters allowed for an entry name, marker included.
pub const NAME_BUDGET: usize = 25;
const NAME_MARKER: &str = "...";

/// Longest type tag shown uncut. Longer tags keep six characters plus `..`.
pub const TYPE_BUDGET: usize = 7;
const TYPE_KEEP: usize = 6;
const TYPE_MARKER: &str = "..";

/// Prefix of a header path that had leading components dropped.
pub const PATH_MARKER: &str = "<< ";

const DATE_FORMAT: &str = "%d-%m-%Y";

/// Formatter struct to handle filtering and ordering of a listing.
#[derive(Debug, Clone)]
pub struct Formatter {
    dirs_first: bool,
    show_hidden: bool,
    case_insensitive: bool,
    show_parent: bool,
}

impl Formatter {
    pub fn new(
        dirs_first: bool,
        show_hidden: bool,
        case_insensitive: bool,
        show_parent: bool,
    ) -> Self {
        Self {
            dirs_first,
            show_hidden,
            case_insensitive,
            show_parent,
        }
    }

    /// Whether listings start with the parent navigation row.
    #[inline]
    pub fn show_parent(&self) -> bool {
        self.show_parent
    }

    /// Drops children the listing should not show, before any metadata is queried.
    pub fn filter_entries(&self, entries: &mut Vec<FileEntry>) {
        entries.retain(|e| self.show_hidden || !e.is_hidden());
    }

    /// Sorts records in place. The parent row always stays on top.
    pub fn sort_records<C>(&self, records: &mut [DisplayRecord<C>]) {
        records.sort_by(|a, b| {
            match (a.is_parent(), b.is_parent()) {
                (true, false) => return Ordering::Less,
                (false, true) => return Ordering::Greater,
                _ => {}
            }
            if self.dirs_first {
                match (a.is_dir(), b.is_dir()) {
                    (true, false) => return Ordering::Less,
                    (false, true) => return Ordering::Greater,
                    _ => {}
                }
            }
            let (an, bn) = (a.file_name(), b.file_name());
            if self.case_insensitive {
                an.to_lowercase().cmp(&bn.to_lowercase())
            } else {
                an.cmp(&bn)
            }
        });
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new(true, true, true, true)
    }
}

/// Truncates to `keep` characters plus `marker` when `s` is longer than `budget` characters.
fn truncate_with_marker(s: &str, budget: usize, keep: usize, marker: &str) -> String {
    if s.chars().count() > budget {
        let mut out: String = s.chars().take(keep).collect();
        out.push_str(marker);
        out
    } else {
        s.to_string()
    }
}

/// Fits an entry name into [NAME_BUDGET], ending in `...` when cut.
pub fn truncate_name(name: &str) -> String {
    truncate_with_marker(
        name,
        NAME_BUDGET,
        NAME_BUDGET - NAME_MARKER.len(),
        NAME_MARKER,
    )
}

/// Cuts a type tag longer than [TYPE_BUDGET] to six characters and `..`.
pub fn truncate_type(tag: &str) -> String {
    truncate_with_marker(tag, TYPE_BUDGET, TYPE_KEEP, TYPE_MARKER)
}

/// Base name of `path`, or the whole path when it has none (`/`, `..`).
pub fn display_file_name(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => path.to_string_lossy().into_owned(),
    }
}

/// Type tag of a non-directory entry, before budgeting.
///
/// Dotfiles and extensionless files use their own name; everything else uses the final
/// extension upper-cased (`archive.tar.gz` is `GZ`).
pub fn file_type_tag(path: &Path) -> String {
    let name = display_file_name(path);
    if name.starts_with('.') {
        return name;
    }
    match path.extension() {
        Some(ext) if !ext.is_empty() => ext.to_string_lossy().to_uppercase(),
        _ => name,
    }
}

/// Formats a modification time as `DD-MM-YYYY` in local time.
pub fn format_file_time(modified: SystemTime) -> String {
    let dt: DateTime<Local> = DateTime::from(modified);
    dt.format(DATE_FORMAT).to_string()
}

/// Shortens a header path to `max_len` characters by dropping leading components.
///
/// Returns the first suffix that fits, prefixed with [PATH_MARKER]. When not even the last
/// component fits, the original path is returned and allowed to overflow.
pub fn shorten_path(path: &Path, max_len: usize) -> String {
    let full = path.to_string_lossy();
    if full.chars().count() <= max_len {
        return full.into_owned();
    }

    let parts: Vec<_> = path.components().collect();
    for idx in 0..parts.len() {
        let suffix: PathBuf = parts[idx..].iter().collect();
        let suffix = suffix.to_string_lossy();
        if suffix.chars().count() <= max_len {
            return format!("{}{}", PATH_MARKER, suffix);
        }
    }
    full.into_owned()
}

/// Truncates or pads `line` with spaces to exactly `width` terminal columns.
/// Control characters are dropped.
pub fn fit_to_width(line: &str, width: usize) -> String {
    let mut out = String::with_capacity(width);
    let mut used = 0;

    for ch in line.chars().filter(|c| !c.is_control()) {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(ch);
        used += w;
    }

    if used < width {
        out.push_str(&" ".repeat(width - used));
    }
    out
}
