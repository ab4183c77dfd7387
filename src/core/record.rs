//! Display records for listing rows.
//!
//! [Inspector::inspect] turns one path, or the parent sentinel `<-`, into a [DisplayRecord]
//! with every column already fitted to its budget. A real entry costs exactly one stat call;
//! the parent row costs none.
//!
//! [Inspector::list_directory] builds the whole listing of a directory: the parent row followed
//! by one record per visible child.

use crate::core::error::InspectError;
use crate::core::fm::browse_dir;
use crate::core::formatter::{
    Formatter, display_file_name, file_type_tag, format_file_time, truncate_name, truncate_type,
};
use crate::core::units::{SizeLabel, UnitConverter};

use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

/// Reserved row token meaning "navigate to the parent directory".
pub const PARENT_SENTINEL: &str = "<-";
/// Type tag of the parent row.
pub const PARENT_TAG: &str = "PARENT";
/// Type tag of directories.
pub const DIR_TAG: &str = "DIR";
/// Size column of directories. Recursive sizes are never computed.
pub const DIR_SIZE_PLACEHOLDER: &str = "-";

/// The shape of one row. Each variant only carries the columns it can have.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayEntry {
    Parent,
    Directory {
        name: String,
        date: String,
    },
    File {
        name: String,
        file_type: String,
        size: SizeLabel,
        date: String,
    },
}

/// One render-ready row of a listing.
///
/// Built fresh on every refresh and never mutated afterwards. `context` is whatever handle the
/// caller passed in to tell its views apart; it is threaded through untouched.
#[derive(Debug, Clone)]
pub struct DisplayRecord<C> {
    context: C,
    raw_path: PathBuf,
    entry: DisplayEntry,
    sort_weight: u32,
}

impl<C> DisplayRecord<C> {
    /// The parent navigation row. No filesystem access.
    pub fn parent(context: C) -> Self {
        Self {
            context,
            raw_path: PathBuf::from(PARENT_SENTINEL),
            entry: DisplayEntry::Parent,
            sort_weight: 0,
        }
    }

    /// Replaces the sort weight. Owned by the UI; records start at 0.
    pub fn with_sort_weight(mut self, weight: u32) -> Self {
        self.sort_weight = weight;
        self
    }

    // Accessors

    #[inline]
    pub fn context(&self) -> &C {
        &self.context
    }

    #[inline]
    pub fn raw_path(&self) -> &Path {
        &self.raw_path
    }

    #[inline]
    pub fn entry(&self) -> &DisplayEntry {
        &self.entry
    }

    #[inline]
    pub fn sort_weight(&self) -> u32 {
        self.sort_weight
    }

    #[inline]
    pub fn is_parent(&self) -> bool {
        matches!(self.entry, DisplayEntry::Parent)
    }

    #[inline]
    pub fn is_dir(&self) -> bool {
        matches!(self.entry, DisplayEntry::Directory { .. })
    }

    /// Untruncated base name, used for ordering.
    pub fn file_name(&self) -> String {
        display_file_name(&self.raw_path)
    }

    pub fn display_name(&self) -> &str {
        match &self.entry {
            DisplayEntry::Parent => PARENT_SENTINEL,
            DisplayEntry::Directory { name, .. } | DisplayEntry::File { name, .. } => name,
        }
    }

    pub fn display_type(&self) -> &str {
        match &self.entry {
            DisplayEntry::Parent => PARENT_TAG,
            DisplayEntry::Directory { .. } => DIR_TAG,
            DisplayEntry::File { file_type, .. } => file_type,
        }
    }

    pub fn display_size(&self) -> Cow<'_, str> {
        match &self.entry {
            DisplayEntry::Parent => Cow::Borrowed(""),
            DisplayEntry::Directory { .. } => Cow::Borrowed(DIR_SIZE_PLACEHOLDER),
            DisplayEntry::File { size, .. } => Cow::Owned(size.to_string()),
        }
    }

    pub fn display_date(&self) -> &str {
        match &self.entry {
            DisplayEntry::Parent => "",
            DisplayEntry::Directory { date, .. } | DisplayEntry::File { date, .. } => date,
        }
    }
}

/// Result of listing one directory.
///
/// Children that vanished or could not be stat'ed between reading the directory and inspecting
/// them are reported in `failures`; the caller decides how to show them.
#[derive(Debug)]
pub struct Listing<C> {
    records: Vec<DisplayRecord<C>>,
    failures: Vec<InspectError>,
}

impl<C> Listing<C> {
    #[inline]
    pub fn records(&self) -> &[DisplayRecord<C>] {
        &self.records
    }

    #[inline]
    pub fn failures(&self) -> &[InspectError] {
        &self.failures
    }

    pub fn into_parts(self) -> (Vec<DisplayRecord<C>>, Vec<InspectError>) {
        (self.records, self.failures)
    }
}

/// Returns true if `target` is the parent sentinel rather than a path.
pub fn is_parent_sentinel(target: &Path) -> bool {
    target.as_os_str() == PARENT_SENTINEL
}

/// Where activating `raw_path` from a listing of `current_dir` leads.
///
/// The sentinel resolves to the parent of `current_dir`, or `None` at the filesystem root.
pub fn resolve_target(current_dir: &Path, raw_path: &Path) -> Option<PathBuf> {
    if is_parent_sentinel(raw_path) {
        current_dir.parent().map(Path::to_path_buf)
    } else {
        Some(raw_path.to_path_buf())
    }
}

/// Builds display records from stat results.
#[derive(Debug, Clone, Default)]
pub struct Inspector {
    converter: UnitConverter,
}

impl Inspector {
    pub fn new(converter: UnitConverter) -> Self {
        Self { converter }
    }

    #[inline]
    pub fn converter(&self) -> &UnitConverter {
        &self.converter
    }

    /// Inspects a single path, or the parent sentinel.
    ///
    /// # Errors
    /// [InspectError::NotFound] and [InspectError::PermissionDenied] when the stat call fails,
    /// [InspectError::SizeOutOfRange] when a file size exhausts the unit list.
    pub fn inspect<C, P>(&self, context: C, target: P) -> Result<DisplayRecord<C>, InspectError>
    where
        P: AsRef<Path>,
    {
        let path = target.as_ref();
        if is_parent_sentinel(path) {
            return Ok(DisplayRecord::parent(context));
        }

        let meta = fs::metadata(path).map_err(|e| InspectError::from_io(path, e))?;
        let modified = meta
            .modified()
            .map_err(|e| InspectError::from_io(path, e))?;

        let name = truncate_name(&display_file_name(path));
        let date = format_file_time(modified);

        let entry = if meta.is_dir() {
            DisplayEntry::Directory { name, date }
        } else {
            DisplayEntry::File {
                name,
                file_type: truncate_type(&file_type_tag(path)),
                size: self.converter.convert(meta.len())?,
                date,
            }
        };

        Ok(DisplayRecord {
            context,
            raw_path: path.to_path_buf(),
            entry,
            sort_weight: 0,
        })
    }

    /// Lists `dir`: the parent row (if enabled) followed by every visible child, ordered by
    /// `formatter`.
    ///
    /// # Errors
    /// Only when `dir` itself cannot be read. Per-child failures land in [Listing::failures].
    pub fn list_directory<C: Clone>(
        &self,
        context: C,
        dir: &Path,
        formatter: &Formatter,
    ) -> Result<Listing<C>, InspectError> {
        let mut entries = browse_dir(dir).map_err(|e| InspectError::from_io(dir, e))?;
        formatter.filter_entries(&mut entries);

        let mut records = Vec::with_capacity(entries.len() + 1);
        let mut failures = Vec::new();

        if formatter.show_parent() {
            records.push(DisplayRecord::parent(context.clone()));
        }

        for entry in &entries {
            match self.inspect(context.clone(), entry.path_in(dir)) {
                Ok(record) => records.push(record),
                Err(e) => {
                    log::warn!("skipping entry: {}", e);
                    failures.push(e);
                }
            }
        }

        formatter.sort_records(&mut records);
        log::debug!(
            "listed {}: {} records, {} failures",
            dir.display(),
            records.len(),
            failures.len()
        );
        Ok(Listing { records, failures })
    }
}
