//! Directory browsing for rex.
//!
//! Provides the [FileEntry] struct: the name and hidden flag of one child of a listed directory,
//! read from the directory stream itself. Full metadata is only queried later, once per entry,
//! by the [crate::core::Inspector].

use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A single child of a directory listing, as reported by `read_dir`.
#[derive(Debug, Clone)]
pub struct FileEntry {
    name: Box<OsStr>,
    flags: u8,
}

impl FileEntry {
    // Flag bit definitions
    pub(super) const IS_HIDDEN: u8 = 1 << 0;

    pub(crate) fn new(name: OsString, flags: u8) -> Self {
        FileEntry {
            name: name.into_boxed_os_str(),
            flags,
        }
    }

    // Accessors

    #[inline]
    pub fn name(&self) -> &OsStr {
        &self.name
    }

    #[inline]
    pub fn name_str(&self) -> Cow<'_, str> {
        self.name.to_string_lossy()
    }

    #[inline]
    pub fn is_hidden(&self) -> bool {
        self.flags & Self::IS_HIDDEN != 0
    }

    /// Full path of this entry inside `dir`.
    pub fn path_in(&self, dir: &Path) -> PathBuf {
        dir.join(&*self.name)
    }
}

/// Reads the contents of the provided directory and returns them in a vector of [FileEntry].
///
/// Entries that fail to read mid-stream are skipped; failing to open the directory is an error.
pub fn browse_dir(path: &Path) -> io::Result<Vec<FileEntry>> {
    let mut entries = Vec::with_capacity(64);

    for entry in fs::read_dir(path)? {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                log::debug!("skipping unreadable entry in {}: {}", path.display(), e);
                continue;
            }
        };

        let name = entry.file_name();
        let mut flags = 0u8;
        if name.to_string_lossy().starts_with('.') {
            flags |= FileEntry::IS_HIDDEN;
        }

        entries.push(FileEntry::new(name, flags));
    }
    Ok(entries)
}
