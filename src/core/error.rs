//! Error types for entry inspection and size conversion.
//!
//! Filesystem failures are classified from the [io::ErrorKind] of the single stat call made per
//! entry, so callers can tell a vanished entry apart from a denied one and decide whether to skip
//! the row or abort the listing.
//!
//! [TaskError] covers work dispatched to a background thread.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised while inspecting an entry or converting its size.
#[derive(Error, Debug)]
pub enum InspectError {
    /// The entry vanished between listing and inspection.
    #[error("Path not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Permission denied: {}", path.display())]
    PermissionDenied { path: PathBuf },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The unit list ran out before the value dropped below the base size.
    #[error("Size {size} is out of range (largest unit is {largest})")]
    SizeOutOfRange { size: u64, largest: String },

    #[error("Unknown size unit: {0}")]
    UnknownUnit(String),
}

impl InspectError {
    /// Classifies an I/O error raised for `path`.
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => InspectError::NotFound {
                path: path.to_path_buf(),
            },
            io::ErrorKind::PermissionDenied => InspectError::PermissionDenied {
                path: path.to_path_buf(),
            },
            _ => InspectError::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }

    /// Path the error refers to, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            InspectError::NotFound { path }
            | InspectError::PermissionDenied { path }
            | InspectError::Io { path, .. } => Some(path),
            InspectError::SizeOutOfRange { .. } | InspectError::UnknownUnit(_) => None,
        }
    }
}

/// Errors surfaced through a [crate::core::TaskHandle].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaskError {
    #[error("Background task panicked: {0}")]
    Panicked(String),

    #[error("Could not start background task: {0}")]
    Spawn(String),

    /// The worker went away without reporting a result.
    #[error("Background task ended without a result")]
    Lost,
}
