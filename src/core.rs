//! Core logic for rex.
//!
//! This module contains the non-UI “engine” pieces a browser front end calls into:
//! - [fm]: reading the children of a directory (see [browse_dir], [FileEntry]).
//! - [record]: turning a path or the `<-` sentinel into a [DisplayRecord] (see [Inspector]).
//! - [units]: scaling byte counts into human units (see [UnitConverter]).
//! - [formatter]: name/type budgets, dates, header path shortening and listing order.
//! - [worker]: background execution and message passing back to the caller's thread.
//! - [error]: the [InspectError] and [TaskError] types.

pub mod error;
pub mod fm;
pub mod formatter;
pub mod record;
pub mod units;
pub mod worker;

pub use error::{InspectError, TaskError};
pub use fm::{FileEntry, browse_dir};
pub use formatter::{
    Formatter, NAME_BUDGET, PATH_MARKER, TYPE_BUDGET, file_type_tag, fit_to_width,
    format_file_time, shorten_path, truncate_name, truncate_type,
};
pub use record::{
    DisplayEntry, DisplayRecord, Inspector, Listing, PARENT_SENTINEL, is_parent_sentinel,
    resolve_target,
};
pub use units::{SizeLabel, UnitConverter};
pub use worker::{TaskHandle, WorkerResponse, WorkerTask, Workers, run_async};
