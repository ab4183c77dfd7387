//! Library crate for rex.
//!
//! The core a terminal file browser calls into: given a directory entry it produces a
//! display-ready row (name, type, size, modification date), scales byte sizes into units,
//! shortens header paths and runs directory scans off the interface thread.
//!
//! The `rex` binary (`src/main.rs`) prints one listing with it.

pub mod config;
pub mod core;
pub mod utils;
