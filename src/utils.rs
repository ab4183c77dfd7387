//! Miscellaneous utility functions for rex.
//!
//! - [cli]: command line argument handling for the `rex` binary.
//! - [helpers]: home directory lookup, `~` shortening and expansion, initial directory resolution.

pub mod cli;
pub mod helpers;

pub use helpers::{expand_home_path, get_home, resolve_initial_dir, shorten_home_path};
