//! Configuration for rex.
//!
//! - [load]: the [Config] struct, file discovery and `--init` generation.
//! - [general]: listing rules (`[general]` table).
//! - [display]: size units and header width (`[display]` table).

pub mod display;
pub mod general;
pub mod load;

pub use display::{Display, InternalDisplay};
pub use general::General;
pub use load::{Config, RawConfig};
