//! Display configuration options for rex
//!
//! Defines the `[display]` table of rex.toml ([Display]) and its validated form
//! ([InternalDisplay]): the size unit scale and the header width budget.

use crate::core::UnitConverter;
use crate::core::units::{DEFAULT_BASE_SIZE, DEFAULT_UNITS};

use serde::Deserialize;

/// Default width budget of the directory header.
pub const DEFAULT_MAX_PATH_LENGTH: usize = 40;

/// Display options as written in the configuration file.
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Display {
    base_size: u64,
    units: Vec<String>,
    max_path_length: usize,
    tilde_home: bool,
}

impl Default for Display {
    fn default() -> Self {
        Display {
            base_size: DEFAULT_BASE_SIZE,
            units: DEFAULT_UNITS.iter().map(|u| u.to_string()).collect(),
            max_path_length: DEFAULT_MAX_PATH_LENGTH,
            tilde_home: true,
        }
    }
}

/// Validated display options.
///
/// Out of range values from the file are replaced with the internal defaults and a warning.
#[derive(Debug, Clone)]
pub struct InternalDisplay {
    converter: UnitConverter,
    max_path_length: usize,
    tilde_home: bool,
}

impl From<Display> for InternalDisplay {
    fn from(d: Display) -> Self {
        let base = if d.base_size < 2 {
            log::warn!(
                "base_size={} is below 2, using {}",
                d.base_size,
                DEFAULT_BASE_SIZE
            );
            DEFAULT_BASE_SIZE
        } else {
            d.base_size
        };

        let units = if d.units.is_empty() {
            log::warn!("units is empty, using {:?}", DEFAULT_UNITS);
            DEFAULT_UNITS.iter().map(|u| u.to_string()).collect()
        } else {
            d.units
        };

        let max_path_length = if d.max_path_length == 0 {
            log::warn!(
                "max_path_length=0 is invalid, using {}",
                DEFAULT_MAX_PATH_LENGTH
            );
            DEFAULT_MAX_PATH_LENGTH
        } else {
            d.max_path_length
        };

        Self {
            converter: UnitConverter::new(base, units),
            max_path_length,
            tilde_home: d.tilde_home,
        }
    }
}

impl InternalDisplay {
    #[inline]
    pub fn converter(&self) -> &UnitConverter {
        &self.converter
    }

    #[inline]
    pub fn max_path_length(&self) -> usize {
        self.max_path_length
    }

    #[inline]
    pub fn tilde_home(&self) -> bool {
        self.tilde_home
    }
}

impl Default for InternalDisplay {
    fn default() -> Self {
        Display::default().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_values_fall_back_to_defaults() {
        let raw = Display {
            base_size: 1,
            units: Vec::new(),
            max_path_length: 0,
            tilde_home: false,
        };
        let d = InternalDisplay::from(raw);
        assert_eq!(d.converter(), &UnitConverter::default());
        assert_eq!(d.max_path_length(), DEFAULT_MAX_PATH_LENGTH);
        assert!(!d.tilde_home());
    }

    #[test]
    fn custom_scale_is_kept() {
        let raw = Display {
            base_size: 1000,
            units: vec!["B".into(), "kB".into(), "MB".into()],
            ..Display::default()
        };
        let d = InternalDisplay::from(raw);
        assert_eq!(d.converter().base(), 1000);
        assert_eq!(d.converter().units().len(), 3);
    }
}
