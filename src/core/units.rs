//! Byte size to human unit conversion for listing rows.
//!
//! Sizes are scaled by repeated floor division: the remainder of every division is dropped, so
//! `1535` bytes and `1024` bytes both read `1 KB`. The display is intentionally low fidelity.

use crate::core::error::InspectError;

use std::fmt;

/// Default threshold at which a value moves to the next unit.
pub const DEFAULT_BASE_SIZE: u64 = 1024;

/// Default ordered unit list. Seven steps of 1024 cover every `u64`.
pub const DEFAULT_UNITS: [&str; 7] = ["B", "KB", "MB", "GB", "TB", "PB", "EB"];

/// A scaled size ready for display, e.g. `"12 MB"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeLabel {
    value: u64,
    unit: String,
}

impl SizeLabel {
    #[inline]
    pub fn value(&self) -> u64 {
        self.value
    }

    #[inline]
    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// The `(value, unit)` string pair.
    pub fn parts(&self) -> (String, String) {
        (self.value.to_string(), self.unit.clone())
    }
}

impl fmt::Display for SizeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

/// Converts byte counts into the largest whole unit.
///
/// Built once from the display configuration and shared by every inspection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitConverter {
    base: u64,
    units: Vec<String>,
}

impl UnitConverter {
    /// Creates a converter. Bases below 2 are raised to 2; configuration validates both values
    /// up front, see [crate::config::InternalDisplay].
    pub fn new(base: u64, units: Vec<String>) -> Self {
        debug_assert!(!units.is_empty(), "unit list must not be empty");
        Self {
            base: base.max(2),
            units,
        }
    }

    #[inline]
    pub fn base(&self) -> u64 {
        self.base
    }

    #[inline]
    pub fn units(&self) -> &[String] {
        &self.units
    }

    /// Converts `size` bytes starting from the smallest unit.
    pub fn convert(&self, size: u64) -> Result<SizeLabel, InspectError> {
        self.scale(size, 0)
    }

    /// Converts `size` expressed in `unit`, moving up the unit list while `size >= base`.
    pub fn convert_from(&self, size: u64, unit: &str) -> Result<SizeLabel, InspectError> {
        let start = self
            .units
            .iter()
            .position(|u| u == unit)
            .ok_or_else(|| InspectError::UnknownUnit(unit.to_string()))?;
        self.scale(size, start)
    }

    fn scale(&self, size: u64, start: usize) -> Result<SizeLabel, InspectError> {
        let mut value = size;
        let mut idx = start;

        while value >= self.base {
            if idx + 1 >= self.units.len() {
                return Err(InspectError::SizeOutOfRange {
                    size,
                    largest: self.units.last().cloned().unwrap_or_default(),
                });
            }
            value /= self.base;
            idx += 1;
        }

        let unit = self
            .units
            .get(idx)
            .cloned()
            .ok_or_else(|| InspectError::SizeOutOfRange {
                size,
                largest: String::new(),
            })?;
        Ok(SizeLabel { value, unit })
    }
}

impl Default for UnitConverter {
    fn default() -> Self {
        Self::new(
            DEFAULT_BASE_SIZE,
            DEFAULT_UNITS.iter().map(|u| u.to_string()).collect(),
        )
    }
}
