//! The main config loading module for rex.
//!
//! Handles loading and deserializing settings from `rex.toml`.
//!
//! Provides the main [Config] struct, as well as the internal [RawConfig] used for parsing.
//! The config is loaded once at startup and is immutable afterwards; components receive the
//! pieces they need from it.

use crate::config::{Display, General, InternalDisplay};
use crate::core::{Formatter, Inspector, shorten_path};
use crate::utils::{get_home, shorten_home_path};

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::{fs, io};

/// Raw configuration as read from the toml file.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct RawConfig {
    general: General,
    display: Display,
}

/// Main configuration struct for rex.
#[derive(Debug, Clone)]
pub struct Config {
    general: General,
    display: InternalDisplay,
}

/// Conversion from RawConfig to Config, validating display values on the way.
impl From<RawConfig> for Config {
    fn from(raw: RawConfig) -> Self {
        Self {
            general: raw.general,
            display: InternalDisplay::from(raw.display),
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    /// If the file does not exist or fails to parse, returns the default configuration.
    pub fn load() -> Self {
        let path = Self::default_path();

        if !path.exists() {
            log::info!(
                "no rex.toml found at {}, using internal defaults (tip: run 'rex --init')",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::warn!("error loading config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load configuration from an explicit path.
    pub fn load_from(path: &Path) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse configuration from toml text.
    pub fn parse(content: &str) -> io::Result<Self> {
        toml::from_str::<RawConfig>(content)
            .map(Config::from)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    // Getters

    #[inline]
    pub fn general(&self) -> &General {
        &self.general
    }

    #[inline]
    pub fn display(&self) -> &InternalDisplay {
        &self.display
    }

    /// Inspector using the configured size scale.
    pub fn inspector(&self) -> Inspector {
        Inspector::new(self.display.converter().clone())
    }

    /// Listing rules from the `[general]` table.
    pub fn formatter(&self) -> Formatter {
        self.general.formatter()
    }

    /// Header text for the directory `dir`, fitted to the configured width.
    pub fn header_path(&self, dir: &Path) -> String {
        let max = self.display.max_path_length();
        if self.display.tilde_home() {
            shorten_path(Path::new(&shorten_home_path(dir)), max)
        } else {
            shorten_path(dir, max)
        }
    }

    /// Determine the default configuration file path.
    /// Checks the REX_CONFIG environment variable first,
    /// Checks for XDG_CONFIG_HOME after,
    /// then defaults to ~/.config/rex/rex.toml,
    pub fn default_path() -> PathBuf {
        if let Ok(path) = std::env::var("REX_CONFIG") {
            return PathBuf::from(path);
        }

        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg_config).join("rex/rex.toml");
        }

        if let Some(home) = get_home() {
            return home.join(".config/rex/rex.toml");
        }
        PathBuf::from("rex.toml")
    }

    /// Generate a default configuration file at the specified path.
    /// If the file already exists, returns an error.
    pub fn generate_default(path: &Path) -> io::Result<()> {
        if path.exists() {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("Config file already exists at {:?}", path),
            ));
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, DEFAULT_TOML)
    }
}

impl Default for Config {
    fn default() -> Self {
        RawConfig::default().into()
    }
}

const DEFAULT_TOML: &str = r##"# rex.toml - default configuration for rex
#
# Commented values are the internal defaults.

[general]
# dirs_first = true
# show_hidden = true
# case_insensitive = true
# Start every listing with the "<-" row
# show_parent = true

[display]
# Threshold for moving to the next size unit
# base_size = 1024
# units = ["B", "KB", "MB", "GB", "TB", "PB", "EB"]
# Width budget of the directory header
# max_path_length = 40
# Show the home directory as "~" in the header
# tilde_home = true
"##;
