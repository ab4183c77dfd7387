//! The general configuration settings for rex.
//!
//! This module defines the [General] struct for deserializing the `[general]` table of rex.toml:
//! which children a listing shows and in what order.

use crate::core::Formatter;

use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct General {
    dirs_first: bool,
    show_hidden: bool,
    case_insensitive: bool,
    show_parent: bool,
}

impl Default for General {
    fn default() -> Self {
        General {
            dirs_first: true,
            show_hidden: true,
            case_insensitive: true,
            show_parent: true,
        }
    }
}

impl General {
    #[inline]
    pub fn dirs_first(&self) -> bool {
        self.dirs_first
    }

    #[inline]
    pub fn show_hidden(&self) -> bool {
        self.show_hidden
    }

    #[inline]
    pub fn case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    #[inline]
    pub fn show_parent(&self) -> bool {
        self.show_parent
    }

    /// Listing rules built from these settings.
    pub fn formatter(&self) -> Formatter {
        Formatter::new(
            self.dirs_first,
            self.show_hidden,
            self.case_insensitive,
            self.show_parent,
        )
    }
}
