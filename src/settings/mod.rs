//! Generation settings: the validated per-session config and the user's
//! persisted defaults.

mod config;
mod file;

use std::path::Path;

use serde::Deserialize;

pub use config::{GenerationConfig, GenerationConfigBuilder};

use crate::error::Result;

pub const DEFAULT_LENGTH: usize = 8;
pub const DEFAULT_COUNT: usize = 160;

/// Output layout named in the settings file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutKind {
    Columns,
    Lines,
    SingleLine,
}

/// User defaults, read from the settings file.
///
/// Every key is optional; absent keys fall back to the built-in defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub length: usize,
    pub count: usize,
    pub no_numerals: bool,
    pub no_capitalize: bool,
    pub ambiguous: bool,
    pub symbols: bool,
    pub numerals: bool,
    pub no_vowels: bool,
    pub secure: bool,
    pub remove_chars: String,
    pub layout: LayoutKind,
    pub width: Option<usize>,
}

impl Settings {
    /// Load from `$PWGEN_CONFIG` or the per-user config directory.
    pub fn load_from_file() -> Result<Self> {
        match file::path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Settings::default()),
        }
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        file::load(path)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            count: DEFAULT_COUNT,
            no_numerals: false,
            no_capitalize: false,
            ambiguous: false,
            symbols: false,
            numerals: true,
            no_vowels: false,
            secure: false,
            remove_chars: String::new(),
            layout: LayoutKind::Columns,
            width: None,
        }
    }
}
