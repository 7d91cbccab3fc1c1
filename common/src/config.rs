//! # Runtime Configuration
//!
//! Settings are read from an optional TOML file and then overridden by
//! command line flags. Every field has a default, so an empty file (or no
//! file at all) is a valid configuration.
//!
//! ```toml
//! no_banner = true
//! quiet = 1
//! view_mode = "list"
//! document_url = "https://example.org/ayush.pdf"
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::ConfigError;
use crate::models::view::ViewMode;

/// Reference document opened by the "About AYUSH" action.
pub const DEFAULT_DOCUMENT_URL: &str =
    "https://pub-cd74c6e7d0ba4183b0c2616e506282f2.r2.dev/doc.pdf";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Skips the banner printed before each view.
    pub no_banner: bool,
    /// 0 prints everything, 1 drops headers and decoration, 2 prints bare results.
    pub quiet: u8,
    /// Initial gallery layout.
    pub view_mode: ViewMode,
    pub document_url: String,
    /// Fixed number of grid columns. Detected from the terminal when unset.
    pub columns: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            no_banner: false,
            quiet: 0,
            view_mode: ViewMode::Grid,
            document_url: DEFAULT_DOCUMENT_URL.to_string(),
            columns: None,
        }
    }
}

impl Config {
    /// Loads the file at `path`, or the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        debug!(path = %path.display(), "loading config");
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&raw)
    }

    pub fn from_toml(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }
}
