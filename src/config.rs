use clap::ValueEnum;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::warn;

use crate::error::{Error, Result};

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub html: HtmlConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct HtmlConfig {
    /// Wrap the rendered blocks in a single container element.
    pub wrap: bool,
    pub wrapper_class: String,
    /// Prepended to every element class, e.g. `md-` gives `md-paragraph`.
    pub class_prefix: String,
}

impl Default for HtmlConfig {
    fn default() -> Self {
        Self {
            wrap: true,
            wrapper_class: "markdown-renderer".to_string(),
            class_prefix: "md-".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct OutputConfig {
    pub format: Format,
}

#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Html,
    Text,
    Json,
}

impl Config {
    /// The configuration bundled with the crate.
    pub fn compiled_default() -> Self {
        // Checked by build.rs
        toml::from_str(DEFAULT_CONFIG).unwrap_or_default()
    }

    /// Load config from a TOML file, or return defaults if not found or invalid.
    pub fn load(path: &Path) -> Self {
        match Self::from_path(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(error = %e, "using default config");
                Self::compiled_default()
            }
        }
    }

    /// Load config from a TOML file, failing on unreadable or malformed input.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}
