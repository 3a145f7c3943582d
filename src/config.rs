use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

static DEFAULT_CONFIG: &str = include_str!("default_config.toml");

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub limits: LimitsConfig,
    pub page: PageConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Deepest list nesting accepted before conversion fails.
    pub max_list_depth: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self { max_list_depth: 32 }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Prefix that replaces the leading `/` of root-relative links.
    pub base_path: String,
    pub template: Option<PathBuf>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            base_path: "/".to_string(),
            template: None,
        }
    }
}

impl Config {
    /// The configuration bundled with the crate. `build.rs` checks that it
    /// parses as TOML.
    pub fn compiled_default() -> Self {
        toml::from_str(DEFAULT_CONFIG).unwrap_or_default()
    }

    /// Load config from a TOML file, or return the bundled defaults if the
    /// file does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(|source| Error::Config {
                path: path.to_path_buf(),
                source,
            }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::compiled_default()),
            Err(source) => Err(Error::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}
