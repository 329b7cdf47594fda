//! Configuration file parsing

use anyhow::{Context, Result};
use lc_header::{Banner, Language};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "lisaconstants.toml";

/// Header generation settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Output file stem, extension added per language
    pub stem: String,

    /// Output directory
    pub out_dir: PathBuf,

    /// Languages to generate, in order
    pub languages: Vec<Language>,

    /// Banner written at the top of every header
    pub banner: Banner,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            stem: lisa_constants::HEADER_STEM.to_string(),
            out_dir: PathBuf::from("."),
            languages: Language::ALL.to_vec(),
            banner: Banner::default(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&contents).with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Load `path` if given, else [`DEFAULT_CONFIG_FILE`] from `dir` if present, else defaults
    pub fn load(path: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = path {
            return Self::from_file(path);
        }

        let default_path = dir.join(DEFAULT_CONFIG_FILE);
        if default_path.is_file() {
            log::debug!("using config file {}", default_path.display());
            Self::from_file(&default_path)
        } else {
            Ok(Self::default())
        }
    }
}
