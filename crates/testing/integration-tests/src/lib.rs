//! Integration test utilities for the header generator

use anyhow::{Context, Result};
use lc_registry::Registry;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Registry with an integer, a literal and an alias
///
/// # Errors
///
/// Returns an error if a definition fails
pub fn sample_registry() -> Result<Registry> {
    let mut registry = Registry::new();
    registry.define(
        "LIFE_UNIVERSE",
        42,
        None,
        "Answer to life, the Universe and everything",
        None,
        None::<&str>,
    )?;
    registry.define("TEAPOT", "418", None, "I am a teapot", None, None::<&str>)?;
    registry.alias("l", "LIFE_UNIVERSE")?;
    Ok(registry)
}

/// Temporary output directory for generated headers
pub struct OutputDir {
    dir: TempDir,
}

impl OutputDir {
    /// Creates a fresh empty directory
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created
    pub fn new() -> Result<Self> {
        Ok(Self {
            dir: tempfile::tempdir().context("Failed to create temporary directory")?,
        })
    }

    /// Root of the directory
    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Path of a file inside the directory
    #[must_use]
    pub fn file(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Reads a file inside the directory
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read
    pub fn read(&self, name: &str) -> Result<String> {
        let path = self.file(name);
        std::fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))
    }

    /// Returns true if any line of the file contains `word`
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read
    pub fn has_word(&self, name: &str, word: &str) -> Result<bool> {
        Ok(self.read(name)?.lines().any(|line| line.contains(word)))
    }
}
