//! Generate command implementation

use crate::config::Config;
use anyhow::{Context, Result};
use lc_header::HeaderGenerator;
use lc_registry::Registry;
use std::path::PathBuf;

/// Writes one header per configured language and returns the written paths
pub fn generate(registry: &Registry, config: &Config) -> Result<Vec<PathBuf>> {
    if config.languages.is_empty() {
        anyhow::bail!("No target language configured");
    }

    std::fs::create_dir_all(&config.out_dir)
        .with_context(|| format!("Failed to create output directory: {}", config.out_dir.display()))?;

    let generator = HeaderGenerator::new(registry).with_banner(config.banner.clone());
    let written = generator.write_all(&config.out_dir, &config.stem, &config.languages)?;
    Ok(written)
}
