//! Powerplay configuration loader.

use std::path::Path;

use anyhow::Context;
use powerplay_core::PowerplayConfig;

use crate::loaders::{LoadResult, read_file};

const EMBEDDED_CONFIG: &str = include_str!("../../data/config.toml");

/// Loader for [`PowerplayConfig`] from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    pub fn embedded() -> LoadResult<PowerplayConfig> {
        Self::parse(EMBEDDED_CONFIG).context("Failed to parse embedded config")
    }

    /// Load config data from a TOML file.
    ///
    /// Missing keys take their default values.
    pub fn load(path: &Path) -> LoadResult<PowerplayConfig> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("Invalid config in {}", path.display()))
    }

    pub fn parse(content: &str) -> LoadResult<PowerplayConfig> {
        let config: PowerplayConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }
}
