//! Control threshold table loader.

use std::path::Path;

use anyhow::Context;
use powerplay_core::ControlThresholds;

use crate::loaders::{LoadResult, read_file};

const EMBEDDED_THRESHOLDS: &str = include_str!("../../data/thresholds.toml");

/// Loader for control thresholds from TOML files.
pub struct ThresholdsLoader;

impl ThresholdsLoader {
    /// The threshold table compiled into this crate.
    pub fn embedded() -> LoadResult<ControlThresholds> {
        Self::parse(EMBEDDED_THRESHOLDS).context("Failed to parse embedded thresholds")
    }

    /// Load and validate a threshold table from a TOML file.
    pub fn load(path: &Path) -> LoadResult<ControlThresholds> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("Invalid thresholds in {}", path.display()))
    }

    /// Parse and validate a threshold table from TOML text.
    pub fn parse(content: &str) -> LoadResult<ControlThresholds> {
        let thresholds: ControlThresholds = toml::from_str(content)?;
        thresholds.validate()?;
        Ok(thresholds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_table_is_standard() {
        assert_eq!(ThresholdsLoader::embedded().unwrap(), ControlThresholds::standard());
    }

    #[test]
    fn rejects_unordered_table() {
        let err = ThresholdsLoader::parse(
            "conflict = 36000\nacquisition = 120000\nexploited = 120000\nfortified = 700000\nstronghold = 650000\n",
        )
        .unwrap_err();
        assert!(err.to_string().contains("must exceed"));
    }

    #[test]
    fn rejects_missing_fields() {
        assert!(ThresholdsLoader::parse("conflict = 36000\n").is_err());
    }
}
