//! Content factory for loading catalog and config from a data directory.

use std::path::{Path, PathBuf};

use powerplay_core::{ActivityCatalog, PowerplayConfig};

use crate::loaders::{CatalogLoader, ConfigLoader, LoadResult, ThresholdsLoader};

/// Loads content from a data directory, falling back to the embedded data
/// for any file the directory does not provide.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── activities.ron
/// ├── config.toml
/// └── thresholds.toml
/// ```
///
/// `thresholds.toml`, when present, replaces the `[thresholds]` table of
/// `config.toml`.
pub struct ContentFactory {
    data_dir: Option<PathBuf>,
}

impl ContentFactory {
    pub const ACTIVITIES_FILE: &'static str = "activities.ron";
    pub const CONFIG_FILE: &'static str = "config.toml";
    pub const THRESHOLDS_FILE: &'static str = "thresholds.toml";

    /// Creates a content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: Some(data_dir.into()),
        }
    }

    /// Creates a factory that only serves embedded content.
    pub fn embedded() -> Self {
        Self { data_dir: None }
    }

    /// Load the activity catalog from `activities.ron`.
    pub fn load_catalog(&self) -> LoadResult<ActivityCatalog> {
        match self.override_path(Self::ACTIVITIES_FILE) {
            Some(path) => CatalogLoader::load(&path),
            None => CatalogLoader::embedded(),
        }
    }

    /// Load configuration from `config.toml` and `thresholds.toml`.
    pub fn load_config(&self) -> LoadResult<PowerplayConfig> {
        let mut config = match self.override_path(Self::CONFIG_FILE) {
            Some(path) => ConfigLoader::load(&path)?,
            None => ConfigLoader::embedded()?,
        };
        if let Some(path) = self.override_path(Self::THRESHOLDS_FILE) {
            config.thresholds = ThresholdsLoader::load(&path)?;
        }
        Ok(config)
    }

    /// Returns the data directory path, if any.
    pub fn data_dir(&self) -> Option<&Path> {
        self.data_dir.as_deref()
    }

    fn override_path(&self, file: &str) -> Option<PathBuf> {
        let dir = self.data_dir.as_ref()?;
        let path = dir.join(file);
        if path.is_file() {
            tracing::debug!("using {}", path.display());
            Some(path)
        } else {
            tracing::debug!("{} not found in {}, using embedded data", file, dir.display());
            None
        }
    }
}

impl Default for ContentFactory {
    fn default() -> Self {
        Self::embedded()
    }
}
