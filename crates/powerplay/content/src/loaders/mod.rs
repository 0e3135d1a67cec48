//! Content loaders for reading catalog and configuration data from files.
//!
//! Every loader has an `embedded()` constructor for the data compiled into
//! the crate and a `load(path)` constructor for an override file.

pub mod catalog;
pub mod config;
pub mod factory;
pub mod thresholds;

pub use catalog::{ActivityFile, CatalogLoader};
pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use thresholds::ThresholdsLoader;

use std::path::Path;

use anyhow::Context;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read file {}", path.display()))
}
