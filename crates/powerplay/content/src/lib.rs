//! Data-driven content for the Powerplay rule layer.
//!
//! This crate embeds the default data files and provides loaders for
//! overrides read from a data directory:
//! - Activity catalog (RON)
//! - Control thresholds (TOML)
//! - Runtime configuration (TOML)
//!
//! All loaders deserialize `powerplay-core` types directly with serde.

pub mod loaders;

pub use loaders::{
    ActivityFile, CatalogLoader, ConfigLoader, ContentFactory, LoadResult, ThresholdsLoader,
};
