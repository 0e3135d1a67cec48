//! Loaded content shared by every subcommand.

use std::path::PathBuf;

use anyhow::Result;
use powerplay_content::ContentFactory;
use powerplay_core::{ActionResolver, ActivityCatalog, EligibilityEngine, Power, PowerplayConfig};

use crate::config::{CliConfig, default_data_dir};
use crate::output::OutputFormat;

/// Catalog, configuration and output settings for one invocation.
pub struct AppContext {
    pub catalog: ActivityCatalog,
    pub config: PowerplayConfig,
    pub format: OutputFormat,
}

impl AppContext {
    /// Loads content, applying overrides in order: data directory files,
    /// environment, then command-line flags.
    pub fn load(
        data_dir: Option<PathBuf>,
        home_power: Option<Power>,
        format: OutputFormat,
        env: &CliConfig,
    ) -> Result<Self> {
        let data_dir = data_dir
            .or_else(|| env.data_dir.clone())
            .or_else(default_data_dir);
        let factory = match data_dir {
            Some(dir) => ContentFactory::new(dir),
            None => ContentFactory::embedded(),
        };

        let catalog = factory.load_catalog()?;
        let mut config = factory.load_config()?;
        if let Some(power) = home_power.or(env.home_power) {
            config.home_power = power;
        }

        tracing::debug!(
            "loaded {} activities, home power {}",
            catalog.len(),
            config.home_power
        );

        Ok(Self {
            catalog,
            config,
            format,
        })
    }

    /// Context over embedded content only.
    pub fn embedded(format: OutputFormat) -> Result<Self> {
        let factory = ContentFactory::embedded();
        Ok(Self {
            catalog: factory.load_catalog()?,
            config: factory.load_config()?,
            format,
        })
    }

    pub fn engine(&self) -> EligibilityEngine<'_> {
        EligibilityEngine::new(&self.catalog)
    }

    pub fn resolver(&self) -> ActionResolver {
        ActionResolver::new(self.config.thresholds)
    }
}
