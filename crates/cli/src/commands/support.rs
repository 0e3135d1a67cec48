//! Find supporting systems for a target system.

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;
use powerplay_core::supporting_systems;

use crate::context::AppContext;
use crate::output::{self, OutputFormat};
use crate::rows;

/// List Fortified and Stronghold systems supporting a target
#[derive(Parser, Debug)]
pub struct Support {
    /// JSON file with the target and candidate `systems` rows
    #[arg(value_name = "ROWS.json")]
    rows: PathBuf,

    /// Target system
    #[arg(short, long, value_name = "NAME")]
    system: String,
}

impl Support {
    pub fn execute(self, ctx: &AppContext) -> Result<()> {
        let systems = rows::load_systems(&self.rows, &ctx.config.thresholds)?;
        let target = rows::select(&systems, Some(&self.system))?[0];
        if target.position.is_none() {
            bail!("{} has no StarPos; distances cannot be computed", target.name);
        }

        let supporting = supporting_systems(target, &systems);
        match ctx.format {
            OutputFormat::Json => output::print_json(&supporting)?,
            OutputFormat::Text => output::print_supporting(&target.name, &supporting),
        }
        Ok(())
    }
}
