//! Control state, progress and conflict standings for systems.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use powerplay_core::{ConflictStanding, ControlProgress, Power, ResolvedAction, SystemFacts};
use serde::Serialize;

use crate::context::AppContext;
use crate::output::{self, OutputFormat};
use crate::rows;

/// Show control status for systems in a JSON export
#[derive(Parser, Debug)]
pub struct Status {
    /// JSON file with one `systems` row or an array of rows
    #[arg(value_name = "ROWS.json")]
    rows: PathBuf,

    /// Only show this system
    #[arg(short, long, value_name = "NAME")]
    system: Option<String>,
}

/// Status of one system from the home power's point of view.
#[derive(Debug, Serialize)]
pub struct SystemStatus {
    pub system: String,
    pub controlling_power: Option<Power>,
    pub action: ResolvedAction,
    pub progress: ControlProgress,
    pub conflict: Vec<ConflictStanding>,
    pub stronghold_carrier: bool,
}

impl Status {
    pub fn execute(self, ctx: &AppContext) -> Result<()> {
        let systems = rows::load_systems(&self.rows, &ctx.config.thresholds)?;
        let selected = rows::select(&systems, self.system.as_deref())?;
        let reports: Vec<_> = selected.into_iter().map(|facts| report(ctx, facts)).collect();

        match ctx.format {
            OutputFormat::Json => output::print_json(&reports)?,
            OutputFormat::Text => {
                for report in &reports {
                    output::print_system_header(&report.system, report.progress.state, report.action);
                    if let Some(power) = report.controlling_power {
                        println!("  Controlled by {}", power);
                    }
                    if report.stronghold_carrier {
                        println!("  Stronghold carrier present");
                    }
                    output::print_progress(&report.progress);
                    output::print_standings(&report.conflict, ctx.config.thresholds.conflict);
                    println!();
                }
            }
        }
        Ok(())
    }
}

pub fn report(ctx: &AppContext, facts: &SystemFacts) -> SystemStatus {
    let resolver = ctx.resolver();
    SystemStatus {
        system: facts.name.clone(),
        controlling_power: facts.controlling_power,
        action: resolver.resolve(facts, ctx.config.home_power),
        progress: resolver.progress(facts),
        conflict: resolver.conflict_standings(facts),
        stronghold_carrier: facts.has_stronghold_carrier,
    }
}
