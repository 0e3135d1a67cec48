//! List the activities usable in one or more systems.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use powerplay_core::{
    CategoryGroup, ControlState, ResolvedAction, StrategicAction, SystemFacts, group_by_category,
};
use serde::Serialize;

use crate::commands::parse_action;
use crate::context::AppContext;
use crate::output::{self, OutputFormat};
use crate::rows;

/// Show eligible activities for systems in a JSON export
#[derive(Parser, Debug)]
pub struct Activities {
    /// JSON file with one `systems` row or an array of rows
    #[arg(value_name = "ROWS.json")]
    rows: PathBuf,

    /// Only show this system
    #[arg(short, long, value_name = "NAME")]
    system: Option<String>,

    /// Use this action instead of resolving it for the home power
    #[arg(short, long, value_name = "ACTION", value_parser = parse_action)]
    action: Option<StrategicAction>,
}

/// Activities for one system.
#[derive(Debug, Serialize)]
pub struct SystemActivities {
    pub system: String,
    pub state: ControlState,
    pub action: ResolvedAction,
    pub groups: Vec<CategoryGroup>,
}

impl Activities {
    pub fn execute(self, ctx: &AppContext) -> Result<()> {
        let systems = rows::load_systems(&self.rows, &ctx.config.thresholds)?;
        let selected = rows::select(&systems, self.system.as_deref())?;

        let reports: Vec<_> = selected
            .into_iter()
            .map(|facts| report(ctx, facts, self.action))
            .collect();

        match ctx.format {
            OutputFormat::Json => output::print_json(&reports)?,
            OutputFormat::Text => {
                for report in &reports {
                    output::print_system_header(&report.system, report.state, report.action);
                    output::print_groups(&report.groups, ctx.config.home_power);
                    println!();
                }
            }
        }
        Ok(())
    }
}

/// Resolves the action (unless overridden) and groups the eligible activities.
pub fn report(
    ctx: &AppContext,
    facts: &SystemFacts,
    action: Option<StrategicAction>,
) -> SystemActivities {
    let home = ctx.config.home_power;
    let action = match action {
        Some(action) => ResolvedAction::from(action),
        None => ctx.resolver().resolve(facts, home),
    };
    let activities = ctx.engine().eligible_for(facts, action, home);

    SystemActivities {
        system: facts.name.clone(),
        state: facts.state,
        action,
        groups: group_by_category(activities),
    }
}
