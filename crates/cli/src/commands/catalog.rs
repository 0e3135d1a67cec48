//! Inspect the activity catalog.

use anyhow::{Result, bail};
use clap::Parser;
use console::style;
use powerplay_core::{ActivityDefinition, StrategicAction};

use crate::commands::parse_action;
use crate::context::AppContext;
use crate::output::{self, OutputFormat};

/// List catalog entries or look one up by name
#[derive(Parser, Debug)]
pub struct CatalogCmd {
    /// Activity name to look up
    #[arg(value_name = "NAME")]
    name: Option<String>,

    /// Only entries supporting this action
    #[arg(short, long, value_name = "ACTION", value_parser = parse_action)]
    action: Option<StrategicAction>,
}

impl CatalogCmd {
    pub fn execute(self, ctx: &AppContext) -> Result<()> {
        let entries = self.select(ctx)?;

        match ctx.format {
            OutputFormat::Json => output::print_json(&entries)?,
            OutputFormat::Text => {
                for def in &entries {
                    print_definition(def);
                }
                println!("{} entries", entries.len());
            }
        }
        Ok(())
    }

    fn select<'a>(&self, ctx: &'a AppContext) -> Result<Vec<&'a ActivityDefinition>> {
        let catalog = &ctx.catalog;
        match (&self.name, self.action) {
            (Some(name), Some(action)) => match catalog.by_name_for(name, action) {
                Some(def) => Ok(vec![def]),
                None => bail!("No activity named {:?} supports {}", name, action),
            },
            (Some(name), None) => match catalog.by_name(name) {
                Some(def) => Ok(vec![def]),
                None => bail!("No activity named {:?}", name),
            },
            (None, Some(action)) => Ok(catalog.iter().filter(|d| d.supports(action)).collect()),
            (None, None) => Ok(catalog.iter().collect()),
        }
    }
}

fn print_definition(def: &ActivityDefinition) {
    let actions: Vec<_> = StrategicAction::ALL
        .iter()
        .filter(|action| def.supports(**action))
        .map(|action| action.to_string())
        .collect();
    let actions = if actions.is_empty() {
        style("disabled".to_string()).red()
    } else {
        style(actions.join(", ")).yellow()
    };

    println!(
        "{} [{}] {}",
        style(&def.name).bold().cyan(),
        def.category,
        actions
    );
    if !def.legal {
        println!("  {}", style("illegal").magenta());
    }
    if def.stronghold_carrier {
        println!("  usable with stronghold carrier");
    }
    if let Some(condition) = &def.condition {
        println!("  condition: {:?}", condition);
    }
}
