//! `powerplay` subcommands.

pub mod activities;
pub mod catalog;
pub mod status;
pub mod support;

pub use activities::Activities;
pub use catalog::CatalogCmd;
pub use status::Status;
pub use support::Support;

use powerplay_core::{Power, StrategicAction};

/// clap value parser for power names and short codes.
pub fn parse_power(value: &str) -> Result<Power, String> {
    Power::parse(value).ok_or_else(|| format!("unknown power '{}'", value))
}

/// clap value parser for strategic actions.
pub fn parse_action(value: &str) -> Result<StrategicAction, String> {
    StrategicAction::from_label(value)
        .ok_or_else(|| format!("unknown action '{}' (expected Acquire, Reinforce or Undermine)", value))
}
