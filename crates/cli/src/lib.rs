//! Terminal front end for the Powerplay rule layer.
//!
//! The `powerplay` binary reads `systems` rows exported as JSON, resolves the
//! home power's action for each system, and prints eligible activities,
//! control status or supporting systems.

pub mod commands;
pub mod config;
pub mod context;
pub mod output;
pub mod rows;

pub use config::CliConfig;
pub use context::AppContext;
pub use output::OutputFormat;
