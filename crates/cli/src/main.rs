//! Powerplay activity planner.
//!
//! ```bash
//! powerplay activities systems.json --system Lembava
//! powerplay --home-power "Yuri Grom" status systems.json
//! powerplay catalog "Sell for large profits" --action reinforce
//! powerplay support systems.json --system Lembava --format json
//! ```

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use powerplay_cli::commands::{Activities, CatalogCmd, Status, Support};
use powerplay_cli::config::log_filter;
use powerplay_cli::{AppContext, CliConfig, OutputFormat};
use powerplay_core::Power;

/// Powerplay activity eligibility for star systems
#[derive(Parser)]
#[command(name = "powerplay")]
#[command(about = "Which Powerplay activities work where", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory with activities.ron / config.toml / thresholds.toml overrides
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Power whose point of view actions are resolved from
    #[arg(long, global = true, value_name = "POWER", value_parser = powerplay_cli::commands::parse_power)]
    home_power: Option<Power>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Eligible activities for systems in a JSON export
    Activities(Activities),

    /// Control state, progress and conflict standings
    Status(Status),

    /// List or look up catalog entries
    Catalog(CatalogCmd),

    /// Supporting systems for a target
    Support(Support),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for POWERPLAY_* variables)
    let _ = dotenvy::dotenv();

    let directives = std::env::var(tracing_subscriber::EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(directives.as_deref()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let env = CliConfig::from_env();
    let ctx = AppContext::load(cli.data_dir, cli.home_power, cli.format, &env)?;

    match cli.command {
        Command::Activities(cmd) => cmd.execute(&ctx),
        Command::Status(cmd) => cmd.execute(&ctx),
        Command::Catalog(cmd) => cmd.execute(&ctx),
        Command::Support(cmd) => cmd.execute(&ctx),
    }
}
