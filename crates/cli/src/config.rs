//! Environment configuration for the terminal client.
use std::env;
use std::path::PathBuf;

use powerplay_core::Power;
use tracing_subscriber::EnvFilter;

/// Settings read from the environment (and `.env`).
///
/// Command-line flags take precedence over these values.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub data_dir: Option<PathBuf>,
    pub home_power: Option<Power>,
}

impl CliConfig {
    pub const DATA_DIR_VAR: &'static str = "POWERPLAY_DATA_DIR";
    pub const HOME_POWER_VAR: &'static str = "POWERPLAY_HOME_POWER";

    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `POWERPLAY_DATA_DIR` - Directory with `activities.ron` / `config.toml` overrides
    /// - `POWERPLAY_HOME_POWER` - Home power name or short code (e.g. `LYR`)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(dir) = read_env::<PathBuf>(Self::DATA_DIR_VAR) {
            config.data_dir = Some(dir);
        }

        if let Ok(name) = env::var(Self::HOME_POWER_VAR) {
            match Power::parse(&name) {
                Some(power) => config.home_power = Some(power),
                None => tracing::warn!("{} is not a known power: {:?}", Self::HOME_POWER_VAR, name),
            }
        }

        config
    }
}

/// Platform configuration directory for powerplay data overrides.
///
/// - macOS: `~/Library/Application Support/powerplay`
/// - Linux: `~/.config/powerplay` (or `$XDG_CONFIG_HOME/powerplay`)
/// - Windows: `%APPDATA%\powerplay\config`
pub fn default_data_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "powerplay").map(|dirs| dirs.config_dir().to_path_buf())
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

/// Log filter from `RUST_LOG`-style directives, `info` when unset or invalid.
///
/// The directives replace the default entirely, so `RUST_LOG=debug` enables
/// debug events everywhere.
pub fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}
