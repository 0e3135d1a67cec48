//! Reading `systems` rows exported as JSON.

use std::path::Path;

use anyhow::{Context, Result, bail};
use powerplay_core::{ControlThresholds, SystemFacts, SystemRecord};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
enum RowsFile {
    Many(Vec<SystemRecord>),
    One(Box<SystemRecord>),
}

/// Load every row of a JSON export (one object or an array of objects).
pub fn load_systems(path: &Path, thresholds: &ControlThresholds) -> Result<Vec<SystemFacts>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read system rows: {}", path.display()))?;
    parse_systems(&content, thresholds)
        .with_context(|| format!("Invalid system rows in {}", path.display()))
}

/// Parse system rows from JSON text.
pub fn parse_systems(content: &str, thresholds: &ControlThresholds) -> Result<Vec<SystemFacts>> {
    let rows = match serde_json::from_str::<RowsFile>(content)? {
        RowsFile::Many(rows) => rows,
        RowsFile::One(row) => vec![*row],
    };

    rows.into_iter()
        .enumerate()
        .map(|(index, row)| {
            let name = row.star_system.clone();
            row.into_facts(thresholds)
                .with_context(|| format!("row {} ({})", index, name))
        })
        .collect()
}

/// Systems matching `name` (case-insensitive), or all systems when no name is given.
pub fn select<'a>(systems: &'a [SystemFacts], name: Option<&str>) -> Result<Vec<&'a SystemFacts>> {
    let Some(name) = name else {
        return Ok(systems.iter().collect());
    };

    let found: Vec<_> = systems
        .iter()
        .filter(|facts| facts.name.eq_ignore_ascii_case(name.trim()))
        .collect();
    if found.is_empty() {
        bail!("System not found: {}", name);
    }
    Ok(found)
}
