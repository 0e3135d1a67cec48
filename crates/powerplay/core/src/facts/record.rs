//! Adapter from the dashboard's `systems` rows to [`SystemFacts`].
//!
//! Rows arrive as JSON objects with the database's PascalCase column names.
//! `StarSystem` is required and must not be blank; every other column may be
//! missing or null.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::control::{ControlState, ControlThresholds};
use crate::facts::{FactError, SystemFacts};
use crate::power::Power;

/// Control progress above this value is the journal's lost-control marker,
/// not a fraction.
pub const LOST_CONTROL_MARKER: f64 = 12_000.0;

/// One row of the `systems` table.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SystemRecord {
    pub star_system: String,
    pub system_address: Option<u64>,
    pub star_pos: Option<[f64; 3]>,
    pub controlling_power: Option<String>,
    pub powerplay_state: Option<String>,
    pub powers: Option<Vec<String>>,
    pub powerplay_conflict_progress: Option<Vec<ConflictRecord>>,
    pub powerplay_state_control_progress: Option<f64>,
    pub powerplay_state_reinforcement: Option<u64>,
    pub powerplay_state_undermining: Option<u64>,
    pub powerplay_has_stronghold_carrier: Option<bool>,
}

/// One entry of `PowerplayConflictProgress`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ConflictRecord {
    pub power: String,
    pub conflict_progress: f64,
}

impl SystemRecord {
    /// Converts the row into a validated snapshot.
    ///
    /// Missing state means Unoccupied, missing lists are empty and an empty
    /// controller is no controller. Conflict entries on an occupied system and
    /// a carrier on a non-Stronghold system are stale data and are dropped.
    pub fn into_facts(self, thresholds: &ControlThresholds) -> Result<SystemFacts, FactError> {
        if self.star_system.trim().is_empty() {
            return Err(FactError::MissingName);
        }

        let state = match self.powerplay_state.as_deref().map(str::trim) {
            None | Some("") => ControlState::Unoccupied,
            Some(name) => name
                .parse::<ControlState>()
                .map_err(|_| FactError::UnknownState(name.to_string()))?,
        };

        let controlling_power = match self.controlling_power.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(name) => Some(parse_power("ControllingPower", name)?),
        };

        let powers_in_range = self
            .powers
            .unwrap_or_default()
            .iter()
            .map(|name| parse_power("Powers", name))
            .collect::<Result<BTreeSet<_>, _>>()?;

        let mut conflict_progress = BTreeMap::new();
        for entry in self.powerplay_conflict_progress.unwrap_or_default() {
            let power = parse_power("PowerplayConflictProgress", &entry.power)?;
            if !entry.conflict_progress.is_finite() {
                return Err(FactError::NonFiniteProgress {
                    field: "PowerplayConflictProgress",
                    value: entry.conflict_progress,
                });
            }
            conflict_progress.insert(power, entry.conflict_progress);
        }
        if state.is_occupied() && !conflict_progress.is_empty() {
            tracing::debug!(
                "{}: dropping {} conflict entries on {} system",
                self.star_system,
                conflict_progress.len(),
                state
            );
            conflict_progress.clear();
        }

        let mut has_stronghold_carrier = self.powerplay_has_stronghold_carrier.unwrap_or(false);
        if has_stronghold_carrier && state != ControlState::Stronghold {
            tracing::debug!(
                "{}: ignoring stronghold carrier on {} system",
                self.star_system,
                state
            );
            has_stronghold_carrier = false;
        }

        let reinforcement = self.powerplay_state_reinforcement.unwrap_or(0);
        let undermining = self.powerplay_state_undermining.unwrap_or(0);
        let control_progress = normalize_control_progress(
            self.powerplay_state_control_progress.unwrap_or(0.0),
            reinforcement,
            undermining,
            thresholds,
        );
        if !control_progress.is_finite() {
            return Err(FactError::NonFiniteProgress {
                field: "PowerplayStateControlProgress",
                value: control_progress,
            });
        }

        Ok(SystemFacts {
            name: self.star_system,
            address: self.system_address,
            position: self.star_pos,
            controlling_power,
            state,
            control_progress,
            reinforcement,
            undermining,
            conflict_progress,
            powers_in_range,
            has_stronghold_carrier,
        })
    }
}

/// Replaces the lost-control marker with the cycle's net score as a fraction
/// of the acquisition threshold. Other values pass through.
pub fn normalize_control_progress(
    raw: f64,
    reinforcement: u64,
    undermining: u64,
    thresholds: &ControlThresholds,
) -> f64 {
    if raw > LOST_CONTROL_MARKER {
        (reinforcement as f64 - undermining as f64) / thresholds.acquisition as f64
    } else {
        raw
    }
}

fn parse_power(field: &'static str, name: &str) -> Result<Power, FactError> {
    Power::parse(name).ok_or_else(|| FactError::UnknownPower {
        field,
        name: name.to_string(),
    })
}
