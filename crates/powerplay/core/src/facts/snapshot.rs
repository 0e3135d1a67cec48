//! Read-only facts about one star system at query time.

use std::collections::{BTreeMap, BTreeSet};

use crate::control::ControlState;
use crate::facts::FactError;
use crate::power::Power;

/// Snapshot of a system's Powerplay facts, built fresh for each query.
///
/// This is plain data: the fact source fills it in and the rule layer only
/// reads it. Consumers tolerate snapshots that break the invariants checked
/// by [`SystemFacts::validate`].
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SystemFacts {
    /// Display name, substituted into activity text.
    pub name: String,
    pub address: Option<u64>,
    /// Galactic coordinates in light years.
    pub position: Option<[f64; 3]>,
    pub controlling_power: Option<Power>,
    pub state: ControlState,
    /// Fraction of the way toward the next state transition.
    pub control_progress: f64,
    pub reinforcement: u64,
    pub undermining: u64,
    /// Progress of every power contesting an unoccupied system.
    pub conflict_progress: BTreeMap<Power, f64>,
    /// Powers with a presence in range of the system.
    pub powers_in_range: BTreeSet<Power>,
    pub has_stronghold_carrier: bool,
}

impl SystemFacts {
    /// Creates an unoccupied snapshot with no scores.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the controlling power and its control state (builder pattern).
    #[must_use]
    pub fn controlled_by(mut self, power: Power, state: ControlState) -> Self {
        self.controlling_power = Some(power);
        self.state = state;
        self.powers_in_range.insert(power);
        self
    }

    #[must_use]
    pub fn with_state(mut self, state: ControlState) -> Self {
        self.state = state;
        self
    }

    #[must_use]
    pub fn with_control_progress(mut self, progress: f64) -> Self {
        self.control_progress = progress;
        self
    }

    #[must_use]
    pub fn with_scores(mut self, reinforcement: u64, undermining: u64) -> Self {
        self.reinforcement = reinforcement;
        self.undermining = undermining;
        self
    }

    /// Records a contesting power; it is also considered in range.
    #[must_use]
    pub fn with_conflict(mut self, power: Power, progress: f64) -> Self {
        self.conflict_progress.insert(power, progress);
        self.powers_in_range.insert(power);
        self
    }

    #[must_use]
    pub fn with_powers_in_range(mut self, powers: impl IntoIterator<Item = Power>) -> Self {
        self.powers_in_range.extend(powers);
        self
    }

    #[must_use]
    pub fn with_stronghold_carrier(mut self, present: bool) -> Self {
        self.has_stronghold_carrier = present;
        self
    }

    #[must_use]
    pub fn with_address(mut self, address: u64) -> Self {
        self.address = Some(address);
        self
    }

    #[must_use]
    pub fn at_position(mut self, position: [f64; 3]) -> Self {
        self.position = Some(position);
        self
    }

    /// True when the system is unoccupied and at least one power contests it.
    pub fn is_in_conflict(&self) -> bool {
        self.state == ControlState::Unoccupied && !self.conflict_progress.is_empty()
    }

    pub fn is_controlled_by(&self, power: Power) -> bool {
        self.controlling_power == Some(power)
    }

    pub fn is_in_range(&self, power: Power) -> bool {
        self.powers_in_range.contains(&power)
    }

    /// Reinforcement minus undermining for the current cycle.
    pub fn net_score(&self) -> i64 {
        self.reinforcement as i64 - self.undermining as i64
    }

    /// Straight-line distance in light years, when both positions are known.
    pub fn distance_to(&self, other: &SystemFacts) -> Option<f64> {
        let (a, b) = (self.position?, other.position?);
        let squared: f64 = a.iter().zip(b.iter()).map(|(x, y)| (y - x).powi(2)).sum();
        Some(squared.sqrt())
    }

    /// Checks the snapshot invariants.
    ///
    /// Conflict progress only exists for unoccupied systems, carriers only
    /// for strongholds, and every progress value is a finite number.
    pub fn validate(&self) -> Result<(), FactError> {
        if !self.control_progress.is_finite() {
            return Err(FactError::NonFiniteProgress {
                field: "control_progress",
                value: self.control_progress,
            });
        }
        if let Some(value) = self.conflict_progress.values().find(|v| !v.is_finite()) {
            return Err(FactError::NonFiniteProgress {
                field: "conflict_progress",
                value: *value,
            });
        }
        if self.state.is_occupied() && !self.conflict_progress.is_empty() {
            return Err(FactError::ConflictWhileOccupied(self.state));
        }
        if self.has_stronghold_carrier && self.state != ControlState::Stronghold {
            return Err(FactError::CarrierOutsideStronghold(self.state));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflict_requires_unoccupied_and_contestants() {
        let idle = SystemFacts::new("Lembava");
        assert!(!idle.is_in_conflict());

        let contested = SystemFacts::new("Lembava").with_conflict(Power::LiYongRui, 0.4);
        assert!(contested.is_in_conflict());
        assert!(contested.is_in_range(Power::LiYongRui));

        let occupied = contested.with_state(ControlState::Exploited);
        assert!(!occupied.is_in_conflict());
    }

    #[test]
    fn validate_reports_broken_invariants() {
        let ok = SystemFacts::new("Lembava")
            .controlled_by(Power::ZeminaTorval, ControlState::Stronghold)
            .with_stronghold_carrier(true);
        assert_eq!(ok.validate(), Ok(()));

        let carrier = SystemFacts::new("Lembava")
            .controlled_by(Power::ZeminaTorval, ControlState::Fortified)
            .with_stronghold_carrier(true);
        assert_eq!(
            carrier.validate(),
            Err(FactError::CarrierOutsideStronghold(ControlState::Fortified))
        );

        let conflict = SystemFacts::new("Lembava")
            .with_conflict(Power::YuriGrom, 0.2)
            .with_state(ControlState::Exploited);
        assert_eq!(
            conflict.validate(),
            Err(FactError::ConflictWhileOccupied(ControlState::Exploited))
        );

        let nan = SystemFacts::new("Lembava").with_control_progress(f64::NAN);
        assert!(matches!(
            nan.validate(),
            Err(FactError::NonFiniteProgress { field: "control_progress", .. })
        ));
    }

    #[test]
    fn distance_needs_both_positions() {
        let sol = SystemFacts::new("Sol").at_position([0.0, 0.0, 0.0]);
        let near = SystemFacts::new("Near").at_position([3.0, 4.0, 0.0]);
        let unknown = SystemFacts::new("Unknown");

        assert_eq!(sol.distance_to(&near), Some(5.0));
        assert_eq!(sol.distance_to(&unknown), None);
    }

    #[test]
    fn net_score_can_be_negative() {
        let facts = SystemFacts::new("Lembava").with_scores(1_000, 4_000);
        assert_eq!(facts.net_score(), -3_000);
    }
}
