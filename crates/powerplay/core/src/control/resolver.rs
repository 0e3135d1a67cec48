//! Action resolution and control-point progress.
//!
//! The resolver classifies a system from the home power's point of view and
//! converts progress fractions into control points for display. It never
//! performs state transitions.

use crate::action::ResolvedAction;
use crate::control::{ControlState, ControlThresholds};
use crate::facts::SystemFacts;
use crate::power::Power;

/// Derives the action a home power takes against a system.
///
/// Precedence: own system → Reinforce; unoccupied and in range → Acquire;
/// unoccupied otherwise → Out of Range; anything else → Undermine.
pub fn resolve_action(facts: &SystemFacts, home_power: Power) -> ResolvedAction {
    if facts.is_controlled_by(home_power) {
        ResolvedAction::Reinforce
    } else if facts.state == ControlState::Unoccupied && facts.is_in_range(home_power) {
        ResolvedAction::Acquire
    } else if facts.state == ControlState::Unoccupied {
        ResolvedAction::OutOfRange
    } else {
        ResolvedAction::Undermine
    }
}

/// Control points represented by `progress` in `state`.
///
/// Unoccupied systems are measured against the Exploited threshold, occupied
/// systems against their own state's threshold. NaN counts as zero.
pub fn control_points_for(
    thresholds: &ControlThresholds,
    state: ControlState,
    progress: f64,
) -> i64 {
    if progress.is_nan() {
        return 0;
    }
    (progress * thresholds.progress_target(state) as f64).floor() as i64
}

/// Progress of a system within its current control state.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControlProgress {
    pub state: ControlState,
    pub progress: f64,
    pub points: i64,
    /// Threshold the progress fraction is measured against.
    pub threshold: u64,
    pub next_state: Option<ControlState>,
    /// Reinforcement minus undermining this cycle.
    pub net_score: i64,
}

/// One power's standing in an unoccupied-system contest.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConflictStanding {
    pub power: Power,
    pub progress: f64,
    /// Progress expressed against the acquisition threshold.
    pub points: i64,
    /// Whether the power has passed the conflict threshold.
    pub past_conflict_threshold: bool,
}

/// Classifies systems and computes progress against a threshold table.
#[derive(Clone, Debug, Default)]
pub struct ActionResolver {
    thresholds: ControlThresholds,
}

impl ActionResolver {
    pub fn new(thresholds: ControlThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &ControlThresholds {
        &self.thresholds
    }

    /// See [`resolve_action`].
    pub fn resolve(&self, facts: &SystemFacts, home_power: Power) -> ResolvedAction {
        let action = resolve_action(facts, home_power);
        tracing::debug!(
            "{}: {} ({:?}) resolves to {} for {}",
            facts.name,
            facts.state,
            facts.controlling_power,
            action,
            home_power
        );
        action
    }

    /// See [`control_points_for`].
    pub fn control_points_for(&self, state: ControlState, progress: f64) -> i64 {
        control_points_for(&self.thresholds, state, progress)
    }

    /// Progress view of a system for the progress bar.
    pub fn progress(&self, facts: &SystemFacts) -> ControlProgress {
        ControlProgress {
            state: facts.state,
            progress: facts.control_progress,
            points: self.control_points_for(facts.state, facts.control_progress),
            threshold: self.thresholds.progress_target(facts.state),
            next_state: facts.state.next(),
            net_score: facts.net_score(),
        }
    }

    /// Contesting powers of an unoccupied system, leader first.
    ///
    /// Non-finite progress values are skipped.
    pub fn conflict_standings(&self, facts: &SystemFacts) -> Vec<ConflictStanding> {
        let mut standings: Vec<ConflictStanding> = facts
            .conflict_progress
            .iter()
            .filter(|(_, progress)| progress.is_finite())
            .map(|(&power, &progress)| {
                let points = (progress * self.thresholds.acquisition as f64).floor() as i64;
                ConflictStanding {
                    power,
                    progress,
                    points,
                    past_conflict_threshold: points >= self.thresholds.conflict as i64,
                }
            })
            .collect();

        standings.sort_by(|a, b| b.progress.total_cmp(&a.progress).then(a.power.cmp(&b.power)));
        standings
    }
}
