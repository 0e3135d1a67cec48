//! Declarative side conditions attached to catalog entries.
//!
//! A condition is data: it can be written in a catalog file, compared in
//! tests, and evaluated against any snapshot. Evaluation reads facts and
//! reports facts it cannot make sense of as [`ConditionError`].

use crate::action::StrategicAction;
use crate::control::ControlState;
use crate::error::{ErrorSeverity, PowerplayError};
use crate::facts::SystemFacts;
use crate::power::Power;

/// Eligibility rule beyond an activity's support flags.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Condition {
    /// System is unoccupied and at least one power contests it.
    InConflict,

    /// System is controlled by this power.
    ControlledBy(Power),

    /// System is in this control state.
    StateIs(ControlState),

    /// `require` applies only when evaluating for `action`; other actions pass.
    WhenAction {
        action: StrategicAction,
        require: Box<Condition>,
    },

    /// All conditions must be true.
    All(Vec<Condition>),

    /// Any condition must be true.
    Any(Vec<Condition>),

    /// Condition must be false.
    Not(Box<Condition>),
}

impl Condition {
    /// Shorthand for [`Condition::WhenAction`].
    pub fn when(action: StrategicAction, require: Condition) -> Self {
        Self::WhenAction {
            action,
            require: Box::new(require),
        }
    }

    /// Evaluates the condition for `action` against `facts`.
    pub fn evaluate(
        &self,
        facts: &SystemFacts,
        action: StrategicAction,
    ) -> Result<bool, ConditionError> {
        match self {
            Self::InConflict => in_conflict(facts),
            Self::ControlledBy(power) => Ok(facts.is_controlled_by(*power)),
            Self::StateIs(state) => Ok(facts.state == *state),
            Self::WhenAction {
                action: guarded,
                require,
            } => {
                if *guarded == action {
                    require.evaluate(facts, action)
                } else {
                    Ok(true)
                }
            }
            Self::All(conditions) => {
                for condition in conditions {
                    if !condition.evaluate(facts, action)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            Self::Any(conditions) => {
                for condition in conditions {
                    if condition.evaluate(facts, action)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }
            Self::Not(condition) => Ok(!condition.evaluate(facts, action)?),
        }
    }
}

fn in_conflict(facts: &SystemFacts) -> Result<bool, ConditionError> {
    if facts.state.is_occupied() && !facts.conflict_progress.is_empty() {
        return Err(ConditionError::ConflictOnOccupiedSystem(facts.state));
    }
    if let Some((power, value)) = facts
        .conflict_progress
        .iter()
        .find(|(_, value)| !value.is_finite() || **value < 0.0)
    {
        return Err(ConditionError::MalformedConflictProgress {
            power: *power,
            value: *value,
        });
    }
    Ok(facts.is_in_conflict())
}

/// Facts a condition could not evaluate.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConditionError {
    #[error("conflict progress for {power} is not a valid fraction ({value})")]
    MalformedConflictProgress { power: Power, value: f64 },

    #[error("conflict progress reported on a {0} system")]
    ConflictOnOccupiedSystem(ControlState),
}

impl PowerplayError for ConditionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::MalformedConflictProgress { .. } => ErrorSeverity::Recoverable,
            Self::ConflictOnOccupiedSystem(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MalformedConflictProgress { .. } => "CONDITION_MALFORMED_CONFLICT_PROGRESS",
            Self::ConflictOnOccupiedSystem(_) => "CONDITION_CONFLICT_ON_OCCUPIED_SYSTEM",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delaine_only_when_undermining() -> Condition {
        Condition::when(
            StrategicAction::Undermine,
            Condition::ControlledBy(Power::ArchonDelaine),
        )
    }

    #[test]
    fn guarded_condition_only_applies_to_its_action() {
        let condition = delaine_only_when_undermining();
        let winters =
            SystemFacts::new("Lembava").controlled_by(Power::FeliciaWinters, ControlState::Exploited);

        assert_eq!(condition.evaluate(&winters, StrategicAction::Undermine), Ok(false));
        assert_eq!(condition.evaluate(&winters, StrategicAction::Reinforce), Ok(true));
        assert_eq!(condition.evaluate(&winters, StrategicAction::Acquire), Ok(true));

        let delaine =
            SystemFacts::new("Lembava").controlled_by(Power::ArchonDelaine, ControlState::Exploited);
        assert_eq!(condition.evaluate(&delaine, StrategicAction::Undermine), Ok(true));
    }

    #[test]
    fn in_conflict_reads_contestants() {
        let quiet = SystemFacts::new("Quiet");
        let contested = SystemFacts::new("Contested").with_conflict(Power::LiYongRui, 0.3);

        assert_eq!(Condition::InConflict.evaluate(&quiet, StrategicAction::Acquire), Ok(false));
        assert_eq!(Condition::InConflict.evaluate(&contested, StrategicAction::Acquire), Ok(true));
    }

    #[test]
    fn in_conflict_rejects_malformed_facts() {
        let nan = SystemFacts::new("Broken").with_conflict(Power::YuriGrom, f64::NAN);
        assert!(matches!(
            Condition::InConflict.evaluate(&nan, StrategicAction::Acquire),
            Err(ConditionError::MalformedConflictProgress { power: Power::YuriGrom, .. })
        ));

        let occupied = SystemFacts::new("Broken")
            .with_conflict(Power::YuriGrom, 0.5)
            .with_state(ControlState::Fortified);
        let err = Condition::InConflict
            .evaluate(&occupied, StrategicAction::Acquire)
            .unwrap_err();
        assert_eq!(err, ConditionError::ConflictOnOccupiedSystem(ControlState::Fortified));
        assert_eq!(err.severity(), ErrorSeverity::Internal);
    }

    #[test]
    fn combinators() {
        let facts =
            SystemFacts::new("Lembava").controlled_by(Power::ZeminaTorval, ControlState::Stronghold);
        let action = StrategicAction::Undermine;

        let all = Condition::All(vec![
            Condition::StateIs(ControlState::Stronghold),
            Condition::ControlledBy(Power::ZeminaTorval),
        ]);
        let any = Condition::Any(vec![
            Condition::ControlledBy(Power::ArchonDelaine),
            Condition::StateIs(ControlState::Fortified),
        ]);

        assert_eq!(all.evaluate(&facts, action), Ok(true));
        assert_eq!(any.evaluate(&facts, action), Ok(false));
        assert_eq!(Condition::Not(Box::new(any)).evaluate(&facts, action), Ok(true));
        assert_eq!(Condition::All(vec![]).evaluate(&facts, action), Ok(true));
        assert_eq!(Condition::Any(vec![]).evaluate(&facts, action), Ok(false));
    }
}
