//! Strategic actions a player can take against a system's control state.

use bitflags::bitflags;

/// One of the three actions the eligibility engine understands.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum StrategicAction {
    Acquire,
    Reinforce,
    Undermine,
}

impl StrategicAction {
    pub const ALL: [StrategicAction; 3] = [Self::Acquire, Self::Reinforce, Self::Undermine];

    /// The support flag an activity must carry to be offered for this action.
    pub const fn flag(&self) -> ActionSet {
        match self {
            Self::Acquire => ActionSet::ACQUIRE,
            Self::Reinforce => ActionSet::REINFORCE,
            Self::Undermine => ActionSet::UNDERMINE,
        }
    }

    /// Parses a UI label such as "Undermine" or the older "undermining".
    ///
    /// Returns `None` for anything else; callers treat that as "no activities".
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        label.parse().ok().or_else(|| {
            match label.to_ascii_lowercase().as_str() {
                "acquisition" => Some(Self::Acquire),
                "reinforcement" => Some(Self::Reinforce),
                "undermining" => Some(Self::Undermine),
                _ => None,
            }
        })
    }
}

bitflags! {
    /// Which strategic actions an activity is valid for, before side conditions.
    ///
    /// Serialized as `"ACQUIRE | REINFORCE"` in human-readable formats.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct ActionSet: u8 {
        const ACQUIRE   = 1 << 0;
        const REINFORCE = 1 << 1;
        const UNDERMINE = 1 << 2;
    }
}

impl ActionSet {
    /// Returns true if the set includes `action`.
    #[inline]
    pub const fn supports(&self, action: StrategicAction) -> bool {
        self.contains(action.flag())
    }
}

/// The action implied by a system's ownership and state for a home power.
///
/// `OutOfRange` is not an engine action: no activities are offered for it.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum ResolvedAction {
    Reinforce,
    Acquire,
    #[strum(serialize = "Out of Range")]
    OutOfRange,
    Undermine,
}

impl ResolvedAction {
    /// The engine action for this resolution, if there is one.
    pub const fn strategic(&self) -> Option<StrategicAction> {
        match self {
            Self::Reinforce => Some(StrategicAction::Reinforce),
            Self::Acquire => Some(StrategicAction::Acquire),
            Self::Undermine => Some(StrategicAction::Undermine),
            Self::OutOfRange => None,
        }
    }
}

impl From<StrategicAction> for ResolvedAction {
    fn from(action: StrategicAction) -> Self {
        match action {
            StrategicAction::Acquire => Self::Acquire,
            StrategicAction::Reinforce => Self::Reinforce,
            StrategicAction::Undermine => Self::Undermine,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_parse_in_both_vocabularies() {
        assert_eq!(StrategicAction::from_label("Undermine"), Some(StrategicAction::Undermine));
        assert_eq!(StrategicAction::from_label("acquire"), Some(StrategicAction::Acquire));
        assert_eq!(
            StrategicAction::from_label("reinforcement"),
            Some(StrategicAction::Reinforce)
        );
        assert_eq!(StrategicAction::from_label("Out of Range"), None);
        assert_eq!(StrategicAction::from_label(""), None);
    }

    #[test]
    fn action_set_membership() {
        let set = ActionSet::ACQUIRE | ActionSet::UNDERMINE;
        assert!(set.supports(StrategicAction::Acquire));
        assert!(!set.supports(StrategicAction::Reinforce));
        assert!(set.supports(StrategicAction::Undermine));
        assert!(!ActionSet::empty().supports(StrategicAction::Acquire));
    }

    #[test]
    fn out_of_range_has_no_engine_action() {
        assert_eq!(ResolvedAction::OutOfRange.strategic(), None);
        assert_eq!(ResolvedAction::OutOfRange.to_string(), "Out of Range");
        assert_eq!(
            ResolvedAction::Undermine.strategic(),
            Some(StrategicAction::Undermine)
        );
    }
}
