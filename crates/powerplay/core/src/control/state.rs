//! The four control states of a star system.

/// A system's level of entrenchment by its controlling power.
///
/// Ordered `Unoccupied < Exploited < Fortified < Stronghold`.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
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
pub enum ControlState {
    #[default]
    Unoccupied,
    Exploited,
    Fortified,
    Stronghold,
}

impl ControlState {
    /// The next state up the ladder.
    pub const fn next(&self) -> Option<Self> {
        match self {
            Self::Unoccupied => Some(Self::Exploited),
            Self::Exploited => Some(Self::Fortified),
            Self::Fortified => Some(Self::Stronghold),
            Self::Stronghold => None,
        }
    }

    pub const fn is_occupied(&self) -> bool {
        !matches!(self, Self::Unoccupied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ladder_is_ordered() {
        assert!(ControlState::Unoccupied < ControlState::Exploited);
        assert!(ControlState::Fortified < ControlState::Stronghold);
        assert_eq!(ControlState::Fortified.next(), Some(ControlState::Stronghold));
        assert_eq!(ControlState::Stronghold.next(), None);
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("stronghold".parse::<ControlState>(), Ok(ControlState::Stronghold));
        assert!("Contested".parse::<ControlState>().is_err());
    }
}
