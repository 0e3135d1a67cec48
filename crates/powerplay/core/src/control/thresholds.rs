//! Control-point thresholds for the four control states.
//!
//! Two different threshold sets have been in use over the game's history.
//! The table is configuration: [`ControlThresholds::standard`] carries the
//! values the dashboard currently ships with, and any other set can be
//! loaded from TOML and checked with [`ControlThresholds::validate`].

use crate::control::ControlState;
use crate::error::{ErrorSeverity, PowerplayError};

/// Cumulative control points required to reach or hold each state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControlThresholds {
    /// Points at which an unoccupied system enters conflict.
    pub conflict: u64,
    /// Points needed to win an unoccupied-system contest.
    pub acquisition: u64,
    pub exploited: u64,
    pub fortified: u64,
    pub stronghold: u64,
}

impl ControlThresholds {
    pub const CONFLICT: u64 = 36_000;
    pub const ACQUISITION: u64 = 120_000;
    /// Same as acquisition.
    pub const EXPLOITED: u64 = 120_000;
    pub const FORTIFIED: u64 = 350_000;
    pub const STRONGHOLD: u64 = 650_000;

    /// The threshold set the dashboard ships with.
    pub const fn standard() -> Self {
        Self {
            conflict: Self::CONFLICT,
            acquisition: Self::ACQUISITION,
            exploited: Self::EXPLOITED,
            fortified: Self::FORTIFIED,
            stronghold: Self::STRONGHOLD,
        }
    }

    /// Checks the table's ordering invariants.
    pub fn validate(&self) -> Result<(), ThresholdError> {
        if self.conflict == 0 {
            return Err(ThresholdError::Zero("conflict"));
        }
        if self.acquisition == 0 {
            return Err(ThresholdError::Zero("acquisition"));
        }
        if self.exploited == 0 {
            return Err(ThresholdError::Zero("exploited"));
        }
        if self.conflict > self.acquisition {
            return Err(ThresholdError::ConflictAboveAcquisition {
                conflict: self.conflict,
                acquisition: self.acquisition,
            });
        }

        let ladder = [
            (ControlState::Exploited, self.exploited),
            (ControlState::Fortified, self.fortified),
            (ControlState::Stronghold, self.stronghold),
        ];
        for pair in ladder.windows(2) {
            let (lower, lower_value) = pair[0];
            let (upper, upper_value) = pair[1];
            if upper_value <= lower_value {
                return Err(ThresholdError::NotIncreasing {
                    lower,
                    lower_value,
                    upper,
                    upper_value,
                });
            }
        }

        Ok(())
    }

    /// Threshold of a state; zero for Unoccupied.
    pub const fn for_state(&self, state: ControlState) -> u64 {
        match state {
            ControlState::Unoccupied => 0,
            ControlState::Exploited => self.exploited,
            ControlState::Fortified => self.fortified,
            ControlState::Stronghold => self.stronghold,
        }
    }

    /// Threshold that a system's progress fraction is measured against.
    ///
    /// Unoccupied systems progress toward Exploited; occupied systems are
    /// measured against their own state's threshold.
    pub const fn progress_target(&self, state: ControlState) -> u64 {
        match state {
            ControlState::Unoccupied => self.exploited,
            occupied => self.for_state(occupied),
        }
    }
}

impl Default for ControlThresholds {
    fn default() -> Self {
        Self::standard()
    }
}

/// Errors raised by an invalid threshold table.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ThresholdError {
    #[error("{0} threshold must be greater than zero")]
    Zero(&'static str),

    #[error("{upper} threshold ({upper_value}) must exceed {lower} threshold ({lower_value})")]
    NotIncreasing {
        lower: ControlState,
        lower_value: u64,
        upper: ControlState,
        upper_value: u64,
    },

    #[error("conflict threshold ({conflict}) exceeds acquisition threshold ({acquisition})")]
    ConflictAboveAcquisition { conflict: u64, acquisition: u64 },
}

impl PowerplayError for ThresholdError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Zero(_) => "THRESHOLD_ZERO",
            Self::NotIncreasing { .. } => "THRESHOLD_NOT_INCREASING",
            Self::ConflictAboveAcquisition { .. } => "THRESHOLD_CONFLICT_ABOVE_ACQUISITION",
        }
    }
}
