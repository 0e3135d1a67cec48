//! Errors raised while building or checking a fact snapshot.

use crate::control::ControlState;
use crate::error::{ErrorSeverity, PowerplayError};

/// Errors describing fact-source data the core cannot accept.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum FactError {
    /// A row without a usable `StarSystem` name.
    #[error("system row has no name")]
    MissingName,

    /// A power name that is not one of the known powers.
    #[error("unknown power '{name}' in {field}")]
    UnknownPower { field: &'static str, name: String },

    /// A control state name that is not one of the four states.
    #[error("unknown control state '{0}'")]
    UnknownState(String),

    /// A progress value that is NaN or infinite.
    #[error("{field} is not a finite number ({value})")]
    NonFiniteProgress { field: &'static str, value: f64 },

    /// Conflict progress reported for a system that is already occupied.
    #[error("conflict progress present on a {0} system")]
    ConflictWhileOccupied(ControlState),

    /// Stronghold carrier reported for a system that is not a Stronghold.
    #[error("stronghold carrier present on a {0} system")]
    CarrierOutsideStronghold(ControlState),
}

impl PowerplayError for FactError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::MissingName
            | Self::UnknownPower { .. }
            | Self::UnknownState(_)
            | Self::NonFiniteProgress { .. } => ErrorSeverity::Validation,
            Self::ConflictWhileOccupied(_) | Self::CarrierOutsideStronghold(_) => {
                ErrorSeverity::Internal
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingName => "FACT_MISSING_NAME",
            Self::UnknownPower { .. } => "FACT_UNKNOWN_POWER",
            Self::UnknownState(_) => "FACT_UNKNOWN_STATE",
            Self::NonFiniteProgress { .. } => "FACT_NON_FINITE_PROGRESS",
            Self::ConflictWhileOccupied(_) => "FACT_CONFLICT_WHILE_OCCUPIED",
            Self::CarrierOutsideStronghold(_) => "FACT_CARRIER_OUTSIDE_STRONGHOLD",
        }
    }
}
