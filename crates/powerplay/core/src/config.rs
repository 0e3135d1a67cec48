use crate::control::{ControlThresholds, ThresholdError};
use crate::power::Power;

/// Runtime configuration for the rule layer.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PowerplayConfig {
    /// Power whose point of view actions are resolved from.
    pub home_power: Power,
    pub thresholds: ControlThresholds,
}

impl PowerplayConfig {
    pub const DEFAULT_HOME_POWER: Power = Power::LiYongRui;

    pub fn new() -> Self {
        Self {
            home_power: Self::DEFAULT_HOME_POWER,
            thresholds: ControlThresholds::standard(),
        }
    }

    pub fn with_home_power(mut self, home_power: Power) -> Self {
        self.home_power = home_power;
        self
    }

    pub fn with_thresholds(mut self, thresholds: ControlThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn validate(&self) -> Result<(), ThresholdError> {
        self.thresholds.validate()
    }
}

impl Default for PowerplayConfig {
    fn default() -> Self {
        Self::new()
    }
}
