//! Control states, their thresholds, and the action resolver built on them.
mod resolver;
mod state;
mod thresholds;

pub use resolver::{
    ActionResolver, ConflictStanding, ControlProgress, control_points_for, resolve_action,
};
pub use state::ControlState;
pub use thresholds::{ControlThresholds, ThresholdError};
