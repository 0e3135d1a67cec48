//! System fact snapshots and the adapter that builds them from database rows.
mod error;
#[cfg(feature = "serde")]
mod record;
mod snapshot;

pub use error::FactError;
#[cfg(feature = "serde")]
pub use record::{
    ConflictRecord, LOST_CONTROL_MARKER, SystemRecord, normalize_control_progress,
};
pub use snapshot::SystemFacts;
