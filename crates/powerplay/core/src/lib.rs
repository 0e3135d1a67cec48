//! Activity eligibility rules and control-state policy for Powerplay systems.
//!
//! `powerplay-core` holds the pure rule layer behind the dashboard: the
//! activity table ([`ActivityCatalog`]), the filter that decides which
//! activities are usable in a system for a strategic action
//! ([`EligibilityEngine`]), and the resolver that derives a home power's
//! action and control progress from a system snapshot ([`ActionResolver`]).
//! Everything here reads a [`SystemFacts`] snapshot and never mutates it.
//!
//! Data files and loaders live in `powerplay-content`; enable the `serde`
//! feature to deserialize catalogs, thresholds and database rows.
pub mod action;
pub mod activity;
pub mod config;
pub mod control;
pub mod eligibility;
pub mod error;
pub mod facts;
pub mod power;
pub mod support;

pub use action::{ActionSet, ResolvedAction, StrategicAction};
pub use activity::{
    ActivityCatalog, ActivityDefinition, BonusPowers, Category, Condition, ConditionError,
    Template,
};
pub use config::PowerplayConfig;
pub use control::{
    ActionResolver, ConflictStanding, ControlProgress, ControlState, ControlThresholds,
    ThresholdError, control_points_for, resolve_action,
};
pub use eligibility::{CategoryGroup, EligibilityEngine, EligibleActivity, group_by_category};
pub use error::{ErrorSeverity, PowerplayError};
pub use facts::{FactError, SystemFacts};
#[cfg(feature = "serde")]
pub use facts::{ConflictRecord, SystemRecord};
pub use power::Power;
pub use support::{SupportingSystem, support_radius, supporting_systems, supports};
