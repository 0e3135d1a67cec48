//! Activity eligibility for a system snapshot and strategic action.
mod activity;
mod engine;

pub use activity::{CategoryGroup, EligibleActivity, group_by_category};
pub use engine::EligibilityEngine;
