//! The activity table: definitions, their side conditions and text templates.
mod catalog;
mod condition;
mod definition;
mod template;

pub use catalog::ActivityCatalog;
pub use condition::{Condition, ConditionError};
pub use definition::{ActivityDefinition, BonusPowers, Category};
pub use template::Template;
