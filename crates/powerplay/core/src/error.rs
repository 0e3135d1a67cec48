//! Common error infrastructure for powerplay-core.
//!
//! Domain-specific errors (`ConditionError`, `FactError`, `ThresholdError`)
//! live next to the types they validate. This module provides the shared
//! severity classification and the trait every error implements.

/// Severity level of an error, used for categorization and logging priority.
///
/// - **Recoverable**: the caller can drop the offending item and carry on
/// - **Validation**: invalid input that should be rejected without retry
/// - **Internal**: unexpected inconsistency that needs investigation
/// - **Fatal**: configuration is unusable, nothing can be computed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - the affected entry is skipped.
    ///
    /// Examples: a side condition that cannot read its facts
    Recoverable,

    /// Validation error - the input must be fixed before it is accepted.
    ///
    /// Examples: unknown power name, unknown control state
    Validation,

    /// Internal error - facts contradict their own invariants.
    ///
    /// Examples: conflict progress reported for an occupied system
    Internal,

    /// Fatal error - configuration cannot be used at all.
    ///
    /// Examples: control thresholds that do not increase
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }
}

/// Common trait for all powerplay-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
/// - Return a stable, upper-case `error_code` per variant
pub trait PowerplayError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
