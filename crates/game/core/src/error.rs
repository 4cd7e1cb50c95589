//! Common error infrastructure for game-core.
//!
//! This module provides shared types and traits used across all error types in game-core.
//! Domain-specific errors (e.g., `SummonError`, `BattleError`) are defined in their
//! respective modules alongside the operations they validate.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each engine has its own error type with specific variants
//! - **Severity Classification**: Errors are categorized so callers can map them
//!   to transport status codes without string matching
//! - **Determinism**: No error is transient; the same inputs always reproduce
//!   the same error

/// Severity level of an error, used for categorization by callers.
///
/// - **Validation**: Invalid input, rejected before any state mutation
/// - **Resource**: Player lacks something the request needs, rejected before mutation
/// - **Fatal**: Configuration defect (e.g. a malformed rate table), never retried
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: unknown banner, empty team, hero not owned
    Validation,

    /// Resource error - the player cannot afford or is not yet eligible.
    ///
    /// Examples: insufficient currency, daily free summon already claimed
    Resource,

    /// Fatal error - catalog data violates an invariant.
    ///
    /// Examples: rate table sums above 1, empty reward pool
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Resource => "resource",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error indicates broken catalog data.
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Fatal)
    }
}

/// Common trait for all game-core errors.
///
/// This trait provides a uniform interface for error classification across
/// all error types in the crate.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Error codes are stable identifiers; never reuse a code for a new meaning
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// This is useful for error categorization, metrics, and testing.
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
