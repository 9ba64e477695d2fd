//! Shared error classification for combat-core.
//!
//! Each failure family (`CombatError`, `InvalidActionError`, ...) lives next
//! to the code that raises it. This module only holds what they have in
//! common: a severity tag and a stable code for logs, events and tests.

/// How a caller should react to a failed operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ErrorSeverity {
    /// The turn can be retried with a different choice (not enough MP,
    /// item not carried, level too low).
    Recoverable,

    /// The request itself is malformed (unknown action, missing name).
    Validation,

    /// The session is in a state it should never reach.
    Internal,
}

impl ErrorSeverity {
    pub const fn is_recoverable(self) -> bool {
        matches!(self, Self::Recoverable)
    }

    pub const fn is_internal(self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Implemented by every error enum in the crate.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Stable snake_case identifier of the variant.
    ///
    /// Falls back to the type name for errors that do not override it.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
