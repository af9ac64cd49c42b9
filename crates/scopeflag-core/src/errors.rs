//! Error taxonomy for the flag registry
//!
//! Two families of failure exist:
//!
//! - `ParseFailure` — raw input rejected by a kind's parse function. Always
//!   recoverable; propagated to the immediate caller, which owns user-facing
//!   reporting. The registry never logs-and-swallows these.
//! - `UnregisteredKind` / `UnregisteredKindId` / `ValueTypeMismatch` — contract
//!   violations (a kind used before registration, or a typed read against the
//!   wrong value type). These indicate initialization or programming bugs and
//!   must not be silently defaulted.

use thiserror::Error;

use crate::kind::{ErasedKind, KindId};

/// Result type alias using FlagError
pub type Result<T> = std::result::Result<T, FlagError>;

/// Canonical error type for registry operations
#[derive(Debug, Clone, Error)]
pub enum FlagError {
    /// A kind's parse function rejected the raw input
    ///
    /// Carries the kind handle so reporting can include the canonical name
    /// and the kind's example value as a hint.
    #[error(
        "failed to parse flag '{}': value '{value}' was not accepted: {reason} (example: '{}')",
        .kind.name(),
        .kind.example()
    )]
    ParseFailure {
        kind: &'static dyn ErasedKind,
        value: String,
        reason: String,
    },

    /// A kind was queried but is not registered anywhere in the container chain
    #[error("unrecognized flag '{label}': all flag kinds must be registered in the global flag container")]
    UnregisteredKind { label: String },

    /// Type-erased sibling of `UnregisteredKind`, raised when only the identity is known
    #[error("unrecognized flag id {id:?}: all flag kinds must be registered in the global flag container")]
    UnregisteredKindId { id: KindId },

    /// A typed read found a stored value of a different type than requested
    #[error("flag '{label}' holds a value of a different type than requested")]
    ValueTypeMismatch { label: String },
}

impl FlagError {
    /// Get the stable error code for this error
    pub fn code(&self) -> &'static str {
        match self {
            FlagError::ParseFailure { .. } => "ERR_PARSE_FAILURE",
            FlagError::UnregisteredKind { .. } => "ERR_UNREGISTERED_KIND",
            FlagError::UnregisteredKindId { .. } => "ERR_UNREGISTERED_KIND",
            FlagError::ValueTypeMismatch { .. } => "ERR_VALUE_TYPE_MISMATCH",
        }
    }

    /// Whether this error is expected to be handled and reported, rather than
    /// treated as a fatal contract violation
    pub fn is_recoverable(&self) -> bool {
        matches!(self, FlagError::ParseFailure { .. })
    }
}
