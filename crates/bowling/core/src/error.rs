//! Error classification shared by every bowling-core error.
//!
//! Each component keeps its own error enum next to the type it guards
//! (`TurnError`, `PlayerError`, `FrameError`, `ScoreCardError`). They all
//! implement [`GameError`], so callers can branch on [`ErrorSeverity`] and log
//! a stable code without matching every variant. A failed operation never
//! leaves partial changes behind.

/// How a caller should react to a failed operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// The request was valid but the card cannot take it any more, e.g. a
    /// roll after the tenth frame closed.
    Recoverable,

    /// The input itself is wrong: eleven pins, a blank name, a roll on a
    /// closed frame. Retrying the same call fails again.
    Validation,

    /// Restored data describes a frame that rolling cannot produce.
    Internal,

    /// A live frame broke its own invariant.
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

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if the error points at corrupted or impossible state.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Implemented by every error enum in this crate, alongside the
/// `thiserror`-derived `Display`.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
