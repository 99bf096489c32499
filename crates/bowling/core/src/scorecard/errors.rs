//! Error types for score card operations.

use crate::error::{ErrorSeverity, GameError};
use crate::frame::FrameError;
use crate::state::PlayerId;

/// Errors surfaced while registering players or routing their turns.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScoreCardError {
    #[error("player {player} is not registered on this score card")]
    UnknownPlayer { player: PlayerId },

    #[error("player '{name}' is already registered")]
    DuplicatePlayer { name: String },

    #[error("player {player} has no open frame left")]
    GameComplete { player: PlayerId },

    #[error("frame {frame} rejected the turn: {source}")]
    Frame { frame: usize, source: FrameError },
}

impl GameError for ScoreCardError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnknownPlayer { .. } | Self::DuplicatePlayer { .. } => ErrorSeverity::Validation,
            Self::GameComplete { .. } => ErrorSeverity::Recoverable,
            Self::Frame { source, .. } => source.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownPlayer { .. } => "SCORECARD_UNKNOWN_PLAYER",
            Self::DuplicatePlayer { .. } => "SCORECARD_DUPLICATE_PLAYER",
            Self::GameComplete { .. } => "SCORECARD_GAME_COMPLETE",
            Self::Frame { source, .. } => source.error_code(),
        }
    }
}
