//! Frame state machine errors.

use crate::error::{ErrorSeverity, GameError};

use super::FrameStatus;

/// Errors raised when a roll does not fit the frame's current state.
///
/// All variants except [`FrameError::InvariantViolation`] and
/// [`FrameError::Unreachable`] are caller errors;
/// checking [`Frame::is_open`](super::Frame::is_open) before
/// [`Frame::take_turn`](super::Frame::take_turn) avoids them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FrameError {
    #[error("can't take turns on a closed frame ({status})")]
    Closed { status: FrameStatus },

    #[error("can't register first turn twice")]
    FirstTurnTwice,

    #[error("can't register first turn after the second")]
    FirstAfterSecond,

    #[error("can't register second turn without a first turn")]
    SecondWithoutFirst,

    #[error("can't register second turn twice")]
    SecondTurnTwice,

    /// The frame reported itself open but both turn slots are filled.
    #[error("frame is open but both turns are already registered")]
    InvariantViolation,

    /// Restored flags and turns that no sequence of rolls produces.
    #[error("frame state cannot be reached by rolling")]
    Unreachable,
}

impl GameError for FrameError {
    fn severity(&self) -> ErrorSeverity {
        use FrameError::*;
        match self {
            Closed { .. } | FirstTurnTwice | FirstAfterSecond => ErrorSeverity::Validation,
            SecondWithoutFirst | SecondTurnTwice => ErrorSeverity::Validation,
            Unreachable => ErrorSeverity::Internal,
            InvariantViolation => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        use FrameError::*;
        match self {
            Closed { .. } => "FRAME_CLOSED",
            FirstTurnTwice => "FRAME_FIRST_TURN_TWICE",
            FirstAfterSecond => "FRAME_FIRST_AFTER_SECOND",
            SecondWithoutFirst => "FRAME_SECOND_WITHOUT_FIRST",
            SecondTurnTwice => "FRAME_SECOND_TURN_TWICE",
            InvariantViolation => "FRAME_INVARIANT_VIOLATION",
            Unreachable => "FRAME_UNREACHABLE",
        }
    }
}
