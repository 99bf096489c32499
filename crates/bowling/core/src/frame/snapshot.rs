//! Serialized form of a [`Frame`].
//!
//! Field layout matches the frame itself. Restoring goes through
//! [`TryFrom`], which only accepts the flag and turn combinations the roll
//! state machine can produce.

use super::{Frame, FrameError};
use crate::config::GameConfig;
use crate::state::Turn;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub(super) struct FrameSnapshot {
    first_turn: Option<Turn>,
    second_turn: Option<Turn>,
    strike: bool,
    spare: bool,
}

impl FrameSnapshot {
    fn is_reachable(&self) -> bool {
        let pins = |turn: Option<Turn>| turn.map_or(0, Turn::pins_toppled);
        match (self.strike, self.spare, self.first_turn, self.second_turn) {
            (true, false, None, None) => true,
            (false, true, Some(first), None) => !first.is_strike_roll(),
            (false, false, None, None) => true,
            (false, false, Some(first), None) => !first.is_strike_roll(),
            (false, false, Some(_), Some(_)) => {
                pins(self.first_turn) + pins(self.second_turn) < GameConfig::PINS_PER_FRAME
            }
            _ => false,
        }
    }
}

impl TryFrom<FrameSnapshot> for Frame {
    type Error = FrameError;

    fn try_from(snapshot: FrameSnapshot) -> Result<Self, Self::Error> {
        if !snapshot.is_reachable() {
            return Err(FrameError::Unreachable);
        }
        Ok(Self {
            first_turn: snapshot.first_turn,
            second_turn: snapshot.second_turn,
            strike: snapshot.strike,
            spare: snapshot.spare,
        })
    }
}

impl From<Frame> for FrameSnapshot {
    fn from(frame: Frame) -> Self {
        Self {
            first_turn: frame.first_turn,
            second_turn: frame.second_turn,
            strike: frame.strike,
            spare: frame.spare,
        }
    }
}
