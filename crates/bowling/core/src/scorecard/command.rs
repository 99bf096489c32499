use crate::state::{PlayerId, Turn};

/// Request to record `turn` for `player` on their first open frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TakeTurn {
    pub player: PlayerId,
    pub turn: Turn,
}

impl TakeTurn {
    pub fn new(player: PlayerId, turn: Turn) -> Self {
        Self { player, turn }
    }
}
