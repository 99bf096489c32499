use tracing::debug;

use super::{ScoreCard, ScoreCardError, TakeTurn};
use crate::frame::Frame;
use crate::state::PlayerId;

/// Turn routing methods for ScoreCard.
impl ScoreCard {
    /// Records a roll on the player's first open frame.
    ///
    /// Fails with [`ScoreCardError::GameComplete`] once all ten frames are
    /// closed. A rejected turn leaves the card unchanged.
    pub fn take_turn(&mut self, command: TakeTurn) -> Result<&mut Self, ScoreCardError> {
        let TakeTurn { player, turn } = command;
        let frames = self.player_frames_mut(player)?;
        let (index, frame) =
            first_open(frames).ok_or(ScoreCardError::GameComplete { player })?;

        frame
            .take_turn(turn)
            .map_err(|source| ScoreCardError::Frame {
                frame: index + 1,
                source,
            })?;

        debug!(
            player = %player,
            frame = index + 1,
            pins = turn.pins_toppled(),
            status = %frame.status(),
            "turn recorded"
        );
        Ok(self)
    }

    /// 1-based number of the frame the player's next roll lands in, or `None`
    /// when every frame is closed.
    pub fn current_frame(&self, player: PlayerId) -> Result<Option<usize>, ScoreCardError> {
        let frames = self.player_frames(player)?;
        Ok(frames.iter().position(Frame::is_open).map(|index| index + 1))
    }

    /// Returns true once all ten of the player's frames are closed.
    pub fn is_complete(&self, player: PlayerId) -> Result<bool, ScoreCardError> {
        Ok(self.current_frame(player)?.is_none())
    }
}

fn first_open(frames: &mut [Frame]) -> Option<(usize, &mut Frame)> {
    frames.iter_mut().enumerate().find(|(_, frame)| frame.is_open())
}
