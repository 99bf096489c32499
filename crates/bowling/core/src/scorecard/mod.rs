//! Score card: the registry of players and their frames.
//!
//! Players are registered once and receive a [`PlayerId`]; every other
//! operation is keyed by that id. Each player owns exactly
//! [`GameConfig::FRAMES_PER_GAME`] frames, and turns are always routed to the
//! first frame that is still open.
mod command;
mod errors;
#[cfg(feature = "serde")]
mod snapshot;
mod turns;

use tracing::{debug, warn};

use crate::config::{GameConfig, ReRegistration};
use crate::frame::Frame;
use crate::state::{Player, PlayerId};

pub use command::TakeTurn;
pub use errors::ScoreCardError;

#[cfg(feature = "serde")]
use snapshot::ScoreCardSnapshot;

type Frames = [Frame; GameConfig::FRAMES_PER_GAME];

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
struct Participant {
    player: Player,
    frames: Frames,
}

impl Participant {
    fn new(player: Player) -> Self {
        Self {
            player,
            frames: fresh_frames(),
        }
    }
}

fn fresh_frames() -> Frames {
    std::array::from_fn(|_| Frame::create())
}

/// Players and their frames, in registration order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "ScoreCardSnapshot", into = "ScoreCardSnapshot")
)]
pub struct ScoreCard {
    config: GameConfig,
    /// Indexed by `PlayerId`.
    participants: Vec<Participant>,
}

impl ScoreCard {
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    #[must_use]
    pub fn with_config(config: GameConfig) -> Self {
        Self {
            config,
            participants: Vec::new(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Registers a player with ten fresh frames and returns their handle.
    ///
    /// A name that is already on the card is handled according to
    /// [`GameConfig::re_registration`].
    pub fn add_participant(&mut self, player: Player) -> Result<PlayerId, ScoreCardError> {
        if let Some(existing) = self.lookup(&player) {
            return match self.config.re_registration {
                ReRegistration::Reject => Err(ScoreCardError::DuplicatePlayer {
                    name: player.name().to_owned(),
                }),
                ReRegistration::Reset => {
                    self.participants[existing.index()].frames = fresh_frames();
                    warn!(
                        player = %existing,
                        name = player.name(),
                        "frames reset on re-registration"
                    );
                    Ok(existing)
                }
            };
        }

        let id = PlayerId(self.participants.len() as u32);
        debug!(player = %id, name = player.name(), "participant added");
        self.participants.push(Participant::new(player));
        Ok(id)
    }

    pub fn amount_of_players(&self) -> usize {
        self.participants.len()
    }

    /// Registered players in registration order.
    pub fn players(&self) -> Vec<Player> {
        self.participants
            .iter()
            .map(|participant| participant.player.clone())
            .collect()
    }

    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> + '_ {
        (0..self.participants.len()).map(|index| PlayerId(index as u32))
    }

    /// Finds the handle issued for `player`, if they are registered.
    pub fn lookup(&self, player: &Player) -> Option<PlayerId> {
        self.participants
            .iter()
            .position(|participant| participant.player == *player)
            .map(|index| PlayerId(index as u32))
    }

    pub fn player(&self, id: PlayerId) -> Result<&Player, ScoreCardError> {
        Ok(&self.participant(id)?.player)
    }

    /// The player's ten frames in order.
    pub fn player_frames(&self, id: PlayerId) -> Result<&[Frame], ScoreCardError> {
        Ok(&self.participant(id)?.frames)
    }

    /// Mutable access to the player's frames. Changes made through the slice
    /// are changes to the card.
    pub fn player_frames_mut(&mut self, id: PlayerId) -> Result<&mut [Frame], ScoreCardError> {
        self.participants
            .get_mut(id.index())
            .map(|participant| &mut participant.frames[..])
            .ok_or(ScoreCardError::UnknownPlayer { player: id })
    }

    /// Raw pins felled across all frames, without strike or spare bonuses.
    pub fn total_pins(&self, id: PlayerId) -> Result<u32, ScoreCardError> {
        Ok(self
            .player_frames(id)?
            .iter()
            .map(|frame| u32::from(frame.pins_toppled()))
            .sum())
    }

    /// Renders the player's scorecard line: ten frame tokens joined by spaces.
    pub fn print(&self, id: PlayerId) -> Result<String, ScoreCardError> {
        Ok(self
            .player_frames(id)?
            .iter()
            .map(Frame::print)
            .collect::<Vec<_>>()
            .join(" "))
    }

    fn participant(&self, id: PlayerId) -> Result<&Participant, ScoreCardError> {
        self.participants
            .get(id.index())
            .ok_or(ScoreCardError::UnknownPlayer { player: id })
    }
}
