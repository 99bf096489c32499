//! Serialized form of a [`ScoreCard`].
//!
//! Frames validate themselves while they are deserialized; this layer adds
//! the card-wide rule that a name appears at most once.

use std::collections::HashSet;

use super::{Participant, ScoreCard, ScoreCardError};
use crate::config::GameConfig;

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub(super) struct ScoreCardSnapshot {
    config: GameConfig,
    participants: Vec<Participant>,
}

impl TryFrom<ScoreCardSnapshot> for ScoreCard {
    type Error = ScoreCardError;

    fn try_from(snapshot: ScoreCardSnapshot) -> Result<Self, Self::Error> {
        let mut seen = HashSet::with_capacity(snapshot.participants.len());
        for participant in &snapshot.participants {
            if !seen.insert(participant.player.name()) {
                return Err(ScoreCardError::DuplicatePlayer {
                    name: participant.player.name().to_owned(),
                });
            }
        }

        Ok(Self {
            config: snapshot.config,
            participants: snapshot.participants,
        })
    }
}

impl From<ScoreCard> for ScoreCardSnapshot {
    fn from(card: ScoreCard) -> Self {
        Self {
            config: card.config,
            participants: card.participants,
        }
    }
}
