use std::fmt;

use crate::error::{ErrorSeverity, GameError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerError {
    #[error("player name missing")]
    MissingName,

    #[error("player name cannot be blank")]
    BlankName,
}

impl GameError for PlayerError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingName => "PLAYER_MISSING_NAME",
            Self::BlankName => "PLAYER_BLANK_NAME",
        }
    }
}

/// A named participant. Two players with the same name are the same player.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Option<String>", into = "String")
)]
pub struct Player {
    name: String,
}

impl Player {
    /// Creates a player, rejecting empty and whitespace-only names.
    pub fn new(name: impl Into<String>) -> Result<Self, PlayerError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(PlayerError::BlankName);
        }
        Ok(Self { name })
    }

    pub fn named(name: impl Into<String>) -> Result<Self, PlayerError> {
        Self::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl TryFrom<Option<String>> for Player {
    type Error = PlayerError;

    fn try_from(name: Option<String>) -> Result<Self, Self::Error> {
        Self::new(name.ok_or(PlayerError::MissingName)?)
    }
}

impl From<Player> for String {
    fn from(player: Player) -> Self {
        player.name
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
