use std::fmt;

use crate::config::GameConfig;
use crate::error::{ErrorSeverity, GameError};

/// Rejected pin counts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnError {
    #[error("cannot topple negative pins")]
    NegativePins { pins: i32 },

    #[error("cannot topple more than 10 pins")]
    TooManyPins { pins: i32 },
}

impl GameError for TurnError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NegativePins { .. } => "TURN_NEGATIVE_PINS",
            Self::TooManyPins { .. } => "TURN_TOO_MANY_PINS",
        }
    }
}

/// Pins toppled by a single roll.
///
/// Always within `0..=10`; the only way to build one is through
/// [`Turn::new`] (or `TryFrom<i32>`), which enforces the range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "i32", into = "i32")
)]
pub struct Turn {
    pins_toppled: u8,
}

impl Turn {
    /// A roll that missed every pin.
    pub const GUTTER: Self = Self { pins_toppled: 0 };
    /// Highest pin count a single roll can topple.
    pub const MAX_PINS: u8 = GameConfig::PINS_PER_FRAME;

    pub fn new(pins: i32) -> Result<Self, TurnError> {
        if pins < 0 {
            return Err(TurnError::NegativePins { pins });
        }
        if pins > i32::from(Self::MAX_PINS) {
            return Err(TurnError::TooManyPins { pins });
        }
        Ok(Self {
            pins_toppled: pins as u8,
        })
    }

    #[inline]
    pub const fn pins_toppled(self) -> u8 {
        self.pins_toppled
    }

    /// Returns true if the roll knocked down a full rack.
    #[inline]
    pub const fn is_strike_roll(self) -> bool {
        self.pins_toppled == Self::MAX_PINS
    }
}

impl TryFrom<i32> for Turn {
    type Error = TurnError;

    fn try_from(pins: i32) -> Result<Self, Self::Error> {
        Self::new(pins)
    }
}

impl From<Turn> for i32 {
    fn from(turn: Turn) -> Self {
        i32::from(turn.pins_toppled)
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pins_toppled)
    }
}
