/// What [`ScoreCard::add_participant`](crate::ScoreCard::add_participant) does
/// with a player whose name is already on the card.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ReRegistration {
    /// Refuse the registration with `ScoreCardError::DuplicatePlayer`.
    #[default]
    Reject,
    /// Keep the player's id but replace their frames with ten fresh ones.
    Reset,
}

/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Policy applied when a player registers twice.
    pub re_registration: ReRegistration,
}

impl GameConfig {
    // ===== compile-time constants =====
    /// Number of frames every player gets on a score card.
    pub const FRAMES_PER_GAME: usize = 10;
    /// Pins standing at the start of a frame.
    pub const PINS_PER_FRAME: u8 = 10;

    #[must_use]
    pub fn new() -> Self {
        Self {
            re_registration: ReRegistration::default(),
        }
    }

    #[must_use]
    pub fn with_re_registration(re_registration: ReRegistration) -> Self {
        Self { re_registration }
    }
}
