//! Bowling score card model.
//!
//! `bowling-core` records the rolls of every player across ten frames and
//! renders a textual scorecard. It tracks raw pin counts only: strikes and
//! spares close a frame and change how it prints, but no bonus look-ahead is
//! applied.
//!
//! All mutation flows through [`ScoreCard::take_turn`], which finds the
//! player's first open [`Frame`] and lets its state machine decide whether the
//! roll is a first turn, a second turn, a strike or a spare.
//!
//! # Example
//!
//! ```
//! use bowling_core::{Player, ScoreCard, TakeTurn, Turn};
//!
//! let mut card = ScoreCard::new();
//! let steven = card.add_participant(Player::named("steven")?)?;
//!
//! card.take_turn(TakeTurn::new(steven, Turn::new(2)?))?
//!     .take_turn(TakeTurn::new(steven, Turn::new(9)?))?;
//!
//! assert_eq!(card.print(steven)?, "2 / - - - - - - - - - - - - - - - - - -");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
pub mod config;
pub mod error;
pub mod frame;
pub mod scorecard;
pub mod state;

pub use config::{GameConfig, ReRegistration};
pub use error::{ErrorSeverity, GameError};
pub use frame::{Frame, FrameError, FrameStatus};
pub use scorecard::{ScoreCard, ScoreCardError, TakeTurn};
pub use state::{Player, PlayerError, PlayerId, Turn, TurnError};
