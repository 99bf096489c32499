//! Value types recorded on a score card.
//!
//! Everything here is immutable once constructed: a [`Turn`] is one roll, a
//! [`Player`] is a validated name and a [`PlayerId`] is the handle a
//! [`ScoreCard`](crate::ScoreCard) hands out for it.
pub mod common;
pub mod player;
pub mod turn;

pub use common::PlayerId;
pub use player::{Player, PlayerError};
pub use turn::{Turn, TurnError};
