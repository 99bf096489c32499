//! Frame state machine.
//!
//! A frame holds at most two rolls. The first roll either closes it as a
//! strike or is stored; the second roll either closes it as a spare or is
//! stored next to the first. Strike and spare rolls are tracked through their
//! flag only: the roll that closed the frame is not kept, so
//! [`Frame::first_turn`] of a strike and [`Frame::second_turn`] of a spare
//! both report a gutter ball.
mod error;
#[cfg(feature = "serde")]
mod snapshot;
mod status;

use std::fmt;

use tracing::trace;

use crate::config::GameConfig;
use crate::state::Turn;

pub use error::FrameError;
pub use status::FrameStatus;

#[cfg(feature = "serde")]
use snapshot::FrameSnapshot;

/// One of the ten scoring units on a player's card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "FrameSnapshot", into = "FrameSnapshot")
)]
pub struct Frame {
    first_turn: Option<Turn>,
    second_turn: Option<Turn>,
    strike: bool,
    spare: bool,
}

impl Frame {
    /// Creates an empty, open frame.
    pub fn create() -> Self {
        Self {
            first_turn: None,
            second_turn: None,
            strike: false,
            spare: false,
        }
    }

    pub fn status(&self) -> FrameStatus {
        if self.strike {
            return FrameStatus::Strike;
        }
        if self.spare {
            return FrameStatus::Spare;
        }
        match (self.first_turn, self.second_turn) {
            (None, _) => FrameStatus::Empty,
            (Some(_), None) => FrameStatus::FirstTaken,
            (Some(_), Some(_)) => FrameStatus::BothTaken,
        }
    }

    pub fn is_open(&self) -> bool {
        self.status().is_open()
    }

    pub fn is_strike(&self) -> bool {
        self.strike
    }

    pub fn is_spare(&self) -> bool {
        self.spare
    }

    /// Records the next roll of this frame, whichever it is.
    pub fn take_turn(&mut self, turn: Turn) -> Result<&mut Self, FrameError> {
        let status = self.status();
        if status.is_closed() {
            return Err(FrameError::Closed { status });
        }
        if self.first_turn.is_none() {
            return self.register_first_turn(turn);
        }
        if self.second_turn.is_none() {
            return self.register_second_turn(turn);
        }
        Err(FrameError::InvariantViolation)
    }

    pub fn register_first_turn(&mut self, turn: Turn) -> Result<&mut Self, FrameError> {
        if self.first_turn.is_some() {
            return Err(FrameError::FirstTurnTwice);
        }
        if self.second_turn.is_some() {
            return Err(FrameError::FirstAfterSecond);
        }
        if self.strike {
            return Err(FrameError::Closed {
                status: FrameStatus::Strike,
            });
        }

        if turn.is_strike_roll() {
            self.strike = true;
        } else {
            self.first_turn = Some(turn);
        }
        trace!(pins = turn.pins_toppled(), status = %self.status(), "first turn registered");
        Ok(self)
    }

    pub fn register_second_turn(&mut self, turn: Turn) -> Result<&mut Self, FrameError> {
        let Some(first) = self.first_turn else {
            return Err(FrameError::SecondWithoutFirst);
        };
        if self.second_turn.is_some() || self.spare {
            return Err(FrameError::SecondTurnTwice);
        }

        if first.pins_toppled() + turn.pins_toppled() >= GameConfig::PINS_PER_FRAME {
            self.spare = true;
        } else {
            self.second_turn = Some(turn);
        }
        trace!(pins = turn.pins_toppled(), status = %self.status(), "second turn registered");
        Ok(self)
    }

    /// The stored first roll, or a gutter ball when none is stored.
    pub fn first_turn(&self) -> Turn {
        self.first_turn.unwrap_or_default()
    }

    /// The stored second roll, or a gutter ball when none is stored.
    pub fn second_turn(&self) -> Turn {
        self.second_turn.unwrap_or_default()
    }

    /// Pins felled in this frame alone, without strike or spare bonuses.
    pub fn pins_toppled(&self) -> u8 {
        if self.strike || self.spare {
            return GameConfig::PINS_PER_FRAME;
        }
        self.first_turn().pins_toppled() + self.second_turn().pins_toppled()
    }

    /// Renders the frame's scorecard token.
    pub fn print(&self) -> String {
        match self.status() {
            FrameStatus::Strike => "  X".to_owned(),
            FrameStatus::Spare => format!("{} /", self.first_turn()),
            FrameStatus::Empty => "- -".to_owned(),
            FrameStatus::FirstTaken => format!("{} -", self.first_turn()),
            FrameStatus::BothTaken => format!("{} {}", self.first_turn(), self.second_turn()),
        }
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.print())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn turn(pins: i32) -> Turn {
        Turn::new(pins).unwrap()
    }

    #[test]
    fn fresh_frame_is_open_with_gutter_turns() {
        let frame = Frame::create();

        assert!(frame.is_open());
        assert_eq!(frame.status(), FrameStatus::Empty);
        assert_eq!(frame.first_turn(), turn(0));
        assert_eq!(frame.second_turn(), turn(0));
        assert_eq!(frame.print(), "- -");
    }

    #[test]
    fn first_turn_below_ten_keeps_frame_open() {
        let mut frame = Frame::create();
        let first = frame.register_first_turn(turn(2)).unwrap().first_turn();

        assert_eq!(first.pins_toppled(), 2);
        assert!(frame.is_open());
        assert_eq!(frame.print(), "2 -");
    }

    #[test]
    fn registers_both_turns() {
        let mut frame = Frame::create();
        frame
            .register_first_turn(turn(2))
            .unwrap()
            .register_second_turn(turn(5))
            .unwrap();

        assert_eq!(frame.first_turn().pins_toppled(), 2);
        assert_eq!(frame.second_turn().pins_toppled(), 5);
        assert_eq!(frame.status(), FrameStatus::BothTaken);
        assert!(!frame.is_open());
        assert_eq!(frame.print(), "2 5");
        assert_eq!(frame.pins_toppled(), 7);
    }

    #[test]
    fn ten_pins_on_first_turn_is_a_strike() {
        let mut frame = Frame::create();
        frame.register_first_turn(turn(10)).unwrap();

        assert!(frame.is_strike());
        assert!(!frame.is_open());
        assert_eq!(frame.first_turn(), Turn::GUTTER);
        assert_eq!(frame.print(), "  X");
        assert_eq!(frame.pins_toppled(), 10);
    }

    #[test]
    fn reaching_ten_on_second_turn_is_a_spare() {
        let mut frame = Frame::create();
        frame.take_turn(turn(2)).unwrap().take_turn(turn(9)).unwrap();

        assert!(frame.is_spare());
        assert!(!frame.is_strike());
        assert!(!frame.is_open());
        assert_eq!(frame.second_turn(), Turn::GUTTER);
        assert_eq!(frame.print(), "2 /");
        assert_eq!(frame.to_string(), "2 /");
    }

    #[test]
    fn first_turn_twice_is_rejected() {
        let mut frame = Frame::create();
        let err = frame
            .register_first_turn(turn(2))
            .unwrap()
            .register_first_turn(turn(1))
            .unwrap_err();

        assert_eq!(err, FrameError::FirstTurnTwice);
        assert_eq!(err.to_string(), "can't register first turn twice");
        assert_eq!(frame.first_turn(), turn(2));
    }

    #[test]
    fn second_turn_without_first_is_rejected() {
        let mut frame = Frame::create();
        let err = frame.register_second_turn(turn(2)).unwrap_err();

        assert_eq!(err, FrameError::SecondWithoutFirst);
        assert_eq!(frame, Frame::create());
    }

    #[test]
    fn second_turn_twice_is_rejected() {
        let mut frame = Frame::create();
        let err = frame
            .register_first_turn(turn(1))
            .unwrap()
            .register_second_turn(turn(2))
            .unwrap()
            .register_second_turn(turn(3))
            .unwrap_err();

        assert_eq!(err, FrameError::SecondTurnTwice);
        assert_eq!(frame.second_turn(), turn(2));
    }

    #[test]
    fn closed_frames_refuse_every_registration() {
        let mut strike = Frame::create();
        strike.take_turn(turn(10)).unwrap();
        assert_eq!(
            strike.take_turn(turn(1)),
            Err(FrameError::Closed {
                status: FrameStatus::Strike
            })
        );
        assert!(strike.register_first_turn(turn(1)).is_err());
        assert!(strike.register_second_turn(turn(1)).is_err());

        let mut spare = Frame::create();
        spare.take_turn(turn(4)).unwrap().take_turn(turn(6)).unwrap();
        assert!(matches!(
            spare.take_turn(turn(1)),
            Err(FrameError::Closed { .. })
        ));
        assert_eq!(
            spare.register_second_turn(turn(1)),
            Err(FrameError::SecondTurnTwice)
        );
        assert_eq!(spare.print(), "4 /");
    }

    #[test]
    fn closed_error_is_validation_severity() {
        use crate::error::{ErrorSeverity, GameError};

        let err = FrameError::Closed {
            status: FrameStatus::BothTaken,
        };
        assert_eq!(err.severity(), ErrorSeverity::Validation);
        assert_eq!(err.error_code(), "FRAME_CLOSED");
        assert_eq!(FrameError::InvariantViolation.severity(), ErrorSeverity::Fatal);
    }
}
