/// Named state of a [`Frame`](super::Frame).
///
/// ```text
/// Empty --first(<10)--> FirstTaken --second(sum<10)--> BothTaken
///   |                        |
///   +--first(10)--> Strike   +--second(sum>=10)--> Spare
/// ```
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
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum FrameStatus {
    /// No roll recorded yet.
    #[default]
    Empty,
    /// One roll below ten pins recorded, waiting for the second.
    FirstTaken,
    /// Ten pins on the first roll.
    Strike,
    /// Both rolls together toppled at least ten pins.
    Spare,
    /// Two rolls recorded, pins left standing.
    BothTaken,
}

impl FrameStatus {
    /// Returns true while the frame still accepts rolls.
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Empty | Self::FirstTaken)
    }

    pub const fn is_closed(self) -> bool {
        !self.is_open()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn only_empty_and_first_taken_are_open() {
        let open: Vec<_> = FrameStatus::iter().filter(|s| s.is_open()).collect();
        assert_eq!(open, vec![FrameStatus::Empty, FrameStatus::FirstTaken]);
    }

    #[test]
    fn renders_snake_case() {
        assert_eq!(FrameStatus::BothTaken.to_string(), "both_taken");
        assert_eq!("first_taken".parse::<FrameStatus>(), Ok(FrameStatus::FirstTaken));
    }
}
