//! Movement direction selector.

use std::fmt;
use std::str::FromStr;
use visnowlizer::MoveDirection;

/// Direction chosen in the control panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    #[default]
    Bottom,
    Top,
    Left,
    Right,
    /// No shared direction: every flake wanders its own way.
    Random,
}

impl Direction {
    pub const ALL: [Direction; 5] = [
        Direction::Bottom,
        Direction::Top,
        Direction::Left,
        Direction::Right,
        Direction::Random,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Direction::Bottom => "Bottom",
            Direction::Top => "Top",
            Direction::Left => "Left",
            Direction::Right => "Right",
            Direction::Random => "None (random)",
        }
    }

    pub fn to_move_direction(&self) -> MoveDirection {
        match self {
            Direction::Bottom => MoveDirection::Bottom,
            Direction::Top => MoveDirection::Top,
            Direction::Left => MoveDirection::Left,
            Direction::Right => MoveDirection::Right,
            Direction::Random => MoveDirection::None,
        }
    }
}

/// A direction string outside the five option values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDirectionError(pub String);

impl fmt::Display for ParseDirectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown direction '{}', expected bottom, top, left, right or none",
            self.0
        )
    }
}

impl std::error::Error for ParseDirectionError {}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    /// Parses the option strings (`"bottom"`, ..., `"none"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Direction::ALL
            .into_iter()
            .find(|d| d.to_move_direction().as_str() == s)
            .ok_or_else(|| ParseDirectionError(s.to_string()))
    }
}
