//! Swipe directions and their fixed parameters.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Movement axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    pub fn is_vertical(self) -> bool {
        self == Axis::Vertical
    }
}

/// One of the four recognizable swipe directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwipeDirection {
    Left,
    Right,
    Up,
    Down,
}

/// Static parameters of a registered direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectionConfig {
    /// +1 when travel grows the coordinate (right/down), -1 otherwise.
    pub sign: i8,
    pub axis: Axis,
    /// Signal name emitted when the swipe is recognized.
    pub event_name: &'static str,
}

impl SwipeDirection {
    pub const ALL: [SwipeDirection; 4] = [
        SwipeDirection::Left,
        SwipeDirection::Right,
        SwipeDirection::Up,
        SwipeDirection::Down,
    ];

    pub fn config(self) -> DirectionConfig {
        match self {
            SwipeDirection::Left => DirectionConfig {
                sign: -1,
                axis: Axis::Horizontal,
                event_name: "swipeleft",
            },
            SwipeDirection::Right => DirectionConfig {
                sign: 1,
                axis: Axis::Horizontal,
                event_name: "swiperight",
            },
            SwipeDirection::Up => DirectionConfig {
                sign: -1,
                axis: Axis::Vertical,
                event_name: "swipeup",
            },
            SwipeDirection::Down => DirectionConfig {
                sign: 1,
                axis: Axis::Vertical,
                event_name: "swipedown",
            },
        }
    }

    pub fn axis(self) -> Axis {
        self.config().axis
    }

    pub fn event_name(self) -> &'static str {
        self.config().event_name
    }

    /// Registration name, e.g. `swipe-left`.
    pub fn name(self) -> &'static str {
        match self {
            SwipeDirection::Left => "swipe-left",
            SwipeDirection::Right => "swipe-right",
            SwipeDirection::Up => "swipe-up",
            SwipeDirection::Down => "swipe-down",
        }
    }
}

impl fmt::Display for SwipeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown direction name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown swipe direction: {0}")]
pub struct ParseDirectionError(pub String);

impl FromStr for SwipeDirection {
    type Err = ParseDirectionError;

    /// Accepts `left`, `swipe-left`, and `swipeleft` forms.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        let bare = lowered
            .strip_prefix("swipe-")
            .or_else(|| lowered.strip_prefix("swipe"))
            .unwrap_or(lowered.as_str());
        match bare {
            "left" => Ok(SwipeDirection::Left),
            "right" => Ok(SwipeDirection::Right),
            "up" => Ok(SwipeDirection::Up),
            "down" => Ok(SwipeDirection::Down),
            _ => Err(ParseDirectionError(s.to_string())),
        }
    }
}
