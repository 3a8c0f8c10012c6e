//! Directional intents accepted by the engine.
use std::str::FromStr;

use crate::error::CoreError;

/// One of the four directions a board can be shifted in.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Parses a direction token (`"left"`, `"right"`, `"up"`, `"down"`,
    /// case-insensitive). Anything else is an invalid argument, never a
    /// default direction.
    pub fn parse(token: &str) -> Result<Self, CoreError> {
        Self::from_str(token.trim()).map_err(|_| CoreError::InvalidDirection {
            token: token.to_owned(),
        })
    }

    /// Whether this direction moves tiles along columns.
    pub const fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    /// Whether this direction collapses toward the far end of a line.
    pub const fn is_reversed(self) -> bool {
        matches!(self, Direction::Right | Direction::Down)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn parses_tokens_case_insensitively() {
        assert_eq!(Direction::parse("left").unwrap(), Direction::Left);
        assert_eq!(Direction::parse("RIGHT").unwrap(), Direction::Right);
        assert_eq!(Direction::parse(" Up ").unwrap(), Direction::Up);
        assert_eq!(Direction::parse("down").unwrap(), Direction::Down);
    }

    #[test]
    fn rejects_unknown_tokens() {
        for token in ["", "north", "leftt", "0"] {
            let err = Direction::parse(token).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        }
    }

    #[test]
    fn displays_as_token() {
        assert_eq!(Direction::Down.to_string(), "down");
        assert_eq!(Direction::Left.as_ref(), "left");
    }

    #[test]
    fn orientation_flags() {
        assert!(!Direction::Left.is_vertical() && !Direction::Left.is_reversed());
        assert!(!Direction::Right.is_vertical() && Direction::Right.is_reversed());
        assert!(Direction::Up.is_vertical() && !Direction::Up.is_reversed());
        assert!(Direction::Down.is_vertical() && Direction::Down.is_reversed());
    }
}
