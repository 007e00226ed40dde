//! Error types for level construction and rule evaluation.

use std::fmt;

use crate::core::Vec2;

/// Why a level text was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedLevel {
    /// The text contained no rows at all.
    Empty,
    /// A character outside `# . @ $` and space.
    UnknownCharacter {
        row: usize,
        column: usize,
        found: char,
    },
    /// A row whose width differs from the first row.
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    MissingPlayer,
    MultiplePlayers {
        first: Vec2,
        second: Vec2,
    },
}

impl fmt::Display for MalformedLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedLevel::Empty => write!(f, "level has no rows"),
            MalformedLevel::UnknownCharacter { row, column, found } => {
                write!(f, "unknown character {found:?} at row {row}, column {column}")
            }
            MalformedLevel::RaggedRow {
                row,
                expected,
                found,
            } => write!(f, "row {row} is {found} wide, expected {expected}"),
            MalformedLevel::MissingPlayer => write!(f, "level has no player '@'"),
            MalformedLevel::MultiplePlayers { first, second } => {
                write!(f, "level has more than one player, at {first} and {second}")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SokobanError {
    /// The level text could not be turned into a level. Nothing was built.
    MalformedLevel(MalformedLevel),
    /// A rule invariant was found broken, e.g. a box sitting on a wall.
    /// This is a bug, not a player mistake.
    InternalInconsistency(String),
}

impl fmt::Display for SokobanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SokobanError::MalformedLevel(reason) => write!(f, "malformed level: {reason}"),
            SokobanError::InternalInconsistency(detail) => {
                write!(f, "internal inconsistency: {detail}")
            }
        }
    }
}

impl std::error::Error for SokobanError {}

impl From<MalformedLevel> for SokobanError {
    fn from(reason: MalformedLevel) -> Self {
        SokobanError::MalformedLevel(reason)
    }
}

pub type SokobanResult<T> = Result<T, SokobanError>;
