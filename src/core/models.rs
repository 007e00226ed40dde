use std::fmt;
use std::ops::Add;

use crate::core::Level;

/// A static tile of the layout. Boxes and the player live on top of these.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Wall,
    Floor,
    Goal,
}

impl Cell {
    pub fn is_walkable(self) -> bool {
        !matches!(self, Cell::Wall)
    }
}

/// A grid coordinate, `x` is the column and `y` the row.
///
/// Signed so that a step off the edge of the grid is still representable,
/// the grid rejects it on lookup. Ordering is row-major.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Vec2 {
    pub y: i32,
    pub x: i32,
}

impl Vec2 {
    pub const fn new(x: i32, y: i32) -> Vec2 {
        Vec2 { y, x }
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    pub fn offset(self) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0, -1),
            Direction::Right => Vec2::new(1, 0),
            Direction::Down => Vec2::new(0, 1),
            Direction::Left => Vec2::new(-1, 0),
        }
    }
}

/// A semantic input event, already decoupled from whatever key produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UserAction {
    Move(Direction),
    Undo,
    Quit,
    /// Nothing to do, e.g. an unbound key.
    Continue,
}

/// Result of trying to walk the player one tile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The player walked and shoved a box ahead of them.
    Pushed(Level),
    /// The player walked onto an empty tile.
    Moved(Level),
    Blocked,
}
