use std::fmt;

use crate::core::{Game, GameStatus, HistoryChange, Snapshot};

/// Everything a view needs to draw one frame.
#[derive(Debug, Clone, Copy)]
pub struct GameRenderState<'a> {
    pub snapshot: &'a Snapshot,
    pub won: bool,
    pub last_change: Option<HistoryChange>,
}

impl<'a> GameRenderState<'a> {
    pub fn from_game(game: &'a Game) -> Self {
        GameRenderState {
            snapshot: game.current(),
            won: game.status() == GameStatus::Won,
            last_change: game.last_change(),
        }
    }
}

/// How a finished session ended, reported once the terminal is restored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSummary {
    pub solved: bool,
    pub moves: u32,
    pub pushes: u32,
}

impl GameSummary {
    pub fn from_game(game: &Game) -> Self {
        let current = game.current();
        GameSummary {
            solved: game.solved(),
            moves: current.moves,
            pushes: current.pushes,
        }
    }
}

impl fmt::Display for GameSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.solved {
            write!(f, "Solved in {} moves and {} pushes.", self.moves, self.pushes)
        } else {
            write!(f, "Gave up after {} moves and {} pushes.", self.moves, self.pushes)
        }
    }
}
