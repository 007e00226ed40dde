use log::debug;

use crate::core::{Level, TurnOutcome, UserAction, attempt_move};

/// The game at one point in time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub level: Level,
    /// Every step the player took, pushes included.
    pub moves: u32,
    pub pushes: u32,
}

impl Snapshot {
    pub fn initial(level: Level) -> Snapshot {
        Snapshot {
            level,
            moves: 0,
            pushes: 0,
        }
    }

    fn after(&self, outcome: TurnOutcome) -> Option<Snapshot> {
        match outcome {
            TurnOutcome::Moved(level) => Some(Snapshot {
                level,
                moves: self.moves + 1,
                pushes: self.pushes,
            }),
            TurnOutcome::Pushed(level) => Some(Snapshot {
                level,
                moves: self.moves + 1,
                pushes: self.pushes + 1,
            }),
            TurnOutcome::Blocked => None,
        }
    }
}

/// What applying an action did to the history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HistoryChange {
    Moved,
    Pushed,
    Blocked,
    Undone,
    NothingToUndo,
    /// Quit and Continue never touch the history.
    Unchanged,
}

impl HistoryChange {
    /// Whether the current snapshot is a different one than before.
    pub fn is_mutation(self) -> bool {
        matches!(
            self,
            HistoryChange::Moved | HistoryChange::Pushed | HistoryChange::Undone
        )
    }
}

/// A stack of snapshots, oldest at the bottom. The initial snapshot is kept
/// apart so the stack can never run empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct History {
    initial: Snapshot,
    later: Vec<Snapshot>,
}

impl History {
    pub fn new(level: Level) -> History {
        History {
            initial: Snapshot::initial(level),
            later: Vec::new(),
        }
    }

    pub fn current(&self) -> &Snapshot {
        self.later.last().unwrap_or(&self.initial)
    }

    pub fn initial(&self) -> &Snapshot {
        &self.initial
    }

    pub fn len(&self) -> usize {
        1 + self.later.len()
    }

    pub fn can_undo(&self) -> bool {
        !self.later.is_empty()
    }

    /// Oldest first.
    pub fn snapshots(&self) -> impl Iterator<Item = &Snapshot> {
        std::iter::once(&self.initial).chain(self.later.iter())
    }

    pub fn apply(&mut self, action: UserAction) -> HistoryChange {
        match action {
            UserAction::Move(direction) => {
                let current = self.current();
                let outcome = attempt_move(&current.level, direction);
                let change = match outcome {
                    TurnOutcome::Moved(_) => HistoryChange::Moved,
                    TurnOutcome::Pushed(_) => HistoryChange::Pushed,
                    TurnOutcome::Blocked => HistoryChange::Blocked,
                };
                if let Some(next) = current.after(outcome) {
                    self.later.push(next);
                }
                debug!("{direction:?}: {change:?}, history depth {}", self.len());
                change
            }
            UserAction::Undo => {
                if self.undo() {
                    HistoryChange::Undone
                } else {
                    HistoryChange::NothingToUndo
                }
            }
            UserAction::Quit | UserAction::Continue => HistoryChange::Unchanged,
        }
    }

    /// Drops the latest snapshot. Never drops the initial one.
    pub fn undo(&mut self) -> bool {
        let undone = self.can_undo();
        self.later.pop();
        debug!("undo: {}, history depth {}", undone, self.len());
        undone
    }
}
