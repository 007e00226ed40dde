use log::debug;

use crate::core::{History, HistoryChange, Level, Snapshot, UserAction};
use crate::error::SokobanResult;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Playing,
    /// Every box is on a goal. Waiting for the player to acknowledge.
    Won,
    Quit,
}

/// The play session: history plus the Playing/Won/Quit state machine.
#[derive(Clone, Debug)]
pub struct Game {
    history: History,
    status: GameStatus,
    solved: bool,
    last_change: Option<HistoryChange>,
}

impl Game {
    pub fn new(level: Level) -> Game {
        Game {
            history: History::new(level),
            status: GameStatus::Playing,
            solved: false,
            last_change: None,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Whether the level was ever won, even after the player quit.
    pub fn solved(&self) -> bool {
        self.solved
    }

    pub fn current(&self) -> &Snapshot {
        self.history.current()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn last_change(&self) -> Option<HistoryChange> {
        self.last_change
    }

    /// Feeds one action through the state machine and returns the new status.
    ///
    /// Once won, the next action of any kind ends the game. Once quit, actions
    /// are ignored.
    pub fn handle(&mut self, action: UserAction) -> SokobanResult<GameStatus> {
        match self.status {
            GameStatus::Quit => return Ok(GameStatus::Quit),
            GameStatus::Won => {
                self.status = GameStatus::Quit;
                return Ok(self.status);
            }
            GameStatus::Playing => {}
        }

        if action == UserAction::Quit {
            debug!("quit after {} moves", self.current().moves);
            self.status = GameStatus::Quit;
            return Ok(self.status);
        }

        let change = self.history.apply(action);
        if change != HistoryChange::Unchanged {
            self.last_change = Some(change);
        }

        if change.is_mutation() && self.current().level.is_won()? {
            let Snapshot { moves, pushes, .. } = self.current();
            debug!("level solved in {moves} moves and {pushes} pushes");
            self.status = GameStatus::Won;
            self.solved = true;
        }
        Ok(self.status)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::{Direction, parse_level};
    use Direction::*;

    fn game(level: &str) -> Game {
        Game::new(parse_level(level).unwrap())
    }

    #[test]
    fn pushing_the_last_box_home_wins() {
        let mut game = game("#@$.#");
        assert_eq!(game.status(), GameStatus::Playing);

        assert_eq!(game.handle(UserAction::Move(Right)), Ok(GameStatus::Won));
        assert!(game.solved());
        assert_eq!(game.last_change(), Some(HistoryChange::Pushed));
    }

    #[test]
    fn won_game_ignores_moves_and_quits_on_next_input() {
        let mut game = game("#@$. #");
        game.handle(UserAction::Move(Right)).unwrap();
        let won_at = game.current().clone();

        assert_eq!(game.handle(UserAction::Undo), Ok(GameStatus::Quit));
        assert_eq!(game.current(), &won_at);
        assert_eq!(game.handle(UserAction::Move(Left)), Ok(GameStatus::Quit));
        assert_eq!(game.current(), &won_at);
        assert!(game.solved());
    }

    #[test]
    fn quit_is_terminal() {
        let mut game = game("#@ $.#");
        assert_eq!(game.handle(UserAction::Quit), Ok(GameStatus::Quit));
        assert_eq!(game.handle(UserAction::Move(Right)), Ok(GameStatus::Quit));
        assert_eq!(game.current().moves, 0);
        assert!(!game.solved());
    }

    #[test]
    fn blocked_and_continue_keep_playing() {
        let mut game = game("#@$#");
        assert_eq!(game.handle(UserAction::Move(Right)), Ok(GameStatus::Playing));
        assert_eq!(game.last_change(), Some(HistoryChange::Blocked));
        assert_eq!(game.handle(UserAction::Continue), Ok(GameStatus::Playing));
        assert_eq!(game.last_change(), Some(HistoryChange::Blocked));
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn undo_while_playing_steps_back() {
        let mut game = game("#@ $.#");
        game.handle(UserAction::Move(Right)).unwrap();
        assert_eq!(game.handle(UserAction::Undo), Ok(GameStatus::Playing));
        assert_eq!(game.current().moves, 0);
        assert_eq!(game.last_change(), Some(HistoryChange::Undone));
    }
}
