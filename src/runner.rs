use log::debug;

use crate::core::{Game, GameStatus, UserAction};
use crate::models::{GameRenderState, GameSummary};

/// Anything that can show the game: the terminal, or a recorder in tests.
pub trait GameView {
    fn draw(&mut self, state: &GameRenderState<'_>) -> Result<(), Box<dyn std::error::Error>>;
}

/// Blocking source of player actions.
pub trait InputSource {
    fn next_action(&mut self) -> Result<UserAction, Box<dyn std::error::Error>>;
}

/// Runs the read, apply, draw loop until the game reaches `Quit`.
///
/// Errors from the view or input are passed straight back, as is an
/// internal inconsistency found by the rules.
pub fn run_game<V, I>(
    game: &mut Game,
    view: &mut V,
    input: &mut I,
) -> Result<GameSummary, Box<dyn std::error::Error>>
where
    V: GameView,
    I: InputSource,
{
    view.draw(&GameRenderState::from_game(game))?;

    while game.status() != GameStatus::Quit {
        let action = input.next_action()?;
        let status = game.handle(action)?;
        debug!("{action:?} -> {status:?}");
        if status != GameStatus::Quit {
            view.draw(&GameRenderState::from_game(game))?;
        }
    }

    Ok(GameSummary::from_game(game))
}

#[cfg(test)]
mod test {
    use std::collections::{BTreeSet, VecDeque};

    use super::*;
    use crate::core::{BoundedGrid, Cell, Direction, Level, Vec2, parse_level};
    use Direction::*;

    #[derive(Default)]
    struct RecordingView {
        frames: Vec<(u32, u32, bool)>,
    }

    impl GameView for RecordingView {
        fn draw(&mut self, state: &GameRenderState<'_>) -> Result<(), Box<dyn std::error::Error>> {
            self.frames
                .push((state.snapshot.moves, state.snapshot.pushes, state.won));
            Ok(())
        }
    }

    struct ScriptedInput(VecDeque<UserAction>);

    impl InputSource for ScriptedInput {
        fn next_action(&mut self) -> Result<UserAction, Box<dyn std::error::Error>> {
            self.0.pop_front().ok_or_else(|| "input exhausted".into())
        }
    }

    fn script(actions: &[UserAction]) -> ScriptedInput {
        ScriptedInput(actions.iter().copied().collect())
    }

    #[test]
    fn solving_draws_the_win_then_quits_on_acknowledgement() {
        let mut game = Game::new(parse_level("#@ $.#").unwrap());
        let mut view = RecordingView::default();
        let mut input = script(&[
            UserAction::Move(Right),
            UserAction::Move(Right),
            UserAction::Continue,
        ]);

        let summary = run_game(&mut game, &mut view, &mut input).unwrap();

        assert_eq!(
            summary,
            GameSummary {
                solved: true,
                moves: 2,
                pushes: 1,
            }
        );
        assert_eq!(view.frames, vec![(0, 0, false), (1, 0, false), (2, 1, true)]);
    }

    #[test]
    fn quitting_early_is_not_solved() {
        let mut game = Game::new(parse_level("#@ $.#").unwrap());
        let mut view = RecordingView::default();
        let mut input = script(&[UserAction::Move(Right), UserAction::Undo, UserAction::Quit]);

        let summary = run_game(&mut game, &mut view, &mut input).unwrap();

        assert!(!summary.solved);
        assert_eq!(summary.moves, 0);
        assert_eq!(view.frames.len(), 3);
    }

    #[test]
    fn input_errors_propagate() {
        let mut game = Game::new(parse_level("#@ $.#").unwrap());
        let mut view = RecordingView::default();
        let mut input = script(&[UserAction::Move(Right)]);

        let err = run_game(&mut game, &mut view, &mut input).unwrap_err();
        assert_eq!(err.to_string(), "input exhausted");
    }

    #[test]
    fn box_found_on_a_wall_aborts_the_loop() {
        let layout = BoundedGrid::from_rows(3, vec![vec![Cell::Floor, Cell::Floor, Cell::Wall]]).unwrap();
        let level = Level::from_parts(layout, Vec2::new(0, 0), BTreeSet::from([Vec2::new(2, 0)]));
        let mut game = Game::new(level);
        let mut view = RecordingView::default();
        let mut input = script(&[UserAction::Move(Right), UserAction::Quit]);

        let err = run_game(&mut game, &mut view, &mut input).unwrap_err();

        assert!(err.to_string().contains("internal inconsistency"), "{err}");
        assert_eq!(view.frames.len(), 1);
    }
}
