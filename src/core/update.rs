use crate::core::{Cell, Direction, Level, TurnOutcome};

/// Works out what happens when the player tries to step in `direction`.
///
/// Pure: `level` is untouched and a successful step returns a fresh level.
/// Anything that would leave the grid, walk into a wall, or shove a box into a
/// wall or another box is `Blocked`.
pub fn attempt_move(level: &Level, direction: Direction) -> TurnOutcome {
    let dir = direction.offset();
    let target = level.player() + dir;

    match level.cell_at(&target) {
        None | Some(Cell::Wall) => return TurnOutcome::Blocked,
        Some(Cell::Floor) | Some(Cell::Goal) => {}
    }

    if !level.has_box_at(&target) {
        return TurnOutcome::Moved(level.with_player(target));
    }

    let beyond = target + dir;
    let beyond_is_free =
        level.cell_at(&beyond).is_some_and(Cell::is_walkable) && !level.has_box_at(&beyond);
    if !beyond_is_free {
        return TurnOutcome::Blocked;
    }

    TurnOutcome::Pushed(level.with_pushed_box(target, beyond))
}
