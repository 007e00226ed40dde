use crate::core::{Cell, Level};
use crate::error::{SokobanError, SokobanResult};

impl Level {
    /// True once every box rests on a goal. A level with no boxes is won.
    ///
    /// A box found on a wall (or off the grid) means a move let it through,
    /// which is reported as an `InternalInconsistency` rather than a loss.
    pub fn is_won(&self) -> SokobanResult<bool> {
        let mut won = true;
        for &position in self.boxes() {
            match self.cell_at(&position) {
                Some(Cell::Goal) => {}
                Some(Cell::Floor) => won = false,
                Some(Cell::Wall) | None => {
                    return Err(SokobanError::InternalInconsistency(format!(
                        "box at {position} is not on walkable floor"
                    )));
                }
            }
        }
        Ok(won)
    }

    pub fn boxes_on_goals(&self) -> usize {
        self.boxes()
            .iter()
            .filter(|pos| self.cell_at(pos) == Some(Cell::Goal))
            .count()
    }

    pub fn goal_count(&self) -> usize {
        self.layout()
            .iter()
            .filter(|&(_, &cell)| cell == Cell::Goal)
            .count()
    }
}

#[cfg(test)]
mod test {
    use std::collections::BTreeSet;

    use crate::core::bounded_grid::BoundedGrid;
    use crate::core::{Cell, Level, Vec2, parse_level};
    use crate::error::SokobanError;

    #[test]
    fn box_on_goal_wins() {
        let level = parse_level(
            r#"
#####
#@  #
#   #
#   #
#####
"#,
        )
        .unwrap();
        let mut rows: Vec<Vec<Cell>> = (0..level.height())
            .map(|y| {
                (0..level.width())
                    .map(|x| level.cell_at(&Vec2::new(x, y)).unwrap())
                    .collect()
            })
            .collect();
        let boxes = BTreeSet::from([Vec2::new(2, 2)]);

        rows[2][2] = Cell::Goal;
        let on_goal = Level::from_parts(
            BoundedGrid::from_rows(5, rows.clone()).unwrap(),
            level.player(),
            boxes.clone(),
        );
        assert_eq!(on_goal.is_won(), Ok(true));

        rows[2][2] = Cell::Floor;
        let on_floor = Level::from_parts(
            BoundedGrid::from_rows(5, rows).unwrap(),
            level.player(),
            boxes,
        );
        assert_eq!(on_floor.is_won(), Ok(false));
    }

    #[test]
    fn one_box_off_goal_is_not_won() {
        let level = parse_level("#@$. $.#").unwrap();
        assert_eq!(level.is_won(), Ok(false));
        assert_eq!(level.boxes_on_goals(), 0);
        assert_eq!(level.goal_count(), 2);
    }

    #[test]
    fn level_without_boxes_is_won() {
        let level = parse_level("#@.#").unwrap();
        assert_eq!(level.is_won(), Ok(true));
    }

    #[test]
    fn box_on_wall_is_an_inconsistency() {
        let layout = BoundedGrid::from_rows(3, vec![vec![Cell::Wall, Cell::Floor, Cell::Goal]]).unwrap();
        let level = Level::from_parts(layout, Vec2::new(1, 0), BTreeSet::from([Vec2::new(0, 0)]));

        assert!(matches!(level.is_won(), Err(SokobanError::InternalInconsistency(_))));
    }
}
