use std::collections::BTreeSet;
use std::rc::Rc;
use std::str::FromStr;

use crate::core::bounded_grid::BoundedGrid;
use crate::core::{Cell, Vec2};
use crate::error::{MalformedLevel, SokobanError, SokobanResult};

/// One arrangement of the puzzle: the fixed layout plus where the player and
/// boxes are.
///
/// Never mutated after construction. Moving produces a new `Level` that shares
/// the layout with the old one.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Level {
    layout: Rc<BoundedGrid<Cell>>,
    player: Vec2,
    boxes: BTreeSet<Vec2>,
}

impl Level {
    pub fn player(&self) -> Vec2 {
        self.player
    }

    pub fn boxes(&self) -> &BTreeSet<Vec2> {
        &self.boxes
    }

    pub fn layout(&self) -> &BoundedGrid<Cell> {
        &self.layout
    }

    pub fn width(&self) -> i32 {
        self.layout.size().width()
    }

    pub fn height(&self) -> i32 {
        self.layout.size().height()
    }

    /// The tile at `pos`, or `None` off the edge of the grid.
    pub fn cell_at(&self, pos: &Vec2) -> Option<Cell> {
        self.layout.get(pos).copied()
    }

    pub fn has_box_at(&self, pos: &Vec2) -> bool {
        self.boxes.contains(pos)
    }

    pub(crate) fn with_player(&self, player: Vec2) -> Level {
        Level {
            layout: Rc::clone(&self.layout),
            player,
            boxes: self.boxes.clone(),
        }
    }

    /// The player steps onto `from`, shoving the box there to `to`.
    pub(crate) fn with_pushed_box(&self, from: Vec2, to: Vec2) -> Level {
        debug_assert!(self.boxes.contains(&from), "no box to push at {from}");
        debug_assert!(!self.boxes.contains(&to), "box pushed onto box at {to}");
        let mut boxes = self.boxes.clone();
        boxes.remove(&from);
        boxes.insert(to);
        Level {
            layout: Rc::clone(&self.layout),
            player: from,
            boxes,
        }
    }

    /// Builds a level from rows of level text. All rows must be the same width.
    pub fn parse_lines<I, S>(lines: I) -> SokobanResult<Level>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = LevelBuilder::default();
        for line in lines {
            builder.push_row(line.as_ref())?;
        }
        builder.build()
    }

    #[cfg(test)]
    pub(crate) fn from_parts(layout: BoundedGrid<Cell>, player: Vec2, boxes: BTreeSet<Vec2>) -> Level {
        Level {
            layout: Rc::new(layout),
            player,
            boxes,
        }
    }
}

impl FromStr for Level {
    type Err = SokobanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_level(s)
    }
}

/// Parses a block of level text.
///
/// Blank lines before the first row and after the last are skipped, so indented
/// raw strings and files ending in a newline both work. Rows in between are
/// taken as-is.
pub fn parse_level(s: &str) -> SokobanResult<Level> {
    let lines: Vec<&str> = s.lines().map(|line| line.trim_end_matches('\r')).collect();
    let first = lines.iter().position(|line| !line.is_empty());
    let last = lines.iter().rposition(|line| !line.is_empty());
    match (first, last) {
        (Some(first), Some(last)) => Level::parse_lines(&lines[first..=last]),
        _ => Err(MalformedLevel::Empty.into()),
    }
}

/// Collects validated rows. Nothing is turned into a grid until every row
/// has been checked.
#[derive(Default)]
struct LevelBuilder {
    rows: Vec<Vec<Cell>>,
    width: Option<usize>,
    player: Option<Vec2>,
    boxes: BTreeSet<Vec2>,
}

impl LevelBuilder {
    fn push_row(&mut self, line: &str) -> SokobanResult<()> {
        let y = self.rows.len();
        let mut row = Vec::with_capacity(self.width.unwrap_or(line.len()));

        for (x, ch) in line.chars().enumerate() {
            let pos = Vec2::new(x as i32, y as i32);
            let cell = match ch {
                '#' => Cell::Wall,
                ' ' => Cell::Floor,
                '.' => Cell::Goal,
                '$' => {
                    self.boxes.insert(pos);
                    Cell::Floor
                }
                '@' => {
                    if let Some(first) = self.player {
                        return Err(MalformedLevel::MultiplePlayers { first, second: pos }.into());
                    }
                    self.player = Some(pos);
                    Cell::Floor
                }
                found => {
                    return Err(MalformedLevel::UnknownCharacter {
                        row: y,
                        column: x,
                        found,
                    }
                    .into());
                }
            };
            row.push(cell);
        }

        let expected = *self.width.get_or_insert(row.len());
        if row.len() != expected {
            return Err(MalformedLevel::RaggedRow {
                row: y,
                expected,
                found: row.len(),
            }
            .into());
        }

        self.rows.push(row);
        Ok(())
    }

    fn build(self) -> SokobanResult<Level> {
        let Some(width) = self.width else {
            return Err(MalformedLevel::Empty.into());
        };
        let player = self.player.ok_or(MalformedLevel::MissingPlayer)?;
        let layout = BoundedGrid::from_rows(width, self.rows).ok_or_else(|| {
            SokobanError::InternalInconsistency("rows changed width after validation".to_string())
        })?;

        Ok(Level {
            layout: Rc::new(layout),
            player,
            boxes: self.boxes,
        })
    }
}
