mod bounded_grid;
mod bounds;
mod consts;
mod game;
mod history;
mod level;
mod model_helpers;
mod models;
mod update;

pub use bounded_grid::BoundedGrid;
pub use bounds::BoundsOriginRoot;
pub use consts::*;
pub use game::{Game, GameStatus};
pub use history::{History, HistoryChange, Snapshot};
pub use level::{Level, parse_level};
pub use models::{Cell, Direction, TurnOutcome, UserAction, Vec2};
pub use update::attempt_move;
