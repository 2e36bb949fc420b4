mod consts;
mod error;
mod game;
mod grid;
mod model_helpers;
mod models;
mod reduce;
mod spawn;
mod update;

pub use consts::*;
pub use error::GameError;
pub use game::GameField;
pub use grid::Grid;
pub use models::{Direction, GameOutcome, SpawnedTile, UserAction};
pub use reduce::reduce_left;
pub use spawn::{roll_tile_value, spawn};
pub use update::{any_move, apply, can_move, legal_moves};
