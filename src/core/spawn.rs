use rand::Rng;
use crate::core::{GameError, Grid, SpawnedTile, SPAWN_FOUR_THRESHOLD, SPAWN_ROLL_RANGE};

/// Places a 2 (or, one time in ten, a 4) on a uniformly chosen empty cell.
/// A full grid is left untouched and reported as `NoEmptyCell`.
pub fn spawn<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> Result<SpawnedTile, GameError> {
    let value = roll_tile_value(rng);

    let empty = grid.empty_positions();
    if empty.is_empty() {
        return Err(GameError::NoEmptyCell);
    }
    let (row, col) = empty[rng.random_range(0..empty.len())];
    grid[(row, col)] = value;

    Ok(SpawnedTile { row, col, value })
}

pub fn roll_tile_value<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    if rng.random_range(0..SPAWN_ROLL_RANGE) > SPAWN_FOUR_THRESHOLD {
        4
    } else {
        2
    }
}
