use crate::core::reduce::reduce_left;
use crate::core::{Direction, Grid};

/// Slides and merges the whole grid in `direction`. Every direction is the
/// left reduction seen through `mirror` and `transpose`.
pub fn apply(grid: &Grid, direction: Direction) -> (Grid, u32) {
    match direction {
        Direction::Left => reduce_rows(grid),
        Direction::Right => {
            let (moved, gained) = apply(&grid.mirror(), Direction::Left);
            (moved.mirror(), gained)
        }
        Direction::Up => {
            let (moved, gained) = apply(&grid.transpose(), Direction::Left);
            (moved.transpose(), gained)
        }
        Direction::Down => {
            let (moved, gained) = apply(&grid.transpose(), Direction::Right);
            (moved.transpose(), gained)
        }
    }
}

/// True when moving in `direction` would change at least one cell.
pub fn can_move(grid: &Grid, direction: Direction) -> bool {
    match direction {
        Direction::Left => grid.rows().any(row_can_move_left),
        Direction::Right => can_move(&grid.mirror(), Direction::Left),
        Direction::Up => can_move(&grid.transpose(), Direction::Left),
        Direction::Down => can_move(&grid.transpose(), Direction::Right),
    }
}

pub fn any_move(grid: &Grid) -> bool {
    Direction::ALL.iter().any(|&direction| can_move(grid, direction))
}

pub fn legal_moves(grid: &Grid) -> Vec<Direction> {
    Direction::ALL
        .into_iter()
        .filter(|&direction| can_move(grid, direction))
        .collect()
}

fn reduce_rows(grid: &Grid) -> (Grid, u32) {
    let mut gained: u32 = 0;
    let reduced = grid.map_rows(|row| {
        let (new_row, row_gain) = reduce_left(row);
        gained = gained.saturating_add(row_gain);
        new_row
    });
    (reduced, gained)
}

fn row_can_move_left(row: &[u32]) -> bool {
    reduce_left(row).0 != row
}
