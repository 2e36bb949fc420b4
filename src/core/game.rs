use rand::Rng;
use tracing::{debug, info};
use crate::core::spawn::spawn;
use crate::core::update::{any_move, apply, can_move};
use crate::core::{Direction, GameError, GameOutcome, Grid, INITIAL_TILES};

/// A single game board plus the scores that outlive it across restarts.
/// The random source is owned so spawns are reproducible for a given seed.
pub struct GameField<R> {
    grid: Grid,
    score: u32,
    high_score: u32,
    target: u32,
    rng: R,
}

impl<R: Rng> GameField<R> {
    pub fn new(height: usize, width: usize, target: u32, rng: R) -> Result<Self, GameError> {
        let mut field = GameField {
            grid: Grid::new_empty(height, width)?,
            score: 0,
            high_score: 0,
            target,
            rng,
        };
        field.reset()?;
        Ok(field)
    }

    /// Starts from an existing board without spawning anything.
    pub fn from_grid(grid: Grid, target: u32, rng: R) -> Self {
        GameField {
            grid,
            score: 0,
            high_score: 0,
            target,
            rng,
        }
    }

    /// Deals a fresh board. Scores and grid change together or not at all.
    pub fn reset(&mut self) -> Result<(), GameError> {
        let mut grid = Grid::new_empty(self.grid.height(), self.grid.width())?;
        for _ in 0..INITIAL_TILES {
            spawn(&mut grid, &mut self.rng)?;
        }

        self.grid = grid;
        self.high_score = self.high_score.max(self.score);
        self.score = 0;

        info!(high_score = self.high_score, "new game");
        Ok(())
    }

    /// Returns `Ok(false)` and leaves everything untouched when `direction`
    /// would not change the grid.
    pub fn make_move(&mut self, direction: Direction) -> Result<bool, GameError> {
        if !can_move(&self.grid, direction) {
            debug!(?direction, "move rejected");
            return Ok(false);
        }

        let (mut next, gained) = apply(&self.grid, direction);
        let tile = spawn(&mut next, &mut self.rng)?;

        self.grid = next;
        self.score = self.score.saturating_add(gained);
        debug!(
            ?direction,
            gained,
            score = self.score,
            spawned = tile.value,
            row = tile.row,
            col = tile.col,
            "move applied"
        );
        Ok(true)
    }
}

impl<R> GameField<R> {
    pub fn is_win(&self) -> bool {
        self.grid.max_tile() >= self.target
    }

    pub fn is_game_over(&self) -> bool {
        !any_move(&self.grid)
    }

    pub fn outcome(&self) -> GameOutcome {
        if self.is_win() {
            GameOutcome::Win
        } else if self.is_game_over() {
            GameOutcome::GameOver
        } else {
            GameOutcome::InProgress
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn target(&self) -> u32 {
        self.target
    }
}
