pub const DEFAULT_HEIGHT: usize = 4;
pub const DEFAULT_WIDTH: usize = 4;
pub const DEFAULT_TARGET: u32 = 2048;

/// Spawn rolls land in `0..SPAWN_ROLL_RANGE`; anything above the threshold spawns a 4.
pub const SPAWN_ROLL_RANGE: u32 = 100;
pub const SPAWN_FOUR_THRESHOLD: u32 = 89;

/// Largest power of two a `u32` holds; tiles this big no longer merge.
pub const MAX_TILE: u32 = 1 << 31;

/// Upper bound on rows and columns.
pub const MAX_DIMENSION: usize = 64;

pub const INITIAL_TILES: usize = 2;
