use crate::core::{GameField, GameOutcome, Grid};

/// Snapshot handed to the renderer; rendering never touches the live game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRenderState {
    pub grid: Grid,
    pub score: u32,
    pub high_score: u32,
    pub outcome: GameOutcome,
    pub error: Option<String>,
}

impl GameRenderState {
    pub fn capture<R>(game: &GameField<R>) -> Self {
        GameRenderState {
            grid: game.grid().clone(),
            score: game.score(),
            high_score: game.high_score(),
            outcome: game.outcome(),
            error: None,
        }
    }
}
