#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("no empty cell left to spawn a tile into")]
    NoEmptyCell,
    #[error("malformed grid: {reason}")]
    MalformedGrid { reason: String },
}

impl GameError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        GameError::MalformedGrid {
            reason: reason.into(),
        }
    }
}
