use std::path::{Path, PathBuf};

use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_HEIGHT, DEFAULT_TARGET, DEFAULT_WIDTH, MAX_DIMENSION};

#[derive(Parser, Debug, Default)]
#[command(name = "merge-grid")]
#[command(version, about = "Slide and merge tiles in the terminal")]
pub struct Args {
    /// Optional JSON file with `height`, `width`, `target` and `seed`.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Number of rows on the board.
    #[arg(long)]
    pub height: Option<usize>,
    /// Number of columns on the board.
    #[arg(long)]
    pub width: Option<usize>,
    /// Tile value that wins the game.
    #[arg(long)]
    pub target: Option<u32>,
    /// Seed for reproducible spawns.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Tracing filter, e.g. "info", "debug".
    #[arg(long, default_value = "info")]
    pub log: String,
    /// File the log is written to.
    #[arg(long, default_value = "logs/merge_grid.log")]
    pub log_file: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub height: usize,
    pub width: usize,
    pub target: u32,
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            height: DEFAULT_HEIGHT,
            width: DEFAULT_WIDTH,
            target: DEFAULT_TARGET,
            seed: None,
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("io error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("json error in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("invalid config: {reason}")]
    Invalid { reason: String },
}

impl GameConfig {
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&json).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Defaults, then the config file, then explicit flags.
    pub fn resolve(args: &Args) -> Result<Self, ConfigError> {
        let mut config = match &args.config {
            Some(path) => GameConfig::from_json_file(path)?,
            None => GameConfig::default(),
        };
        config.apply_overrides(args);
        config.validate()?;
        Ok(config)
    }

    fn apply_overrides(&mut self, args: &Args) {
        if let Some(height) = args.height {
            self.height = height;
        }
        if let Some(width) = args.width {
            self.width = width;
        }
        if let Some(target) = args.target {
            self.target = target;
        }
        if args.seed.is_some() {
            self.seed = args.seed;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.height == 0 || self.width == 0 {
            return Err(ConfigError::Invalid {
                reason: format!("board must be at least 1x1, got {}x{}", self.height, self.width),
            });
        }
        if self.height > MAX_DIMENSION || self.width > MAX_DIMENSION {
            return Err(ConfigError::Invalid {
                reason: format!(
                    "board is {}x{}, at most {}x{} is supported",
                    self.height, self.width, MAX_DIMENSION, MAX_DIMENSION
                ),
            });
        }
        if self.height.checked_mul(self.width).is_none_or(|cells| cells < 2) {
            return Err(ConfigError::Invalid {
                reason: "board needs room for the two starting tiles".to_string(),
            });
        }
        if self.target < 4 || !self.target.is_power_of_two() {
            return Err(ConfigError::Invalid {
                reason: format!("target must be a power of two of at least 4, got {}", self.target),
            });
        }
        Ok(())
    }
}
