pub mod config;
pub mod error;
pub mod types;

pub use config::{GameConfig, Settings};
pub use error::{DuelError, Result};
pub use types::{parse_difficulty, DifficultyTier, Move, PlayerChoice, RoundResult};
