use thiserror::Error;

#[derive(Error, Debug)]
pub enum DuelError {
    #[error("Invalid move: {0}")]
    InvalidMove(String),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DuelError>;
