use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("network needs at least two layers, got {0}")]
    InvalidTopology(usize),

    #[error("not enough weights for topology (expected {expected})")]
    NotEnoughWeights { expected: usize },

    #[error("too many weights for topology (expected {expected}, got at least {got})")]
    TooManyWeights { expected: usize, got: usize },

    #[error("cannot evolve an empty population")]
    EmptyPopulation,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("save encoding error: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("unsupported save version {0}")]
    UnsupportedSaveVersion(u32),

    #[error("invalid save: {0}")]
    InvalidSave(String),
}

pub type SimResult<T> = Result<T, SimError>;
