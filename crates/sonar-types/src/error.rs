use thiserror::Error;

#[derive(Error, Debug)]
pub enum SonarError {
    #[error("Ray sample shape mismatch: expected {expected:?}, found {found:?}")]
    ShapeMismatch {
        expected: Vec<usize>,
        found: Vec<usize>,
    },

    #[error("Degenerate input: {0}")]
    DegenerateInput(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type SonarResult<T> = Result<T, SonarError>;
