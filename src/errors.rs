use thiserror::Error;

/// Error type that captures goal tracking failures.
#[derive(Debug, Error)]
pub enum GoalError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("No goal at index {index} (list holds {len})")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("Goal target must be a non-negative number, got {0}")]
    InvalidTarget(f64),
    #[error("Malformed goal on line {line}: {reason}")]
    Parse { line: usize, reason: String },
}

pub type GoalResult<T> = Result<T, GoalError>;
