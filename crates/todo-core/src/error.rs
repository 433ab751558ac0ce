use thiserror::Error;

#[derive(Error, Debug)]
pub enum TodoError {
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type TodoResult<T> = Result<T, TodoError>;
