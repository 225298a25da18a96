//! Error types for collider sweep operations

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ColliderError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Invalid collision record: {0}")]
    InvalidRecord(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
