//! Error types shared across DeepScan crates

use thiserror::Error;

/// Errors raised when converting stored strings back into core types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Unknown request type: {0}")]
    UnknownRequestType(String),

    #[error("Unknown priority: {0}")]
    UnknownPriority(String),

    #[error("Invalid expertise entry: {0}")]
    InvalidExpertise(String),
}

pub type Result<T> = std::result::Result<T, Error>;
