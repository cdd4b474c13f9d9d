//! Errors raised while building an interpreter
//!
//! Interpreting text never fails; only user-supplied settings can.

use deepscan_config::ConfigError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TextProcessingError {
    #[error("Invalid settings: {0}")]
    Settings(#[from] ConfigError),

    #[error("Invalid pattern for {field} '{phrase}': {source}")]
    Pattern {
        field: &'static str,
        phrase: String,
        #[source]
        source: regex::Error,
    },
}

pub type Result<T> = std::result::Result<T, TextProcessingError>;
