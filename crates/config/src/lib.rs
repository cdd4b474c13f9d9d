//! Configuration management for DeepScan request intake
//!
//! Supports loading configuration from:
//! - Built-in defaults (the keyword ladders and scope tables in [`constants`])
//! - YAML/TOML files (`config/default.*`, then `config/{env}.*`)
//! - Environment variables (DEEPSCAN__ prefix, `__` as separator)

pub mod constants;
pub mod settings;

pub use settings::{
    load_settings, load_settings_from, ClassificationConfig, InterpreterSettings,
    ObservabilityConfig, RuntimeEnvironment, ScopeConfig,
};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
