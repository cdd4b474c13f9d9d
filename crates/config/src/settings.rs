//! Interpreter settings

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::{self, owned};
use crate::ConfigError;

/// Runtime environment enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeEnvironment {
    #[default]
    Development,
    Staging,
    Production,
}

impl RuntimeEnvironment {
    /// Check if this is a production environment
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

/// Main interpreter settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct InterpreterSettings {
    #[serde(default)]
    pub environment: RuntimeEnvironment,

    /// Keyword ladders for request type and priority
    #[serde(default)]
    pub classification: ClassificationConfig,

    /// Scope indicator phrases and fallback vocabulary
    #[serde(default)]
    pub scope: ScopeConfig,

    #[serde(default)]
    pub observability: ObservabilityConfig,
}

/// Keyword sets for the two precedence ladders
///
/// Each set is matched as lowercase substrings of the message. The rung
/// order is fixed (api before mobile, critical before high before low);
/// only the keywords on each rung are configurable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationConfig {
    #[serde(default = "default_api_keywords")]
    pub api_keywords: Vec<String>,

    #[serde(default = "default_mobile_keywords")]
    pub mobile_keywords: Vec<String>,

    #[serde(default = "default_critical_keywords")]
    pub critical_keywords: Vec<String>,

    #[serde(default = "default_high_keywords")]
    pub high_keywords: Vec<String>,

    #[serde(default = "default_low_keywords")]
    pub low_keywords: Vec<String>,
}

fn default_api_keywords() -> Vec<String> {
    owned(constants::request_type::API_KEYWORDS)
}
fn default_mobile_keywords() -> Vec<String> {
    owned(constants::request_type::MOBILE_KEYWORDS)
}
fn default_critical_keywords() -> Vec<String> {
    owned(constants::priority::CRITICAL_KEYWORDS)
}
fn default_high_keywords() -> Vec<String> {
    owned(constants::priority::HIGH_KEYWORDS)
}
fn default_low_keywords() -> Vec<String> {
    owned(constants::priority::LOW_KEYWORDS)
}

impl Default for ClassificationConfig {
    fn default() -> Self {
        Self {
            api_keywords: default_api_keywords(),
            mobile_keywords: default_mobile_keywords(),
            critical_keywords: default_critical_keywords(),
            high_keywords: default_high_keywords(),
            low_keywords: default_low_keywords(),
        }
    }
}

/// Scope inference tables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScopeConfig {
    /// Ordered indicator phrases; the first one found in a line wins
    #[serde(default = "default_indicators")]
    pub indicators: Vec<String>,

    /// Functional areas matched against word tokens, reported in this order
    #[serde(default = "default_vocabulary")]
    pub vocabulary: Vec<String>,
}

fn default_indicators() -> Vec<String> {
    owned(constants::scope::INDICATORS)
}
fn default_vocabulary() -> Vec<String> {
    owned(constants::scope::VOCABULARY)
}

impl Default for ScopeConfig {
    fn default() -> Self {
        Self {
            indicators: default_indicators(),
            vocabulary: default_vocabulary(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Enable JSON logging
    #[serde(default)]
    pub log_json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_json: false,
        }
    }
}

impl InterpreterSettings {
    /// Validate settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        let classification = &self.classification;
        validate_keywords("classification.api_keywords", &classification.api_keywords)?;
        validate_keywords("classification.mobile_keywords", &classification.mobile_keywords)?;
        validate_keywords("classification.critical_keywords", &classification.critical_keywords)?;
        validate_keywords("classification.high_keywords", &classification.high_keywords)?;
        validate_keywords("classification.low_keywords", &classification.low_keywords)?;

        validate_keywords("scope.indicators", &self.scope.indicators)?;
        self.validate_vocabulary()?;
        self.validate_observability()?;

        Ok(())
    }

    /// Vocabulary entries are compared against single lowercase word tokens,
    /// so anything else could never match.
    fn validate_vocabulary(&self) -> Result<(), ConfigError> {
        validate_keywords("scope.vocabulary", &self.scope.vocabulary)?;

        for word in &self.scope.vocabulary {
            let is_token = word.chars().all(|c| c.is_alphanumeric() || c == '_')
                && word.to_lowercase() == *word;
            if !is_token {
                return Err(ConfigError::InvalidValue {
                    field: "scope.vocabulary".to_string(),
                    message: format!("'{}' must be a single lowercase word", word),
                });
            }
        }

        Ok(())
    }

    fn validate_observability(&self) -> Result<(), ConfigError> {
        let valid = ["trace", "debug", "info", "warn", "error"];
        let level = self.observability.log_level.to_lowercase();
        if !valid.contains(&level.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "observability.log_level".to_string(),
                message: format!(
                    "Unknown level '{}', expected one of {:?}",
                    self.observability.log_level, valid
                ),
            });
        }
        Ok(())
    }
}

fn validate_keywords(field: &str, keywords: &[String]) -> Result<(), ConfigError> {
    if keywords.is_empty() {
        return Err(ConfigError::InvalidValue {
            field: field.to_string(),
            message: "Must contain at least one entry".to_string(),
        });
    }

    if keywords.iter().any(|k| k.trim().is_empty()) {
        return Err(ConfigError::InvalidValue {
            field: field.to_string(),
            message: "Entries must not be blank".to_string(),
        });
    }

    Ok(())
}

/// Load settings from `config/` relative to the working directory
///
/// Priority: env vars > config/{env}.* > config/default.* > built-in defaults
pub fn load_settings(env: Option<&str>) -> Result<InterpreterSettings, ConfigError> {
    load_settings_from(constants::CONFIG_DIR, env)
}

/// Load settings from an explicit configuration directory
pub fn load_settings_from(
    dir: impl AsRef<Path>,
    env: Option<&str>,
) -> Result<InterpreterSettings, ConfigError> {
    let dir = dir.as_ref();
    let mut builder = Config::builder();

    // Load default config
    let default_path = dir.join("default");
    builder = builder.add_source(File::with_name(&default_path.to_string_lossy()).required(false));

    // Load environment-specific config
    if let Some(env_name) = env {
        let env_path = dir.join(env_name);
        builder = builder.add_source(File::with_name(&env_path.to_string_lossy()).required(false));
    }

    // Load from environment variables
    builder = builder.add_source(
        Environment::with_prefix(constants::ENV_PREFIX)
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;
    let settings: InterpreterSettings = config.try_deserialize()?;

    settings.validate()?;

    tracing::debug!(
        environment = ?settings.environment,
        config_dir = %dir.display(),
        "Interpreter settings loaded"
    );

    Ok(settings)
}
