//! Scope inference
//!
//! Two phases:
//! 1. Explicit: for each line, the first indicator phrase (in list order)
//!    found as a whole word splits the line; the remainder of the original
//!    line is one scope fragment. Fragments are joined with single spaces.
//! 2. Fallback, only when phase 1 found nothing: word tokens are matched
//!    against a fixed vocabulary and reported in vocabulary order as
//!    `Focus on {hits} functionality`.
//!
//! With no hits in either phase the scope is [`SCOPE_SENTINEL`].

use deepscan_config::{constants, ScopeConfig};
use deepscan_core::SCOPE_SENTINEL;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Result, TextProcessingError};
use crate::normalizer::NormalizedText;

/// Indicator phrase with its compiled case-insensitive pattern
#[derive(Debug, Clone)]
struct IndicatorPattern {
    phrase: String,
    regex: Regex,
}

impl IndicatorPattern {
    fn compile(phrase: &str) -> std::result::Result<Self, regex::Error> {
        let pattern = format!(r"(?i)\b{}\b", regex::escape(phrase.trim()));
        Ok(Self {
            phrase: phrase.trim().to_lowercase(),
            regex: Regex::new(&pattern)?,
        })
    }
}

static DEFAULT_INDICATORS: Lazy<Vec<IndicatorPattern>> = Lazy::new(|| {
    constants::scope::INDICATORS
        .iter()
        .map(|phrase| IndicatorPattern::compile(phrase).unwrap())
        .collect()
});

/// Two-phase scope inferrer
#[derive(Debug, Clone)]
pub struct ScopeInferrer {
    indicators: Vec<IndicatorPattern>,
    vocabulary: Vec<String>,
}

impl Default for ScopeInferrer {
    fn default() -> Self {
        Self::new()
    }
}

impl ScopeInferrer {
    /// Inferrer with the built-in indicator list and vocabulary
    pub fn new() -> Self {
        Self {
            indicators: DEFAULT_INDICATORS.clone(),
            vocabulary: constants::scope::VOCABULARY
                .iter()
                .map(|w| w.to_string())
                .collect(),
        }
    }

    /// Inferrer with indicator phrases and vocabulary from config
    pub fn from_config(config: &ScopeConfig) -> Result<Self> {
        let indicators = config
            .indicators
            .iter()
            .map(|phrase| {
                IndicatorPattern::compile(phrase).map_err(|source| TextProcessingError::Pattern {
                    field: "scope.indicators",
                    phrase: phrase.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            indicators,
            vocabulary: config.vocabulary.iter().map(|w| w.to_lowercase()).collect(),
        })
    }

    /// Infer the scope; never empty
    pub fn infer(&self, text: &NormalizedText<'_>) -> String {
        if let Some(scope) = self.explicit_scope(text) {
            tracing::trace!("Scope taken from indicator phrases");
            return scope;
        }

        if let Some(scope) = self.keyword_scope(text) {
            tracing::trace!("Scope synthesized from vocabulary");
            return scope;
        }

        SCOPE_SENTINEL.to_string()
    }

    /// Phase 1: fragments following indicator phrases, in line order
    pub fn explicit_scope(&self, text: &NormalizedText<'_>) -> Option<String> {
        let fragments: Vec<&str> = text
            .lines()
            .filter_map(|line| self.line_fragment(line))
            .collect();

        if fragments.is_empty() {
            None
        } else {
            Some(fragments.join(" "))
        }
    }

    /// Remainder of a line after its first indicator phrase
    ///
    /// Indicators are tried in list order; the first one present decides the
    /// split even if its remainder turns out empty.
    fn line_fragment<'t>(&self, line: &'t str) -> Option<&'t str> {
        let found = self
            .indicators
            .iter()
            .find_map(|indicator| indicator.regex.find(line).map(|m| (indicator, m)))?;

        let (indicator, m) = found;
        let remainder = line[m.end()..].trim();
        tracing::trace!(indicator = %indicator.phrase, "Scope indicator found");

        (!remainder.is_empty()).then_some(remainder)
    }

    /// Phase 2: vocabulary hits in vocabulary order
    pub fn keyword_scope(&self, text: &NormalizedText<'_>) -> Option<String> {
        let tokens = text.tokens();
        let hits: Vec<&str> = self
            .vocabulary
            .iter()
            .map(String::as_str)
            .filter(|word| tokens.contains(word))
            .collect();

        if hits.is_empty() {
            None
        } else {
            Some(format!("Focus on {} functionality", hits.join(", ")))
        }
    }
}
