//! Default keyword tables for the request interpreter
//!
//! Single source of truth for the fixed vocabularies. Order matters in every
//! table: ladders are evaluated top to bottom and scope hits are reported in
//! vocabulary order.

/// Request type ladder: API keywords are checked before mobile keywords
pub mod request_type {
    pub const API_KEYWORDS: &[&str] = &["api", "endpoint", "rest", "graphql"];
    pub const MOBILE_KEYWORDS: &[&str] = &["mobile", "android", "ios", "app"];
}

/// Priority ladder, most urgent first
pub mod priority {
    pub const CRITICAL_KEYWORDS: &[&str] = &["urgent", "critical", "emergency", "asap", "immediately"];
    pub const HIGH_KEYWORDS: &[&str] = &["high", "important", "priority"];
    pub const LOW_KEYWORDS: &[&str] = &["low", "minor", "when possible"];
}

/// Scope inference tables
pub mod scope {
    /// Phrases introducing an explicit scope, checked in this order per line
    pub const INDICATORS: &[&str] = &["scope", "focus on", "test", "check", "examine"];

    /// Functional areas recognised when no explicit scope is given
    pub const VOCABULARY: &[&str] = &[
        "checkout",
        "payment",
        "login",
        "authentication",
        "admin",
        "user",
        "profile",
        "api",
    ];
}

/// Environment variable prefix for overrides
pub const ENV_PREFIX: &str = "DEEPSCAN";

/// Directory searched for `default.*` and `{env}.*` files
pub const CONFIG_DIR: &str = "config";

pub(crate) fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}
