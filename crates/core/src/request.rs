//! Structured pentest request record
//!
//! A `ParsedRequest` is built once per interpreted message and handed to the
//! caller, which owns it from then on. Every field is always populated; the
//! scope falls back to [`SCOPE_SENTINEL`] when nothing could be inferred.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::expertise::Expertise;

/// Scope used when no scope could be inferred.
///
/// Downstream code compares against this literal to detect an unset scope,
/// so it must not be rephrased.
pub const SCOPE_SENTINEL: &str = "General pentest - no specific scope defined";

/// Kind of target the client wants tested
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestType {
    /// Web application (default)
    #[default]
    Web,
    /// API / endpoint testing
    Api,
    /// Mobile application
    Mobile,
}

impl RequestType {
    /// All request types, in storage order
    pub const ALL: [RequestType; 3] = [RequestType::Web, RequestType::Api, RequestType::Mobile];

    /// Lowercase name used for storage and routing
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestType::Web => "web",
            RequestType::Api => "api",
            RequestType::Mobile => "mobile",
        }
    }
}

impl fmt::Display for RequestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequestType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "web" => Ok(RequestType::Web),
            "api" => Ok(RequestType::Api),
            "mobile" => Ok(RequestType::Mobile),
            _ => Err(Error::UnknownRequestType(s.to_string())),
        }
    }
}

/// Urgency of the request, ordered from least to most urgent
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl Priority {
    /// Lowercase name used for storage
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Critical => "critical",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            "critical" => Ok(Priority::Critical),
            _ => Err(Error::UnknownPriority(s.to_string())),
        }
    }
}

/// Test credentials found in the message
///
/// Values are verbatim substrings of the input. They are a convenience
/// pre-fill only: the pairing heuristics can mix up username and password.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Credentials {
    /// Check if no credential field was found
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.password.is_none() && self.email.is_none()
    }

    /// Number of populated fields
    pub fn len(&self) -> usize {
        [&self.username, &self.password, &self.email]
            .iter()
            .filter(|v| v.is_some())
            .count()
    }
}

/// Structured record interpreted from one free-text message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedRequest {
    pub request_type: RequestType,
    /// URLs in order of first appearance; duplicates are kept
    pub urls: Vec<String>,
    pub credentials: Credentials,
    /// Never empty; [`SCOPE_SENTINEL`] when nothing was inferred
    pub scope: String,
    pub priority: Priority,
}

impl Default for ParsedRequest {
    fn default() -> Self {
        Self {
            request_type: RequestType::default(),
            urls: Vec::new(),
            credentials: Credentials::default(),
            scope: SCOPE_SENTINEL.to_string(),
            priority: Priority::default(),
        }
    }
}

impl ParsedRequest {
    /// Whether a scope other than the sentinel was inferred
    pub fn has_explicit_scope(&self) -> bool {
        self.scope != SCOPE_SENTINEL
    }

    /// First URL mentioned, treated as the main target
    pub fn primary_target(&self) -> Option<&str> {
        self.urls.first().map(String::as_str)
    }

    /// Whether an analyst with the given expertise can take this request
    pub fn is_routable_to(&self, expertise: &Expertise) -> bool {
        expertise.covers(self.request_type)
    }
}
