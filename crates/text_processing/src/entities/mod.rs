//! Pattern-Based Entity Extraction
//!
//! Extracts the entities a pentest request needs for routing:
//! - Target URLs (`http`/`https`, in order of appearance, duplicates kept)
//! - The first e-mail address
//! - Credential pairs, from `key: value` lines or inline keyword/value runs
//!
//! # Credential heuristics
//!
//! Line pass: a line qualifies when it has a colon and mentions `user`,
//! `pass` or `login`. It is split at the first colon; a key mentioning
//! `user`, `email` or `login` sets the username, otherwise a key mentioning
//! `pass` sets the password. Later lines overwrite earlier ones.
//!
//! Inline fallback: only when nothing at all was found, keyword/value runs
//! such as `user bob pwd secret` are paired by position, first as username
//! and second as password. The pairing is not checked against the keywords.
//!
//! # Example
//!
//! ```
//! use deepscan_text_processing::entities::EntityExtractor;
//!
//! let extractor = EntityExtractor::new();
//! let credentials = extractor.extract_credentials("user: bob\npass: hunter2");
//!
//! assert_eq!(credentials.username.as_deref(), Some("bob"));
//! assert_eq!(credentials.password.as_deref(), Some("hunter2"));
//! ```

use deepscan_core::Credentials;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::normalizer::NormalizedText;

// Compiled regex patterns
static URL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"https?://(?:[-\w.]|%[\da-fA-F]{2})+(?:[/?#][-\w%!.~'*,;:=+()@/?&#]*)*").unwrap()
});

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").unwrap());

static CREDENTIAL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:username|user|login|email|password|pass|pwd|credential)s?[\s:]+([^\s,;]+)")
        .unwrap()
});

/// Markers that make a `key: value` line a credential line
const CREDENTIAL_LINE_MARKERS: &[&str] = &["user", "pass", "login"];

/// Key fragments mapping a credential line to the username
const USERNAME_KEYS: &[&str] = &["user", "email", "login"];

/// Key fragment mapping a credential line to the password
const PASSWORD_KEY: &str = "pass";

/// Entities extracted from one message
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedEntities {
    pub urls: Vec<String>,
    pub credentials: Credentials,
}

impl ExtractedEntities {
    /// Check if nothing was extracted
    pub fn is_empty(&self) -> bool {
        self.urls.is_empty() && self.credentials.is_empty()
    }
}

/// Regex-driven URL, e-mail and credential extractor
#[derive(Debug, Clone, Default)]
pub struct EntityExtractor;

impl EntityExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extract all entities from normalized text
    pub fn extract(&self, text: &NormalizedText<'_>) -> ExtractedEntities {
        ExtractedEntities {
            urls: self.extract_urls(text.original()),
            credentials: self.extract_credentials_from(text),
        }
    }

    /// All URLs in order of appearance
    pub fn extract_urls(&self, text: &str) -> Vec<String> {
        URL_PATTERN
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    /// First e-mail address, if any
    pub fn extract_email(&self, text: &str) -> Option<String> {
        EMAIL_PATTERN.find(text).map(|m| m.as_str().to_string())
    }

    /// Extract credentials from raw text
    pub fn extract_credentials(&self, text: &str) -> Credentials {
        self.extract_credentials_from(&NormalizedText::new(text))
    }

    fn extract_credentials_from(&self, text: &NormalizedText<'_>) -> Credentials {
        let mut credentials = Credentials {
            email: self.extract_email(text.original()),
            ..Default::default()
        };

        for line in text.lines() {
            self.apply_credential_line(line, &mut credentials);
        }

        if credentials.is_empty() {
            let values = self.inline_credential_values(text.original());
            // Positional pairing: needs at least two values
            if let [username, password, ..] = values.as_slice() {
                credentials.username = Some(username.to_string());
                credentials.password = Some(password.to_string());
            }
        }

        credentials
    }

    /// Apply one `key: value` line to the credentials, if it qualifies
    fn apply_credential_line(&self, line: &str, credentials: &mut Credentials) {
        let lowered = line.to_lowercase();
        if !CREDENTIAL_LINE_MARKERS.iter().any(|m| lowered.contains(m)) {
            return;
        }

        let Some((key, value)) = line.split_once(':') else {
            return;
        };
        let key = key.trim().to_lowercase();
        let value = value.trim().to_string();

        if USERNAME_KEYS.iter().any(|k| key.contains(k)) {
            credentials.username = Some(value);
        } else if key.contains(PASSWORD_KEY) {
            credentials.password = Some(value);
        }
    }

    /// Values following credential keywords anywhere in the text
    fn inline_credential_values<'t>(&self, text: &'t str) -> Vec<&'t str> {
        CREDENTIAL_PATTERN
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_urls_in_order_with_duplicates() {
        let extractor = EntityExtractor::new();
        let urls = extractor.extract_urls(
            "Staging is https://staging.shop.com/app and prod is http://shop.com/v2, \
             again https://staging.shop.com/app",
        );
        assert_eq!(
            urls,
            vec![
                "https://staging.shop.com/app",
                // Punctuation after a path is part of the match
                "http://shop.com/v2,",
                "https://staging.shop.com/app",
            ]
        );
    }

    #[test]
    fn test_extract_url_with_query_and_fragment() {
        let extractor = EntityExtractor::new();
        let urls = extractor.extract_urls("see https://x.com/search?q=a&page=2#results now");
        assert_eq!(urls, vec!["https://x.com/search?q=a&page=2#results"]);
    }

    #[test]
    fn test_bare_hosts_are_not_urls() {
        let extractor = EntityExtractor::new();
        assert!(extractor.extract_urls("test api.staging.shop.com please").is_empty());
    }

    #[test]
    fn test_extract_first_email() {
        let extractor = EntityExtractor::new();
        let email = extractor.extract_email("contact ops@shop.com or admin@shop.com");
        assert_eq!(email, Some("ops@shop.com".to_string()));
        assert_eq!(extractor.extract_email("no address here"), None);
    }

    #[test]
    fn test_credential_lines() {
        let extractor = EntityExtractor::new();
        let credentials = extractor.extract_credentials("Username: Alice\nPassword: S3cret: yes");

        assert_eq!(credentials.username.as_deref(), Some("Alice"));
        // Split happens at the first colon only
        assert_eq!(credentials.password.as_deref(), Some("S3cret: yes"));
        assert_eq!(credentials.email, None);
    }

    #[test]
    fn test_credential_lines_last_write_wins() {
        let extractor = EntityExtractor::new();
        let credentials = extractor.extract_credentials("user: first\nlogin: second\npass: pw");
        assert_eq!(credentials.username.as_deref(), Some("second"));
        assert_eq!(credentials.password.as_deref(), Some("pw"));
    }

    #[test]
    fn test_email_key_sets_username() {
        let extractor = EntityExtractor::new();
        let credentials =
            extractor.extract_credentials("login email: tester@shop.com\npassphrase: open");

        assert_eq!(credentials.username.as_deref(), Some("tester@shop.com"));
        assert_eq!(credentials.email.as_deref(), Some("tester@shop.com"));
        assert_eq!(credentials.password.as_deref(), Some("open"));
    }

    #[test]
    fn test_line_without_credential_marker_is_ignored() {
        let extractor = EntityExtractor::new();
        let credentials = extractor.extract_credentials("Deadline: Friday\nTeam: red");
        assert!(credentials.is_empty());
    }

    #[test]
    fn test_inline_fallback_pairs_positionally() {
        let extractor = EntityExtractor::new();
        let credentials = extractor.extract_credentials("use pwd hunter2 and user bob");

        // First value goes to username regardless of its keyword
        assert_eq!(credentials.username.as_deref(), Some("hunter2"));
        assert_eq!(credentials.password.as_deref(), Some("bob"));
    }

    #[test]
    fn test_inline_fallback_needs_two_values() {
        let extractor = EntityExtractor::new();
        assert!(extractor.extract_credentials("the user bob").is_empty());
    }

    #[test]
    fn test_inline_fallback_skipped_when_email_found() {
        let extractor = EntityExtractor::new();
        let credentials = extractor.extract_credentials("user admin@shop.com pwd Pass123");

        assert_eq!(credentials.email.as_deref(), Some("admin@shop.com"));
        assert_eq!(credentials.username, None);
        assert_eq!(credentials.password, None);
    }

    #[test]
    fn test_extract_all() {
        let extractor = EntityExtractor::new();
        let text = NormalizedText::new("Target https://app.example.com\nuser: qa\npass: qa123");
        let entities = extractor.extract(&text);

        assert_eq!(entities.urls, vec!["https://app.example.com"]);
        assert_eq!(entities.credentials.username.as_deref(), Some("qa"));
        assert_eq!(entities.credentials.password.as_deref(), Some("qa123"));
        assert!(!entities.is_empty());
    }

    #[test]
    fn test_empty_text() {
        let extractor = EntityExtractor::new();
        let entities = extractor.extract(&NormalizedText::new(""));
        assert!(entities.is_empty());
    }
}
