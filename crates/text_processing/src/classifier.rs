//! Fixed-precedence keyword classification
//!
//! Each ladder is an ordered list of keyword-set → category rules evaluated
//! top to bottom against the lowercase text. The first rung with any keyword
//! present wins; occurrences are never counted, so tie-breaks are fully
//! determined by rung order.

use deepscan_config::ClassificationConfig;
use deepscan_core::{Priority, RequestType};

use crate::normalizer::NormalizedText;

/// One rung of a precedence ladder
#[derive(Debug, Clone)]
pub struct LadderRule<T> {
    keywords: Vec<String>,
    category: T,
}

impl<T: Copy> LadderRule<T> {
    pub fn new<S: AsRef<str>>(keywords: &[S], category: T) -> Self {
        Self {
            keywords: keywords.iter().map(|k| k.as_ref().to_lowercase()).collect(),
            category,
        }
    }

    /// First keyword of this rung present in the lowercase text
    fn matched_keyword(&self, lowered: &str) -> Option<&str> {
        self.keywords
            .iter()
            .map(String::as_str)
            .find(|k| lowered.contains(k))
    }

    pub fn category(&self) -> T {
        self.category
    }
}

/// Ordered rules with a default category
#[derive(Debug, Clone)]
pub struct PrecedenceLadder<T> {
    rules: Vec<LadderRule<T>>,
    default: T,
}

impl<T: Copy> PrecedenceLadder<T> {
    pub fn new(default: T) -> Self {
        Self {
            rules: Vec::new(),
            default,
        }
    }

    /// Append a rung below the existing ones (builder pattern)
    pub fn rule<S: AsRef<str>>(mut self, keywords: &[S], category: T) -> Self {
        self.rules.push(LadderRule::new(keywords, category));
        self
    }

    /// Classify lowercase text, falling back to the default
    pub fn classify(&self, lowered: &str) -> T {
        self.matching_rule(lowered)
            .map(|(category, _)| category)
            .unwrap_or(self.default)
    }

    /// Winning category and the keyword that triggered it
    pub fn matching_rule<'s>(&'s self, lowered: &str) -> Option<(T, &'s str)> {
        self.rules.iter().find_map(|rule| {
            rule.matched_keyword(lowered)
                .map(|keyword| (rule.category, keyword))
        })
    }

    pub fn rules(&self) -> &[LadderRule<T>] {
        &self.rules
    }

    pub fn default_category(&self) -> T {
        self.default
    }
}

/// Request type and priority classifier
#[derive(Debug, Clone)]
pub struct Classifier {
    request_type: PrecedenceLadder<RequestType>,
    priority: PrecedenceLadder<Priority>,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier {
    /// Classifier with the built-in keyword ladders
    pub fn new() -> Self {
        Self::from_config(&ClassificationConfig::default())
    }

    /// Classifier with keyword sets from config; rung order is fixed
    pub fn from_config(config: &ClassificationConfig) -> Self {
        let request_type = PrecedenceLadder::new(RequestType::Web)
            .rule(&config.api_keywords, RequestType::Api)
            .rule(&config.mobile_keywords, RequestType::Mobile);

        let priority = PrecedenceLadder::new(Priority::Medium)
            .rule(&config.critical_keywords, Priority::Critical)
            .rule(&config.high_keywords, Priority::High)
            .rule(&config.low_keywords, Priority::Low);

        Self {
            request_type,
            priority,
        }
    }

    pub fn request_type(&self, text: &NormalizedText<'_>) -> RequestType {
        let result = self.request_type.matching_rule(text.lowered());
        if let Some((category, keyword)) = result {
            tracing::trace!(%category, keyword, "Request type keyword matched");
        }
        result
            .map(|(category, _)| category)
            .unwrap_or(self.request_type.default_category())
    }

    pub fn priority(&self, text: &NormalizedText<'_>) -> Priority {
        let result = self.priority.matching_rule(text.lowered());
        if let Some((category, keyword)) = result {
            tracing::trace!(%category, keyword, "Priority keyword matched");
        }
        result
            .map(|(category, _)| category)
            .unwrap_or(self.priority.default_category())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request_type(text: &str) -> RequestType {
        Classifier::new().request_type(&NormalizedText::new(text))
    }

    fn priority(text: &str) -> Priority {
        Classifier::new().priority(&NormalizedText::new(text))
    }

    #[test]
    fn test_request_type_default() {
        assert_eq!(request_type(""), RequestType::Web);
        assert_eq!(request_type("Scan our website for XSS"), RequestType::Web);
    }

    #[test]
    fn test_request_type_keywords() {
        assert_eq!(request_type("Our GraphQL schema"), RequestType::Api);
        assert_eq!(request_type("the iOS build"), RequestType::Mobile);
        assert_eq!(request_type("Android only"), RequestType::Mobile);
    }

    #[test]
    fn test_api_beats_mobile() {
        assert_eq!(
            request_type("test our REST endpoint in the android app"),
            RequestType::Api
        );
    }

    #[test]
    fn test_keywords_match_as_substrings() {
        // "app" inside "application" counts
        assert_eq!(request_type("our web application"), RequestType::Mobile);
    }

    #[test]
    fn test_priority_ladder() {
        assert_eq!(priority(""), Priority::Medium);
        assert_eq!(priority("needed ASAP"), Priority::Critical);
        assert_eq!(priority("this is important"), Priority::High);
        assert_eq!(priority("do it when possible"), Priority::Low);
        assert_eq!(priority("minor issue"), Priority::Low);
    }

    #[test]
    fn test_priority_precedence() {
        // Critical rung wins even though low and high keywords appear first
        assert_eq!(
            priority("low effort, high value, but urgent"),
            Priority::Critical
        );
        assert_eq!(priority("minor but important"), Priority::High);
    }

    #[test]
    fn test_custom_ladder() {
        let ladder = PrecedenceLadder::new(0u8)
            .rule(&["alpha"], 1)
            .rule(&["beta", "ALPHA"], 2);

        assert_eq!(ladder.classify("beta alpha"), 1);
        assert_eq!(ladder.classify("beta"), 2);
        assert_eq!(ladder.classify("gamma"), 0);
        assert_eq!(ladder.matching_rule("beta"), Some((2, "beta")));
        assert_eq!(ladder.rules().len(), 2);
    }

    #[test]
    fn test_classifier_from_config() {
        let config = ClassificationConfig {
            mobile_keywords: vec!["apk".to_string()],
            ..Default::default()
        };
        let classifier = Classifier::from_config(&config);

        let text = NormalizedText::new("here is the APK");
        assert_eq!(classifier.request_type(&text), RequestType::Mobile);

        let text = NormalizedText::new("our app");
        assert_eq!(classifier.request_type(&text), RequestType::Web);
    }
}
