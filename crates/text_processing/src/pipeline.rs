//! Request interpretation pipeline
//!
//! Order: Normalize → {Entities, Classification, Scope} → assemble →
//! Clarification (on demand). Each stage reads immutable tables built once;
//! a call allocates only its own result.

use deepscan_config::InterpreterSettings;
use deepscan_core::{ParsedRequest, RequestParser};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::clarification::ClarificationPlanner;
use crate::classifier::Classifier;
use crate::entities::EntityExtractor;
use crate::normalizer::NormalizedText;
use crate::scope::ScopeInferrer;
use crate::Result;

static DEFAULT_INTERPRETER: Lazy<RequestInterpreter> = Lazy::new(RequestInterpreter::new);

/// Interpret a message with the built-in tables
pub fn parse_request(text: &str) -> ParsedRequest {
    DEFAULT_INTERPRETER.parse_request(text)
}

/// Follow-up questions for a parsed request
pub fn generate_clarification_questions(request: &ParsedRequest) -> Vec<String> {
    DEFAULT_INTERPRETER.clarification_questions(request)
}

/// A parsed request together with its follow-up questions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interpretation {
    pub request: ParsedRequest,
    pub questions: Vec<String>,
}

/// Stateless request interpreter
#[derive(Debug, Clone, Default)]
pub struct RequestInterpreter {
    extractor: EntityExtractor,
    classifier: Classifier,
    scope: ScopeInferrer,
    planner: ClarificationPlanner,
}

impl RequestInterpreter {
    /// Interpreter with the built-in keyword tables
    pub fn new() -> Self {
        Self {
            extractor: EntityExtractor::new(),
            classifier: Classifier::new(),
            scope: ScopeInferrer::new(),
            planner: ClarificationPlanner::new(),
        }
    }

    /// Interpreter with tables from validated settings
    pub fn from_settings(settings: &InterpreterSettings) -> Result<Self> {
        settings.validate()?;

        Ok(Self {
            extractor: EntityExtractor::new(),
            classifier: Classifier::from_config(&settings.classification),
            scope: ScopeInferrer::from_config(&settings.scope)?,
            planner: ClarificationPlanner::new(),
        })
    }

    /// Interpret one message; never fails
    pub fn parse_request(&self, text: &str) -> ParsedRequest {
        let normalized = NormalizedText::new(text);
        let entities = self.extractor.extract(&normalized);

        let request = ParsedRequest {
            request_type: self.classifier.request_type(&normalized),
            urls: entities.urls,
            credentials: entities.credentials,
            scope: self.scope.infer(&normalized),
            priority: self.classifier.priority(&normalized),
        };

        // Credential values stay out of the logs
        tracing::debug!(
            request_type = %request.request_type,
            priority = %request.priority,
            urls = request.urls.len(),
            credential_fields = request.credentials.len(),
            explicit_scope = request.has_explicit_scope(),
            "Request interpreted"
        );

        request
    }

    pub fn clarification_questions(&self, request: &ParsedRequest) -> Vec<String> {
        self.planner.questions(request)
    }

    /// Parse and plan follow-up questions in one call
    pub fn interpret(&self, text: &str) -> Interpretation {
        let request = self.parse_request(text);
        let questions = self.clarification_questions(&request);
        Interpretation { request, questions }
    }
}

impl RequestParser for RequestInterpreter {
    fn parse_request(&self, text: &str) -> ParsedRequest {
        RequestInterpreter::parse_request(self, text)
    }

    fn clarification_questions(&self, request: &ParsedRequest) -> Vec<String> {
        RequestInterpreter::clarification_questions(self, request)
    }

    fn name(&self) -> &'static str {
        "keyword-interpreter"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deepscan_core::{Priority, RequestType, SCOPE_SENTINEL};
    use std::sync::Arc;

    #[test]
    fn test_empty_message() {
        let request = parse_request("");
        assert_eq!(request, ParsedRequest::default());
        assert_eq!(request.scope, SCOPE_SENTINEL);
        assert_eq!(generate_clarification_questions(&request).len(), 5);
    }

    #[test]
    fn test_interpret_bundles_questions() {
        let interpreter = RequestInterpreter::new();
        let interpretation = interpreter.interpret("user: bob\npass: hunter2");

        assert_eq!(interpretation.request.credentials.username.as_deref(), Some("bob"));
        assert_eq!(
            interpretation.questions,
            interpreter.clarification_questions(&interpretation.request)
        );
    }

    #[test]
    fn test_from_settings_uses_custom_tables() {
        let mut settings = InterpreterSettings::default();
        settings.classification.low_keywords = vec!["backlog".to_string()];
        settings.scope.vocabulary = vec!["search".to_string()];

        let interpreter = RequestInterpreter::from_settings(&settings).unwrap();
        let request = interpreter.parse_request("put the search page on the backlog");

        assert_eq!(request.priority, Priority::Low);
        assert_eq!(request.scope, "Focus on search functionality");
    }

    #[test]
    fn test_from_settings_rejects_invalid_settings() {
        let mut settings = InterpreterSettings::default();
        settings.classification.api_keywords.clear();
        assert!(RequestInterpreter::from_settings(&settings).is_err());
    }

    #[test]
    fn test_shared_across_threads() {
        let parser: Arc<dyn RequestParser> = Arc::new(RequestInterpreter::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let parser = Arc::clone(&parser);
                std::thread::spawn(move || parser.parse_request("Test the REST api, urgent"))
            })
            .collect();

        for handle in handles {
            let request = handle.join().unwrap();
            assert_eq!(request.request_type, RequestType::Api);
            assert_eq!(request.priority, Priority::Critical);
            assert_eq!(request.scope, "the REST api, urgent");
        }
        assert_eq!(parser.name(), "keyword-interpreter");
    }
}
