//! Clarification planning
//!
//! Derives follow-up questions from a parsed request. Conditions are
//! checked independently in a fixed order; the environment and deadline
//! questions are always asked, so a plan has between 2 and 5 entries.

use deepscan_core::ParsedRequest;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Topic of a follow-up question, in asking order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClarificationTopic {
    TargetUrl,
    Credentials,
    Scope,
    Environment,
    Deadline,
}

impl ClarificationTopic {
    pub const ALL: [ClarificationTopic; 5] = [
        ClarificationTopic::TargetUrl,
        ClarificationTopic::Credentials,
        ClarificationTopic::Scope,
        ClarificationTopic::Environment,
        ClarificationTopic::Deadline,
    ];

    /// Question text presented to the client
    pub fn question(&self) -> &'static str {
        match self {
            ClarificationTopic::TargetUrl => {
                "What is the target URL or application you'd like to test?"
            }
            ClarificationTopic::Credentials => {
                "Do you have test credentials we should use for the pentest?"
            }
            ClarificationTopic::Scope => {
                "Could you specify which parts of the application you'd like us to focus on?"
            }
            ClarificationTopic::Environment => {
                "Is this a production environment or a pre-production/staging environment?"
            }
            ClarificationTopic::Deadline => {
                "Do you have a specific deadline for when you need the results?"
            }
        }
    }

    /// Whether the question is needed for this request
    pub fn applies_to(&self, request: &ParsedRequest) -> bool {
        match self {
            ClarificationTopic::TargetUrl => request.urls.is_empty(),
            ClarificationTopic::Credentials => request.credentials.is_empty(),
            ClarificationTopic::Scope => !request.has_explicit_scope(),
            ClarificationTopic::Environment | ClarificationTopic::Deadline => true,
        }
    }
}

impl fmt::Display for ClarificationTopic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.question())
    }
}

/// Pure planner from a parsed request to follow-up questions
#[derive(Debug, Clone, Copy, Default)]
pub struct ClarificationPlanner;

impl ClarificationPlanner {
    pub fn new() -> Self {
        Self
    }

    /// Topics to ask about, in fixed order
    pub fn plan(&self, request: &ParsedRequest) -> Vec<ClarificationTopic> {
        ClarificationTopic::ALL
            .into_iter()
            .filter(|topic| topic.applies_to(request))
            .collect()
    }

    /// Question strings to ask, in fixed order
    pub fn questions(&self, request: &ParsedRequest) -> Vec<String> {
        self.plan(request)
            .iter()
            .map(|topic| topic.question().to_string())
            .collect()
    }
}

/// Intake reply posted when a new request is filed
pub fn acknowledgement(request: &ParsedRequest) -> String {
    format!(
        "Thank you for your pentest request for {}. Our team will review your request \
         and assign an analyst with expertise in {} security.",
        request.primary_target().unwrap_or("your application"),
        request.request_type
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use deepscan_core::{Credentials, RequestType};

    fn complete_request() -> ParsedRequest {
        ParsedRequest {
            urls: vec!["https://shop.example.com".to_string()],
            credentials: Credentials {
                username: Some("qa".to_string()),
                ..Default::default()
            },
            scope: "the checkout".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_request_gets_all_questions() {
        let questions = ClarificationPlanner::new().questions(&ParsedRequest::default());
        let expected: Vec<&str> = ClarificationTopic::ALL.iter().map(|t| t.question()).collect();
        assert_eq!(questions, expected);
    }

    #[test]
    fn test_complete_request_gets_unconditional_questions() {
        let plan = ClarificationPlanner::new().plan(&complete_request());
        assert_eq!(
            plan,
            vec![ClarificationTopic::Environment, ClarificationTopic::Deadline]
        );
    }

    #[test]
    fn test_conditions_are_independent() {
        let mut request = complete_request();
        request.credentials = Credentials::default();

        let plan = ClarificationPlanner::new().plan(&request);
        assert_eq!(
            plan,
            vec![
                ClarificationTopic::Credentials,
                ClarificationTopic::Environment,
                ClarificationTopic::Deadline,
            ]
        );
    }

    #[test]
    fn test_email_alone_counts_as_credentials() {
        let mut request = complete_request();
        request.credentials = Credentials {
            email: Some("qa@example.com".to_string()),
            ..Default::default()
        };
        assert!(!ClarificationTopic::Credentials.applies_to(&request));
    }

    #[test]
    fn test_acknowledgement() {
        let mut request = complete_request();
        request.request_type = RequestType::Api;
        assert_eq!(
            acknowledgement(&request),
            "Thank you for your pentest request for https://shop.example.com. Our team will \
             review your request and assign an analyst with expertise in api security."
        );

        let message = acknowledgement(&ParsedRequest::default());
        assert!(message.contains("for your application."));
        assert!(message.ends_with("expertise in web security."));
    }
}
