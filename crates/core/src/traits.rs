//! Core traits for request interpretation
//!
//! The interpreter sits behind this trait so the surrounding ticket system
//! can swap implementations or mock it in tests.

use crate::request::ParsedRequest;

/// Turns a free-form request message into a structured record
///
/// Implementations are pure: the same text always yields the same record,
/// and one instance can be shared across threads without locking.
pub trait RequestParser: Send + Sync {
    /// Interpret one message. Never fails; sparse input yields defaults.
    fn parse_request(&self, text: &str) -> ParsedRequest;

    /// Follow-up questions for fields that could not be filled
    fn clarification_questions(&self, request: &ParsedRequest) -> Vec<String>;

    /// Implementation name for logging
    fn name(&self) -> &'static str {
        "request-parser"
    }
}
