//! Request Interpreter for DeepScan
//!
//! Turns a client's free-form pentest request into a structured record:
//! - **Normalization**: lowercase view for keyword checks, original lines and
//!   stop-word-filtered tokens
//! - **Entity Extraction**: URLs, e-mail addresses and credential pairs
//! - **Classification**: fixed-precedence ladders for request type and priority
//! - **Scope Inference**: explicit indicator phrases, then vocabulary fallback
//! - **Clarification**: follow-up questions for fields left unfilled
//!
//! # Example
//!
//! ```
//! use deepscan_text_processing::{parse_request, generate_clarification_questions};
//! use deepscan_core::RequestType;
//!
//! let request = parse_request("Please test our API at https://api.x.com/v1");
//! assert_eq!(request.request_type, RequestType::Api);
//! assert_eq!(request.urls, vec!["https://api.x.com/v1"]);
//!
//! let questions = generate_clarification_questions(&request);
//! assert_eq!(questions.len(), 3);
//! ```

pub mod clarification;
pub mod classifier;
pub mod entities;
pub mod normalizer;
pub mod scope;
pub mod stopwords;

mod error;
mod pipeline;

pub use error::{Result, TextProcessingError};
pub use pipeline::{
    generate_clarification_questions, parse_request, Interpretation, RequestInterpreter,
};

// Re-export key types
pub use clarification::{acknowledgement, ClarificationPlanner, ClarificationTopic};
pub use classifier::{Classifier, LadderRule, PrecedenceLadder};
pub use entities::{EntityExtractor, ExtractedEntities};
pub use normalizer::NormalizedText;
pub use scope::ScopeInferrer;
