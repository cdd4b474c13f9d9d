//! Core types and traits for DeepScan request intake
//!
//! This crate provides the foundational types shared by every other crate:
//! - The structured `ParsedRequest` record produced from free-form text
//! - Request type and priority enums with their storage names
//! - Analyst expertise sets used for routing
//! - The `RequestParser` trait implemented by the interpreter
//! - Error types

pub mod error;
pub mod expertise;
pub mod request;
pub mod traits;

pub use error::{Error, Result};
pub use expertise::Expertise;
pub use request::{Credentials, ParsedRequest, Priority, RequestType, SCOPE_SENTINEL};
pub use traits::RequestParser;
