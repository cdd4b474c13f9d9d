//! Analyst expertise sets
//!
//! Analysts are stored with a comma-separated expertise list such as
//! `"web,api"`. A request is routable to an analyst whose list covers the
//! request type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::request::RequestType;

/// Set of request types an analyst can handle
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expertise {
    types: Vec<RequestType>,
}

impl Expertise {
    /// Build from a list of request types, dropping duplicates
    pub fn new(types: impl IntoIterator<Item = RequestType>) -> Self {
        let mut expertise = Self::default();
        for request_type in types {
            expertise.add(request_type);
        }
        expertise
    }

    /// Add a request type if not already present
    pub fn add(&mut self, request_type: RequestType) {
        if !self.types.contains(&request_type) {
            self.types.push(request_type);
        }
    }

    /// Check if this expertise covers a request type
    pub fn covers(&self, request_type: RequestType) -> bool {
        self.types.contains(&request_type)
    }

    pub fn types(&self) -> &[RequestType] {
        &self.types
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl FromStr for Expertise {
    type Err = Error;

    /// Parse a comma-separated list; blank entries are ignored
    fn from_str(s: &str) -> Result<Self> {
        let mut expertise = Self::default();
        for entry in s.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let request_type = entry
                .parse::<RequestType>()
                .map_err(|_| Error::InvalidExpertise(entry.to_string()))?;
            expertise.add(request_type);
        }
        Ok(expertise)
    }
}

impl fmt::Display for Expertise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.types.iter().map(RequestType::as_str).collect();
        f.write_str(&names.join(","))
    }
}
