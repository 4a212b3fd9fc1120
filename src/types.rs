//! Common types used throughout the Float API client
//!
//! This module contains shared type definitions and type aliases
//! used across multiple modules.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

/// Generic key-value map with string keys and values
pub type StringMap = HashMap<String, String>;

/// An opaque record returned by the Float API.
///
/// The service owns the schema; the client only ever inspects the
/// per-resource identity field (e.g. `project_id`).
pub type Record = JsonValue;

// ============================================================================
// HTTP Types
// ============================================================================

/// HTTP verb used against the Float API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    #[default]
    GET,
    POST,
    PATCH,
    DELETE,
}

impl Method {
    /// The success status code the Float API returns for this verb
    pub fn expected_status(self) -> u16 {
        match self {
            Method::GET | Method::PATCH => 200,
            Method::POST => 201,
            Method::DELETE => 204,
        }
    }

    /// Whether this verb carries a JSON request body
    pub fn has_body(self) -> bool {
        matches!(self, Method::POST | Method::PATCH)
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::GET => reqwest::Method::GET,
            Method::POST => reqwest::Method::POST,
            Method::PATCH => reqwest::Method::PATCH,
            Method::DELETE => reqwest::Method::DELETE,
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Method::GET => "GET",
            Method::POST => "POST",
            Method::PATCH => "PATCH",
            Method::DELETE => "DELETE",
        };
        f.write_str(s)
    }
}
