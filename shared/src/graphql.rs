//! GraphQL wire types
//!
//! Request and response envelopes for a single-endpoint GraphQL API
//! over HTTP POST (`application/json`).
//!
//! ```json
//! { "data": { ... }, "errors": [{ "message": "...", "extensions": { "code": "..." } }] }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request body posted to the endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphqlRequest {
    pub query: String,
    #[serde(rename = "operationName", skip_serializing_if = "Option::is_none")]
    pub operation_name: Option<String>,
    #[serde(default)]
    pub variables: Value,
}

impl GraphqlRequest {
    pub fn new(operation_name: impl Into<String>, query: impl Into<String>, variables: Value) -> Self {
        Self {
            query: query.into(),
            operation_name: Some(operation_name.into()),
            variables,
        }
    }
}

/// One entry of the `errors` list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphqlError {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Value>,
}

impl GraphqlError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            path: None,
            extensions: None,
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.extensions = Some(serde_json::json!({ "code": code.into() }));
        self
    }

    /// `extensions.code`, when the server sets one (e.g. `NOT_FOUND`, `UNAUTHENTICATED`)
    pub fn code(&self) -> Option<&str> {
        self.extensions.as_ref()?.get("code")?.as_str()
    }

    /// Whether the server reported a missing record
    pub fn is_not_found(&self) -> bool {
        if self.code() == Some("NOT_FOUND") {
            return true;
        }
        self.message.to_ascii_lowercase().contains("not found")
    }
}

/// Response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphqlResponse<T> {
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<GraphqlError>,
}

impl<T> GraphqlResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            data: Some(data),
            errors: Vec::new(),
        }
    }

    pub fn error(error: GraphqlError) -> Self {
        Self {
            data: None,
            errors: vec![error],
        }
    }

    /// First server message, used as the human-readable failure text
    pub fn first_message(&self) -> Option<&str> {
        self.errors.first().map(|e| e.message.as_str())
    }
}
