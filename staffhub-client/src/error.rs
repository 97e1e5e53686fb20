//! Client error types

use shared::graphql::GraphqlError;
use shared::validation::InvalidInput;
use thiserror::Error;

/// Fallback text shown when the transport itself failed
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please check your connection.";

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level failure: DNS, connect, TLS, reset
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Login or signup rejected by the server
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Server answered with an error list
    #[error("Request rejected: {message}")]
    Rejected {
        message: String,
        code: Option<String>,
    },

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// No session, or the server refused the credential
    #[error("Authentication required")]
    Unauthorized,

    /// Input failed client-side validation
    #[error("Validation error: {0}")]
    Validation(String),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Stored session could not be decoded
    #[error("Malformed stored session: {0}")]
    MalformedSession(String),

    /// Durable storage failed
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// Whether the failure happened below the application layer
    pub fn is_network(&self) -> bool {
        matches!(self, ClientError::Network(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::NotFound(_))
    }

    /// Text suitable for showing to a user.
    ///
    /// Server messages win; transport failures get a generic message.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Network(_) => NETWORK_ERROR_MESSAGE.to_string(),
            ClientError::Auth(msg)
            | ClientError::NotFound(msg)
            | ClientError::Validation(msg)
            | ClientError::Rejected { message: msg, .. } => msg.clone(),
            other => other.to_string(),
        }
    }

    /// Classify a non-empty GraphQL error list. Only the first entry is used.
    pub(crate) fn from_graphql(errors: &[GraphqlError]) -> Self {
        let Some(first) = errors.first() else {
            return ClientError::InvalidResponse("Empty error list".into());
        };
        if first.is_not_found() {
            return ClientError::NotFound(first.message.clone());
        }
        ClientError::Rejected {
            message: first.message.clone(),
            code: first.code().map(str::to_string),
        }
    }

    /// Recast an application-level failure of login/signup as `Auth`
    pub(crate) fn into_auth(self) -> Self {
        match self {
            ClientError::Rejected { message, .. } | ClientError::NotFound(message) => {
                ClientError::Auth(message)
            }
            ClientError::Unauthorized => ClientError::Auth("Invalid credentials".into()),
            other => other,
        }
    }
}

impl From<InvalidInput> for ClientError {
    fn from(err: InvalidInput) -> Self {
        ClientError::Validation(err.0)
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
