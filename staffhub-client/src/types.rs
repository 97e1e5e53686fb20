//! Session state types.

use shared::models::User;

// ============================================================================
// Session Data
// ============================================================================

/// Live session: the logged-in user and the credential that proves it.
///
/// Both halves are always present together; "logged out" is the absence
/// of a `SessionData`, never a half-filled one.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionData {
    /// Bearer token for API authentication
    token: String,
    /// User returned by login/signup
    user: User,
}

impl SessionData {
    /// Returns `None` for an empty token.
    pub fn new(token: impl Into<String>, user: User) -> Option<Self> {
        let token = token.into();
        if token.is_empty() {
            return None;
        }
        Some(Self { token, user })
    }

    /// Returns the bearer token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns the current user.
    pub fn user(&self) -> &User {
        &self.user
    }
}

// ============================================================================
// Client Status
// ============================================================================

/// Runtime status information for the client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientStatus {
    /// Whether a session is active.
    pub is_authenticated: bool,
    /// Username of the active session.
    pub username: Option<String>,
}
