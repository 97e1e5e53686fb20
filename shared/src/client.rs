//! Auth DTOs shared between server and client
//!
//! Inputs of the `login` / `signup` operations and the payload both
//! return.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::User;

/// Login input (`LoginInput!` in the schema)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginInput {
    #[validate(length(min = 1, max = 200, message = "username is required"))]
    pub username: String,
    #[validate(length(
        min = 6,
        max = 128,
        message = "password must be at least 6 characters"
    ))]
    pub password: String,
}

impl LoginInput {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Signup input (`SignupInput!` in the schema)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignupInput {
    #[validate(length(min = 1, max = 200, message = "username is required"))]
    pub username: String,
    #[validate(
        email(message = "email must be a valid address"),
        length(max = 254, message = "email is too long")
    )]
    pub email: String,
    #[validate(length(
        min = 6,
        max = 128,
        message = "password must be at least 6 characters"
    ))]
    pub password: String,
}

impl SignupInput {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Result of `login` and `signup`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthPayload {
    pub user: User,
    pub token: String,
}
