//! Shared types for StaffHub
//!
//! Domain models and GraphQL wire types used by the client and by
//! anything that needs to speak the same API (test stubs, tools).

pub mod client;
pub mod graphql;
pub mod models;
pub mod validation;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use client::{AuthPayload, LoginInput, SignupInput};
pub use graphql::{GraphqlError, GraphqlRequest, GraphqlResponse};
pub use models::{Employee, EmployeeFilter, EmployeeInput, EmployeeUpdate, User};
