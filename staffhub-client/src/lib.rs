//! StaffHub Client - GraphQL client for the StaffHub employee API
//!
//! Provides the session manager (login, signup, logout, persisted and
//! observable session state) and the employee data access layer.

pub mod client;
pub mod config;
pub mod error;
pub mod store;
pub mod types;

pub use client::{
    EmployeeService, GraphqlTransport, NetworkGraphqlClient, SessionManager, SessionStream,
    StaffHub, TokenProvider,
};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use store::{FileSessionStore, MemorySessionStore, SessionStore};
pub use types::{ClientStatus, SessionData};

// Re-export shared types for convenience
pub use shared::client::{AuthPayload, LoginInput, SignupInput};
pub use shared::models;
pub use shared::models::{Employee, EmployeeFilter, EmployeeInput, EmployeeUpdate, User};
