//! Client module - GraphQL transport, session manager and employee service.

// Core modules
mod builder;
mod employee;
pub mod graphql;
mod operations;
mod session;

// Re-export main types
pub use builder::StaffHub;
pub use employee::EmployeeService;
pub use graphql::{GraphqlTransport, NetworkGraphqlClient};
pub use session::{SessionManager, SessionStream, TokenProvider};
