//! Data models
//!
//! Mirror the GraphQL schema types. Field names match the schema
//! (snake_case), so no serde renames are needed. Timestamps are kept as
//! the opaque strings the server sends.

pub mod employee;
pub mod user;

// Re-exports
pub use employee::*;
pub use user::*;
