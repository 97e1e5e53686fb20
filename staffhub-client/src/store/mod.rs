//! Durable session storage
//!
//! A small string key/value store, in the shape of browser local storage.
//! The session manager keeps two entries, [`CURRENT_USER_KEY`] and
//! [`TOKEN_KEY`], and always writes or removes them in one call.

mod file;
mod memory;

pub use file::FileSessionStore;
pub use memory::MemorySessionStore;

use std::fmt::Debug;
use std::io;

/// Serialized `User` entry
pub const CURRENT_USER_KEY: &str = "currentUser";

/// Opaque credential entry
pub const TOKEN_KEY: &str = "token";

/// Key/value storage for session entries.
///
/// `set_entries` and `remove_entries` must be atomic: after they return,
/// either every listed key changed or none did.
pub trait SessionStore: Send + Sync + Debug {
    /// Read one entry
    fn get(&self, key: &str) -> io::Result<Option<String>>;

    /// Write several entries at once
    fn set_entries(&self, entries: &[(&str, &str)]) -> io::Result<()>;

    /// Remove several entries at once; missing keys are ignored
    fn remove_entries(&self, keys: &[&str]) -> io::Result<()>;
}
