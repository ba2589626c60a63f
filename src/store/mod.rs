mod json_file;
#[cfg(test)]
mod memory;

pub use json_file::JsonFileStore;
#[cfg(test)]
pub use memory::InMemoryStore;

use std::collections::HashSet;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum StoreError {
    Io(String),
    Serialize(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(msg) => write!(f, "I/O error: {msg}"),
            StoreError::Serialize(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl Error for StoreError {}

/// Durable record of listing ids already alerted on. Injected into the
/// monitor so tests can swap in an in-memory fake.
pub trait SeenStore {
    /// A missing or unreadable state file is a first-run condition, never
    /// an error: implementations return an empty set instead.
    fn load(&self) -> Result<HashSet<String>, StoreError>;

    fn save(&self, seen: &HashSet<String>) -> Result<(), StoreError>;
}
