//! Key-value persistence abstraction.
//!
//! The cart store mirrors its state into a string-valued key-value store,
//! the way a browser mirrors state into local storage. Calls are synchronous
//! from the caller's point of view.

use crate::error::DomainError;

/// Repository trait for reading, writing and deleting values by key.
pub trait KeyValueStore: Send + Sync {
    /// Returns the value stored under `key`, or `None` if the key is absent.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, DomainError>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the backend cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), DomainError>;

    /// Removes `key`. Removing an absent key succeeds.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the backend cannot be written.
    fn delete(&self, key: &str) -> Result<(), DomainError>;
}
