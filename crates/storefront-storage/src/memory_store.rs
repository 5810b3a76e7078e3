//! In-memory implementation of the `KeyValueStore` trait.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use storefront_core::error::DomainError;
use storefront_core::storage::KeyValueStore;

/// Process-local key-value store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Creates an empty `MemoryStore`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a `MemoryStore` primed with a single entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.to_owned(), value.to_owned());
        Self {
            entries: Mutex::new(entries),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, String>>, DomainError> {
        self.entries
            .lock()
            .map_err(|e| DomainError::Infrastructure(format!("memory store lock poisoned: {e}")))
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), DomainError> {
        self.lock()?.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), DomainError> {
        self.lock()?.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_returns_none_for_missing_key() {
        let store = MemoryStore::new();

        assert_eq!(store.get("ecommerce-cart").unwrap(), None);
    }

    #[test]
    fn test_set_then_get_returns_latest_value() {
        // Arrange
        let store = MemoryStore::new();

        // Act
        store.set("ecommerce-cart", "first").unwrap();
        store.set("ecommerce-cart", "second").unwrap();

        // Assert
        assert_eq!(
            store.get("ecommerce-cart").unwrap().as_deref(),
            Some("second")
        );
    }

    #[test]
    fn test_delete_removes_value_and_tolerates_missing_key() {
        // Arrange
        let store = MemoryStore::with_entry("ecommerce-cart", "{}");

        // Act
        store.delete("ecommerce-cart").unwrap();
        let second = store.delete("ecommerce-cart");

        // Assert
        assert!(second.is_ok());
        assert_eq!(store.get("ecommerce-cart").unwrap(), None);
    }
}
