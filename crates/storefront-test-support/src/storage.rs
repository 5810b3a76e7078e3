//! Test stores: mock `KeyValueStore` implementations for tests.

use std::collections::HashMap;
use std::sync::Mutex;

use storefront_core::error::DomainError;
use storefront_core::storage::KeyValueStore;

/// A write recorded by `RecordingStore`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreOp {
    /// `set(key, value)` was called.
    Set {
        /// The key written.
        key: String,
        /// The value written.
        value: String,
    },
    /// `delete(key)` was called.
    Delete {
        /// The key deleted.
        key: String,
    },
}

/// A key-value store that keeps values in memory and records every `set` and
/// `delete` call in order.
#[derive(Debug, Default)]
pub struct RecordingStore {
    entries: Mutex<HashMap<String, String>>,
    ops: Mutex<Vec<StoreOp>>,
}

impl RecordingStore {
    /// Create an empty recording store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a recording store primed with `value` under `key`. Priming is
    /// not recorded as an operation.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::default();
        store
            .entries
            .lock()
            .unwrap()
            .insert(key.to_owned(), value.to_owned());
        store
    }

    /// Returns a snapshot of all recorded writes.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn ops(&self) -> Vec<StoreOp> {
        self.ops.lock().unwrap().clone()
    }

    /// Returns the current value under `key` without recording anything.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn value(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }
}

impl KeyValueStore for RecordingStore {
    fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), DomainError> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_owned(), value.to_owned());
        self.ops.lock().unwrap().push(StoreOp::Set {
            key: key.to_owned(),
            value: value.to_owned(),
        });
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), DomainError> {
        self.entries.lock().unwrap().remove(key);
        self.ops.lock().unwrap().push(StoreOp::Delete {
            key: key.to_owned(),
        });
        Ok(())
    }
}

/// A key-value store whose every call returns an infrastructure error.
/// Useful for testing that persistence failures are swallowed.
#[derive(Debug)]
pub struct FailingStore;

impl KeyValueStore for FailingStore {
    fn get(&self, _key: &str) -> Result<Option<String>, DomainError> {
        Err(DomainError::Infrastructure("storage unavailable".into()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), DomainError> {
        Err(DomainError::Infrastructure("storage unavailable".into()))
    }

    fn delete(&self, _key: &str) -> Result<(), DomainError> {
        Err(DomainError::Infrastructure("storage unavailable".into()))
    }
}
