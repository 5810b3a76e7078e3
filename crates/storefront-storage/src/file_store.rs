//! File-backed implementation of the `KeyValueStore` trait.
//!
//! Each key maps to `<root>/<key>.json`. Writes land in a uniquely named
//! staging file in the same directory and are renamed into place, so a
//! reader never observes a half-written value and concurrent writers never
//! share a staging file.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use storefront_core::error::DomainError;
use storefront_core::storage::KeyValueStore;

/// Directory-backed key-value store.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Creates a `FileStore` rooted at `root`. The directory is created on
    /// first write.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves the file path for `key`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the key is empty, starts with a
    /// dot, or contains characters outside `[A-Za-z0-9._-]`.
    fn path_for(&self, key: &str) -> Result<PathBuf, DomainError> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));
        if !valid {
            return Err(DomainError::Validation(format!(
                "invalid storage key {key:?}"
            )));
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

fn io_error(action: &str, path: &Path, err: &std::io::Error) -> DomainError {
    DomainError::Infrastructure(format!("failed to {action} {}: {err}", path.display()))
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        let path = self.path_for(key)?;
        match fs::read(&path) {
            // Invalid UTF-8 is passed through lossily so the caller's decoder
            // rejects it as corrupt rather than as an I/O failure.
            Ok(bytes) => Ok(Some(String::from_utf8_lossy(&bytes).into_owned())),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(io_error("read", &path, &err)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), DomainError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.root).map_err(|e| io_error("create", &self.root, &e))?;

        // Staging names start with a dot, which no valid key can.
        let mut staging = tempfile::Builder::new()
            .prefix(&format!(".{key}."))
            .suffix(".tmp")
            .tempfile_in(&self.root)
            .map_err(|e| io_error("stage", &self.root, &e))?;
        staging
            .write_all(value.as_bytes())
            .map_err(|e| io_error("write", staging.path(), &e))?;
        staging
            .persist(&path)
            .map_err(|e| io_error("replace", &path, &e.error))?;

        tracing::trace!(key, path = %path.display(), bytes = value.len(), "value written");
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), DomainError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                tracing::trace!(key, path = %path.display(), "value deleted");
                Ok(())
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(io_error("delete", &path, &err)),
        }
    }
}
