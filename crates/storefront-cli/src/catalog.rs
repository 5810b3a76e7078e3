//! Loading the product catalog from disk.

use std::io::ErrorKind;
use std::path::Path;

use storefront_cart::domain::catalog::InMemoryCatalog;

use crate::error::AppError;

/// Reads a JSON array of products from `path`.
///
/// # Errors
///
/// Returns `AppError::Catalog` if the file is missing, unreadable or not a
/// product list.
pub fn load_catalog(path: &Path) -> Result<InMemoryCatalog, AppError> {
    let raw = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => AppError::Catalog(format!("{} not found", path.display())),
        _ => AppError::Catalog(format!("failed to read {}: {e}", path.display())),
    })?;
    let catalog = InMemoryCatalog::from_json(&raw)
        .map_err(|e| AppError::Catalog(format!("{}: {e}", path.display())))?;
    tracing::debug!(path = %path.display(), products = catalog.len(), "loaded catalog");
    Ok(catalog)
}
