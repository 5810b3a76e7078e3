//! Catalog lookup.
//!
//! The catalog is owned elsewhere; the cart only needs to resolve a product
//! id to the product's identity and current price.

use std::collections::BTreeMap;

use storefront_core::error::DomainError;

use super::products::Product;

/// Read-only product lookup.
pub trait Catalog: Send + Sync {
    /// Returns the product with `product_id`, if the catalog carries it.
    fn find_product(&self, product_id: u64) -> Option<Product>;
}

/// Catalog backed by an in-memory product list.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    products: BTreeMap<u64, Product>,
}

impl InMemoryCatalog {
    /// Builds a catalog from `products`. A later product replaces an earlier
    /// one with the same id.
    #[must_use]
    pub fn new(products: impl IntoIterator<Item = Product>) -> Self {
        Self {
            products: products.into_iter().map(|p| (p.id, p)).collect(),
        }
    }

    /// Parses a JSON array of products.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the input is not a JSON array of
    /// product records.
    pub fn from_json(raw: &str) -> Result<Self, DomainError> {
        let products: Vec<Product> = serde_json::from_str(raw)
            .map_err(|e| DomainError::Validation(format!("invalid catalog: {e}")))?;
        Ok(Self::new(products))
    }

    /// Iterates products in id order.
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }

    /// Number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Catalog for InMemoryCatalog {
    fn find_product(&self, product_id: u64) -> Option<Product> {
        self.products.get(&product_id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_find_product_returns_latest_entry_for_duplicate_ids() {
        // Arrange
        let catalog = InMemoryCatalog::new([
            Product::new(7, "Lamp", Decimal::from(25)),
            Product::new(9, "Mug", Decimal::from(10)),
            Product::new(7, "Lamp v2", Decimal::from(30)),
        ]);

        // Act
        let found = catalog.find_product(7).unwrap();

        // Assert
        assert_eq!(catalog.len(), 2);
        assert_eq!(found.name, "Lamp v2");
        assert_eq!(found.price, Decimal::from(30));
        assert!(catalog.find_product(8).is_none());
    }

    #[test]
    fn test_from_json_rejects_non_array_input() {
        let result = InMemoryCatalog::from_json(r#"{"id": 1}"#);

        match result {
            Err(DomainError::Validation(msg)) => assert!(msg.starts_with("invalid catalog")),
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn test_products_iterate_in_id_order() {
        let catalog = InMemoryCatalog::new([
            Product::new(9, "Mug", Decimal::from(10)),
            Product::new(3, "Pen", Decimal::from(2)),
        ]);

        let ids: Vec<u64> = catalog.products().map(|p| p.id).collect();

        assert_eq!(ids, vec![3, 9]);
    }
}
