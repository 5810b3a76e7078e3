//! Product snapshots as supplied by the catalog.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Stock status of a catalog product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductStatus {
    /// Comfortably in stock.
    #[default]
    InStock,
    /// Running low.
    LowStock,
    /// Not currently available.
    OutOfStock,
}

/// A catalog product. The cart copies the full record into each line when
/// the line is created and never refreshes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Catalog identifier.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Optional long description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Catalog category.
    pub category: String,
    /// Unit selling price.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub price: Decimal,
    /// Unit cost to the merchant.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub cost: Decimal,
    /// Units on hand.
    pub stock: u32,
    /// Stock status.
    pub status: ProductStatus,
    /// Units sold to date.
    pub sales: u64,
    /// Image URL.
    pub image: String,
    /// Stock keeping unit.
    pub sku: String,
    /// Catalog creation date, as the catalog formats it.
    pub created_at: String,
    /// Catalog update date, as the catalog formats it.
    pub updated_at: String,
}

impl Product {
    /// Creates a product with the given identity and price. Remaining fields
    /// take neutral defaults and the SKU is derived from the id.
    #[must_use]
    pub fn new(id: u64, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
            category: String::new(),
            price,
            cost: Decimal::ZERO,
            stock: 0,
            status: ProductStatus::InStock,
            sales: 0,
            image: String::new(),
            sku: format!("PROD-{id:03}"),
            created_at: String::new(),
            updated_at: String::new(),
        }
    }
}
