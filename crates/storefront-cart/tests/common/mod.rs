//! Shared test helpers for cart store integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use storefront_cart::application::command_handlers::CartStore;
use storefront_cart::domain::products::Product;
use storefront_core::storage::KeyValueStore;
use storefront_test_support::{FixedClock, SequentialIdGenerator};

/// Fixed timestamp used across the cart integration tests.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap()
}

/// A catalog product with a whole-unit price.
pub fn product(id: u64, price: i64) -> Product {
    Product::new(id, format!("Product {id}"), Decimal::from(price))
}

/// Load a store over `storage` with a fixed clock and sequential ids.
pub fn load_store(storage: Arc<dyn KeyValueStore>) -> CartStore {
    CartStore::load(
        storage,
        Arc::new(FixedClock(fixed_now())),
        Arc::new(SequentialIdGenerator::new()),
    )
}

/// Id of the line holding `product_id`.
pub fn line_for(store: &CartStore, product_id: u64) -> uuid::Uuid {
    store
        .cart()
        .and_then(|cart| cart.line_for_product(product_id))
        .map(|line| line.id())
        .unwrap()
}
