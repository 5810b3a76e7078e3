//! Integration tests for the cart store lifecycle.

mod common;

use std::sync::Arc;

use rust_decimal::Decimal;
use storefront_cart::application::persistence::CART_STORAGE_KEY;
use storefront_core::storage::KeyValueStore;
use storefront_storage::MemoryStore;

#[test]
fn test_cart_lifecycle_scenario() {
    let storage = Arc::new(MemoryStore::new());
    let mut store = common::load_store(storage.clone());
    let lamp = common::product(7, 25);
    let mug = common::product(9, 10);

    // Add product 7 twice; the second add merges into the first line.
    store.add_item(&lamp, 2).unwrap();
    let cart = store.cart().unwrap();
    assert_eq!(cart.lines().len(), 1);
    assert_eq!(cart.lines()[0].quantity(), 2);
    assert_eq!(cart.lines()[0].line_total(), Decimal::from(50));
    assert_eq!(store.total_items(), 2);
    assert_eq!(store.total_price(), Decimal::from(50));

    store.add_item(&lamp, 3).unwrap();
    let cart = store.cart().unwrap();
    assert_eq!(cart.lines().len(), 1);
    assert_eq!(cart.lines()[0].quantity(), 5);
    assert_eq!(cart.lines()[0].line_total(), Decimal::from(125));
    assert_eq!(store.total_price(), Decimal::from(125));

    // A second product opens a second line.
    store.add_item(&mug, 1).unwrap();
    assert_eq!(store.cart().unwrap().lines().len(), 2);
    assert_eq!(store.total_items(), 6);
    assert_eq!(store.total_price(), Decimal::from(135));

    // Updating to zero drops the line.
    store
        .update_quantity(common::line_for(&store, 9), 0)
        .unwrap();
    let cart = store.cart().unwrap();
    assert_eq!(cart.lines().len(), 1);
    assert_eq!(cart.lines()[0].product_id(), 7);
    assert_eq!(store.total_items(), 5);
    assert_eq!(store.total_price(), Decimal::from(125));

    // Removing the last line collapses the cart and clears storage.
    store.remove_item(common::line_for(&store, 7)).unwrap();
    assert!(store.cart().is_none());
    assert_eq!(storage.get(CART_STORAGE_KEY).unwrap(), None);

    assert_eq!(store.get_item_quantity(7), 0);
}

// Merging keeps the unit price captured when the line was first created,
// even when the product passed in carries a newer price. This pins current
// behavior rather than endorsing it.
#[test]
fn test_merge_keeps_first_captured_unit_price() {
    let mut store = common::load_store(Arc::new(MemoryStore::new()));
    store.add_item(&common::product(7, 25), 1).unwrap();

    store.add_item(&common::product(7, 40), 1).unwrap();

    let line = &store.cart().unwrap().lines()[0];
    assert_eq!(line.unit_price(), Decimal::from(25));
    assert_eq!(line.line_total(), Decimal::from(50));
}

#[test]
fn test_update_quantity_below_zero_collapses_cart() {
    let storage = Arc::new(MemoryStore::new());
    let mut store = common::load_store(storage.clone());
    store.add_item(&common::product(7, 25), 2).unwrap();

    store
        .update_quantity(common::line_for(&store, 7), -4)
        .unwrap();

    assert!(store.cart().is_none());
    assert_eq!(storage.get(CART_STORAGE_KEY).unwrap(), None);
}

#[test]
fn test_remove_item_twice_leaves_state_unchanged() {
    let mut store = common::load_store(Arc::new(MemoryStore::new()));
    store.add_item(&common::product(7, 25), 1).unwrap();
    store.add_item(&common::product(9, 10), 1).unwrap();
    let line_id = common::line_for(&store, 9);

    store.remove_item(line_id).unwrap();
    let after_first = store.cart().cloned();
    store.remove_item(line_id).unwrap();

    assert_eq!(store.cart().cloned(), after_first);
    assert_eq!(store.total_items(), 1);
}
