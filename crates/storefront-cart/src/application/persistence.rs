//! Mirroring cart state into a `KeyValueStore`.
//!
//! A present cart is stored as a JSON snapshot under [`CART_STORAGE_KEY`];
//! an absent cart is represented by the key being deleted. Storage failures
//! are logged here and never returned.

use storefront_core::error::DomainError;
use storefront_core::storage::KeyValueStore;

use crate::domain::aggregates::Cart;

/// The fixed key the cart snapshot lives under.
pub const CART_STORAGE_KEY: &str = "ecommerce-cart";

/// Serializes a cart snapshot.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if serialization fails.
pub fn encode_cart(cart: &Cart) -> Result<String, DomainError> {
    serde_json::to_string(cart)
        .map_err(|e| DomainError::Infrastructure(format!("cart serialization failed: {e}")))
}

/// Parses and validates a cart snapshot.
///
/// # Errors
///
/// Returns `DomainError::CorruptState` if `raw` is not a cart snapshot or
/// the decoded cart breaks a cart invariant.
pub fn decode_cart(raw: &str) -> Result<Cart, DomainError> {
    let corrupt = |reason: String| DomainError::CorruptState {
        key: CART_STORAGE_KEY.to_owned(),
        reason,
    };
    let cart: Cart = serde_json::from_str(raw).map_err(|e| corrupt(e.to_string()))?;
    cart.check_invariants().map_err(|e| corrupt(e.to_string()))?;
    Ok(cart)
}

/// Reads the persisted cart, if any.
///
/// A snapshot that fails to decode is deleted. A storage read failure is
/// treated as no saved cart.
pub(crate) fn restore_cart(storage: &dyn KeyValueStore) -> Option<Cart> {
    let raw = match storage.get(CART_STORAGE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(err) => {
            tracing::warn!(error = %err, "failed to read persisted cart, starting empty");
            return None;
        }
    };

    match decode_cart(&raw) {
        Ok(cart) => {
            tracing::info!(
                cart_id = %cart.id(),
                lines = cart.lines().len(),
                total_items = cart.total_items(),
                "restored persisted cart"
            );
            Some(cart)
        }
        Err(err) => {
            tracing::warn!(error = %err, "discarding persisted cart");
            if let Err(err) = storage.delete(CART_STORAGE_KEY) {
                tracing::warn!(error = %err, "failed to delete corrupt cart snapshot");
            }
            None
        }
    }
}

/// Writes `cart` under the cart key, or deletes the key when `cart` is
/// `None`.
pub(crate) fn persist_cart(storage: &dyn KeyValueStore, cart: Option<&Cart>) {
    let result = match cart {
        Some(cart) => {
            encode_cart(cart).and_then(|json| storage.set(CART_STORAGE_KEY, &json))
        }
        None => storage.delete(CART_STORAGE_KEY),
    };
    if let Err(err) = result {
        tracing::warn!(error = %err, "failed to persist cart state");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;
    use storefront_test_support::{FailingStore, RecordingStore, StoreOp};
    use uuid::Uuid;

    use crate::domain::aggregates::CartLine;
    use crate::domain::products::Product;

    fn sample_cart() -> Cart {
        let lamp = Product::new(7, "Desk Lamp", Decimal::new(1999, 2));
        Cart::open(
            Uuid::from_u128(1),
            CartLine::new(Uuid::from_u128(2), &lamp, 3).unwrap(),
            Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_encode_uses_source_field_names_and_timestamp_format() {
        // Act
        let json: serde_json::Value =
            serde_json::from_str(&encode_cart(&sample_cart()).unwrap()).unwrap();

        // Assert
        assert_eq!(json["id"], "00000000-0000-0000-0000-000000000001");
        assert_eq!(json["totalItems"], 3);
        assert_eq!(json["totalPrice"], 59.97);
        assert_eq!(json["createdAt"], "2026-01-15 10:00:00");
        assert_eq!(json["updatedAt"], "2026-01-15 10:00:00");
        let item = &json["items"][0];
        assert_eq!(item["id"], "00000000-0000-0000-0000-000000000002");
        assert_eq!(item["productId"], 7);
        assert_eq!(item["product"]["name"], "Desk Lamp");
        assert_eq!(item["quantity"], 3);
        assert_eq!(item["price"], 19.99);
        assert_eq!(item["totalPrice"], 59.97);
    }

    #[test]
    fn test_encode_writes_exact_decimal_digits() {
        // Arrange
        let thread = Product::new(9, "Fine Thread", "0.1234567890123456789".parse().unwrap());
        let cart = Cart::open(
            Uuid::from_u128(1),
            CartLine::new(Uuid::from_u128(2), &thread, 3).unwrap(),
            Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap(),
        );

        // Act
        let raw = encode_cart(&cart).unwrap();

        // Assert
        assert!(raw.contains(r#""price":0.1234567890123456789"#));
        assert!(raw.contains(r#""totalPrice":0.3703703670370370367"#));
        assert_eq!(decode_cart(&raw).unwrap(), cart);
    }

    #[test]
    fn test_decode_round_trips_encoded_cart() {
        let cart = sample_cart();

        let decoded = decode_cart(&encode_cart(&cart).unwrap()).unwrap();

        assert_eq!(decoded, cart);
    }

    #[test]
    fn test_decode_rejects_malformed_json() {
        match decode_cart("{not json") {
            Err(DomainError::CorruptState { key, .. }) => assert_eq!(key, CART_STORAGE_KEY),
            other => panic!("expected CorruptState, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_rejects_cart_without_lines() {
        let raw = r#"{"id":"00000000-0000-0000-0000-000000000001","items":[],
            "totalItems":0,"totalPrice":0,
            "createdAt":"2026-01-15 10:00:00","updatedAt":"2026-01-15 10:00:00"}"#;

        match decode_cart(raw) {
            Err(DomainError::CorruptState { reason, .. }) => assert!(reason.contains("no lines")),
            other => panic!("expected CorruptState, got {other:?}"),
        }
    }

    #[test]
    fn test_restore_deletes_corrupt_snapshot() {
        // Arrange
        let storage = RecordingStore::with_entry(CART_STORAGE_KEY, "definitely not a cart");

        // Act
        let restored = restore_cart(&storage);

        // Assert
        assert!(restored.is_none());
        assert_eq!(
            storage.ops(),
            vec![StoreOp::Delete {
                key: CART_STORAGE_KEY.to_owned()
            }]
        );
        assert_eq!(storage.value(CART_STORAGE_KEY), None);
    }

    #[test]
    fn test_restore_treats_read_failure_as_no_cart() {
        assert!(restore_cart(&FailingStore).is_none());
    }

    #[test]
    fn test_persist_swallows_write_failures() {
        persist_cart(&FailingStore, Some(&sample_cart()));
        persist_cart(&FailingStore, None);
    }
}
