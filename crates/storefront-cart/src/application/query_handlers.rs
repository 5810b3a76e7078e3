//! Query handlers for the Cart context.
//!
//! Read-only projections of the current cart for a display layer. None of
//! these touch storage.

use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::aggregates::{Cart, CartLine};

/// Read-only view of one cart line.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineView {
    /// The line identifier.
    pub line_id: Uuid,
    /// The catalog product id.
    pub product_id: u64,
    /// Product name from the line's snapshot.
    pub name: String,
    /// Units in the cart.
    pub quantity: u32,
    /// Unit price captured at line creation.
    #[serde(serialize_with = "rust_decimal::serde::arbitrary_precision::serialize")]
    pub unit_price: Decimal,
    /// `unit_price × quantity`.
    #[serde(serialize_with = "rust_decimal::serde::arbitrary_precision::serialize")]
    pub line_total: Decimal,
}

impl From<&CartLine> for CartLineView {
    fn from(line: &CartLine) -> Self {
        Self {
            line_id: line.id(),
            product_id: line.product_id(),
            name: line.product().name.clone(),
            quantity: line.quantity(),
            unit_price: line.unit_price(),
            line_total: line.line_total(),
        }
    }
}

/// Read-only view of the cart. An absent cart has no id, no lines and zero
/// totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    /// The cart identifier, if a cart exists.
    pub cart_id: Option<Uuid>,
    /// Lines in insertion order.
    pub lines: Vec<CartLineView>,
    /// Sum of line quantities.
    pub total_items: u64,
    /// Sum of line totals.
    #[serde(serialize_with = "rust_decimal::serde::arbitrary_precision::serialize")]
    pub total_price: Decimal,
}

/// Builds the view of `cart`.
#[must_use]
pub fn view_cart(cart: Option<&Cart>) -> CartView {
    match cart {
        Some(cart) => CartView {
            cart_id: Some(cart.id()),
            lines: cart.lines().iter().map(CartLineView::from).collect(),
            total_items: cart.total_items(),
            total_price: cart.total_price(),
        },
        None => CartView {
            cart_id: None,
            lines: Vec::new(),
            total_items: 0,
            total_price: Decimal::ZERO,
        },
    }
}

/// Returns the quantity of `product_id` in `cart`, or 0 when the cart is
/// absent or does not hold the product.
#[must_use]
pub fn get_item_quantity(cart: Option<&Cart>, product_id: u64) -> u32 {
    cart.and_then(|cart| cart.line_for_product(product_id))
        .map_or(0, CartLine::quantity)
}
