//! Aggregate roots for the Cart context.
//!
//! `Cart` and `CartLine` are immutable from outside the crate. Transitions
//! build new values through the crate-private constructors, which recompute
//! the derived totals.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use storefront_core::error::DomainError;
use uuid::Uuid;

use super::products::Product;

/// One product's aggregated presence in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    id: Uuid,
    product_id: u64,
    product: Product,
    quantity: u32,
    /// Price captured when the line was created.
    #[serde(rename = "price", with = "rust_decimal::serde::arbitrary_precision")]
    unit_price: Decimal,
    #[serde(rename = "totalPrice", with = "rust_decimal::serde::arbitrary_precision")]
    line_total: Decimal,
}

impl CartLine {
    /// Builds a line for `quantity` units of `product` at its current price.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the line total overflows.
    pub(crate) fn new(id: Uuid, product: &Product, quantity: u32) -> Result<Self, DomainError> {
        Ok(Self {
            id,
            product_id: product.id,
            product: product.clone(),
            quantity,
            unit_price: product.price,
            line_total: line_total(product.price, quantity)?,
        })
    }

    /// Returns a copy at `quantity`, priced from the stored unit price.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the line total overflows.
    pub(crate) fn with_quantity(&self, quantity: u32) -> Result<Self, DomainError> {
        Ok(Self {
            quantity,
            line_total: line_total(self.unit_price, quantity)?,
            ..self.clone()
        })
    }

    /// Line identifier, stable for the life of the line.
    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The referenced catalog product id.
    #[must_use]
    pub fn product_id(&self) -> u64 {
        self.product_id
    }

    /// The product snapshot taken when the line was created.
    #[must_use]
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Units of the product in the cart.
    #[must_use]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Unit price captured at line creation.
    #[must_use]
    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    /// `unit_price × quantity`.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.line_total
    }
}

/// The aggregate root for a shopping cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    id: Uuid,
    #[serde(rename = "items")]
    lines: Vec<CartLine>,
    total_items: u64,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    total_price: Decimal,
    #[serde(with = "storefront_core::timestamp")]
    created_at: DateTime<Utc>,
    #[serde(with = "storefront_core::timestamp")]
    updated_at: DateTime<Utc>,
}

impl Cart {
    /// Opens a new cart holding `first_line`.
    pub(crate) fn open(id: Uuid, first_line: CartLine, now: DateTime<Utc>) -> Self {
        let (total_items, total_price) = (u64::from(first_line.quantity), first_line.line_total);
        Self {
            id,
            lines: vec![first_line],
            total_items,
            total_price,
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns a copy of this cart holding `lines`, with totals recomputed
    /// and `updated_at` set to `now`. Returns `None` when `lines` is empty:
    /// a cart with no lines ceases to exist.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the cart total overflows.
    pub(crate) fn revised(
        &self,
        lines: Vec<CartLine>,
        now: DateTime<Utc>,
    ) -> Result<Option<Self>, DomainError> {
        if lines.is_empty() {
            return Ok(None);
        }
        let (total_items, total_price) = totals(&lines)?;
        Ok(Some(Self {
            id: self.id,
            lines,
            total_items,
            total_price,
            created_at: self.created_at,
            updated_at: now,
        }))
    }

    /// Cart identifier.
    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Finds a line by its identifier.
    #[must_use]
    pub fn line(&self, line_id: Uuid) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.id == line_id)
    }

    /// Finds the line holding `product_id`.
    #[must_use]
    pub fn line_for_product(&self, product_id: u64) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.product_id == product_id)
    }

    /// Sum of all line quantities.
    #[must_use]
    pub fn total_items(&self) -> u64 {
        self.total_items
    }

    /// Sum of all line totals.
    #[must_use]
    pub fn total_price(&self) -> Decimal {
        self.total_price
    }

    /// When the cart was opened.
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// When the cart last changed.
    #[must_use]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Checks the invariants a cart built by this crate always holds. Carts
    /// decoded from storage or handed in from outside may not.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` naming the first broken invariant.
    pub fn check_invariants(&self) -> Result<(), DomainError> {
        if self.lines.is_empty() {
            return Err(DomainError::Validation(format!(
                "cart {} has no lines",
                self.id
            )));
        }

        let mut seen = HashSet::new();
        for line in &self.lines {
            if line.quantity == 0 {
                return Err(DomainError::Validation(format!(
                    "line {} has zero quantity",
                    line.id
                )));
            }
            if line.product_id != line.product.id {
                return Err(DomainError::Validation(format!(
                    "line {} references product {} but snapshots product {}",
                    line.id, line.product_id, line.product.id
                )));
            }
            if !seen.insert(line.product_id) {
                return Err(DomainError::Validation(format!(
                    "product {} appears on more than one line",
                    line.product_id
                )));
            }
            if line_total(line.unit_price, line.quantity)? != line.line_total {
                return Err(DomainError::Validation(format!(
                    "line {} total {} does not match {} x {}",
                    line.id, line.line_total, line.unit_price, line.quantity
                )));
            }
        }

        let (total_items, total_price) = totals(&self.lines)?;
        if total_items != self.total_items || total_price != self.total_price {
            return Err(DomainError::Validation(format!(
                "cart {} totals ({}, {}) do not match its lines ({total_items}, {total_price})",
                self.id, self.total_items, self.total_price
            )));
        }
        Ok(())
    }
}

/// `unit_price × quantity`, or a validation error when it leaves the
/// representable range.
fn line_total(unit_price: Decimal, quantity: u32) -> Result<Decimal, DomainError> {
    unit_price
        .checked_mul(Decimal::from(quantity))
        .ok_or_else(|| {
            DomainError::Validation(format!(
                "line total {unit_price} x {quantity} is out of range"
            ))
        })
}

fn totals(lines: &[CartLine]) -> Result<(u64, Decimal), DomainError> {
    let total_items: u64 = lines.iter().map(|line| u64::from(line.quantity)).sum();
    let total_price = lines
        .iter()
        .try_fold(Decimal::ZERO, |sum, line| sum.checked_add(line.line_total))
        .ok_or_else(|| DomainError::Validation("cart total is out of range".to_owned()))?;
    Ok((total_items, total_price))
}
