//! Command handlers for the Cart context.
//!
//! `CartStore` owns the single cart value. Each command is run through the
//! `CartReducer`; when the result differs from the current state the store
//! adopts it and mirrors it into storage.

use std::fmt;
use std::sync::Arc;

use rust_decimal::Decimal;
use storefront_core::clock::Clock;
use storefront_core::command::Command;
use storefront_core::error::DomainError;
use storefront_core::id::IdGenerator;
use storefront_core::reducer::Reducer;
use storefront_core::storage::KeyValueStore;
use uuid::Uuid;

use crate::application::persistence::{persist_cart, restore_cart};
use crate::application::query_handlers::{self, CartView};
use crate::domain::aggregates::Cart;
use crate::domain::catalog::Catalog;
use crate::domain::commands::{AddItem, CartCommand, RemoveItem, UpdateQuantity};
use crate::domain::products::Product;
use crate::domain::reducer::CartReducer;

/// The cart state container.
///
/// Construct one per application with [`CartStore::load`] and pass it to
/// whatever needs the cart. Mutation takes `&mut self`; callers sharing a
/// store serialize access themselves.
pub struct CartStore {
    cart: Option<Cart>,
    storage: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
}

impl fmt::Debug for CartStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("cart", &self.cart)
            .finish_non_exhaustive()
    }
}

impl CartStore {
    /// Creates a store, restoring any cart persisted in `storage`.
    ///
    /// A persisted value that cannot be decoded is deleted and the store
    /// starts with no cart.
    #[must_use]
    pub fn load(
        storage: Arc<dyn KeyValueStore>,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        let cart = restore_cart(storage.as_ref());
        Self {
            cart,
            storage,
            clock,
            ids,
        }
    }

    fn reducer(&self) -> CartReducer<'_> {
        CartReducer::new(self.clock.as_ref(), self.ids.as_ref())
    }

    /// Applies `command` through the reducer.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the reducer rejects the command;
    /// the current state is kept.
    pub fn dispatch(&mut self, command: &CartCommand) -> Result<(), DomainError> {
        tracing::debug!(command_type = command.command_type(), "dispatching cart command");
        let next = self.reducer().reduce(&self.cart, command)?;
        self.commit(next);
        Ok(())
    }

    /// Adopts `next` and persists it, unless it equals the current state.
    fn commit(&mut self, next: Option<Cart>) {
        if next == self.cart {
            tracing::debug!("cart unchanged");
            return;
        }

        match (&self.cart, &next) {
            (None, Some(cart)) => tracing::info!(cart_id = %cart.id(), "cart opened"),
            (Some(cart), None) => tracing::info!(cart_id = %cart.id(), "cart closed"),
            _ => {}
        }

        persist_cart(self.storage.as_ref(), next.as_ref());
        self.cart = next;
    }

    /// Adds `quantity` units of `product`. See [`CartReducer::add_item`].
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `quantity` is zero, the merged
    /// quantity overflows, or the priced totals leave the representable range.
    pub fn add_item(&mut self, product: &Product, quantity: u32) -> Result<(), DomainError> {
        self.dispatch(&CartCommand::AddItem(AddItem {
            product: product.clone(),
            quantity,
        }))
    }

    /// Adds a single unit of `product`.
    ///
    /// # Errors
    ///
    /// Returns any error from [`CartStore::add_item`].
    pub fn add_one(&mut self, product: &Product) -> Result<(), DomainError> {
        self.add_item(product, 1)
    }

    /// Looks `product_id` up in `catalog` and adds `quantity` units of it.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NotFound` if the catalog has no such product,
    /// or any error from [`CartStore::add_item`].
    pub fn add_catalog_item(
        &mut self,
        catalog: &dyn Catalog,
        product_id: u64,
        quantity: u32,
    ) -> Result<(), DomainError> {
        let product = catalog
            .find_product(product_id)
            .ok_or_else(|| DomainError::NotFound(format!("product {product_id}")))?;
        self.add_item(&product, quantity)
    }

    /// Removes line `line_id`. Unknown lines are ignored.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the remaining lines' total leaves
    /// the representable range.
    pub fn remove_item(&mut self, line_id: Uuid) -> Result<(), DomainError> {
        self.dispatch(&CartCommand::RemoveItem(RemoveItem { line_id }))
    }

    /// Sets the quantity of line `line_id`; zero or less removes it. Unknown
    /// lines are ignored.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `quantity` exceeds `u32::MAX` or
    /// the repriced totals leave the representable range.
    pub fn update_quantity(&mut self, line_id: Uuid, quantity: i64) -> Result<(), DomainError> {
        self.dispatch(&CartCommand::UpdateQuantity(UpdateQuantity { line_id, quantity }))
    }

    /// Discards the cart.
    ///
    /// # Errors
    ///
    /// Clearing is never rejected; the `Result` is the one [`CartStore::dispatch`]
    /// returns.
    pub fn clear_cart(&mut self) -> Result<(), DomainError> {
        self.dispatch(&CartCommand::ClearCart)
    }

    /// Units of `product_id` in the cart, or 0.
    #[must_use]
    pub fn get_item_quantity(&self, product_id: u64) -> u32 {
        query_handlers::get_item_quantity(self.cart.as_ref(), product_id)
    }

    /// The current cart, if one exists.
    #[must_use]
    pub fn cart(&self) -> Option<&Cart> {
        self.cart.as_ref()
    }

    /// Sum of line quantities, or 0 without a cart.
    #[must_use]
    pub fn total_items(&self) -> u64 {
        self.cart.as_ref().map_or(0, Cart::total_items)
    }

    /// Sum of line totals, or 0 without a cart.
    #[must_use]
    pub fn total_price(&self) -> Decimal {
        self.cart.as_ref().map_or(Decimal::ZERO, Cart::total_price)
    }

    /// A serializable view of the cart.
    #[must_use]
    pub fn view(&self) -> CartView {
        query_handlers::view_cart(self.cart.as_ref())
    }
}
