//! The cart state transition function.

use storefront_core::clock::Clock;
use storefront_core::error::DomainError;
use storefront_core::id::IdGenerator;
use storefront_core::reducer::Reducer;
use uuid::Uuid;

use super::aggregates::{Cart, CartLine};
use super::commands::CartCommand;
use super::products::Product;

/// Computes the next cart state from the current one and a command.
///
/// The state is `Option<Cart>`: `None` is the absent cart. The clock is read
/// and identifiers are drawn only when a transition actually happens.
pub struct CartReducer<'a> {
    clock: &'a dyn Clock,
    ids: &'a dyn IdGenerator,
}

impl<'a> CartReducer<'a> {
    /// Creates a reducer drawing time from `clock` and identifiers from `ids`.
    #[must_use]
    pub fn new(clock: &'a dyn Clock, ids: &'a dyn IdGenerator) -> Self {
        Self { clock, ids }
    }

    /// Adds `quantity` units of `product`.
    ///
    /// Opens a cart when none exists, appends a line for a new product, or
    /// merges into the product's existing line. A merge keeps the unit price
    /// captured when that line was created; the incoming price is ignored.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `quantity` is zero, the merged
    /// quantity overflows, or a line or cart total leaves the representable
    /// range.
    pub fn add_item(
        &self,
        state: Option<&Cart>,
        product: &Product,
        quantity: u32,
    ) -> Result<Option<Cart>, DomainError> {
        if quantity == 0 {
            return Err(DomainError::Validation(format!(
                "quantity for product {} must be at least 1",
                product.id
            )));
        }

        let Some(cart) = state else {
            let cart_id = self.ids.next_id();
            let line = CartLine::new(self.ids.next_id(), product, quantity)?;
            return Ok(Some(Cart::open(cart_id, line, self.clock.now_seconds())));
        };

        let lines: Vec<CartLine> = if let Some(existing) = cart.line_for_product(product.id) {
            let merged = existing.quantity().checked_add(quantity).ok_or_else(|| {
                DomainError::Validation(format!(
                    "quantity for product {} would exceed {}",
                    product.id,
                    u32::MAX
                ))
            })?;
            let existing_id = existing.id();
            cart.lines()
                .iter()
                .map(|line| {
                    if line.id() == existing_id {
                        line.with_quantity(merged)
                    } else {
                        Ok(line.clone())
                    }
                })
                .collect::<Result<_, _>>()?
        } else {
            let line = CartLine::new(self.ids.next_id(), product, quantity)?;
            cart.lines()
                .iter()
                .cloned()
                .chain(std::iter::once(line))
                .collect()
        };

        cart.revised(lines, self.clock.now_seconds())
    }

    /// Removes the line `line_id`. Removing the last line yields the absent
    /// cart; an unknown line or an absent cart leaves the state unchanged.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the remaining lines' total leaves
    /// the representable range.
    pub fn remove_item(
        &self,
        state: Option<&Cart>,
        line_id: Uuid,
    ) -> Result<Option<Cart>, DomainError> {
        let Some(cart) = state else {
            return Ok(None);
        };
        if cart.line(line_id).is_none() {
            return Ok(Some(cart.clone()));
        }
        let lines = cart
            .lines()
            .iter()
            .filter(|line| line.id() != line_id)
            .cloned()
            .collect();
        cart.revised(lines, self.clock.now_seconds())
    }

    /// Sets the quantity of line `line_id`, repricing it from its stored unit
    /// price. A quantity of zero or less removes the line. An unknown line or
    /// an absent cart leaves the state unchanged.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `quantity` exceeds `u32::MAX` or
    /// the repriced totals leave the representable range.
    pub fn update_quantity(
        &self,
        state: Option<&Cart>,
        line_id: Uuid,
        quantity: i64,
    ) -> Result<Option<Cart>, DomainError> {
        if quantity <= 0 {
            return self.remove_item(state, line_id);
        }
        let Some(cart) = state else {
            return Ok(None);
        };
        if cart.line(line_id).is_none() {
            return Ok(Some(cart.clone()));
        }
        let quantity = u32::try_from(quantity).map_err(|_| {
            DomainError::Validation(format!(
                "quantity {quantity} for line {line_id} exceeds {}",
                u32::MAX
            ))
        })?;

        let lines = cart
            .lines()
            .iter()
            .map(|line| {
                if line.id() == line_id {
                    line.with_quantity(quantity)
                } else {
                    Ok(line.clone())
                }
            })
            .collect::<Result<_, _>>()?;
        cart.revised(lines, self.clock.now_seconds())
    }
}

impl Reducer for CartReducer<'_> {
    type State = Option<Cart>;
    type Command = CartCommand;

    fn reduce(
        &self,
        state: &Self::State,
        command: &Self::Command,
    ) -> Result<Self::State, DomainError> {
        match command {
            CartCommand::AddItem(add) => self.add_item(state.as_ref(), &add.product, add.quantity),
            CartCommand::RemoveItem(remove) => self.remove_item(state.as_ref(), remove.line_id),
            CartCommand::UpdateQuantity(update) => {
                self.update_quantity(state.as_ref(), update.line_id, update.quantity)
            }
            CartCommand::ClearCart => Ok(None),
            CartCommand::LoadCart(load) => {
                load.cart.check_invariants()?;
                Ok(Some(load.cart.clone()))
            }
        }
    }
}
