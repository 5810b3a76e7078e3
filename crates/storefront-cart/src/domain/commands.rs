//! Commands for the Cart context.

use storefront_core::command::Command;
use uuid::Uuid;

use super::aggregates::Cart;
use super::products::Product;

/// Command to add units of a product, merging into its existing line.
#[derive(Debug, Clone)]
pub struct AddItem {
    /// The product snapshot to add.
    pub product: Product,
    /// Units to add; must be at least 1.
    pub quantity: u32,
}

/// Command to remove a line.
#[derive(Debug, Clone)]
pub struct RemoveItem {
    /// The line identifier.
    pub line_id: Uuid,
}

/// Command to set a line's quantity. Zero or less removes the line.
#[derive(Debug, Clone)]
pub struct UpdateQuantity {
    /// The line identifier.
    pub line_id: Uuid,
    /// The new quantity.
    pub quantity: i64,
}

/// Command to replace the current state with a previously saved cart.
#[derive(Debug, Clone)]
pub struct LoadCart {
    /// The cart to adopt.
    pub cart: Cart,
}

/// Command variants for the Cart context.
#[derive(Debug, Clone)]
#[allow(clippy::large_enum_variant)]
pub enum CartCommand {
    /// Add units of a product.
    AddItem(AddItem),
    /// Remove a line.
    RemoveItem(RemoveItem),
    /// Set a line's quantity.
    UpdateQuantity(UpdateQuantity),
    /// Empty the cart.
    ClearCart,
    /// Adopt a saved cart.
    LoadCart(LoadCart),
}

impl Command for CartCommand {
    fn command_type(&self) -> &'static str {
        match self {
            Self::AddItem(_) => "cart.add_item",
            Self::RemoveItem(_) => "cart.remove_item",
            Self::UpdateQuantity(_) => "cart.update_quantity",
            Self::ClearCart => "cart.clear",
            Self::LoadCart(_) => "cart.load",
        }
    }
}
