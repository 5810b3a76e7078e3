//! Plain-text rendering of the cart for the terminal.

use std::io::{self, Write};

use storefront_cart::application::query_handlers::CartView;
use storefront_cart::domain::currency::{Currency, format_compact_currency, format_currency};

/// Writes `view` as a table of lines followed by the totals.
///
/// # Errors
///
/// Returns any error from `out`.
pub fn render_cart(view: &CartView, currency: Currency, out: &mut dyn Write) -> io::Result<()> {
    let Some(cart_id) = view.cart_id else {
        return writeln!(out, "Cart is empty");
    };

    writeln!(out, "Cart {cart_id}")?;
    for line in &view.lines {
        writeln!(
            out,
            "  {}  {} x{} @ {} = {}",
            line.line_id,
            line.name,
            line.quantity,
            format_currency(line.unit_price, currency),
            format_currency(line.line_total, currency),
        )?;
    }
    writeln!(out, "Items: {}", view.total_items)?;
    writeln!(
        out,
        "Total: {} ({})",
        format_currency(view.total_price, currency),
        format_compact_currency(view.total_price, currency),
    )
}
