//! Storefront command-line front end.
//!
//! Each invocation loads the persisted cart, applies one subcommand and
//! prints the result.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod render;

use std::io::Write;
use std::sync::Arc;

use storefront_cart::application::command_handlers::CartStore;
use storefront_core::clock::SystemClock;
use storefront_core::id::RandomIdGenerator;
use storefront_storage::FileStore;

use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::error::AppError;

/// Runs one CLI invocation, writing its output to `out`.
///
/// # Errors
///
/// Returns an `AppError` if configuration is invalid, the catalog cannot be
/// read, the cart rejects the command, or writing to `out` fails.
pub fn run(cli: Cli, out: &mut dyn Write) -> Result<(), AppError> {
    let config = Config::from_cli(&cli)?;
    let mut store = CartStore::load(
        Arc::new(FileStore::new(&config.data_dir)),
        Arc::new(SystemClock),
        Arc::new(RandomIdGenerator),
    );
    execute(&config, cli.command, &mut store, out)
}

/// Applies `command` to `store`.
///
/// # Errors
///
/// See [`run`].
pub fn execute(
    config: &Config,
    command: Command,
    store: &mut CartStore,
    out: &mut dyn Write,
) -> Result<(), AppError> {
    match command {
        Command::Show { json: true } => {
            let json = serde_json::to_string_pretty(&store.view())
                .map_err(|e| AppError::Io(e.into()))?;
            writeln!(out, "{json}")?;
            return Ok(());
        }
        Command::Show { json: false } => {}
        Command::Add {
            product_id,
            quantity,
        } => {
            let catalog = catalog::load_catalog(&config.catalog_path)?;
            store.add_catalog_item(&catalog, product_id, quantity)?;
        }
        Command::Remove { line_id } => store.remove_item(line_id)?,
        Command::Update { line_id, quantity } => store.update_quantity(line_id, quantity)?,
        Command::Clear => store.clear_cart()?,
        Command::Quantity { product_id } => {
            writeln!(out, "{}", store.get_item_quantity(product_id))?;
            return Ok(());
        }
    }

    render::render_cart(&store.view(), config.currency, out)?;
    Ok(())
}
