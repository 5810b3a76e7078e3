//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use storefront_cart::domain::currency::Currency;
use uuid::Uuid;

#[derive(Debug, Parser)]
#[command(name = "storefront", about = "Manage the storefront shopping cart", long_about = None)]
pub struct Cli {
    /// Directory holding the persisted cart
    #[arg(long, global = true, env = "STOREFRONT_DATA_DIR", default_value = ".storefront")]
    pub data_dir: PathBuf,

    /// JSON file listing the products that can be added
    #[arg(long, global = true, env = "STOREFRONT_CATALOG", default_value = "catalog.json")]
    pub catalog: PathBuf,

    /// Currency used when printing amounts
    #[arg(long, global = true, env = "STOREFRONT_CURRENCY", default_value_t = Currency::Etb)]
    pub currency: Currency,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the cart
    Show {
        /// Print the cart as JSON
        #[arg(long)]
        json: bool,
    },
    /// Add a catalog product to the cart
    Add {
        product_id: u64,
        /// Units to add
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// Remove a line from the cart
    Remove { line_id: Uuid },
    /// Set the quantity of a line; zero or less removes it
    Update {
        line_id: Uuid,
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Empty the cart
    Clear,
    /// Print how many units of a product are in the cart
    Quantity { product_id: u64 },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_global_options_after_subcommand() {
        let cli = Cli::try_parse_from([
            "storefront",
            "add",
            "7",
            "-q",
            "3",
            "--currency",
            "usd",
            "--data-dir",
            "/tmp/cart",
        ])
        .unwrap();

        assert_eq!(cli.currency, Currency::Usd);
        assert_eq!(cli.data_dir, PathBuf::from("/tmp/cart"));
        match cli.command {
            Command::Add {
                product_id,
                quantity,
            } => {
                assert_eq!(product_id, 7);
                assert_eq!(quantity, 3);
            }
            other => panic!("expected Add, got {other:?}"),
        }
    }

    #[test]
    fn test_update_accepts_negative_quantity() {
        let line_id = Uuid::from_u128(5);
        let cli =
            Cli::try_parse_from(["storefront", "update", &line_id.to_string(), "-2"]).unwrap();

        match cli.command {
            Command::Update {
                line_id: parsed,
                quantity,
            } => {
                assert_eq!(parsed, line_id);
                assert_eq!(quantity, -2);
            }
            other => panic!("expected Update, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_unknown_currency() {
        assert!(Cli::try_parse_from(["storefront", "--currency", "eur", "show"]).is_err());
    }
}
