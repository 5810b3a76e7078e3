//! Resolved CLI configuration.

use std::path::PathBuf;

use storefront_cart::domain::currency::Currency;

use crate::cli::Cli;
use crate::error::AppError;

/// Settings shared by every subcommand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory the cart snapshot is stored in.
    pub data_dir: PathBuf,
    /// Product catalog file.
    pub catalog_path: PathBuf,
    /// Display currency.
    pub currency: Currency,
}

impl Config {
    /// Resolves configuration from parsed arguments.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the data directory is empty or names an
    /// existing file.
    pub fn from_cli(cli: &Cli) -> Result<Self, AppError> {
        if cli.data_dir.as_os_str().is_empty() {
            return Err(AppError::Config("data directory must not be empty".into()));
        }
        if cli.data_dir.is_file() {
            return Err(AppError::Config(format!(
                "data directory {} is a file",
                cli.data_dir.display()
            )));
        }

        Ok(Self {
            data_dir: cli.data_dir.clone(),
            catalog_path: cli.catalog.clone(),
            currency: cli.currency,
        })
    }
}
