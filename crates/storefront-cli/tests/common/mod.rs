//! Shared test helpers for CLI integration tests.
#![allow(dead_code)]

use std::path::PathBuf;

use clap::Parser;
use storefront_cli::cli::Cli;
use storefront_cli::error::AppError;
use tempfile::TempDir;

const CATALOG: &str = r#"[
  {"id": 7, "name": "Desk Lamp", "category": "Home", "price": 25, "cost": 12,
   "stock": 40, "status": "in_stock", "sales": 3, "image": "lamp.png",
   "sku": "PROD-007", "createdAt": "2026-01-01", "updatedAt": "2026-01-01"},
  {"id": 9, "name": "Mug", "category": "Kitchen", "price": 10, "cost": 4,
   "stock": 0, "status": "out_of_stock", "sales": 12, "image": "mug.png",
   "sku": "PROD-009", "createdAt": "2026-01-01", "updatedAt": "2026-01-01"}
]"#;

/// A temporary data directory with a two-product catalog beside it.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("catalog.json"), CATALOG).unwrap();
        Self { dir }
    }

    pub fn data_dir(&self) -> PathBuf {
        self.dir.path().join("data")
    }

    pub fn catalog(&self) -> PathBuf {
        self.dir.path().join("catalog.json")
    }

    /// Run `storefront <args>` against this workspace and capture stdout.
    pub fn run(&self, args: &[&str]) -> Result<String, AppError> {
        let data_dir = self.data_dir();
        let catalog = self.catalog();
        let mut argv = vec![
            "storefront",
            "--data-dir",
            data_dir.to_str().unwrap(),
            "--catalog",
            catalog.to_str().unwrap(),
            "--currency",
            "usd",
        ];
        argv.extend_from_slice(args);
        let cli = Cli::try_parse_from(argv).unwrap();

        let mut out = Vec::new();
        storefront_cli::run(cli, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    /// Run `storefront show --json` and parse the output.
    pub fn view(&self) -> serde_json::Value {
        serde_json::from_str(&self.run(&["show", "--json"]).unwrap()).unwrap()
    }
}
