//! Storefront Storage: `KeyValueStore` implementations.
//!
//! `MemoryStore` keeps values in process memory and suits tests and
//! embedding. `FileStore` keeps one file per key under a directory and is
//! the durable provider the CLI uses.

pub mod file_store;
pub mod memory_store;

pub use file_store::FileStore;
pub use memory_store::MemoryStore;
