//! Application services for the Cart context.

pub mod command_handlers;
pub mod persistence;
pub mod query_handlers;
