//! Domain model for the Cart context.

pub mod aggregates;
pub mod catalog;
pub mod commands;
pub mod currency;
pub mod products;
pub mod reducer;
