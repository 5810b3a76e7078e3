//! Storefront Core: shared domain abstractions.
//!
//! This crate defines the traits and types the cart context depends on:
//! time, identifier generation, command dispatch, key-value persistence and
//! the domain error type. It contains no infrastructure code.

pub mod clock;
pub mod command;
pub mod error;
pub mod id;
pub mod reducer;
pub mod storage;
pub mod timestamp;
