//! Storefront: Cart bounded context.
//!
//! Holds at most one shopping cart, applies add / remove / update / clear
//! commands through a pure reducer, and mirrors the result into a key-value
//! store so the cart survives a restart.

pub mod application;
pub mod domain;
