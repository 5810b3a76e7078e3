//! Identifier generation abstraction for determinism.
//!
//! In production, this yields random v4 UUIDs. In tests, a scripted
//! generator is injected so cart and line identifiers are predictable.

use uuid::Uuid;

/// Abstraction over opaque identifier generation.
pub trait IdGenerator: Send + Sync {
    /// Returns a fresh identifier, never handed out before.
    fn next_id(&self) -> Uuid;
}

/// Production generator backed by random v4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn next_id(&self) -> Uuid {
        Uuid::new_v4()
    }
}
