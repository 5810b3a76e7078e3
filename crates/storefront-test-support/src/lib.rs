//! Shared test doubles for the Storefront cart store.

mod clock;
mod ids;
mod storage;

pub use clock::{FixedClock, SteppingClock};
pub use ids::SequentialIdGenerator;
pub use storage::{FailingStore, RecordingStore, StoreOp};
