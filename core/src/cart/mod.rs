//! The cart engine and the pieces that hang off it.

pub mod engine;
pub mod handle;
pub mod observer;
pub mod snapshot;

pub use engine::{Cart, Outcome, Totals};
pub use handle::CartHandle;
pub use observer::{CartEvent, RemovalReason, SubscriptionId};
pub use snapshot::{CartSnapshot, RestoreReport, SnapshotEntry};
