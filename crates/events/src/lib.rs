//! Notification plumbing for domain side effects.
//!
//! There is no store and no replay here: notices are published *after* the
//! state change already happened, and delivery is best-effort. Consumers
//! that care about durable state read it from the aggregates themselves.

pub mod bus;
pub mod envelope;
pub mod in_memory_bus;
pub mod notice;

pub use bus::{NoticeBus, Subscription};
pub use envelope::NoticeEnvelope;
pub use in_memory_bus::{InMemoryBusError, InMemoryNoticeBus};
pub use notice::Notice;
