use chrono::{DateTime, Utc};

/// A domain-agnostic notification.
///
/// Notices are:
/// - **immutable** (treat them as facts)
/// - **observational** (they describe a state change that already happened)
/// - fire-and-forget (no store, no replay)
pub trait Notice: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Stable notice name/type identifier (e.g. "warehouse.cargo.received").
    fn notice_type(&self) -> &'static str;

    /// When the notice occurred (business time).
    fn occurred_at(&self) -> DateTime<Utc>;
}
