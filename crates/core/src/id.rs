//! Strongly-typed identifiers used across the domain.
//!
//! Vehicles and operators keep their real-world keys (fleet codes and
//! national ids), so those identifiers wrap strings rather than synthetic
//! UUIDs. Operations are numbered from a process-wide sequence.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Identifier of a vehicle (fleet code, e.g. "T001").
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VehicleId(String);

/// Identifier of an operator (national id).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OperatorId(String);

/// Identifier of a warehouse (site code).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WarehouseId(String);

macro_rules! impl_str_newtype {
    ($t:ty) => {
        impl $t {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<&str> for $t {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $t {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

impl_str_newtype!(VehicleId);
impl_str_newtype!(OperatorId);
impl_str_newtype!(WarehouseId);

/// Identifier of a transport operation.
///
/// Assigned from a process-wide sequence at construction; see
/// [`OperationId::next`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OperationId(u64);

/// Operation sequence. Starts at 1; reset only at process restart.
static OPERATION_SEQ: AtomicU64 = AtomicU64::new(1);

impl OperationId {
    /// Claim the next id from the process-wide sequence.
    ///
    /// A single atomic fetch-and-increment, so ids stay unique even when
    /// operations are constructed from multiple threads.
    pub fn next() -> Self {
        Self(OPERATION_SEQ.fetch_add(1, Ordering::Relaxed))
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for OperationId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_ids_round_trip_their_key() {
        let id = VehicleId::new("T001");
        assert_eq!(id.as_str(), "T001");
        assert_eq!(id.to_string(), "T001");
        assert_eq!(VehicleId::from("T001"), id);
    }

    #[test]
    fn operation_ids_are_strictly_increasing() {
        let a = OperationId::next();
        let b = OperationId::next();
        let c = OperationId::next();
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn operation_ids_are_unique_across_threads() {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                std::thread::spawn(|| {
                    (0..64).map(|_| OperationId::next()).collect::<Vec<_>>()
                })
            })
            .collect();

        let mut seen = std::collections::HashSet::new();
        for handle in handles {
            for id in handle.join().expect("worker thread panicked") {
                assert!(seen.insert(id), "duplicate operation id {id}");
            }
        }
        assert_eq!(seen.len(), 8 * 64);
    }
}
