//! Fleet domain module.
//!
//! This crate contains the `Vehicle` entity: a closed set of vehicle kinds,
//! validated capacity, a state lifecycle, and the per-kind haul-yield
//! formula. Pure domain logic (no IO, no storage).

pub mod vehicle;

pub use vehicle::{Suspension, Vehicle, VehicleKind, VehicleState};
