//! Warehouse domain module.
//!
//! This crate contains the `Warehouse` aggregate root: a type-keyed
//! mineral inventory fed exclusively by finalized transport operations.
//! Pure domain logic (no IO, no storage).

pub mod warehouse;

pub use warehouse::{CargoReceived, Warehouse};
