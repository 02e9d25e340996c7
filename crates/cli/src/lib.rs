//! Demonstration driver for the minehaul domain model.
//!
//! The driver is an external collaborator: it only calls the public
//! operations of the domain crates and renders what comes back. Nothing
//! in the core depends on it.

pub mod scenario;
