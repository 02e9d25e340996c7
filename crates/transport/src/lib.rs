//! Transport domain module.
//!
//! This crate contains the `MineralLoad` value entity and the
//! `TransportOperation` aggregate: two-phase construct/validate, the
//! open → finalized lifecycle, and haul report generation. Pure domain
//! logic (no IO, no storage).

pub mod load;
pub mod operation;

pub use load::MineralLoad;
pub use operation::{OperationReport, OperationStatus, TransportOperation};
