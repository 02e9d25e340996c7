//! Operators domain module.
//!
//! This crate contains the `Operator` entity: role variants, the
//! insertion-ordered vehicle roster, the operation journal, and the bonus
//! policy. Registering an operation is the module's one side effect (a log
//! line plus a returned notice); it never mutates the operation itself.

pub mod operator;

pub use operator::{BonusPolicy, OperationRegistered, Operator, OperatorRole};
