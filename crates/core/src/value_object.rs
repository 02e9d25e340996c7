//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined
//! entirely by their attribute values. Two value objects with the same values are
//! considered equal.

/// Marker trait for value objects.
///
/// Value objects are **immutable-by-convention** and **compared by value**. To
/// "modify" one, create a new one with the new values (or use a validated
/// mutator that either fully applies or fully rejects the change).
///
/// Example:
/// - a mineral load of `(Cobre, 2.5% humidity, 15 t)` is a value object
/// - a vehicle with fleet code `T001` is an entity (identity matters)
///
/// The trait requires:
/// - **Clone**: values are cheap to copy around
/// - **PartialEq**: compared by their attribute values
/// - **Debug**: debuggable (helpful for logging, testing)
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
