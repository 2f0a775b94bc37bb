//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects defined entirely by their attribute
//! values. Two value objects with the same values are considered equal.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. They represent
/// concepts where identity doesn't matter - only the values do. In this
/// workspace, `ModelInfo { brand, model_code }` is a value object, while a
/// `ServiceCenter` (which keeps its `CenterId` across edits) is an entity.
///
/// To "modify" a value object, construct a new one. Immutability keeps these
/// types safe to share and lets them behave like primitives.
///
/// The trait requires:
/// - **Clone**: values are cheap to copy around
/// - **PartialEq**: compared by attribute values
/// - **Debug**: loggable in tests and tracing output
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
