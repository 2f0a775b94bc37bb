//! `dispatchforge-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the error model, strongly-typed identifiers, and the small marker traits the
//! dispatch and service-center modules build on.

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{CenterId, DispatchId};
pub use value_object::ValueObject;
