//! Service-center registration domain.
//!
//! Deterministic business rules only: field validation and status lifecycle.
//! Storage and transport of registered centers are external collaborators.

pub mod center;

pub use center::{ContactInfo, ServiceCenter, ServiceCenterStatus};
