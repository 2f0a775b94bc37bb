//! Stock domain module.
//!
//! Serialized units (inverters) as the external stock query reports them:
//! a point-in-time snapshot of what is currently available for dispatch.
//! The snapshot is ground truth; nothing in this workspace caches it beyond
//! the current session.

pub mod provider;
pub mod snapshot;
pub mod unit;

pub use provider::{StockQuery, StockView};
pub use snapshot::StockSnapshot;
pub use unit::{ModelInfo, StockUnit};
