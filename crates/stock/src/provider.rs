//! External stock query boundary.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use dispatchforge_core::DomainResult;

use crate::snapshot::StockSnapshot;

/// Cached stock views that can go stale after a dispatch is created.
///
/// A successful submission moves units out of factory stock and into the
/// receiving dealer's stock, so both views must be refetched.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockView {
    Factory,
    Dealer,
}

impl core::fmt::Display for StockView {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StockView::Factory => f.write_str("factory"),
            StockView::Dealer => f.write_str("dealer"),
        }
    }
}

/// On-demand supplier of stock snapshots.
///
/// Implementations own transport and persistence; the engine only consumes
/// the returned snapshot and never mutates it.
#[async_trait]
pub trait StockQuery: Send + Sync {
    async fn fetch_stock(&self, view: StockView) -> DomainResult<StockSnapshot>;
}
