//! Outbound dispatch payload and the create-dispatch boundary.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use dispatchforge_core::{DispatchId, DomainResult};
use dispatchforge_stock::StockView;

/// The finished dispatch request, built once at submission time.
///
/// Ownership transfers to the gateway call; nothing here is persisted
/// locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchDraft {
    #[serde(rename = "dispatchNumber")]
    pub dispatch_number: String,
    pub dealer: String,
    /// `YYYY-MM-DD`; validated before the draft is built.
    #[serde(rename = "dispatchDate")]
    pub dispatch_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
    /// Selection contents in insertion order.
    #[serde(rename = "serialNumbers")]
    pub serial_numbers: Vec<String>,
}

/// External create-dispatch call.
///
/// Implementations own transport; they map rejections into
/// `DomainError::Submission` carrying the server-provided reason when one is
/// available.
#[async_trait]
pub trait DispatchGateway: Send + Sync {
    async fn create_dispatch(&self, draft: &DispatchDraft) -> DomainResult<DispatchId>;
}

/// What a successful submission hands back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub dispatch_id: DispatchId,
    pub dispatch_number: String,
    /// Cached stock views invalidated by this dispatch; both sides must be
    /// refetched before being shown again.
    pub stale_views: Vec<StockView>,
}
