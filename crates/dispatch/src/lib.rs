//! Dispatch composition engine.
//!
//! Assembles a verified, duplicate-free set of serialized units into one
//! dispatch transaction. Three input channels feed the same selection: manual
//! toggles, a streaming barcode-scanner channel, and a bulk file import. A
//! pure deriver turns the composed set plus a date into a human-readable
//! dispatch number, and the session coordinator packages everything into the
//! outbound create-dispatch request.
//!
//! No IO happens here: the stock snapshot arrives from `dispatchforge-stock`
//! collaborators and the finished draft leaves through the `DispatchGateway`
//! trait.

pub mod draft;
pub mod import;
pub mod number;
pub mod scanner;
pub mod selection;
pub mod session;

pub use draft::{DispatchDraft, DispatchGateway, SubmissionReceipt};
pub use import::{import_candidates, parse_candidates, ImportSummary};
pub use number::derive_dispatch_number;
pub use scanner::{ScanOutcome, ScannerChannel};
pub use selection::SelectionSet;
pub use session::DispatchSession;
