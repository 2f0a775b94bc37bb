//! One dispatch-composition session.
//!
//! `DispatchSession` is the single owned mutable container behind the three
//! input channels: manual toggles, the scanner channel, and bulk import all
//! mutate the same selection through typed entry points. Mutations are
//! serialized by the surrounding interaction model; the session itself never
//! runs two of them at once.

use chrono::NaiveDate;

use dispatchforge_core::{DomainError, DomainResult};
use dispatchforge_stock::{StockQuery, StockSnapshot, StockView};

use crate::draft::{DispatchDraft, DispatchGateway, SubmissionReceipt};
use crate::import::{import_candidates, ImportSummary};
use crate::number::derive_dispatch_number;
use crate::scanner::{ScanOutcome, ScannerChannel};
use crate::selection::SelectionSet;

/// Composition state for one pending dispatch.
///
/// Created empty when the dispatch form opens; cleared on successful
/// submission or explicit reset. The stock snapshot is externally
/// authoritative and replaced wholesale on refresh; membership is checked at
/// insertion time only.
#[derive(Debug, Default)]
pub struct DispatchSession {
    snapshot: StockSnapshot,
    selection: SelectionSet,
    scanner: ScannerChannel,
    dealer: String,
    dispatch_date: String,
    remarks: Option<String>,
    number_prefix: String,
    number_override: Option<String>,
    in_flight: bool,
}

impl DispatchSession {
    pub fn new(number_prefix: impl Into<String>) -> Self {
        Self {
            number_prefix: number_prefix.into(),
            ..Self::default()
        }
    }

    /// Replace the available-stock snapshot. Already-selected serials are not
    /// re-validated; the snapshot is ground truth for future insertions.
    pub fn refresh_snapshot(&mut self, snapshot: StockSnapshot) {
        self.snapshot = snapshot;
    }

    /// Refetch the authoritative snapshot from the external stock query.
    pub async fn refresh_from(
        &mut self,
        query: &dyn StockQuery,
        view: StockView,
    ) -> DomainResult<()> {
        let snapshot = query.fetch_stock(view).await?;
        self.refresh_snapshot(snapshot);
        Ok(())
    }

    pub fn snapshot(&self) -> &StockSnapshot {
        &self.snapshot
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn set_dealer(&mut self, dealer: impl Into<String>) {
        self.dealer = dealer.into();
    }

    pub fn set_dispatch_date(&mut self, date: impl Into<String>) {
        self.dispatch_date = date.into();
    }

    pub fn set_remarks(&mut self, remarks: Option<String>) {
        self.remarks = remarks;
    }

    /// Override the derived dispatch number for this submission.
    pub fn set_number_override(&mut self, number: Option<String>) {
        self.number_override = number;
    }

    // --- manual channel ---------------------------------------------------

    /// Manual row toggle. Returns whether the serial is selected afterwards.
    ///
    /// Adding requires the serial to exist in the current snapshot; removal
    /// works regardless, so a unit that left stock since selection can still
    /// be deselected.
    pub fn toggle_unit(&mut self, serial: &str) -> DomainResult<bool> {
        if self.selection.contains(serial) {
            self.selection.remove(serial);
            return Ok(false);
        }
        if !self.snapshot.contains(serial) {
            return Err(DomainError::not_found());
        }
        self.selection.add(serial);
        Ok(true)
    }

    // --- scanner channel --------------------------------------------------

    pub fn arm_scanner(&mut self) {
        self.scanner.arm();
    }

    pub fn disarm_scanner(&mut self) {
        self.scanner.disarm();
    }

    pub fn scanner_is_armed(&self) -> bool {
        self.scanner.is_armed()
    }

    /// Buffer one scanner keystroke.
    pub fn scan_char(&mut self, c: char) {
        self.scanner.push_char(c);
    }

    /// End-of-token signal from the scanner (Enter keystroke).
    pub fn scan_end(&mut self) -> ScanOutcome {
        self.scanner.end_token(&self.snapshot, &mut self.selection)
    }

    /// Accept one complete scan token (wedge-mode scanners, tests).
    pub fn scan_token(&mut self, token: &str) -> ScanOutcome {
        self.scanner.accept(token, &self.snapshot, &mut self.selection)
    }

    // --- bulk import channel ----------------------------------------------

    /// Merge an uploaded serial list into the selection.
    pub fn import_text(&mut self, text: &str) -> DomainResult<ImportSummary> {
        import_candidates(text, &self.snapshot, &mut self.selection)
    }

    // --- number preview ---------------------------------------------------

    /// Live dispatch-number preview: the override if set, otherwise derived
    /// from the current selection, date, and prefix.
    pub fn number_preview(&self) -> String {
        if let Some(number) = &self.number_override {
            return number.clone();
        }
        derive_dispatch_number(self.selection.values(), &self.dispatch_date, &self.number_prefix)
    }

    // --- submission -------------------------------------------------------

    /// Validate preconditions, build the draft, and hand it to the gateway.
    ///
    /// Exactly one submission may be outstanding at a time. On success the
    /// selection and scanner state are cleared and the receipt names the
    /// stock views to refetch; on failure every local input survives for
    /// retry.
    pub async fn submit(&mut self, gateway: &dyn DispatchGateway) -> DomainResult<SubmissionReceipt> {
        if self.in_flight {
            return Err(DomainError::conflict("a submission is already in flight"));
        }
        if self.selection.is_empty() {
            return Err(DomainError::validation(
                "at least one unit is required for a dispatch",
            ));
        }
        if self.dealer.trim().is_empty() {
            return Err(DomainError::validation("dealer name is required"));
        }
        if self.dispatch_date.trim().is_empty() {
            return Err(DomainError::validation("dispatch date is required"));
        }
        if NaiveDate::parse_from_str(&self.dispatch_date, "%Y-%m-%d").is_err() {
            return Err(DomainError::validation("dispatch date must be YYYY-MM-DD"));
        }

        let dispatch_number = self.number_preview();
        let draft = DispatchDraft {
            dispatch_number: dispatch_number.clone(),
            dealer: self.dealer.clone(),
            dispatch_date: self.dispatch_date.clone(),
            remarks: self.remarks.clone(),
            serial_numbers: self.selection.values().to_vec(),
        };

        self.in_flight = true;
        let result = gateway.create_dispatch(&draft).await;
        self.in_flight = false;

        match result {
            Ok(dispatch_id) => {
                tracing::info!(
                    %dispatch_id,
                    dispatch_number = %dispatch_number,
                    units = draft.serial_numbers.len(),
                    dealer = %draft.dealer,
                    "dispatch created"
                );
                self.selection.clear();
                self.scanner.disarm();
                self.number_override = None;
                Ok(SubmissionReceipt {
                    dispatch_id,
                    dispatch_number,
                    stale_views: vec![StockView::Factory, StockView::Dealer],
                })
            }
            Err(err) => {
                tracing::error!(error = %err, "dispatch creation failed");
                Err(err)
            }
        }
    }

    /// Whether a submission is currently outstanding.
    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Explicit reset: drop the composed selection and all transient state
    /// without submitting.
    pub fn reset(&mut self) {
        self.selection.clear();
        self.scanner.disarm();
        self.number_override = None;
    }
}
