//! Barcode-scanner input channel.
//!
//! A small state machine over a rapid stream of scan tokens. Tokens are
//! buffered character by character and validated only when the scanner's
//! end-of-token signal arrives (an Enter keystroke on real hardware). Tokens
//! are processed strictly one at a time.

use serde::{Deserialize, Serialize};

use dispatchforge_stock::StockSnapshot;

use crate::selection::SelectionSet;

/// Outcome of one submitted scan token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "serial", rename_all = "snake_case")]
pub enum ScanOutcome {
    /// Token matched an available unit and was added to the selection.
    Accepted(String),
    /// Token matched a unit that is already selected; selection unchanged.
    AlreadySelected(String),
    /// Token matched nothing in the current snapshot; selection unchanged.
    UnknownSerial(String),
    /// Token was empty after trimming; no state change, no notification.
    Ignored,
    /// Scanner was not armed; the token is dropped.
    Disarmed,
}

/// Scanner channel state: `DISARMED` initially, `ARMED` while scanner mode is
/// on, self-looping on each accepted token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScannerChannel {
    armed: bool,
    pending: String,
}

impl ScannerChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Current token buffer (characters received since the last end-of-token).
    pub fn pending(&self) -> &str {
        &self.pending
    }

    /// Switch scanner mode on. The buffer starts empty.
    pub fn arm(&mut self) {
        self.armed = true;
        self.pending.clear();
    }

    /// Switch scanner mode off. Discards the pending buffer; already-accepted
    /// serials stay in the selection.
    pub fn disarm(&mut self) {
        self.armed = false;
        self.pending.clear();
    }

    /// Buffer one character of an in-progress token. Ignored while disarmed.
    pub fn push_char(&mut self, c: char) {
        if self.armed {
            self.pending.push(c);
        }
    }

    /// End-of-token signal: validate the buffered token against the snapshot
    /// and merge it into the selection. The buffer is cleared and the channel
    /// stays armed, ready for the next token.
    pub fn end_token(
        &mut self,
        snapshot: &StockSnapshot,
        selection: &mut SelectionSet,
    ) -> ScanOutcome {
        let raw = std::mem::take(&mut self.pending);
        self.accept(&raw, snapshot, selection)
    }

    /// Validate one complete token. Useful for wedge-mode scanners (and
    /// tests) that deliver whole tokens instead of keystrokes.
    pub fn accept(
        &mut self,
        raw: &str,
        snapshot: &StockSnapshot,
        selection: &mut SelectionSet,
    ) -> ScanOutcome {
        if !self.armed {
            return ScanOutcome::Disarmed;
        }

        let token = raw.trim();
        if token.is_empty() {
            return ScanOutcome::Ignored;
        }

        if !snapshot.contains(token) {
            tracing::warn!(serial = token, "scan rejected: serial not in stock");
            return ScanOutcome::UnknownSerial(token.to_string());
        }

        if selection.add(token) {
            tracing::debug!(serial = token, selected = selection.len(), "scan accepted");
            ScanOutcome::Accepted(token.to_string())
        } else {
            ScanOutcome::AlreadySelected(token.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dispatchforge_stock::StockUnit;

    fn snapshot() -> StockSnapshot {
        StockSnapshot::new(vec![
            StockUnit::new("INV-100", "Volta", "V-3K"),
            StockUnit::new("INV-200", "Volta", "V-5K"),
        ])
    }

    fn scan(channel: &mut ScannerChannel, token: &str, snap: &StockSnapshot, sel: &mut SelectionSet) -> ScanOutcome {
        for c in token.chars() {
            channel.push_char(c);
        }
        channel.end_token(snap, sel)
    }

    #[test]
    fn tokens_are_dropped_while_disarmed() {
        let mut channel = ScannerChannel::new();
        let snap = snapshot();
        let mut sel = SelectionSet::new();

        assert_eq!(channel.accept("INV-100", &snap, &mut sel), ScanOutcome::Disarmed);
        assert!(sel.is_empty());
        assert_eq!(channel.pending(), "");
    }

    #[test]
    fn armed_scan_of_known_serial_is_accepted() {
        let mut channel = ScannerChannel::new();
        let snap = snapshot();
        let mut sel = SelectionSet::new();

        channel.arm();
        let outcome = scan(&mut channel, "INV-100", &snap, &mut sel);
        assert_eq!(outcome, ScanOutcome::Accepted("INV-100".to_string()));
        assert!(sel.contains("INV-100"));
        assert!(channel.is_armed());
        assert_eq!(channel.pending(), "");
    }

    #[test]
    fn second_scan_of_same_serial_reports_already_selected() {
        let mut channel = ScannerChannel::new();
        let snap = snapshot();
        let mut sel = SelectionSet::new();

        channel.arm();
        scan(&mut channel, "INV-100", &snap, &mut sel);
        let outcome = scan(&mut channel, "INV-100", &snap, &mut sel);
        assert_eq!(outcome, ScanOutcome::AlreadySelected("INV-100".to_string()));
        assert_eq!(sel.len(), 1);
    }

    #[test]
    fn unknown_serial_is_rejected_without_state_change() {
        let mut channel = ScannerChannel::new();
        let snap = snapshot();
        let mut sel = SelectionSet::new();

        channel.arm();
        let outcome = scan(&mut channel, "NOPE-1", &snap, &mut sel);
        assert_eq!(outcome, ScanOutcome::UnknownSerial("NOPE-1".to_string()));
        assert!(sel.is_empty());
        assert!(channel.is_armed());
    }

    #[test]
    fn whitespace_tokens_are_ignored() {
        let mut channel = ScannerChannel::new();
        let snap = snapshot();
        let mut sel = SelectionSet::new();

        channel.arm();
        let outcome = scan(&mut channel, "   ", &snap, &mut sel);
        assert_eq!(outcome, ScanOutcome::Ignored);
        assert!(sel.is_empty());
    }

    #[test]
    fn scanned_tokens_are_trimmed_before_lookup() {
        let mut channel = ScannerChannel::new();
        let snap = snapshot();
        let mut sel = SelectionSet::new();

        channel.arm();
        let outcome = scan(&mut channel, "  INV-200\r", &snap, &mut sel);
        assert_eq!(outcome, ScanOutcome::Accepted("INV-200".to_string()));
        assert!(sel.contains("INV-200"));
    }

    #[test]
    fn disarm_discards_pending_buffer_but_not_selection() {
        let mut channel = ScannerChannel::new();
        let snap = snapshot();
        let mut sel = SelectionSet::new();

        channel.arm();
        scan(&mut channel, "INV-100", &snap, &mut sel);
        channel.push_char('I');
        channel.push_char('N');
        channel.disarm();

        assert_eq!(channel.pending(), "");
        assert!(!channel.is_armed());
        assert!(sel.contains("INV-100"));

        // Re-arming starts with a fresh buffer.
        channel.arm();
        assert_eq!(channel.pending(), "");
    }

    #[test]
    fn push_char_is_a_no_op_while_disarmed() {
        let mut channel = ScannerChannel::new();
        channel.push_char('X');
        assert_eq!(channel.pending(), "");
    }
}
