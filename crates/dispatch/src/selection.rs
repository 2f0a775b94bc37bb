//! The canonical selection state for a pending dispatch.

use std::collections::HashSet;

/// De-duplicated, order-preserving set of selected serial numbers.
///
/// Insertion order is kept for display and for the dispatch-number deriver's
/// first/last rule. This container never validates membership against the
/// stock snapshot itself; the scanner channel and bulk import enforce that at
/// their boundaries before calling in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ordered: Vec<String>,
    members: HashSet<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a serial. Idempotent: adding an already-present serial is a
    /// no-op, not an error. Returns whether the serial was newly inserted.
    pub fn add(&mut self, serial: impl Into<String>) -> bool {
        let serial = serial.into();
        if self.members.contains(&serial) {
            return false;
        }
        self.members.insert(serial.clone());
        self.ordered.push(serial);
        true
    }

    /// Remove a serial. Returns whether it was present.
    pub fn remove(&mut self, serial: &str) -> bool {
        if !self.members.remove(serial) {
            return false;
        }
        self.ordered.retain(|s| s != serial);
        true
    }

    pub fn contains(&self, serial: &str) -> bool {
        self.members.contains(serial)
    }

    /// Add if absent, remove if present. Returns whether the serial is
    /// selected afterwards.
    pub fn toggle(&mut self, serial: &str) -> bool {
        if self.contains(serial) {
            self.remove(serial);
            false
        } else {
            self.add(serial);
            true
        }
    }

    pub fn clear(&mut self) {
        self.ordered.clear();
        self.members.clear();
    }

    /// Selected serials in insertion order.
    pub fn values(&self) -> &[String] {
        &self.ordered
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}
