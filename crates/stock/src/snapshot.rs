//! Point-in-time view of available stock.

use std::collections::HashSet;

use crate::unit::StockUnit;

/// An ordered snapshot of the units currently available for dispatch.
///
/// Supplied wholesale by the external stock query and treated as ground truth
/// for the duration of a composition session. Membership lookups are O(1);
/// iteration preserves the order the provider reported.
#[derive(Debug, Clone, Default)]
pub struct StockSnapshot {
    units: Vec<StockUnit>,
    serials: HashSet<String>,
}

impl StockSnapshot {
    pub fn new(units: Vec<StockUnit>) -> Self {
        let serials = units.iter().map(|u| u.serial_number.clone()).collect();
        Self { units, serials }
    }

    pub fn units(&self) -> &[StockUnit] {
        &self.units
    }

    /// Exact-match membership check on serial number.
    pub fn contains(&self, serial: &str) -> bool {
        self.serials.contains(serial)
    }

    /// Look up a unit by serial number.
    pub fn get(&self, serial: &str) -> Option<&StockUnit> {
        if !self.serials.contains(serial) {
            return None;
        }
        self.units.iter().find(|u| u.serial_number == serial)
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

impl From<Vec<StockUnit>> for StockSnapshot {
    fn from(units: Vec<StockUnit>) -> Self {
        Self::new(units)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> StockSnapshot {
        StockSnapshot::new(vec![
            StockUnit::new("INV-001", "Volta", "V-3K"),
            StockUnit::new("INV-002", "Volta", "V-5K"),
        ])
    }

    #[test]
    fn contains_matches_exact_serial_only() {
        let snap = snapshot();
        assert!(snap.contains("INV-001"));
        assert!(!snap.contains("inv-001"));
        assert!(!snap.contains("INV-001 "));
    }

    #[test]
    fn get_returns_unit_with_model_metadata() {
        let snap = snapshot();
        let unit = snap.get("INV-002").unwrap();
        assert_eq!(unit.model.model_code, "V-5K");
        assert!(snap.get("INV-999").is_none());
    }

    #[test]
    fn iteration_preserves_provider_order() {
        let snap = snapshot();
        let serials: Vec<_> = snap.units().iter().map(|u| u.serial_number.as_str()).collect();
        assert_eq!(serials, vec!["INV-001", "INV-002"]);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: indexed membership agrees with a linear scan over
            /// the provider-supplied order.
            #[test]
            fn contains_agrees_with_linear_scan(
                serials in prop::collection::vec("[A-Z]{1,3}-[0-9]{1,4}", 0..32),
                probe in "[A-Z]{1,3}-[0-9]{1,4}"
            ) {
                let units: Vec<StockUnit> = serials
                    .iter()
                    .map(|s| StockUnit::new(s.clone(), "Volta", "V-3K"))
                    .collect();
                let snap = StockSnapshot::new(units);

                prop_assert_eq!(
                    snap.contains(&probe),
                    serials.iter().any(|s| s == &probe)
                );
                for s in &serials {
                    prop_assert!(snap.contains(s));
                }
            }
        }
    }
}
