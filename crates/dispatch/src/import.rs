//! Bulk file import: one-shot merge of an uploaded serial list.

use serde::{Deserialize, Serialize};

use dispatchforge_core::{DomainError, DomainResult};
use dispatchforge_stock::StockSnapshot;

use crate::selection::SelectionSet;

/// What one import attempt did to the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportSummary {
    /// Candidates newly inserted into the selection.
    pub added: usize,
    /// Valid candidates that were already selected (file duplicates included).
    pub already_selected: usize,
    /// Candidates with no matching serial in the snapshot, silently dropped.
    pub unmatched: usize,
}

/// Extract candidate serials from raw file content.
///
/// Lines are trimmed and empty lines dropped. If the first retained line
/// looks like a header (its lowercased text contains "serial" or "number"),
/// it is discarded. Each remaining line contributes its first comma-separated
/// field, or the whole line when no comma is present. File order is kept;
/// no de-duplication happens here.
///
/// The header sniff is a heuristic: a data row whose serial happens to
/// contain "serial" or "number" would be misread as a header. Callers that
/// know their format can pre-strip headers and skip the guess.
pub fn parse_candidates(text: &str) -> Vec<String> {
    let mut lines = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .peekable();

    if let Some(first) = lines.peek() {
        let lowered = first.to_lowercase();
        if lowered.contains("serial") || lowered.contains("number") {
            lines.next();
        }
    }

    lines
        .map(|line| match line.split_once(',') {
            Some((first_field, _)) => first_field.trim().to_string(),
            None => line.to_string(),
        })
        .collect()
}

/// Parse, validate, and merge an uploaded file into the selection.
///
/// Per-candidate matching is best-effort (unknown serials are dropped), but
/// the outcome is all-or-nothing: a file with no usable lines, or whose every
/// candidate is unknown, fails with a descriptive reason and leaves the
/// selection untouched.
pub fn import_candidates(
    text: &str,
    snapshot: &StockSnapshot,
    selection: &mut SelectionSet,
) -> DomainResult<ImportSummary> {
    let candidates = parse_candidates(text);
    if candidates.is_empty() {
        return Err(DomainError::validation(
            "import file contained no serial numbers",
        ));
    }

    let (valid, unmatched): (Vec<_>, Vec<_>) = candidates
        .into_iter()
        .partition(|serial| snapshot.contains(serial));

    if valid.is_empty() {
        return Err(DomainError::validation(
            "no serial number in the file matched available stock",
        ));
    }

    let mut summary = ImportSummary {
        added: 0,
        already_selected: 0,
        unmatched: unmatched.len(),
    };
    for serial in valid {
        if selection.add(serial) {
            summary.added += 1;
        } else {
            summary.already_selected += 1;
        }
    }

    tracing::info!(
        added = summary.added,
        already_selected = summary.already_selected,
        unmatched = summary.unmatched,
        "bulk import merged"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dispatchforge_stock::StockUnit;

    fn snapshot() -> StockSnapshot {
        StockSnapshot::new(vec![
            StockUnit::new("A100", "Volta", "V-3K"),
            StockUnit::new("B200", "Volta", "V-5K"),
            StockUnit::new("C300", "Helios", "H-10K"),
        ])
    }

    #[test]
    fn parses_single_column_files() {
        let candidates = parse_candidates("A100\nB200\n\n  C300  \n");
        assert_eq!(candidates, vec!["A100", "B200", "C300"]);
    }

    #[test]
    fn parses_first_comma_field_per_line() {
        let candidates = parse_candidates("A100,Volta,V-3K\nB200 , Volta\n");
        assert_eq!(candidates, vec!["A100", "B200"]);
    }

    #[test]
    fn header_line_is_sniffed_and_dropped() {
        let candidates = parse_candidates("Serial Number,Model\nA100,V-3K\nB200,V-5K\n");
        assert_eq!(candidates, vec!["A100", "B200"]);
    }

    #[test]
    fn first_line_without_header_words_is_kept() {
        let candidates = parse_candidates("A100\nB200\n");
        assert_eq!(candidates, vec!["A100", "B200"]);
    }

    #[test]
    fn import_merges_valid_candidates_and_drops_unknown_ones() {
        let snap = snapshot();
        let mut sel = SelectionSet::new();
        sel.add("A100");

        let summary =
            import_candidates("serial\nA100\nB200\nZZZ9\nC300\n", &snap, &mut sel).unwrap();
        assert_eq!(summary.added, 2);
        assert_eq!(summary.already_selected, 1);
        assert_eq!(summary.unmatched, 1);
        assert_eq!(sel.values(), ["A100", "B200", "C300"]);
    }

    #[test]
    fn empty_file_fails_and_leaves_selection_unchanged() {
        let snap = snapshot();
        let mut sel = SelectionSet::new();
        sel.add("A100");

        let err = import_candidates("\n   \n\n", &snap, &mut sel).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(sel.values(), ["A100"]);
    }

    #[test]
    fn all_unknown_candidates_fail_and_leave_selection_unchanged() {
        let snap = snapshot();
        let mut sel = SelectionSet::new();
        sel.add("A100");

        let err = import_candidates("X1\nX2\nX3\n", &snap, &mut sel).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(sel.values(), ["A100"]);
    }

    #[test]
    fn header_only_file_fails_as_empty() {
        let snap = snapshot();
        let mut sel = SelectionSet::new();

        let err = import_candidates("Serial Number\n", &snap, &mut sel).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert!(sel.is_empty());
    }

    #[test]
    fn duplicate_rows_in_file_are_deduplicated_on_merge() {
        let snap = snapshot();
        let mut sel = SelectionSet::new();

        let summary = import_candidates("A100\nA100\nB200\n", &snap, &mut sel).unwrap();
        assert_eq!(summary.added, 2);
        assert_eq!(summary.already_selected, 1);
        assert_eq!(sel.values(), ["A100", "B200"]);
    }
}
