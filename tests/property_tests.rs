//! Property-based tests for selection normalization
//!
//! Whatever the operator types or toggles, the resolved selection must be a
//! de-duplicated, catalog-ordered subset of the catalog.

use macsetup::select::{Selection, parse_index_list};
use proptest::prelude::*;

proptest! {
    #[test]
    fn selection_is_sorted_and_deduplicated(indices in prop::collection::vec(0usize..20, 0..40)) {
        let selection = Selection::from_indices(indices.iter().copied());

        // Sorted ascending, no duplicates.
        prop_assert!(selection.indices().windows(2).all(|w| w[0] < w[1]));
        // Exactly the distinct input values.
        for index in selection.indices() {
            prop_assert!(indices.contains(index));
        }
        for index in &indices {
            prop_assert!(selection.indices().contains(index));
        }
    }

    #[test]
    fn parse_equals_manual_dedup(
        picks in prop::collection::vec(1usize..=9, 1..20),
        catalog_len in 9usize..15,
    ) {
        let csv = picks
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(",");

        let parsed = parse_index_list(&csv, catalog_len).unwrap();

        let mut expected: Vec<usize> = picks.iter().map(|n| n - 1).collect();
        expected.sort_unstable();
        expected.dedup();

        prop_assert_eq!(parsed.indices(), expected.as_slice());
    }

    #[test]
    fn parse_rejects_any_out_of_range_token(
        valid in prop::collection::vec(1usize..=5, 0..5),
        invalid in 6usize..100,
    ) {
        let mut tokens: Vec<String> = valid.iter().map(|n| n.to_string()).collect();
        tokens.push(invalid.to_string());
        let csv = tokens.join(",");

        let err = parse_index_list(&csv, 5).unwrap_err();
        prop_assert!(err.0.contains(&invalid.to_string()));
    }
}
