//! Property-based tests for Workbench conversion.
//!
//! Generates random inputs and custom-mapping edits via proptest and verifies
//! that the breakdown always covers the input and agrees with the output.

use proptest::prelude::*;

use super::make_test_table;
use crate::Workbench;

#[derive(Debug, Clone)]
enum Action {
    Add(String, String),
    Remove(usize),
}

fn arb_text() -> impl Strategy<Value = String> {
    // Mostly table characters, some unknowns and whitespace.
    prop::collection::vec(
        prop_oneof![
            4 => prop::sample::select(vec!['A', 'B', 'C']),
            1 => prop::sample::select(vec!['X', ' ', 'က', 'ာ', '\n']),
        ],
        0..40,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

fn arb_source() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(vec!['A', 'B', 'C', 'X']), 1..4)
        .prop_map(|chars| chars.into_iter().collect())
}

fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        3 => (arb_source(), "[a-z]{1,3}").prop_map(|(s, t)| Action::Add(s, t)),
        1 => (0usize..6).prop_map(Action::Remove),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn breakdown_covers_input(
        text in arb_text(),
        actions in prop::collection::vec(arb_action(), 0..10),
    ) {
        let table = make_test_table();
        let mut wb = Workbench::new(&table);
        for action in actions {
            match action {
                Action::Add(source, target) => {
                    wb.add_custom_mapping(&source, &target).unwrap();
                }
                Action::Remove(index) => {
                    wb.remove_custom_mapping(index);
                }
            }
        }
        wb.set_input(text.clone());
        let result = wb.convert().clone();

        if text.trim().is_empty() {
            prop_assert!(result.is_empty());
            prop_assert_eq!(result.output.as_str(), "");
        } else {
            prop_assert_eq!(result.source_text(), text.clone());
        }
        let joined: String = result
            .tokens
            .iter()
            .map(|t| t.matched_target.as_str())
            .collect();
        prop_assert_eq!(&joined, &result.output);
        prop_assert!(result.tokens.iter().all(|t| !t.matched_source.is_empty()));

        // Same snapshot, same input: identical result.
        let again = wb.convert().clone();
        prop_assert_eq!(again, result);
    }

    #[test]
    fn latest_custom_mapping_wins(source in arb_source(), t1 in "[a-z]{1,3}", t2 in "[a-z]{1,3}") {
        let table = make_test_table();
        let mut wb = Workbench::new(&table);
        wb.add_custom_mapping(&source, &t1).unwrap();
        wb.add_custom_mapping(&source, &t2).unwrap();
        wb.set_input(source.clone());
        let result = wb.convert();
        prop_assert_eq!(result.tokens.len(), 1);
        prop_assert_eq!(result.output.as_str(), t2.as_str());
    }
}
