//! Property tests for generated record ids.

use std::collections::HashSet;

use proptest::prelude::*;

use flockbook::domain::value_objects::{next_record_id, suggest_pen_id, RecordKind};

fn record_kind() -> impl Strategy<Value = RecordKind> {
    prop_oneof![
        Just(RecordKind::Breeding),
        Just(RecordKind::Prevention),
        Just(RecordKind::Disease),
        Just(RecordKind::Feed),
        Just(RecordKind::Sale),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: ids generated at the same instant never collide.
    #[test]
    fn property_ids_are_unique_within_a_burst(
        kind in record_kind(),
        millis in 0i64..4_000_000_000_000,
        burst in 1usize..50,
    ) {
        let mut taken: HashSet<String> = HashSet::new();
        for _ in 0..burst {
            let id = next_record_id(kind, millis, |c| taken.contains(c));
            prop_assert!(id.starts_with(kind.prefix()));
            prop_assert!(taken.insert(id));
        }
        prop_assert_eq!(taken.len(), burst);
    }

    /// PROPERTY: pen codes are P followed by at least three digits.
    #[test]
    fn property_pen_code_shape(existing in 0usize..5000) {
        let code = suggest_pen_id(existing);
        prop_assert!(code.starts_with('P'));
        prop_assert!(code.len() >= 4);
        prop_assert_eq!(code[1..].parse::<usize>().unwrap(), existing + 1);
    }
}
