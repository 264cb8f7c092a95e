use proptest::prelude::*;
use std::collections::HashSet;
use tideline_core::{format_time_iso8601, parse_time_ms, OrderedStringSet};

fn arb_keys() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-f]", 0..24)
}

fn keys(set: &OrderedStringSet) -> Vec<String> {
    set.keys().map(str::to_string).collect()
}

fn first_occurrences(values: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .iter()
        .filter(|value| seen.insert(value.as_str()))
        .cloned()
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn add_without_reorder_fixes_position_at_first_insertion(values in arb_keys()) {
        let mut set = OrderedStringSet::new();
        for value in &values {
            set.add(value.clone());
        }
        prop_assert_eq!(keys(&set), first_occurrences(&values));
    }

    #[test]
    fn add_all_without_reorder_matches_repeated_add(first in arb_keys(), second in arb_keys()) {
        let mut set = OrderedStringSet::new();
        set.add_all(first.clone());
        set.add_all(second.clone());

        let combined: Vec<String> = first.into_iter().chain(second).collect();
        prop_assert_eq!(keys(&set), first_occurrences(&combined));
    }

    #[test]
    fn add_at_with_reorder_relocates_existing_key(
        values in arb_keys(),
        pick in any::<prop::sample::Index>(),
        target in 0usize..32,
    ) {
        let mut set = OrderedStringSet::from_ids(&values);
        prop_assume!(!set.is_empty());
        let key = set.keys().nth(pick.index(set.len())).map(str::to_string).unwrap();
        let len = set.len();

        set.add_at(key.clone(), Some(target), true);

        prop_assert_eq!(set.len(), len);
        prop_assert_eq!(set.index_of(&key), Some(target.min(len - 1)));
    }

    #[test]
    fn retain_ids_keeps_exact_subset_in_relative_order(values in arb_keys(), keep in arb_keys()) {
        let mut set = OrderedStringSet::from_ids(&values);
        let before = keys(&set);
        let keep_set: HashSet<&str> = keep.iter().map(String::as_str).collect();

        let removed = set.retain_ids(&keep);

        let expected: Vec<String> = before
            .iter()
            .filter(|key| keep_set.contains(key.as_str()))
            .cloned()
            .collect();
        prop_assert_eq!(keys(&set), expected);
        prop_assert_eq!(removed.len() + set.len(), before.len());
    }

    #[test]
    fn add_all_at_front_with_reorder_after_retain_yields_incoming_order(
        existing in arb_keys(),
        incoming in arb_keys(),
    ) {
        let incoming = first_occurrences(&incoming);
        let mut set = OrderedStringSet::from_ids(&existing);
        set.retain_ids(&incoming);
        set.add_all_at(incoming.clone(), Some(0), true);
        prop_assert_eq!(keys(&set), incoming);
    }

    #[test]
    fn timestamps_round_trip_at_millisecond_precision(
        time_ms in -62_135_596_800_000i64..253_402_300_799_999i64,
    ) {
        let formatted = format_time_iso8601(time_ms);
        prop_assert_eq!(parse_time_ms(&formatted).unwrap(), time_ms);
    }
}
