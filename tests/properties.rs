//! Property-based tests for connections, symbols and the dictionary.

use glyph_core::core::ordered::OrderedSet;
use glyph_core::{Connection, Dictionary, Draft, Symbol, GRID_POINT_COUNT};
use proptest::prelude::*;

fn arbitrary_connection() -> impl Strategy<Value = Connection> {
    (0..GRID_POINT_COUNT, 0..GRID_POINT_COUNT).prop_map(|(p, q)| Connection::new(p, q))
}

fn arbitrary_symbol() -> impl Strategy<Value = Symbol> {
    prop::collection::vec(arbitrary_connection(), 0..12).prop_map(|connections| {
        let mut symbol = Symbol::new();
        for c in connections {
            symbol.add_connection(c);
        }
        symbol
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn connection_ignores_endpoint_order(p in 0..GRID_POINT_COUNT, q in 0..GRID_POINT_COUNT) {
        prop_assert_eq!(Connection::new(p, q), Connection::new(q, p));
        prop_assert_eq!(Connection::new(p, q).is_valid(), p != q);
    }

    #[test]
    fn normalized_draft_is_sorted_and_unique(
        connections in prop::collection::vec(arbitrary_connection(), 0..30)
    ) {
        let mut draft = Draft::new();
        for &c in &connections {
            draft.add_connection_forced(c);
        }
        let symbol = draft.normalize();
        let normalized: Vec<Connection> = symbol.connections().copied().collect();
        prop_assert!(normalized.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(normalized.iter().all(Connection::is_valid));
        for c in connections.iter().filter(|c| c.is_valid()) {
            prop_assert!(normalized.contains(c));
        }
    }

    #[test]
    fn text_encoding_round_trips(symbol in arbitrary_symbol()) {
        let text = symbol.to_string();
        prop_assert_eq!(text.len(), symbol.connection_count() * 2);
        prop_assert_eq!(Symbol::from(text.as_str()), symbol.clone());
        prop_assert_eq!(Symbol::from_str_strict(&text).unwrap(), symbol);
    }

    #[test]
    fn normalize_twice_changes_nothing(symbol in arbitrary_symbol()) {
        let mut twice = symbol.clone();
        twice.normalize();
        let once = twice.clone();
        twice.normalize();
        prop_assert_eq!(once, twice.clone());
        prop_assert_eq!(twice, symbol);
    }

    #[test]
    fn symbol_order_is_a_strict_weak_ordering(
        a in arbitrary_symbol(),
        b in arbitrary_symbol(),
        c in arbitrary_symbol(),
    ) {
        prop_assert!(!(a < a));
        prop_assert!(!(a < b && b < a));
        if a < b && b < c {
            prop_assert!(a < c);
        }
        prop_assert_eq!(a == b, !(a < b) && !(b < a));
    }

    #[test]
    fn dictionary_returns_what_was_inserted(
        keys in prop::collection::btree_set(arbitrary_symbol(), 1..20),
        probe in arbitrary_symbol(),
    ) {
        let dictionary: Dictionary<usize> =
            keys.iter().cloned().enumerate().map(|(i, k)| (k, i)).collect();
        prop_assert_eq!(dictionary.entry_count(), keys.len());
        for (i, key) in keys.iter().enumerate() {
            prop_assert_eq!(dictionary.get(key), Some(&i));
        }
        if !keys.contains(&probe) {
            prop_assert_eq!(dictionary.get(&probe), None);
        }
    }

    #[test]
    fn sort_and_unique_matches_repeated_add(values in prop::collection::vec(0u8..50, 0..60)) {
        let mut compacted = OrderedSet::new();
        let mut added = OrderedSet::new();
        for &v in &values {
            compacted.push(v);
            added.add(v);
        }
        compacted.sort_and_unique();
        prop_assert_eq!(compacted.as_slice(), added.as_slice());
    }
}
