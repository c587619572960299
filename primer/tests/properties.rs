//! Property-based tests using proptest.
//!
//! Invariants that must hold for all inputs: store presence, sequence
//! length/capacity bookkeeping, split/join inversion, and division.

use primer::{GrowableSequence, GrowthPolicy, RecordStore, divide, text};
use proptest::prelude::*;

proptest! {
    /// A key reads back its last written value and is absent after delete.
    #[test]
    fn store_set_get_delete(key in "[a-z]{1,8}", first: i64, second: i64) {
        let mut store = RecordStore::new();
        prop_assert_eq!(store.lookup(&key), (0, false));

        store.set(key.clone(), first);
        prop_assert_eq!(store.lookup(&key), (first, true));

        store.set(key.clone(), second);
        prop_assert_eq!(store.get(&key), Some(second));
        prop_assert_eq!(store.len(), 1);

        store.delete(&key);
        prop_assert_eq!(store.get(&key), None);
        prop_assert!(store.is_empty());
    }

    /// Each append adds exactly one element, capacity never shrinks and
    /// always covers the length, and order survives reallocation.
    #[test]
    fn sequence_append_bookkeeping(
        initial_length in 0usize..8,
        extra_capacity in 0usize..8,
        factor in 2usize..5,
        values in prop::collection::vec(any::<i64>(), 0..64),
    ) {
        let policy = GrowthPolicy { factor, min_capacity: 0 };
        let mut seq = GrowableSequence::with_growth(
            initial_length,
            initial_length + extra_capacity,
            policy,
        )
        .expect("valid sequence");

        for value in &values {
            let (len_before, cap_before) = (seq.len(), seq.cap());
            seq.append(*value);
            prop_assert_eq!(seq.len(), len_before + 1);
            prop_assert!(seq.cap() >= cap_before);
            prop_assert!(seq.cap() >= seq.len());
        }

        let mut expected = vec![0; initial_length];
        expected.extend_from_slice(&values);
        prop_assert_eq!(seq.as_slice(), expected.as_slice());
    }

    /// Splitting and re-joining on the same non-empty delimiter is lossless.
    #[test]
    fn split_then_join_restores_input(s in "[a-c, ]{0,24}", delimiter in "[,;]|, ") {
        let parts = text::split(&s, &delimiter);
        prop_assert_eq!(text::join(&parts, &delimiter), s.clone());
        prop_assert_eq!(parts.len(), text::count(&s, &delimiter) + 1);
    }

    /// Trimming is idempotent and never grows the input.
    #[test]
    fn trim_is_idempotent(s in "\\PC{0,32}") {
        let once = text::trim(&s);
        prop_assert_eq!(text::trim(once), once);
        prop_assert!(once.len() <= s.len());
    }

    /// Any non-zero denominator divides; zero is always rejected.
    #[test]
    fn divide_matches_float_division(numerator in -1e9f64..1e9, denominator in -1e9f64..1e9) {
        match divide(numerator, denominator) {
            Ok(value) => {
                prop_assert!(denominator != 0.0);
                prop_assert_eq!(value, numerator / denominator);
            }
            Err(err) => {
                prop_assert!(denominator == 0.0);
                prop_assert_eq!(err.reason(), "DivisionByZero");
            }
        }
    }
}
