//! Base key primitive integration tests
//!
//! Exercises [`Base62Digits`] through long append/prepend/split sequences.

use lexorder::{Base62Digits, BaseBetween};
use proptest::prelude::*;

#[test]
fn test_append_walks_integer_space() {
    let base = Base62Digits::new();
    let mut key = base.between(None, None).unwrap();
    for _ in 0..5_000 {
        let next = base.between(Some(&key), None).unwrap();
        assert!(next > key, "{next} should sort after {key}");
        key = next;
    }
    // a0..az, then b00..bzz, then into the four-character c integers
    assert_eq!(key.len(), 4);
    assert!(key.starts_with('c'));
}

#[test]
fn test_repeated_split_towards_lower_bound() {
    let base = Base62Digits::new();
    let lower = base.between(None, None).unwrap();
    let mut upper = base.between(Some(&lower), None).unwrap();
    for _ in 0..500 {
        let middle = base.between(Some(&lower), Some(&upper)).unwrap();
        assert!(lower < middle && middle < upper);
        upper = middle;
    }
}

#[test]
fn test_error_reports_offending_key() {
    let err = Base62Digits::new().between(Some("a0"), Some("#")).unwrap_err();
    assert!(err.is_invalid_key());
    assert_eq!(err.module(), "base");
    assert!(err.to_string().contains("\"#\""));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Splitting a gap at random points always lands strictly inside it
    #[test]
    fn between_is_strict(steps in prop::collection::vec((any::<bool>(), any::<bool>()), 1..60)) {
        let base = Base62Digits::new();
        let mut keys = vec![base.between(None, None).unwrap()];
        for (split, towards_end) in steps {
            let (lower, upper) = if split && keys.len() > 1 {
                let i = if towards_end { keys.len() - 2 } else { 0 };
                (Some(keys[i].as_str()), Some(keys[i + 1].as_str()))
            } else if towards_end {
                (keys.last().map(String::as_str), None)
            } else {
                (None, keys.first().map(String::as_str))
            };
            let key = base.between(lower, upper).unwrap();
            prop_assert!(lower.is_none_or(|lower| lower < key.as_str()));
            prop_assert!(upper.is_none_or(|upper| key.as_str() < upper));
            prop_assert!(base.validate(&key).is_ok());
            keys.push(key);
            keys.sort();
        }
    }
}
