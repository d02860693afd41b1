//! Randomized properties of layered key generation

use lexorder::{KeyCodec, SeededSuffix, SuffixSource};
use proptest::prelude::*;

use crate::helpers::*;

fn script() -> impl Strategy<Value = Vec<(u8, usize)>> {
    prop::collection::vec((0u8..4, any::<usize>()), 1..40)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(150))]

    /// Any ordered pair of existing keys bounds a fresh key strictly
    #[test]
    fn generate_between_is_strict(
        steps in script(),
        seed in any::<u64>(),
        picks in (any::<usize>(), any::<usize>()),
    ) {
        let keys = keys_from_script(&steps, seed);
        let codec = KeyCodec::new();

        let i = picks.0 % keys.len();
        let j = picks.1 % keys.len();
        let (i, j) = (i.min(j), i.max(j));

        let lower = keys[i].as_str();
        let upper = keys[j].as_str();
        if i < j {
            let key = codec.generate_between(Some(lower), Some(upper)).unwrap();
            prop_assert!(lower < key.as_str() && key.as_str() < upper, "{} !< {} !< {}", lower, key, upper);
        } else {
            prop_assert!(codec.generate_between(Some(lower), Some(upper)).unwrap_err().is_bound_order_error());
        }

        let above = codec.generate_between(Some(lower), None).unwrap();
        prop_assert!(lower < above.as_str());
        let below = codec.generate_between(None, Some(upper)).unwrap();
        prop_assert!(below.as_str() < upper);
    }

    /// Neighbouring keys stay splittable even when every writer shares one suffix
    #[test]
    fn colliding_suffixes_stay_strict(steps in script(), pattern in "[1-9A-Za-z]{1,4}") {
        let writer = fixed_codec(&pattern);
        let mut keys = vec![writer.generate_between(None, None).unwrap()];
        for (kind, pick) in steps {
            let i = pick % keys.len();
            let (lower, upper) = match kind {
                0 => (keys.last().map(String::as_str), None),
                1 => (None, keys.first().map(String::as_str)),
                _ => (Some(keys[i].as_str()), keys.get(i + 1).map(String::as_str)),
            };
            let key = writer.generate_between(lower, upper).unwrap();
            prop_assert!(lower.is_none_or(|lower| lower < key.as_str()));
            prop_assert!(upper.is_none_or(|upper| key.as_str() < upper));
            keys.push(key);
            keys.sort();
            // Same gap, same subkey, same suffix: a true collision.
            keys.dedup();
        }
    }

    /// Bounds whose subkey continues with the separator digit still bound the key
    #[test]
    fn separator_prefixed_bounds_stay_strict(
        seed in any::<u64>(),
        tail in "[1-9A-Za-z]{1,40}",
        zeros in 0usize..3,
    ) {
        let codec = seeded_codec(seed);
        let anchor = codec.generate_between(None, None).unwrap();
        let subkey = codec.subkey(&anchor);
        let upper = format!("{subkey}0{}{tail}", "0".repeat(zeros));

        let key = codec.generate_between(None, Some(&upper)).unwrap();
        prop_assert!(key < upper, "{} !< {}", key, upper);
        let key = codec.generate_between(Some(subkey), Some(&upper)).unwrap();
        prop_assert!(subkey < key.as_str() && key < upper, "{} !< {} !< {}", subkey, key, upper);
    }

    /// Subkeys survive re-layering with any suffix
    #[test]
    fn subkey_extraction_round_trip(seed in any::<u64>(), steps in script()) {
        let keys = keys_from_script(&steps, seed);
        let codec = KeyCodec::new();
        let suffix = SeededSuffix::new(seed).suffix(32);
        for key in &keys {
            let subkey = codec.subkey(key);
            if key.len() <= 33 {
                prop_assert_eq!(subkey, key.as_str());
            } else {
                prop_assert_eq!(subkey, &key[..key.len() - 33]);
                let relayered = format!("{subkey}0{suffix}");
                prop_assert_eq!(codec.subkey(&relayered), subkey);
            }
        }
    }
}
