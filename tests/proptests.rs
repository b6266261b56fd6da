// Property-based tests for the scanning and decoding invariants.
//
// These are intentionally conservative in input size to keep CI fast.
#![allow(clippy::unwrap_used, clippy::expect_used)]

use proptest::prelude::*;

use rune_scan::{utf32_scan, utf8_scan};

fn arb_text() -> impl Strategy<Value = String> {
    // NUL would legitimately truncate the scan, which the round-trip
    // properties don't want to model; everything else is fair game.
    any::<String>().prop_map(|s| s.replace('\0', " "))
}

#[cfg(feature = "alloc")]
mod round_trip {
    use proptest::prelude::*;

    use super::arb_text;

    proptest! {
        #[test]
        fn decode_reencode_round_trip(text in arb_text()) {
            let runes = rune_scan::utf8_to_utf32_vec(text.as_bytes());
            prop_assert_eq!(runes.len(), text.chars().count() + 1);
            prop_assert_eq!(*runes.last().unwrap(), 0);

            let bytes = rune_scan::utf32_to_utf8(&runes).unwrap();
            prop_assert_eq!(bytes, text.into_bytes());
        }
    }
}

proptest! {
    #[test]
    fn strict_utf8_scans_completely(text in arb_text()) {
        let scan = utf8_scan(text.as_bytes(), None);
        prop_assert_eq!(scan.chars, text.chars().count());
        prop_assert_eq!(scan.bytes, text.len());
        prop_assert!(scan.is_clean());
    }

    #[test]
    fn consumed_bytes_never_exceed_input_or_cap(
        bytes in proptest::collection::vec(any::<u8>(), 0..256),
        cap in proptest::option::of(0_usize..300),
    ) {
        let scan = utf8_scan(&bytes, cap);
        prop_assert!(scan.bytes <= bytes.len());
        if let Some(cap) = cap {
            prop_assert!(scan.bytes <= cap);
        }
        prop_assert!(scan.chars <= scan.bytes);
    }

    #[test]
    fn scanning_is_idempotent(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
        let first = utf8_scan(&bytes, None);
        prop_assert_eq!(utf8_scan(&bytes, None), first);

        // The valid prefix re-scans to the same counts, ending cleanly.
        let prefix = utf8_scan(&bytes[..first.bytes], None);
        prop_assert_eq!(prefix.chars, first.chars);
        prop_assert_eq!(prefix.bytes, first.bytes);
        prop_assert!(prefix.is_clean());
    }

    #[test]
    fn counts_are_monotone_in_the_cap(
        bytes in proptest::collection::vec(any::<u8>(), 0..256),
        lo in 0_usize..300,
        hi in 0_usize..300,
    ) {
        let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
        let small = utf8_scan(&bytes, Some(lo));
        let large = utf8_scan(&bytes, Some(hi));
        prop_assert!(small.chars <= large.chars);
        prop_assert!(small.bytes <= large.bytes);
    }

    #[test]
    fn utf32_count_never_exceeds_input_or_cap(
        runes in proptest::collection::vec(any::<u32>(), 0..128),
        cap in proptest::option::of(0_usize..160),
    ) {
        let count = utf32_scan(&runes, cap);
        prop_assert!(count <= runes.len());
        if let Some(cap) = cap {
            prop_assert!(count <= cap);
        }
    }
}
