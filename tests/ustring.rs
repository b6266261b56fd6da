#![cfg(feature = "alloc")]

use rune_scan::{ScanStop, UString};

#[test]
fn empty_string_is_a_lone_nul() {
    let s = UString::new();
    assert_eq!(s.len(), 0);
    assert_eq!(s.byte_len(), 0);
    assert!(s.is_empty());
    assert_eq!(s.as_bytes(), b"");
    assert_eq!(s.as_bytes_with_nul(), &[0]);
    assert_eq!(s, UString::default());
}

#[test]
fn construction_caches_both_counts() {
    let s = UString::from("héllo");
    assert_eq!(s.len(), 5);
    assert_eq!(s.byte_len(), 6);
    assert_eq!(s.as_str(), Some("héllo"));
}

#[test]
fn invalid_tail_is_truncated_at_construction() {
    let s = UString::from_bytes(b"ab\xffcd");
    assert_eq!(s.len(), 2);
    assert_eq!(s.byte_len(), 2);
    assert_eq!(s.as_bytes(), b"ab");
}

#[test]
fn embedded_nul_truncates() {
    let s = UString::from_bytes(b"ab\0cd");
    assert_eq!(s.len(), 2);
    assert_eq!(s.as_bytes(), b"ab");
}

#[test]
fn clone_is_a_deep_copy() {
    let a = UString::from("données");
    let b = a.clone();
    assert_eq!(a, b);
    assert_eq!(b.len(), a.len());
    assert_eq!(b.byte_len(), a.byte_len());
}

#[test]
fn rescan_matches_the_cached_counts() {
    let s = UString::from("a®€");
    let scan = s.scan();
    assert_eq!(scan.chars, s.len());
    assert_eq!(scan.bytes, s.byte_len());
    assert_eq!(scan.stop, ScanStop::Terminator);
}

#[test]
fn non_strict_contents_have_no_str_view() {
    // A lone surrogate passes shape validation but is not strict UTF-8.
    let s = UString::from_bytes(&[0xed, 0xa0, 0x80]);
    assert_eq!(s.len(), 1);
    assert_eq!(s.byte_len(), 3);
    assert_eq!(s.as_str(), None);
}

#[test]
fn to_utf32_includes_the_terminator() {
    let s = UString::from("A®");
    assert_eq!(s.to_utf32(), vec![0x41, 0xae, 0]);
}

#[cfg(feature = "serde")]
mod serde_round_trip {
    use rune_scan::UString;

    #[test]
    fn strict_contents_round_trip_as_a_string() {
        let s = UString::from("héllo €");
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(json, "\"héllo €\"");
        let back: UString = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }

    #[test]
    fn non_strict_contents_refuse_to_serialize() {
        let s = UString::from_bytes(&[0xed, 0xa0, 0x80]);
        assert!(serde_json::to_string(&s).is_err());
    }
}
