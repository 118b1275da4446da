//! Unit tests for the edition marker bitset

use token_metadata::edition_marker::marker_number;
use token_metadata::{decode_record, is_edition_taken, EditionMarker, EDITION_MARKER_BIT_SIZE};

#[path = "mod.rs"]
mod test_helpers;
use test_helpers::*;

/// What is tested: An empty ledger reports no edition as taken
#[test]
fn test_empty_ledger() {
    let ledger = [0u8; 31];
    for edition in 0..=10_000u64 {
        assert!(!is_edition_taken(&ledger, edition).unwrap(), "edition {}", edition);
    }
}

/// What is tested: Bits are read most significant first
/// Why: Edition 0 is the high bit of byte 0 and edition 247 the low bit of byte 30
#[test]
fn test_bit_order() {
    let mut ledger = [0u8; 31];
    ledger[0] = 0b1000_0000;
    assert!(is_edition_taken(&ledger, 0).unwrap());
    assert!(!is_edition_taken(&ledger, 7).unwrap());
    assert!(is_edition_taken(&ledger, 248).unwrap());

    let mut ledger = [0u8; 31];
    ledger[30] = 0b0000_0001;
    assert!(is_edition_taken(&ledger, 247).unwrap());
    assert!(!is_edition_taken(&ledger, 240).unwrap());
    assert!(is_edition_taken(&ledger, 247 + 248 * 3).unwrap());

    let mut ledger = [0u8; 31];
    ledger[1] = 0b0010_0000;
    assert!(is_edition_taken(&ledger, 10).unwrap());
    assert_eq!(
        (0..EDITION_MARKER_BIT_SIZE)
            .filter(|e| is_edition_taken(&ledger, *e).unwrap())
            .collect::<Vec<_>>(),
        vec![10]
    );
}

/// What is tested: Every edition maps to a bit inside the ledger
/// Why: The out-of-range guard must never fire for real inputs
#[test]
fn test_guard_never_fires() {
    let ledger = [0xffu8; 31];
    for edition in 0..5_000u64 {
        assert!(is_edition_taken(&ledger, edition).unwrap());
    }
    for edition in (u64::MAX - 500)..=u64::MAX {
        assert!(is_edition_taken(&ledger, edition).unwrap());
    }
}

/// What is tested: Editions are grouped into markers of 248
#[test]
fn test_marker_windows() {
    assert_eq!(marker_number(247), 0);
    assert_eq!(marker_number(248), 1);
    assert_eq!(marker_number(248 * 10 + 5), 10);
}

/// What is tested: A marker decoded from account bytes answers lookups
#[test]
fn test_decoded_marker() {
    let mut ledger = [0u8; 31];
    ledger[0] = 0b1100_0000;
    ledger[15] = 0b0000_1000;
    let marker: EditionMarker =
        decode_record(&to_bytes(&WireEditionMarker { key: 7, ledger })).unwrap();

    assert!(marker.edition_taken(0).unwrap());
    assert!(marker.edition_taken(1).unwrap());
    assert!(!marker.edition_taken(2).unwrap());
    assert!(marker.edition_taken(15 * 8 + 4).unwrap());
    assert_eq!(marker.taken_offsets(), vec![0, 1, 124]);
}
