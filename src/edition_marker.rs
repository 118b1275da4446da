//! Edition Marker Bitset Module
//!
//! An edition marker account tracks which prints of a limited edition have
//! been minted. Its 31-byte ledger holds 248 bits, most significant bit first,
//! so edition `n` lives in marker `n / 248` at bit `n % 248`.

use crate::error::{MetadataError, Result};
use crate::records::EditionMarker;
use crate::schema::EDITION_MARKER_LEDGER_LEN;

/// Editions tracked by a single marker account.
pub const EDITION_MARKER_BIT_SIZE: u64 = 248;

/// Returns `(byte index, mask)` for an edition inside its marker's ledger.
fn locate(edition: u64) -> Result<(usize, u8)> {
    let offset = edition % EDITION_MARKER_BIT_SIZE;
    let index = (offset / 8) as usize;
    // Unreachable while the ledger is 31 bytes and the bit size is 248.
    if index > EDITION_MARKER_LEDGER_LEN - 1 {
        return Err(MetadataError::IndexOutOfRange(index));
    }
    let position_from_msb = 7 - (offset % 8);
    Ok((index, 1u8 << position_from_msb))
}

/// Reports whether `edition` is marked as printed in `ledger`.
pub fn is_edition_taken(ledger: &[u8; EDITION_MARKER_LEDGER_LEN], edition: u64) -> Result<bool> {
    let (index, mask) = locate(edition)?;
    Ok(ledger[index] & mask != 0)
}

/// Marker number holding `edition`, used as the last seed of the marker address.
pub fn marker_number(edition: u64) -> u64 {
    edition / EDITION_MARKER_BIT_SIZE
}

impl EditionMarker {
    pub fn edition_taken(&self, edition: u64) -> Result<bool> {
        is_edition_taken(&self.ledger, edition)
    }

    /// Editions within this marker's window of 248 that are marked, as offsets
    /// from the window start.
    pub fn taken_offsets(&self) -> Vec<u64> {
        (0..EDITION_MARKER_BIT_SIZE)
            .filter(|offset| matches!(self.edition_taken(*offset), Ok(true)))
            .collect()
    }
}
