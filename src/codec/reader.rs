//! Cursor-based reader over an account buffer.

use solana_program::pubkey::Pubkey;

use crate::error::{MetadataError, Result};

/// Length of an address on the wire.
pub const ADDRESS_LEN: usize = 32;

/// Reads little-endian primitives from a borrowed buffer.
///
/// The cursor starts at 0 and advances by exactly the number of bytes each
/// read consumes. After a failed read the cursor position is unspecified and
/// the decode must be abandoned.
#[derive(Debug)]
pub struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8]> {
        if n > self.remaining() {
            return Err(MetadataError::BufferUnderrun {
                needed: n,
                remaining: self.remaining(),
            });
        }
        let bytes = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(bytes)
    }

    fn take_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N)?);
        Ok(out)
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        Ok(u16::from_le_bytes(self.take_array()?))
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        Ok(u32::from_le_bytes(self.take_array()?))
    }

    pub fn read_u64(&mut self) -> Result<u64> {
        Ok(u64::from_le_bytes(self.take_array()?))
    }

    pub fn read_fixed_bytes(&mut self, n: usize) -> Result<Vec<u8>> {
        Ok(self.take(n)?.to_vec())
    }

    /// Reads a u32 length prefix followed by that many UTF-8 bytes.
    pub fn read_string(&mut self) -> Result<String> {
        let len = self.read_u32()? as usize;
        let bytes = self.take(len)?;
        std::str::from_utf8(bytes)
            .map(str::to_owned)
            .map_err(|_| MetadataError::InvalidUtf8)
    }

    pub fn read_address(&mut self) -> Result<Pubkey> {
        Ok(Pubkey::new_from_array(self.take_array::<ADDRESS_LEN>()?))
    }

    /// Reads a presence flag, then the payload when the flag is 1.
    pub fn read_option<T, F>(&mut self, read: F) -> Result<Option<T>>
    where
        F: FnOnce(&mut Self) -> Result<T>,
    {
        match self.read_u8()? {
            0 => Ok(None),
            1 => read(self).map(Some),
            flag => Err(MetadataError::InvalidOptionFlag(flag)),
        }
    }

    /// Reads a u32 element count, then that many elements.
    pub fn read_list<T, F>(&mut self, mut read: F) -> Result<Vec<T>>
    where
        F: FnMut(&mut Self) -> Result<T>,
    {
        let len = self.read_u32()? as usize;
        // Elements may be zero-width, so the count is not bounded by the
        // remaining bytes; only the preallocation is.
        let mut items = Vec::with_capacity(len.min(self.remaining()));
        for _ in 0..len {
            items.push(read(self)?);
        }
        Ok(items)
    }
}
