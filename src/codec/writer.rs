//! Mirror of [`Reader`](super::Reader) used by the re-encoding path.

use solana_program::pubkey::Pubkey;

use crate::error::{MetadataError, Result};

/// Appends little-endian primitives to an owned buffer.
#[derive(Debug, Default)]
pub struct Writer {
    buf: Vec<u8>,
}

impl Writer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    pub fn write_u8(&mut self, value: u8) {
        self.buf.push(value);
    }

    pub fn write_u16(&mut self, value: u16) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    pub fn write_u32(&mut self, value: u32) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    pub fn write_u64(&mut self, value: u64) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    pub fn write_fixed_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Writes a u32 length prefix. Lengths past `u32::MAX` cannot be encoded.
    fn write_len(&mut self, len: usize) -> Result<()> {
        let len = u32::try_from(len).map_err(|_| {
            MetadataError::mismatch(format!("length of at most {}, got {}", u32::MAX, len))
        })?;
        self.write_u32(len);
        Ok(())
    }

    pub fn write_string(&mut self, value: &str) -> Result<()> {
        self.write_len(value.len())?;
        self.buf.extend_from_slice(value.as_bytes());
        Ok(())
    }

    pub fn write_address(&mut self, value: &Pubkey) {
        self.buf.extend_from_slice(value.as_ref());
    }

    /// Writes a presence flag, then the payload when present.
    pub fn write_option<T, F>(&mut self, value: Option<&T>, write: F) -> Result<()>
    where
        T: ?Sized,
        F: FnOnce(&mut Self, &T) -> Result<()>,
    {
        match value {
            None => {
                self.write_u8(0);
                Ok(())
            }
            Some(inner) => {
                self.write_u8(1);
                write(self, inner)
            }
        }
    }

    /// Writes a u32 element count, then each element.
    pub fn write_list<T, F>(&mut self, items: &[T], mut write: F) -> Result<()>
    where
        F: FnMut(&mut Self, &T) -> Result<()>,
    {
        self.write_len(items.len())?;
        for item in items {
            write(self, item)?;
        }
        Ok(())
    }
}
