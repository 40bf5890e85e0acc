//! Forward-only read cursor over an untrusted buffer
//!
//! Every wire field is read through a [`Cursor`]. Reads either return exactly
//! the bytes the field asks for and advance, or fail with
//! `DecodeError::BufferTooSmall` without moving. No other code in the crate
//! indexes into input buffers directly.

use byteorder::{ByteOrder, LittleEndian};
use bungo_core::{DecodeError, DecodeResult};

/// Width of the little-endian length slots used by the bundle header
pub const U256_SLOT: usize = 32;

/// Read position into a borrowed buffer
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Cursor at the start of `buf`
    pub fn new(buf: &'a [u8]) -> Self {
        Cursor { buf, pos: 0 }
    }

    /// Current offset from the start of the buffer
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes left to read
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Take the next `len` bytes.
    pub fn take(&mut self, len: usize, field: &'static str) -> DecodeResult<&'a [u8]> {
        if len > self.remaining() {
            return Err(DecodeError::BufferTooSmall {
                field,
                offset: self.pos,
                needed: len,
                available: self.remaining(),
            });
        }
        let bytes = &self.buf[self.pos..self.pos + len];
        self.pos += len;
        Ok(bytes)
    }

    /// Read a single byte.
    pub fn read_u8(&mut self, field: &'static str) -> DecodeResult<u8> {
        Ok(self.take(1, field)?[0])
    }

    /// Read a 2-byte little-endian integer.
    pub fn read_u16_le(&mut self, field: &'static str) -> DecodeResult<u16> {
        Ok(LittleEndian::read_u16(self.take(2, field)?))
    }

    /// Read an 8-byte little-endian integer.
    pub fn read_u64_le(&mut self, field: &'static str) -> DecodeResult<u64> {
        Ok(LittleEndian::read_u64(self.take(8, field)?))
    }

    /// Read an 8-byte little-endian length or count as `usize`.
    pub fn read_len_u64(&mut self, field: &'static str) -> DecodeResult<usize> {
        let offset = self.pos;
        let value = self.read_u64_le(field)?;
        usize::try_from(value).map_err(|_| DecodeError::LengthOverflow { field, offset })
    }

    /// Read a 32-byte little-endian slot as `usize`.
    ///
    /// The full width is significant: any set bit above `usize::BITS` fails
    /// with `LengthOverflow` rather than being dropped.
    pub fn read_u256_le(&mut self, field: &'static str) -> DecodeResult<usize> {
        let offset = self.pos;
        let slot = self.take(U256_SLOT, field)?;
        let (low, high) = slot.split_at(8);
        if high.iter().any(|&b| b != 0) {
            return Err(DecodeError::LengthOverflow { field, offset });
        }
        usize::try_from(LittleEndian::read_u64(low))
            .map_err(|_| DecodeError::LengthOverflow { field, offset })
    }

    /// Consume everything left in the buffer.
    pub fn rest(&mut self) -> &'a [u8] {
        let bytes = &self.buf[self.pos..];
        self.pos = self.buf.len();
        bytes
    }
}
