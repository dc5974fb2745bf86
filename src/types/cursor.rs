//! Forward-only reader over a borrowed byte slice.
//!
//! The cursor is an explicit `{buffer, offset}` pair threaded by `&mut`
//! through every decode step. It never rewinds, so each byte of the input is
//! consumed exactly once and a decode that fails midway leaves nothing behind.

use crate::types::errors::CodecError;

#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    offset: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, offset: 0 }
    }

    /// Number of bytes consumed so far.
    pub fn position(&self) -> usize {
        self.offset
    }

    pub fn remaining(&self) -> usize {
        self.buf.len() - self.offset
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Consumes exactly `n` bytes and borrows them from the underlying buffer.
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8], CodecError> {
        let remaining = self.remaining();
        if n > remaining {
            return Err(CodecError::BufferUnderflow {
                needed: n,
                remaining,
            });
        }
        let bytes = &self.buf[self.offset..self.offset + n];
        self.offset += n;
        Ok(bytes)
    }

    /// Consumes `N` bytes into an owned array.
    pub fn read_fixed<const N: usize>(&mut self) -> Result<[u8; N], CodecError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_bytes(N)?);
        Ok(out)
    }

    pub fn read8(&mut self) -> Result<u8, CodecError> {
        Ok(self.read_fixed::<1>()?[0])
    }

    pub fn read32(&mut self) -> Result<u32, CodecError> {
        Ok(u32::from_le_bytes(self.read_fixed()?))
    }

    pub fn read64(&mut self) -> Result<u64, CodecError> {
        Ok(u64::from_le_bytes(self.read_fixed()?))
    }
}
