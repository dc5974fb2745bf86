//! Canonical encoding and decoding traits.
//!
//! This module holds the primitive rules of the canonical wire format used to
//! build signing bytes and to read validator responses. Composite types get
//! their implementations from `#[derive(BinaryCodec)]`, which applies these
//! rules field by field in declaration order.
//!
//! # Binary Format
//!
//! - Integers: little-endian, fixed-width (`u8`, `u32`, `u64`)
//! - `bool`: single byte, `0` or `1`
//! - Byte arrays / `String`: 4-byte little-endian length prefix, then the bytes
//! - `Vec<T>`: 4-byte little-endian element count, then each element
//! - `[u8; N]`: the `N` bytes, no prefix (addresses, hashes)
//! - Enums: 4-byte little-endian discriminant, then the variant body
//!
//! # Example
//!
//! ```ignore
//! use crate::types::encoding::{Decode, Encode};
//!
//! let bytes = 42u64.to_bytes()?;
//! assert_eq!(u64::from_bytes(&bytes)?, 42);
//! ```

use crate::types::bytes::Bytes;
use crate::types::cursor::Cursor;
use crate::types::errors::CodecError;

/// Sink for writing encoded bytes.
///
/// Implemented by byte buffers, the size counter and the hash builder so a
/// value can be encoded straight into its final destination.
pub trait EncodeSink {
    /// Appends raw bytes, no prefix.
    fn write_bytes(&mut self, bytes: &[u8]);

    fn write8(&mut self, value: u8) {
        self.write_bytes(&[value]);
    }

    fn write32(&mut self, value: u32) {
        self.write_bytes(&value.to_le_bytes());
    }

    fn write64(&mut self, value: u64) {
        self.write_bytes(&value.to_le_bytes());
    }

    /// Appends a field that must be exactly `len` bytes wide.
    fn write_fixed(&mut self, bytes: &[u8], len: usize) -> Result<(), CodecError> {
        if bytes.len() != len {
            return Err(CodecError::InvalidFixedLength {
                expected: len,
                actual: bytes.len(),
            });
        }
        self.write_bytes(bytes);
        Ok(())
    }

    /// Appends a 4-byte length prefix followed by the bytes.
    fn write_byte_array(&mut self, bytes: &[u8]) -> Result<(), CodecError> {
        self.write32(length_prefix(bytes.len())?);
        self.write_bytes(bytes);
        Ok(())
    }
}

/// Counter for computing encoded size without allocating memory.
///
/// Used by `Encode::to_bytes` to pre-allocate exact capacity before encoding.
#[derive(Debug, Default)]
pub struct SizeCounter {
    len: usize,
}

impl SizeCounter {
    pub fn new() -> Self {
        Self { len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl EncodeSink for SizeCounter {
    fn write_bytes(&mut self, bytes: &[u8]) {
        self.len += bytes.len();
    }
}

impl EncodeSink for Bytes {
    fn write_bytes(&mut self, bytes: &[u8]) {
        self.extend_from_slice(bytes);
    }
}

impl EncodeSink for Vec<u8> {
    fn write_bytes(&mut self, bytes: &[u8]) {
        self.extend_from_slice(bytes);
    }
}

/// Converts a collection length into its 4-byte wire prefix.
pub(crate) fn length_prefix(len: usize) -> Result<u32, CodecError> {
    u32::try_from(len).map_err(|_| CodecError::LengthOverflow(len))
}

/// Reads a length-prefixed byte array, borrowing the payload from the input.
///
/// A prefix larger than what is left fails with `TruncatedInput` before any
/// payload byte is consumed.
pub(crate) fn read_byte_array<'a>(cursor: &mut Cursor<'a>) -> Result<&'a [u8], CodecError> {
    let declared = cursor.read32()? as usize;
    let remaining = cursor.remaining();
    if declared > remaining {
        return Err(CodecError::TruncatedInput {
            declared,
            remaining,
        });
    }
    cursor.read_bytes(declared)
}

/// Trait for types with a canonical binary form.
pub trait Encode {
    /// Writes the canonical representation to the given sink.
    fn encode<S: EncodeSink>(&self, out: &mut S) -> Result<(), CodecError>;

    /// Serializes to a new byte buffer with exact capacity.
    ///
    /// Performs two passes: first to count bytes, then to encode.
    fn to_bytes(&self) -> Result<Bytes, CodecError> {
        let mut counter = SizeCounter::new();
        self.encode(&mut counter)?;

        let mut out = Bytes::with_capacity(counter.len());
        self.encode(&mut out)?;
        Ok(out)
    }
}

/// Trait for types that can be read back from their canonical form.
pub trait Decode: Sized {
    /// Reads one value, advancing the cursor past the consumed bytes.
    fn decode(cursor: &mut Cursor<'_>) -> Result<Self, CodecError>;

    /// Decodes a value from a byte slice, requiring all bytes to be consumed.
    fn from_bytes(data: &[u8]) -> Result<Self, CodecError> {
        let mut cursor = Cursor::new(data);
        let value = Self::decode(&mut cursor)?;

        if !cursor.is_empty() {
            return Err(CodecError::TrailingBytes(cursor.remaining()));
        }

        Ok(value)
    }
}

impl Encode for u8 {
    fn encode<S: EncodeSink>(&self, out: &mut S) -> Result<(), CodecError> {
        out.write8(*self);
        Ok(())
    }
}

impl Decode for u8 {
    fn decode(cursor: &mut Cursor<'_>) -> Result<Self, CodecError> {
        cursor.read8()
    }
}

impl Encode for u32 {
    fn encode<S: EncodeSink>(&self, out: &mut S) -> Result<(), CodecError> {
        out.write32(*self);
        Ok(())
    }
}

impl Decode for u32 {
    fn decode(cursor: &mut Cursor<'_>) -> Result<Self, CodecError> {
        cursor.read32()
    }
}

impl Encode for u64 {
    fn encode<S: EncodeSink>(&self, out: &mut S) -> Result<(), CodecError> {
        out.write64(*self);
        Ok(())
    }
}

impl Decode for u64 {
    fn decode(cursor: &mut Cursor<'_>) -> Result<Self, CodecError> {
        cursor.read64()
    }
}

impl Encode for bool {
    fn encode<S: EncodeSink>(&self, out: &mut S) -> Result<(), CodecError> {
        out.write8(*self as u8);
        Ok(())
    }
}

impl Decode for bool {
    fn decode(cursor: &mut Cursor<'_>) -> Result<Self, CodecError> {
        match cursor.read8()? {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(CodecError::InvalidBool(other)),
        }
    }
}

impl<T: Encode> Encode for Vec<T> {
    fn encode<S: EncodeSink>(&self, out: &mut S) -> Result<(), CodecError> {
        out.write32(length_prefix(self.len())?);
        for item in self {
            item.encode(out)?;
        }
        Ok(())
    }
}

impl<T: Decode> Decode for Vec<T> {
    fn decode(cursor: &mut Cursor<'_>) -> Result<Self, CodecError> {
        let len = cursor.read32()? as usize;

        // Every element takes at least one byte, so the input bounds the allocation.
        let mut vec = Vec::with_capacity(len.min(cursor.remaining()));
        for _ in 0..len {
            vec.push(T::decode(cursor)?);
        }
        Ok(vec)
    }
}

impl Encode for String {
    fn encode<S: EncodeSink>(&self, out: &mut S) -> Result<(), CodecError> {
        out.write_byte_array(self.as_bytes())
    }
}

impl Decode for String {
    fn decode(cursor: &mut Cursor<'_>) -> Result<Self, CodecError> {
        let bytes = read_byte_array(cursor)?;
        std::str::from_utf8(bytes)
            .map(str::to_owned)
            .map_err(|_| CodecError::InvalidUtf8)
    }
}

// Fixed-width byte arrays carry no prefix.
impl<const N: usize> Encode for [u8; N] {
    fn encode<S: EncodeSink>(&self, out: &mut S) -> Result<(), CodecError> {
        out.write_bytes(self);
        Ok(())
    }
}

impl<const N: usize> Decode for [u8; N] {
    fn decode(cursor: &mut Cursor<'_>) -> Result<Self, CodecError> {
        cursor.read_fixed()
    }
}
