//! Reference-counted byte buffer with copy-on-write semantics.
//!
//! Used for every variable-length byte field of the wire format (program code,
//! modules, keys, signatures, proofs, account-state values). Its canonical
//! form is a 4-byte little-endian length prefix followed by the raw bytes.

use crate::types::cursor::Cursor;
use crate::types::encoding::{Decode, Encode, EncodeSink, read_byte_array};
use crate::types::errors::CodecError;
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// A reference-counted, immutable byte buffer.
///
/// Wraps `Arc<Vec<u8>>` so decoded values can be cloned and shared across
/// threads without copying. Mutations trigger copy-on-write via `Arc::make_mut`.
#[derive(Default, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Bytes(Arc<Vec<u8>>);

impl Bytes {
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self(Arc::new(data.into()))
    }

    /// Creates an empty buffer with the specified capacity.
    pub fn with_capacity(cap: usize) -> Self {
        Self(Arc::new(Vec::with_capacity(cap)))
    }

    /// Decodes a hex string (no `0x` prefix) into a buffer.
    pub fn from_hex(s: &str) -> Result<Self, CodecError> {
        Ok(Self::new(hex::decode(s)?))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        self.0.as_slice()
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.as_slice().to_vec()
    }

    /// Lowercase hex form of the contents.
    pub fn to_hex(&self) -> String {
        hex::encode(self.as_slice())
    }

    /// Appends bytes to the buffer, cloning if other references exist.
    pub fn extend_from_slice(&mut self, s: &[u8]) {
        Arc::make_mut(&mut self.0).extend_from_slice(s);
    }
}

impl Clone for Bytes {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl Deref for Bytes {
    type Target = [u8];
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl AsRef<[u8]> for Bytes {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl fmt::Debug for Bytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bytes(0x{})", self.to_hex())
    }
}

impl Encode for Bytes {
    fn encode<S: EncodeSink>(&self, out: &mut S) -> Result<(), CodecError> {
        out.write_byte_array(self.as_slice())
    }
}

impl Decode for Bytes {
    fn decode(cursor: &mut Cursor<'_>) -> Result<Self, CodecError> {
        Ok(Bytes::from(read_byte_array(cursor)?))
    }
}

impl From<Vec<u8>> for Bytes {
    fn from(v: Vec<u8>) -> Self {
        Self(Arc::new(v))
    }
}

impl From<&[u8]> for Bytes {
    fn from(s: &[u8]) -> Self {
        Self::new(s)
    }
}

impl From<&str> for Bytes {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl<const N: usize> From<[u8; N]> for Bytes {
    fn from(arr: [u8; N]) -> Self {
        Self::new(arr)
    }
}

impl<const N: usize> From<&[u8; N]> for Bytes {
    fn from(arr: &[u8; N]) -> Self {
        Self::new(arr.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_with_length_prefix() {
        let bytes = Bytes::new([0x01, 0x02]);
        assert_eq!(bytes.to_bytes().unwrap().as_slice(), &[2, 0, 0, 0, 1, 2]);
    }

    #[test]
    fn empty_buffer_is_just_a_prefix() {
        let bytes = Bytes::default().to_bytes().unwrap();
        assert_eq!(bytes.as_slice(), &[0, 0, 0, 0]);
        assert!(Bytes::from_bytes(&bytes).unwrap().is_empty());
    }

    #[test]
    fn decode_rejects_overlong_prefix() {
        let data = [5, 0, 0, 0, 1, 2];
        assert_eq!(
            Bytes::from_bytes(&data),
            Err(CodecError::TruncatedInput {
                declared: 5,
                remaining: 2
            })
        );
    }

    #[test]
    fn clone_shares_storage_until_written() {
        let original = Bytes::new(b"abc");
        let mut copy = original.clone();
        copy.extend_from_slice(b"d");
        assert_eq!(original.as_slice(), b"abc");
        assert_eq!(copy.as_slice(), b"abcd");
    }

    #[test]
    fn hex_round_trip() {
        let bytes = Bytes::from_hex("00ff10").unwrap();
        assert_eq!(bytes.as_slice(), &[0x00, 0xFF, 0x10]);
        assert_eq!(bytes.to_hex(), "00ff10");
        assert_eq!(format!("{:?}", bytes), "Bytes(0x00ff10)");
        assert!(matches!(Bytes::from_hex("0g"), Err(CodecError::InvalidHex(_))));
    }
}
