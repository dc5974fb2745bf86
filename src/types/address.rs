//! 32-byte account addresses.

use crate::types::cursor::Cursor;
use crate::types::encoding::{Decode, Encode, EncodeSink};
use crate::types::errors::CodecError;
use std::fmt;
use std::str::FromStr;

/// Length of an account address in bytes.
pub const ADDRESS_LENGTH: usize = 32;

/// Fixed-size 32-byte address identifying an account.
///
/// Encoded as the raw 32 bytes with no length prefix. The only way to build
/// one from untrusted input is through the checked constructors, so a value
/// of this type always has the canonical width.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct AccountAddress([u8; ADDRESS_LENGTH]);

impl AccountAddress {
    pub const fn new(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Builds an address from a slice, which must be exactly 32 bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, CodecError> {
        let array: [u8; ADDRESS_LENGTH] =
            bytes.try_into().map_err(|_| CodecError::InvalidFixedLength {
                expected: ADDRESS_LENGTH,
                actual: bytes.len(),
            })?;
        Ok(Self(array))
    }

    /// Parses the lowercase (or uppercase) hex form, with or without `0x`.
    pub fn from_hex(s: &str) -> Result<Self, CodecError> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        Self::from_slice(&hex::decode(s)?)
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    pub fn as_bytes(&self) -> &[u8; ADDRESS_LENGTH] {
        &self.0
    }
}

impl Encode for AccountAddress {
    fn encode<S: EncodeSink>(&self, out: &mut S) -> Result<(), CodecError> {
        out.write_fixed(&self.0, ADDRESS_LENGTH)
    }
}

impl Decode for AccountAddress {
    fn decode(cursor: &mut Cursor<'_>) -> Result<Self, CodecError> {
        Ok(Self(cursor.read_fixed()?))
    }
}

impl TryFrom<&[u8]> for AccountAddress {
    type Error = CodecError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::from_slice(bytes)
    }
}

impl FromStr for AccountAddress {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccountAddress({})", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_as_raw_32_bytes() {
        let address = AccountAddress::new([0xAB; ADDRESS_LENGTH]);
        let bytes = address.to_bytes().unwrap();
        assert_eq!(bytes.as_slice(), &[0xAB; ADDRESS_LENGTH]);
        assert_eq!(AccountAddress::from_bytes(&bytes).unwrap(), address);
    }

    #[test]
    fn wrong_width_is_rejected() {
        for len in [0usize, 31, 33] {
            let bytes = vec![0u8; len];
            assert_eq!(
                AccountAddress::from_slice(&bytes),
                Err(CodecError::InvalidFixedLength {
                    expected: ADDRESS_LENGTH,
                    actual: len
                })
            );
        }
    }

    #[test]
    fn short_input_underflows() {
        assert!(matches!(
            AccountAddress::from_bytes(&[0u8; 31]),
            Err(CodecError::BufferUnderflow { needed: 32, remaining: 31 })
        ));
    }

    #[test]
    fn hex_form_is_lowercase() {
        let mut raw = [0u8; ADDRESS_LENGTH];
        raw[0] = 0xDE;
        raw[31] = 0x0F;
        let address = AccountAddress::new(raw);

        let text = address.to_string();
        assert_eq!(text.len(), 64);
        assert!(text.starts_with("de"));
        assert!(text.ends_with("0f"));

        assert_eq!(AccountAddress::from_hex(&text.to_uppercase()).unwrap(), address);
        assert_eq!(format!("0x{}", text).parse::<AccountAddress>().unwrap(), address);
    }

    #[test]
    fn bad_hex_is_rejected() {
        assert!(matches!(AccountAddress::from_hex("xyz"), Err(CodecError::InvalidHex(_))));
        assert!(matches!(
            AccountAddress::from_hex("abcd"),
            Err(CodecError::InvalidFixedLength { expected: 32, actual: 2 })
        ));
    }
}
