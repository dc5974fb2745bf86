//! 32-byte SHA3-256 hashes and the domain-separated signing hasher.

use crate::types::encoding::EncodeSink;
use libra_lcs_derive::BinaryCodec;
use sha3::{Digest, Sha3_256};
use std::fmt;

/// SHA3-256 hash length in bytes.
pub const HASH_LEN: usize = 32;

/// Suffix appended to a type name to derive its hashing domain seed.
pub const HASH_DOMAIN_SUFFIX: &[u8] = b"@@$$LIBRA$$@@";

#[derive(Clone, Copy, Debug, PartialEq, Eq, BinaryCodec, Default, Hash, Ord, PartialOrd)]
pub struct Hash(pub [u8; HASH_LEN]);

impl Hash {
    pub const fn zero() -> Hash {
        Hash([0u8; HASH_LEN])
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Creates a new SHA3-256 hash builder for incremental hashing.
    pub fn sha3() -> HashBuilder {
        HashBuilder::new()
    }

    /// Starts a hasher pre-seeded for values of the named type.
    ///
    /// The seed is `SHA3-256(type_name || HASH_DOMAIN_SUFFIX)`, so hashes of
    /// different types never collide even when their encodings do.
    pub fn domain(type_name: &str) -> HashBuilder {
        let mut seed = Hash::sha3();
        seed.update(type_name.as_bytes());
        seed.update(HASH_DOMAIN_SUFFIX);
        let seed = seed.finalize();

        let mut builder = Hash::sha3();
        builder.update(seed.as_slice());
        builder
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

/// Incremental SHA3-256 hash builder.
///
/// Implements [`EncodeSink`] so encodable types can be hashed directly
/// without intermediate byte buffers.
pub struct HashBuilder {
    hasher: Sha3_256,
}

impl HashBuilder {
    pub fn new() -> Self {
        Self {
            hasher: Sha3_256::new(),
        }
    }

    pub fn update(&mut self, data: &[u8]) {
        self.hasher.update(data);
    }

    pub fn finalize(self) -> Hash {
        Hash(self.hasher.finalize().into())
    }
}

impl Default for HashBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl EncodeSink for HashBuilder {
    fn write_bytes(&mut self, bytes: &[u8]) {
        self.hasher.update(bytes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha3_of_empty_input() {
        let hash = Hash::sha3().finalize();
        assert_eq!(
            hash.to_string(),
            "a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a"
        );
    }

    #[test]
    fn sink_writes_match_update() {
        let mut via_update = Hash::sha3();
        via_update.update(&[1, 0, 0, 0]);

        let mut via_sink = Hash::sha3();
        via_sink.write32(1);

        assert_eq!(via_update.finalize(), via_sink.finalize());
    }

    #[test]
    fn domains_separate_identical_payloads() {
        let mut a = Hash::domain("RawTransaction");
        a.update(b"payload");
        let mut b = Hash::domain("SignedTransaction");
        b.update(b"payload");
        assert_ne!(a.finalize(), b.finalize());
    }

    #[test]
    fn hash_encodes_without_prefix() {
        use crate::types::encoding::{Decode, Encode};

        let hash = Hash([7u8; HASH_LEN]);
        let bytes = hash.to_bytes().unwrap();
        assert_eq!(bytes.len(), HASH_LEN);
        assert_eq!(Hash::from_bytes(&bytes).unwrap(), hash);
    }

    #[test]
    fn zero_hash_displays_as_zeros() {
        assert_eq!(Hash::zero().to_string(), "0".repeat(64));
    }
}
