//! Account state blobs returned by a validator.
//!
//! A blob is a count-prefixed list of `(resource path, resource value)` byte
//! array pairs. Only the account resource is consumed by the client; the
//! other entries are decoded and kept but never interpreted. The map is
//! decode-only: it does not keep wire order, so it has no encoder.

use crate::types::bytes::Bytes;
use crate::types::cursor::Cursor;
use crate::types::encoding::{Decode, read_byte_array};
use crate::types::errors::CodecError;
use libra_lcs_derive::BinaryCodec;
use std::collections::BTreeMap;

/// Hex-encoded resource path of the account resource.
pub const ACCOUNT_RESOURCE_PATH: &str =
    "01217da6c6b3e19f1825cfb2676daecce3bf3de03cf26647c78df00b371b25cc97";

/// Decoded account state: hex-encoded resource path to raw resource bytes.
///
/// A path that appears more than once keeps its last value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountState {
    entries: BTreeMap<String, Bytes>,
}

impl AccountState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a resource under its raw path bytes.
    pub fn insert(&mut self, path: &[u8], value: impl Into<Bytes>) {
        self.entries.insert(hex::encode(path), value.into());
    }

    /// Looks up a resource by its hex-encoded path.
    pub fn get(&self, path_hex: &str) -> Option<&Bytes> {
        self.entries.get(path_hex)
    }

    /// Returns the value stored at `path_hex`, or `MissingPath`.
    pub fn require(&self, path_hex: &str) -> Result<&Bytes, CodecError> {
        self.get(path_hex)
            .ok_or_else(|| CodecError::MissingPath(path_hex.to_string()))
    }

    /// Raw bytes of the account resource.
    pub fn account_resource_bytes(&self) -> Result<&Bytes, CodecError> {
        self.require(ACCOUNT_RESOURCE_PATH)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Bytes)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl Decode for AccountState {
    fn decode(cursor: &mut Cursor<'_>) -> Result<Self, CodecError> {
        let count = cursor.read32()?;
        let mut state = AccountState::new();
        for _ in 0..count {
            let path = read_byte_array(cursor)?;
            let value = Bytes::decode(cursor)?;
            state.insert(path, value);
        }
        Ok(state)
    }
}

/// Decodes a full account state blob and returns the account resource bytes.
///
/// Fails with `MissingPath` when the blob parses but lacks the account
/// resource, regardless of what else it holds.
pub fn decode_account_state(blob: &[u8]) -> Result<Bytes, CodecError> {
    let state = AccountState::from_bytes(blob)?;
    state.account_resource_bytes().cloned()
}

/// The account resource stored at [`ACCOUNT_RESOURCE_PATH`].
#[derive(Debug, Clone, PartialEq, Eq, BinaryCodec)]
pub struct AccountResource {
    pub authentication_key: Bytes,
    pub balance: u64,
    pub delegated_withdrawal_capability: bool,
    pub received_events_count: u64,
    pub sent_events_count: u64,
    pub sequence_number: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::encoding::Encode;
    use crate::utils::test_utils::utils::{account_resource_path, encode_state_blob, sample_account_resource};

    #[test]
    fn finds_value_at_well_known_path() {
        let blob = encode_state_blob(&[(account_resource_path(), vec![1, 2, 3])]);
        assert_eq!(decode_account_state(&blob).unwrap().as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn other_paths_only_is_missing_path() {
        let blob = encode_state_blob(&[(vec![0x02, 0x03], vec![9]), (vec![0xFF; 33], vec![])]);
        assert_eq!(
            decode_account_state(&blob),
            Err(CodecError::MissingPath(ACCOUNT_RESOURCE_PATH.to_string()))
        );
    }

    #[test]
    fn unknown_entries_are_kept_but_ignored() {
        let blob = encode_state_blob(&[
            (vec![0x02], vec![0xEE]),
            (account_resource_path(), vec![4, 5]),
            (vec![0x03, 0x04], vec![]),
        ]);
        let state = AccountState::from_bytes(&blob).unwrap();
        assert_eq!(state.len(), 3);
        assert_eq!(state.get("02").unwrap().as_slice(), &[0xEE]);
        assert_eq!(state.account_resource_bytes().unwrap().as_slice(), &[4, 5]);
    }

    #[test]
    fn repeated_path_keeps_last_value() {
        let blob = encode_state_blob(&[
            (account_resource_path(), vec![1]),
            (account_resource_path(), vec![2]),
        ]);
        assert_eq!(decode_account_state(&blob).unwrap().as_slice(), &[2]);
    }

    #[test]
    fn empty_blob_is_missing_path() {
        assert!(matches!(
            decode_account_state(&0u32.to_le_bytes()),
            Err(CodecError::MissingPath(_))
        ));
    }

    #[test]
    fn truncated_entry_fails_before_lookup() {
        let blob = encode_state_blob(&[(account_resource_path(), vec![1, 2, 3])]);
        for cut in 0..blob.len() {
            let err = decode_account_state(&blob[..cut]).unwrap_err();
            assert!(!matches!(err, CodecError::MissingPath(_)), "cut {}: {}", cut, err);
        }
    }

    #[test]
    fn overlong_value_prefix_is_truncated_input() {
        let mut blob = 1u32.to_le_bytes().to_vec();
        blob.extend_from_slice(&[1, 0, 0, 0, 0x01]);
        blob.extend_from_slice(&[100, 0, 0, 0, 0xAA]);
        assert_eq!(
            decode_account_state(&blob),
            Err(CodecError::TruncatedInput {
                declared: 100,
                remaining: 1
            })
        );
    }

    #[test]
    fn entries_are_read_in_any_wire_order() {
        let blob = encode_state_blob(&[(vec![0xFF], vec![1]), (vec![0x00, 0x00], vec![2])]);
        let state = AccountState::from_bytes(&blob).unwrap();
        assert_eq!(state.len(), 2);
        assert_eq!(state.get("ff").unwrap().as_slice(), &[1]);
        assert_eq!(state.get("0000").unwrap().as_slice(), &[2]);
    }

    #[test]
    fn account_resource_layout() {
        let resource = sample_account_resource();
        let bytes = resource.to_bytes().unwrap();
        // key prefix + key + balance + bool + three counters
        assert_eq!(bytes.len(), 4 + 32 + 8 + 1 + 8 * 3);
        assert_eq!(&bytes[36..44], &resource.balance.to_le_bytes());
        assert_eq!(AccountResource::from_bytes(&bytes).unwrap(), resource);
    }

    #[test]
    fn account_resource_rejects_bad_bool() {
        let mut bytes = sample_account_resource().to_bytes().unwrap().to_vec();
        bytes[44] = 7;
        assert_eq!(AccountResource::from_bytes(&bytes), Err(CodecError::InvalidBool(7)));
    }
}
