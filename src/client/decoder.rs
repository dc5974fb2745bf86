//! Maps validator responses onto the domain model.
//!
//! The decoder performs no validation of its own beyond what the codec
//! enforces: it wires cursors to the right decoders and assembles the result.
//! Failures are logged once here and returned unchanged: malformed bytes at
//! error level, a well-formed blob without the account resource at warn.

use crate::client::envelope::SignedTransactionSource;
use crate::core::account::{AccountResource, AccountState};
use crate::core::event::TransactionEvent;
use crate::core::transaction::{SignedTransaction, SignedTransactionWithProof};
use crate::types::bytes::Bytes;
use crate::types::encoding::Decode;
use crate::types::errors::CodecError;
use crate::{error, info, warn};

/// Stateless decoder for the responses a client receives.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClientDecoder;

impl ClientDecoder {
    pub fn new() -> Self {
        Self
    }

    /// Decodes an account state blob and returns the raw account resource.
    pub fn decode_account_state_blob(&self, blob: &[u8]) -> Result<Bytes, CodecError> {
        let state = AccountState::from_bytes(blob).inspect_err(|err| {
            error!("account state blob of {} bytes rejected: {}", blob.len(), err);
        })?;

        let resource = state.account_resource_bytes().inspect_err(|err| {
            warn!("{} ({} other entries)", err, state.len());
        })?;

        info!(
            "decoded account state: {} entries, account resource {} bytes",
            state.len(),
            resource.len()
        );
        Ok(resource.clone())
    }

    /// Decodes an account state blob down to its typed account resource.
    pub fn decode_account_resource(&self, blob: &[u8]) -> Result<AccountResource, CodecError> {
        let bytes = self.decode_account_state_blob(blob)?;
        AccountResource::from_bytes(&bytes).inspect_err(|err| {
            error!("account resource rejected: {}", err);
        })
    }

    /// Decodes a signed transaction and assembles it with its proof and events.
    ///
    /// The signed bytes are `RawTransaction`, then the public key and the
    /// signature as byte arrays, all from one cursor. Events are mapped
    /// independently; the proof is passed through untouched.
    pub fn decode_signed_transaction_with_proof<E: SignedTransactionSource>(
        &self,
        envelope: &E,
    ) -> Result<SignedTransactionWithProof, CodecError> {
        let bytes = envelope.signed_txn_bytes();
        let signed_transaction = SignedTransaction::from_bytes(bytes).inspect_err(|err| {
            error!("signed transaction of {} bytes rejected: {}", bytes.len(), err);
        })?;

        let events = envelope.events().map(|records| {
            records
                .iter()
                .map(|record| {
                    TransactionEvent::new(
                        record.event_data.clone(),
                        record.sequence_number,
                        record.key.clone(),
                    )
                })
                .collect::<Vec<_>>()
        });

        info!(
            "decoded transaction {}:{} with {} events",
            signed_transaction.raw_txn.sender,
            signed_transaction.raw_txn.sequence_number,
            events.as_ref().map_or(0, Vec::len)
        );

        Ok(SignedTransactionWithProof {
            signed_transaction,
            proof: envelope.proof().cloned(),
            events,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::envelope::{EventRecord, SignedTransactionEnvelope};
    use crate::core::account::ACCOUNT_RESOURCE_PATH;
    use crate::types::encoding::Encode;
    use crate::utils::test_utils::utils::{
        account_resource_path, encode_state_blob, sample_account_resource, sample_signed_transaction,
    };

    fn envelope_for(signed: &SignedTransaction) -> SignedTransactionEnvelope {
        SignedTransactionEnvelope {
            signed_txn: signed.to_bytes().unwrap(),
            proof: None,
            events: None,
        }
    }

    #[test]
    fn decodes_signed_transaction() {
        let signed = sample_signed_transaction();
        let decoded = ClientDecoder::new()
            .decode_signed_transaction_with_proof(&envelope_for(&signed))
            .unwrap();

        assert_eq!(decoded.signed_transaction, signed);
        assert_eq!(decoded.proof, None);
        assert_eq!(decoded.events, None);
    }

    #[test]
    fn proof_is_passed_through_unchanged() {
        let signed = sample_signed_transaction();
        let proof = Bytes::new(vec![0x5A; 77]);
        let envelope = SignedTransactionEnvelope {
            proof: Some(proof.clone()),
            ..envelope_for(&signed)
        };

        let decoded = ClientDecoder::new()
            .decode_signed_transaction_with_proof(&envelope)
            .unwrap();
        assert_eq!(decoded.proof, Some(proof));
    }

    #[test]
    fn events_are_mapped_in_order() {
        let signed = sample_signed_transaction();
        let envelope = SignedTransactionEnvelope {
            events: Some(vec![
                EventRecord {
                    event_data: Bytes::new([1]),
                    sequence_number: 0,
                    key: Bytes::new([0xEE; 32]),
                },
                EventRecord {
                    event_data: Bytes::new([2]),
                    sequence_number: u64::MAX,
                    key: Bytes::default(),
                },
            ]),
            ..envelope_for(&signed)
        };

        let events = ClientDecoder::new()
            .decode_signed_transaction_with_proof(&envelope)
            .unwrap()
            .events
            .unwrap();

        assert_eq!(events.len(), 2);
        assert_eq!(events[0].data.as_slice(), &[1]);
        assert_eq!(events[0].event_key.as_ref().unwrap().as_slice(), &[0xEE; 32]);
        assert_eq!(events[1].sequence_number, u64::MAX);
        assert_eq!(events[1].event_key, None);
    }

    #[test]
    fn empty_event_list_stays_present() {
        let signed = sample_signed_transaction();
        let envelope = SignedTransactionEnvelope {
            events: Some(Vec::new()),
            ..envelope_for(&signed)
        };
        let decoded = ClientDecoder::new()
            .decode_signed_transaction_with_proof(&envelope)
            .unwrap();
        assert_eq!(decoded.events, Some(Vec::new()));
    }

    #[test]
    fn missing_signature_fails() {
        let signed = sample_signed_transaction();
        let raw_only = SignedTransactionEnvelope {
            signed_txn: signed.raw_txn.to_bytes().unwrap(),
            proof: None,
            events: None,
        };
        assert!(matches!(
            ClientDecoder::new().decode_signed_transaction_with_proof(&raw_only),
            Err(CodecError::BufferUnderflow { .. })
        ));
    }

    #[test]
    fn trailing_bytes_are_rejected() {
        // Stricter than a lenient reader: a canonical encoding has exactly one
        // byte form, so leftovers after the signature mean a malformed response.
        let signed = sample_signed_transaction();
        let mut bytes = signed.to_bytes().unwrap();
        bytes.extend_from_slice(&[0]);
        let envelope = SignedTransactionEnvelope {
            signed_txn: bytes,
            proof: None,
            events: None,
        };
        assert_eq!(
            ClientDecoder::new().decode_signed_transaction_with_proof(&envelope),
            Err(CodecError::TrailingBytes(1))
        );
    }

    #[test]
    fn account_resource_from_blob() {
        let resource = sample_account_resource();
        let blob = encode_state_blob(&[
            (vec![0x09], vec![0x01]),
            (account_resource_path(), resource.to_bytes().unwrap().to_vec()),
        ]);

        let decoder = ClientDecoder::new();
        assert_eq!(
            decoder.decode_account_state_blob(&blob).unwrap(),
            resource.to_bytes().unwrap()
        );
        assert_eq!(decoder.decode_account_resource(&blob).unwrap(), resource);
    }

    #[test]
    fn account_blob_without_resource_is_missing_path() {
        let blob = encode_state_blob(&[(vec![0x09], vec![0x01])]);
        assert_eq!(
            ClientDecoder::new().decode_account_resource(&blob),
            Err(CodecError::MissingPath(ACCOUNT_RESOURCE_PATH.to_string()))
        );
    }
}
