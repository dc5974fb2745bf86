//! Already-parsed validator responses handed to the decoder.
//!
//! The transport layer unwraps the validator's envelope messages; this module
//! only describes the shape the decoder needs from them.

use crate::types::bytes::Bytes;

/// One event record as delivered by the envelope, before mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecord {
    pub event_data: Bytes,
    pub sequence_number: u64,
    /// Empty when the event has no key.
    pub key: Bytes,
}

/// Source of a signed transaction and its attachments.
pub trait SignedTransactionSource {
    /// Canonical bytes of `RawTransaction || public key || signature`.
    fn signed_txn_bytes(&self) -> &[u8];

    fn proof(&self) -> Option<&Bytes>;

    /// `None` when the envelope carried no event list at all.
    fn events(&self) -> Option<&[EventRecord]>;
}

/// Owned envelope for callers that already hold the parts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignedTransactionEnvelope {
    pub signed_txn: Bytes,
    pub proof: Option<Bytes>,
    pub events: Option<Vec<EventRecord>>,
}

impl SignedTransactionSource for SignedTransactionEnvelope {
    fn signed_txn_bytes(&self) -> &[u8] {
        self.signed_txn.as_slice()
    }

    fn proof(&self) -> Option<&Bytes> {
        self.proof.as_ref()
    }

    fn events(&self) -> Option<&[EventRecord]> {
        self.events.as_deref()
    }
}
