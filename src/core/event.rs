//! Events emitted by an executed transaction.

use crate::types::bytes::Bytes;

/// One event emitted while executing a transaction.
///
/// Events arrive already parsed from the validator envelope; the event data
/// itself stays opaque.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionEvent {
    pub data: Bytes,
    /// Position of this event in its stream; non-decreasing per key.
    pub sequence_number: u64,
    pub event_key: Option<Bytes>,
}

impl TransactionEvent {
    /// Builds an event, treating an empty key as "no key".
    pub fn new(data: impl Into<Bytes>, sequence_number: u64, event_key: impl Into<Bytes>) -> Self {
        let event_key = event_key.into();
        Self {
            data: data.into(),
            sequence_number,
            event_key: (!event_key.is_empty()).then_some(event_key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_key_becomes_none() {
        let event = TransactionEvent::new([1, 2], 3, Bytes::default());
        assert_eq!(event.event_key, None);
        assert_eq!(event.sequence_number, 3);
    }

    #[test]
    fn key_is_kept() {
        let event = TransactionEvent::new(Bytes::default(), u64::MAX, [7u8; 40]);
        assert_eq!(event.event_key.unwrap().as_slice(), &[7u8; 40]);
        assert_eq!(event.sequence_number, u64::MAX);
    }
}
