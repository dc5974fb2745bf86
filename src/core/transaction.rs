//! Raw and signed transactions.

use crate::core::event::TransactionEvent;
use crate::core::program::Program;
use crate::types::address::AccountAddress;
use crate::types::bytes::Bytes;
use crate::types::encoding::Encode;
use crate::types::errors::CodecError;
use crate::types::hash::Hash;
use libra_lcs_derive::BinaryCodec;

/// What a transaction executes.
///
/// Only the `Program` variant (tag 0) exists on the observed protocol
/// surface; any other tag fails to decode with `UnknownVariant`.
#[derive(Debug, Clone, PartialEq, Eq, BinaryCodec)]
pub enum TransactionPayload {
    Program(Program),
}

/// Gas limits attached to a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GasConstraint {
    /// Maximum gas units the sender authorizes.
    pub max_gas_amount: u64,
    /// Price per gas unit offered by the sender.
    pub gas_unit_price: u64,
}

impl Default for GasConstraint {
    fn default() -> Self {
        Self {
            max_gas_amount: 1_000_000,
            gas_unit_price: 0,
        }
    }
}

/// The unsigned transaction body whose canonical bytes get signed.
///
/// Field declaration order is the wire order.
#[derive(Debug, Clone, PartialEq, Eq, BinaryCodec)]
pub struct RawTransaction {
    pub sender: AccountAddress,
    /// Must match the sender account's current sequence number on chain.
    pub sequence_number: u64,
    pub payload: TransactionPayload,
    pub max_gas_amount: u64,
    pub gas_unit_price: u64,
    /// Seconds since the Unix epoch after which the transaction is discarded.
    pub expiration_time: u64,
}

impl RawTransaction {
    pub fn new(
        sender: AccountAddress,
        sequence_number: u64,
        payload: TransactionPayload,
        gas: GasConstraint,
        expiration_time: u64,
    ) -> Self {
        Self {
            sender,
            sequence_number,
            payload,
            max_gas_amount: gas.max_gas_amount,
            gas_unit_price: gas.gas_unit_price,
            expiration_time,
        }
    }

    pub fn gas(&self) -> GasConstraint {
        GasConstraint {
            max_gas_amount: self.max_gas_amount,
            gas_unit_price: self.gas_unit_price,
        }
    }

    /// Returns the program carried by this transaction.
    pub fn program(&self) -> &Program {
        match &self.payload {
            TransactionPayload::Program(program) => program,
        }
    }

    /// Computes the message a wallet signs for this transaction.
    ///
    /// The canonical encoding is streamed into a SHA3-256 hasher seeded with
    /// the `RawTransaction` domain, without building an intermediate buffer.
    pub fn signing_hash(&self) -> Result<Hash, CodecError> {
        let mut h = Hash::domain("RawTransaction");
        self.encode(&mut h)?;
        Ok(h.finalize())
    }
}

/// A raw transaction together with the sender's public key and signature.
#[derive(Debug, Clone, PartialEq, Eq, BinaryCodec)]
pub struct SignedTransaction {
    pub raw_txn: RawTransaction,
    pub public_key: Bytes,
    pub signature: Bytes,
}

impl SignedTransaction {
    pub fn new(raw_txn: RawTransaction, public_key: impl Into<Bytes>, signature: impl Into<Bytes>) -> Self {
        Self {
            raw_txn,
            public_key: public_key.into(),
            signature: signature.into(),
        }
    }
}

/// A signed transaction as returned by a validator, with its opaque proof
/// and the events it emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedTransactionWithProof {
    pub signed_transaction: SignedTransaction,
    /// Uninterpreted proof bytes, passed through untouched.
    pub proof: Option<Bytes>,
    pub events: Option<Vec<TransactionEvent>>,
}
