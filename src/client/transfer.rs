//! Builds peer-to-peer transfer transactions ready for signing.

use crate::core::program::{Program, TransactionArgument};
use crate::core::transaction::{GasConstraint, RawTransaction, TransactionPayload};
use crate::types::address::AccountAddress;
use crate::types::bytes::Bytes;
use crate::types::errors::CodecError;

/// Default lifetime of a freshly built transaction.
pub const DEFAULT_EXPIRATION_WINDOW_SECS: u64 = 100;

/// Settings shared by every transaction a client builds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionConfig {
    /// Compiled peer-to-peer transfer script.
    pub transfer_code: Bytes,
    pub gas: GasConstraint,
    /// Seconds added to the current time to obtain `expiration_time`.
    pub expiration_window_secs: u64,
}

impl TransactionConfig {
    pub fn new(transfer_code: impl Into<Bytes>) -> Self {
        Self {
            transfer_code: transfer_code.into(),
            gas: GasConstraint::default(),
            expiration_window_secs: DEFAULT_EXPIRATION_WINDOW_SECS,
        }
    }

    pub fn with_gas(mut self, gas: GasConstraint) -> Self {
        self.gas = gas;
        self
    }

    pub fn with_expiration_window(mut self, secs: u64) -> Self {
        self.expiration_window_secs = secs;
        self
    }

    /// Expiration timestamp for a transaction built at `now_secs`.
    pub fn expiration_from(&self, now_secs: u64) -> u64 {
        now_secs.saturating_add(self.expiration_window_secs)
    }
}

/// Builds a transfer of `amount` from `sender` to `recipient_hex`.
///
/// The program runs the configured transfer script with the arguments
/// `[Address(recipient), U64(amount)]`, in that order.
pub fn create_transfer(
    config: &TransactionConfig,
    sender: AccountAddress,
    recipient_hex: &str,
    amount: u64,
    sequence_number: u64,
    now_secs: u64,
) -> Result<RawTransaction, CodecError> {
    let recipient = AccountAddress::from_hex(recipient_hex)?;

    let program = Program::new(config.transfer_code.clone())
        .with_arg(TransactionArgument::Address(recipient))
        .with_arg(TransactionArgument::U64(amount));

    Ok(RawTransaction::new(
        sender,
        sequence_number,
        TransactionPayload::Program(program),
        config.gas,
        config.expiration_from(now_secs),
    ))
}
