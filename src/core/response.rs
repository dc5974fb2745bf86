//! Outcome of submitting a signed transaction to a validator.

use crate::core::transaction::SignedTransaction;
use crate::types::bytes::Bytes;

/// Admission control verdict on a submitted transaction.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdmissionControlStatus {
    Accepted = 0,
    Blacklisted = 1,
    Rejected = 2,
    Unknown = -1,
}

impl AdmissionControlStatus {
    /// Maps a wire status code; codes this client does not know become `Unknown`.
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => Self::Accepted,
            1 => Self::Blacklisted,
            2 => Self::Rejected,
            _ => Self::Unknown,
        }
    }

    pub fn code(self) -> i32 {
        self as i32
    }
}

impl From<i32> for AdmissionControlStatus {
    fn from(code: i32) -> Self {
        Self::from_code(code)
    }
}

/// Mempool verdict on a submitted transaction.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MempoolTransactionStatus {
    Valid = 0,
    InsufficientBalance = 1,
    InvalidSeqNumber = 2,
    MempoolIsFull = 3,
    TooManyTransactions = 4,
    InvalidUpdate = 5,
    Unknown = -1,
}

impl MempoolTransactionStatus {
    /// Maps a wire status code; codes this client does not know become `Unknown`.
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => Self::Valid,
            1 => Self::InsufficientBalance,
            2 => Self::InvalidSeqNumber,
            3 => Self::MempoolIsFull,
            4 => Self::TooManyTransactions,
            5 => Self::InvalidUpdate,
            _ => Self::Unknown,
        }
    }

    pub fn code(self) -> i32 {
        self as i32
    }
}

impl From<i32> for MempoolTransactionStatus {
    fn from(code: i32) -> Self {
        Self::from_code(code)
    }
}

/// What a validator reported back for one submitted transaction.
///
/// Each stage that looked at the transaction fills in its own status; stages
/// that never saw it leave theirs empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionResponse {
    pub signed_transaction: SignedTransaction,
    pub validator_id: Bytes,
    pub ac_status: Option<AdmissionControlStatus>,
    pub mempool_status: Option<MempoolTransactionStatus>,
    /// Major status code reported by the VM, if execution was attempted.
    pub vm_status: Option<u64>,
}

impl TransactionResponse {
    pub fn new(signed_transaction: SignedTransaction, validator_id: impl Into<Bytes>) -> Self {
        Self {
            signed_transaction,
            validator_id: validator_id.into(),
            ac_status: None,
            mempool_status: None,
            vm_status: None,
        }
    }

    pub fn with_ac_status(mut self, status: impl Into<AdmissionControlStatus>) -> Self {
        self.ac_status = Some(status.into());
        self
    }

    pub fn with_mempool_status(mut self, status: impl Into<MempoolTransactionStatus>) -> Self {
        self.mempool_status = Some(status.into());
        self
    }

    pub fn with_vm_status(mut self, major_status: u64) -> Self {
        self.vm_status = Some(major_status);
        self
    }

    /// True when admission control accepted the transaction and no later
    /// stage reported a problem.
    pub fn is_accepted(&self) -> bool {
        self.ac_status == Some(AdmissionControlStatus::Accepted)
            && matches!(self.mempool_status, None | Some(MempoolTransactionStatus::Valid))
            && self.vm_status.is_none()
    }
}
