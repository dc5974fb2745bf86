//! Domain model carried by the canonical wire format.
//!
//! - `program`: `Program` and `TransactionArgument`
//! - `transaction`: `RawTransaction`, `SignedTransaction` and friends
//! - `event`: events attached to a signed transaction
//! - `account`: account state blobs and the account resource
//! - `response`: validator verdicts on a submitted transaction

pub mod account;
pub mod event;
pub mod program;
pub mod response;
pub mod transaction;
