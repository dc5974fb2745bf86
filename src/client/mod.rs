//! Client-facing entry points.
//!
//! - `decoder`: turns validator responses into domain objects
//! - `envelope`: the already-parsed response shapes the decoder consumes
//! - `transfer`: builds transfer transactions for the signer

pub mod decoder;
pub mod envelope;
pub mod transfer;
