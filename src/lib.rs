//! Canonical (LCS) codec for a Libra client.
//!
//! Produces the byte-exact encodings a wallet signs and parses the binary
//! blobs a validator returns back into typed values.
//!
//! - `types`: cursor, codec traits and wire-level leaves
//! - `core`: transactions, programs, events and account state
//! - `client`: response decoding and transfer building

pub mod client;
pub mod core;
pub mod types;
pub mod utils;

/// Crate-wide `Result` defaulting to [`types::errors::CodecError`].
pub type Result<T, E = types::errors::CodecError> = std::result::Result<T, E>;
