//! Wire-level building blocks.
//!
//! - `Cursor`: forward-only reader over the input bytes
//! - `Encode` / `Decode`: canonical rules for primitives, byte arrays and lists
//! - `Bytes`, `AccountAddress`, `Hash`: the fixed and variable width leaves
//! - `CodecError`: the single error type shared by every codec operation

pub mod address;
pub mod bytes;
pub mod cursor;
pub mod encoding;
pub mod errors;
pub mod hash;
