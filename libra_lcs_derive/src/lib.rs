//! Derive macros for the `libra_lcs` crate.
//!
//! Provides:
//! - `#[derive(BinaryCodec)]` - canonical (LCS) serialization in declaration order
//! - `#[derive(Error)]` - `Display` and `Error` boilerplate for error enums

mod binary_codec;
mod error;

use proc_macro::TokenStream;

/// Implements `Encode` and `Decode` following the canonical wire layout.
#[proc_macro_derive(BinaryCodec)]
pub fn derive_binary_codec(input: TokenStream) -> TokenStream {
    binary_codec::derive_binary_codec(input)
}

/// Implements `Display` and `Error` from `#[error("...")]` attributes.
#[proc_macro_derive(Error, attributes(error))]
pub fn derive_error(input: TokenStream) -> TokenStream {
    error::derive_error(input)
}
