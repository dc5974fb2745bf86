use libra_lcs_derive::Error;

/// Errors raised while encoding or decoding canonical bytes.
///
/// Every variant is fatal for the call that produced it: decoders never hand
/// back a partially built value and encoders never emit a partial buffer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// A fixed-width read ran past the end of the input.
    #[error("buffer underflow: needed {needed} bytes, {remaining} remaining")]
    BufferUnderflow { needed: usize, remaining: usize },
    /// A length prefix declares more bytes than the input still holds.
    #[error("truncated input: length prefix declares {declared} bytes, {remaining} remaining")]
    TruncatedInput { declared: usize, remaining: usize },
    /// Tagged-union discriminant that the type does not define.
    #[error("unknown {type_name} variant tag {tag}")]
    UnknownVariant { type_name: &'static str, tag: u32 },
    /// Required account-state resource path is absent.
    #[error("account state has no entry for path {0}")]
    MissingPath(String),
    /// Fixed-width field of the wrong size.
    #[error("invalid fixed-length field: expected {expected} bytes, got {actual}")]
    InvalidFixedLength { expected: usize, actual: usize },
    #[error("invalid utf-8 in string argument")]
    InvalidUtf8,
    #[error("invalid bool byte {0:#04x}")]
    InvalidBool(u8),
    #[error("invalid hex: {0}")]
    InvalidHex(String),
    /// Collection too large for a 4-byte length prefix.
    #[error("length {0} does not fit in a u32 prefix")]
    LengthOverflow(usize),
    /// Bytes left over after a complete value was decoded.
    #[error("{0} trailing bytes after decoded value")]
    TrailingBytes(usize),
}

impl From<hex::FromHexError> for CodecError {
    fn from(err: hex::FromHexError) -> Self {
        CodecError::InvalidHex(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_interpolates_named_fields() {
        let err = CodecError::UnknownVariant {
            type_name: "TransactionPayload",
            tag: 3,
        };
        assert_eq!(err.to_string(), "unknown TransactionPayload variant tag 3");
    }

    #[test]
    fn display_interpolates_positional_fields() {
        assert_eq!(CodecError::InvalidBool(2).to_string(), "invalid bool byte 0x02");
        assert_eq!(
            CodecError::MissingPath("01ab".into()).to_string(),
            "account state has no entry for path 01ab"
        );
    }

    #[test]
    fn hex_errors_convert() {
        let err: CodecError = hex::decode("zz").unwrap_err().into();
        assert!(matches!(err, CodecError::InvalidHex(_)));
    }
}
