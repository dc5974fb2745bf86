//! Executable program payloads and their typed arguments.

use crate::types::address::AccountAddress;
use crate::types::bytes::Bytes;
use crate::types::errors::CodecError;
use libra_lcs_derive::BinaryCodec;
use std::fmt;

/// A single argument passed to a program's entry point.
///
/// Variants are declared in wire-tag order: `U64` = 0, `Address` = 1,
/// `String` = 2, `ByteArray` = 3.
#[derive(Debug, Clone, PartialEq, Eq, BinaryCodec)]
pub enum TransactionArgument {
    U64(u64),
    Address(AccountAddress),
    String(String),
    ByteArray(Bytes),
}

/// Code, arguments and dependency modules executed by a transaction.
///
/// The order of `args` and `modules` is part of the signed bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq, BinaryCodec)]
pub struct Program {
    pub code: Bytes,
    pub args: Vec<TransactionArgument>,
    pub modules: Vec<Bytes>,
}

impl Program {
    /// Creates a program with the given code and no arguments or modules.
    pub fn new(code: impl Into<Bytes>) -> Self {
        Self {
            code: code.into(),
            args: Vec::new(),
            modules: Vec::new(),
        }
    }

    /// Appends an argument, keeping call order.
    pub fn with_arg(mut self, arg: TransactionArgument) -> Self {
        self.args.push(arg);
        self
    }

    /// Appends a dependency module, keeping link order.
    pub fn with_module(mut self, module: impl Into<Bytes>) -> Self {
        self.modules.push(module.into());
        self
    }

    /// Appends a dependency module given in hex, with or without `0x`.
    pub fn with_module_hex(self, module_hex: &str) -> Result<Self, CodecError> {
        let module_hex = module_hex.strip_prefix("0x").unwrap_or(module_hex);
        Ok(self.with_module(Bytes::from_hex(module_hex)?))
    }
}

impl fmt::Display for TransactionArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionArgument::U64(value) => write!(f, "U64({})", value),
            TransactionArgument::Address(address) => write!(f, "Address({})", address),
            TransactionArgument::String(value) => write!(f, "String({:?})", value),
            TransactionArgument::ByteArray(bytes) => write!(f, "ByteArray({})", bytes.to_hex()),
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{{")?;
        writeln!(f, "code: \"{}\",", self.code.to_hex())?;
        let args: Vec<String> = self.args.iter().map(ToString::to_string).collect();
        writeln!(f, "args: [{}],", args.join(", "))?;
        let modules: Vec<String> = self.modules.iter().map(|m| format!("[{}]", m.to_hex())).collect();
        writeln!(f, "modules: [{}],", modules.join(""))?;
        write!(f, "}}")
    }
}
