use thiserror::Error;

use crate::BencodeNode;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BdecodeError {
    #[error("Unrecognized type prefix {found:?} in bencoded string at position '{position}' .")]
    WrongPrefix { found: char, position: usize },

    #[error("Expected digit in bencoded string at position '{0}' .")]
    InvalidDigit(usize),

    #[error("Missing terminator {terminator:?} for the value starting at position '{position}' .")]
    MissingTerminator { terminator: char, position: usize },

    #[error("Declared string length {declared} exceeds the {available} bytes available at position '{position}' .")]
    LengthExceedsBuffer {
        declared: u64,
        available: usize,
        position: usize,
    },

    #[error("Unexpected end of file in bencoded string at position '{0}' .")]
    UnexpectedEof(usize),

    #[error("invalid integer '{0}' at position '{1}'")]
    InvalidInteger(String, usize),

    #[error("integer overflow with string '{0}' at position '{1}'")]
    Overflow(String, usize),

    #[error("This decoder's buffer is already consumed at position '{0}' .")]
    Exhausted(usize),

    #[error("bencoded recursion depth limit exceeded over '{0}' times.")]
    DepthExceeded(usize),

    #[error("bencoded item count limit exceeded over '{0}' .")]
    LimitExceeded(usize),
}

impl BdecodeError {
    /// Byte offset the error refers to, if it carries one.
    pub fn position(&self) -> Option<usize> {
        use BdecodeError::*;

        match self {
            WrongPrefix { position, .. }
            | MissingTerminator { position, .. }
            | LengthExceedsBuffer { position, .. } => Some(*position),
            InvalidDigit(pos) | UnexpectedEof(pos) | Exhausted(pos) => Some(*pos),
            InvalidInteger(_, pos) | Overflow(_, pos) => Some(*pos),
            DepthExceeded(_) | LimitExceeded(_) => None,
        }
    }
}

/// Returned by `Decoder::decode_all` when a value in the stream fails to parse.
///
/// The values decoded before the failing one are kept in `decoded`.
#[derive(Debug, Clone, Error)]
#[error("{source} (after {} complete values)", .decoded.len())]
pub struct PartialDecode {
    pub decoded: Vec<BencodeNode>,
    #[source]
    pub source: BdecodeError,
}
