//! # Error Types

use crate::alloc::string::String;

/// Errors from versechipper operations.
///
/// Malformed lines, rejected samples, and unknown symbols are not errors;
/// they are skipped, counted, or mapped to the unknown token.
#[derive(Debug, thiserror::Error)]
pub enum VersechipperError {
    /// A configuration value is invalid.
    ///
    /// Raised by the `try_init()` option validators before any processing.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// A reserved symbol occurs in natural corpus text.
    #[error("reserved symbol {symbol:?} occurs in corpus text")]
    ReservedSymbolCollision {
        /// The colliding symbol.
        symbol: char,
    },

    /// Vocab size (including the unknown slot) exceeds the capacity of the target token type.
    #[error("vocab size ({size}) exceeds token type capacity")]
    VocabSizeOverflow {
        /// The vocab size that exceeded the capacity.
        size: usize,
    },

    /// Token value out of range for the target type.
    #[error("token out of range")]
    TokenOutOfRange,

    /// A token has no symbol in the vocabulary.
    #[error("unknown token: {token}")]
    UnknownToken {
        /// The unknown token, as a u64.
        token: u64,
    },

    /// I/O error.
    #[cfg(feature = "std")]
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Parse error (base64, integer, etc.)
    #[error("parse error: {0}")]
    Parse(String),
}

/// Result type for versechipper operations.
pub type VCResult<T> = core::result::Result<T, VersechipperError>;
