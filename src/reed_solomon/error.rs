//! Error types for Reed-Solomon encoding and decoding

use thiserror::Error;

/// Why a received block could not be corrected
///
/// All variants mean the same thing to a caller: the block holds more errors
/// than the code can correct. The reason is kept for logging.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Uncorrectable {
    /// The Euclidean algorithm hit a zero remainder before reaching the target degree
    #[error("remainder vanished before the key equation was solved")]
    ZeroRemainder,

    /// A division step failed to lower the remainder degree
    #[error("division failed to reduce the remainder degree")]
    StalledDivision,

    /// The solved locator has a zero constant term and cannot be normalized
    #[error("error locator has a zero constant term")]
    ZeroLocatorConstant,

    /// Chien search found fewer roots than the locator's degree
    #[error("error locator has degree {expected} but only {found} roots were found")]
    MissingRoots { expected: usize, found: usize },

    /// The locator derivative vanished at one of its roots
    #[error("error locator has a repeated root")]
    RepeatedRoot,

    /// A located error lies before the start of the block
    #[error("error location x^{exponent} lies outside a block of {len} codewords")]
    PositionOutOfRange { exponent: usize, len: usize },

    /// The repaired block is still not a codeword
    #[error("corrected block still has non-zero syndromes")]
    ResidualSyndrome,
}

/// Errors that can occur during Reed-Solomon operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RsError {
    #[error("No error correction codewords requested")]
    NoCorrectionWords,

    #[error("No data codewords: block of {block_len} with {num_correction_words} correction codewords")]
    NoDataWords {
        block_len: usize,
        num_correction_words: usize,
    },

    #[error("Block of {len} codewords exceeds the field's maximum of {max}")]
    BlockTooLong { len: usize, max: usize },

    #[error("Codeword {value} at position {position} is not an element of a field of size {size}")]
    CodewordOutOfRange {
        position: usize,
        value: u16,
        size: usize,
    },

    #[error("Erasure position {position} is outside a block of {len} codewords")]
    ErasureOutOfBounds { position: usize, len: usize },

    #[error("{erasures} erasures exceed the limit of {limit}")]
    TooManyErasures { erasures: usize, limit: usize },

    #[error("{num_correction_words} correction codewords exceed the limit of {max}")]
    TooManyCorrectionWords {
        num_correction_words: usize,
        max: usize,
    },

    #[error("Uncorrectable block: {0}")]
    Uncorrectable(#[from] Uncorrectable),
}

impl RsError {
    /// True for the decoding-failure outcome, false for caller contract violations
    pub fn is_uncorrectable(&self) -> bool {
        matches!(self, RsError::Uncorrectable(_))
    }
}

/// Result type for Reed-Solomon operations
pub type RsResult<T> = std::result::Result<T, RsError>;
