//! Error types for the Raptor codec.
//!
//! Every failure is a local, synchronous failure of one call. Nothing is
//! retried internally and no partial result is ever returned: either all
//! `L` intermediate symbols resolve or the call fails.
//!
//! # Error Categories
//!
//! - **Parameter**: `k` outside the supported domain, or no valid precode
//!   parameters exist for it
//! - **Decoding**: too few symbols, or a rank-deficient symbol set
//! - **Dimension**: shape mismatches between matrices, symbols and schedules
//! - **Framing**: symbol header parsing and digest failures
//!
//! # Recovery Classification
//!
//! Errors are classified by [`Recoverability`]. Decoding failures are
//! `Transient`: the same call may succeed once the caller holds more
//! symbols. Everything else is `Permanent`.

use core::fmt;

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors produced by parameter derivation, encoding and decoding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The source-symbol count is outside `[4, 8192]` or admits no parameters.
    #[error("invalid parameters for k={k}: {reason}")]
    Parameter {
        /// Requested number of source symbols.
        k: usize,
        /// Why no parameter set could be derived.
        reason: &'static str,
    },
    /// Fewer than `k` symbols were supplied to a decoder.
    #[error("insufficient symbols: received {received}, need at least {required}")]
    InsufficientSymbols {
        /// Number of symbols supplied.
        received: usize,
        /// Minimum required (k).
        required: usize,
    },
    /// Elimination found no usable pivot: duplicate or dependent symbols.
    #[error("constraint matrix is rank deficient at row {row}")]
    RankDeficiency {
        /// Elimination cursor at which no pivot was available.
        row: usize,
    },
    /// Operands have incompatible shapes.
    #[error("dimension mismatch in {context}: expected {expected}, got {actual}")]
    Dimension {
        /// Operation that detected the mismatch.
        context: &'static str,
        /// Expected extent.
        expected: usize,
        /// Actual extent.
        actual: usize,
    },
    /// Symbols within one block have different lengths.
    #[error("symbol size mismatch: expected {expected} bytes, got {actual}")]
    SymbolSizeMismatch {
        /// Length of the first symbol seen.
        expected: usize,
        /// Length of the offending symbol.
        actual: usize,
    },
    /// A framed symbol could not be parsed.
    #[error("malformed symbol header: {reason}")]
    MalformedHeader {
        /// What was wrong with the frame.
        reason: &'static str,
    },
    /// Framed symbols of one blob disagree on a header field.
    #[error("symbol headers disagree on {field}")]
    HeaderMismatch {
        /// Field whose values differ.
        field: &'static str,
    },
    /// The payload digest does not match the header.
    #[error("symbol {esi} failed digest verification")]
    CorruptSymbol {
        /// Encoding symbol id of the corrupt frame.
        esi: u32,
    },
}

impl Error {
    /// Returns the category of this error.
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::Parameter { .. } => ErrorCategory::Parameter,
            Self::InsufficientSymbols { .. } | Self::RankDeficiency { .. } => {
                ErrorCategory::Decoding
            }
            Self::Dimension { .. } | Self::SymbolSizeMismatch { .. } => ErrorCategory::Dimension,
            Self::MalformedHeader { .. }
            | Self::HeaderMismatch { .. }
            | Self::CorruptSymbol { .. } => ErrorCategory::Framing,
        }
    }

    /// Returns the recoverability classification of this error.
    #[must_use]
    pub const fn recoverability(&self) -> Recoverability {
        match self.category() {
            ErrorCategory::Decoding => Recoverability::Transient,
            ErrorCategory::Parameter | ErrorCategory::Dimension | ErrorCategory::Framing => {
                Recoverability::Permanent
            }
        }
    }

    /// Returns true if retrying with more symbols may succeed.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self.recoverability(), Recoverability::Transient)
    }

    pub(crate) const fn dimension(context: &'static str, expected: usize, actual: usize) -> Self {
        Self::Dimension {
            context,
            expected,
            actual,
        }
    }
}

/// High-level error category for grouping related errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Parameter derivation failures.
    Parameter,
    /// Decoding failures.
    Decoding,
    /// Shape mismatches.
    Dimension,
    /// Symbol framing failures.
    Framing,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Parameter => "parameter",
            Self::Decoding => "decoding",
            Self::Dimension => "dimension",
            Self::Framing => "framing",
        };
        f.write_str(name)
    }
}

/// Classification of error recoverability for caller retry policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Recoverability {
    /// May succeed once more symbols are available.
    Transient,
    /// Will not succeed on retry with the same inputs.
    Permanent,
}

impl Recoverability {
    /// Returns true if this error is safe to retry.
    #[must_use]
    pub const fn should_retry(&self) -> bool {
        matches!(self, Self::Transient)
    }

    /// Returns true if this error should never be retried.
    #[must_use]
    pub const fn is_permanent(&self) -> bool {
        matches!(self, Self::Permanent)
    }
}
