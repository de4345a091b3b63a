//! Error type definitions for elliptic-curve operations

/// Primary error type for dualcurve operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid signature encoding (malformed DER/hex input, oversized
    /// components). Out-of-range but well-formed (r, s) pairs are *not*
    /// errors: verification reports them as a `false` verdict.
    InvalidSignature {
        /// Operation that rejected the signature
        context: &'static str,
        /// Detailed error message
        message: String,
    },

    /// Signing produced a zero signature component (r = 0 or s = 0).
    ///
    /// This is a recoverable condition: the caller must choose a fresh nonce
    /// and retry. It is never silently masked by returning a zero component.
    InvalidScalar {
        /// Operation that hit the zero component
        context: &'static str,
    },

    /// Inversion was attempted on the zero element, or on an element sharing
    /// a nontrivial factor with a (supposedly irreducible) modulus.
    ///
    /// This indicates malformed curve parameters or a caller bug and is
    /// unrecoverable; it is never conflated with a failed verification.
    NonInvertible {
        /// Operation that attempted the inversion
        context: &'static str,
    },

    /// Invalid parameter error (malformed curve constants, out-of-range keys)
    InvalidParameter {
        /// Parameter or operation that failed validation
        context: &'static str,
        /// Detailed error message
        message: String,
    },

    /// Invalid length error with context
    InvalidLength {
        /// Operation that observed the length mismatch
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Random generation error
    RandomGenerationError {
        /// Operation that required randomness
        context: &'static str,
        /// Detailed error message
        message: String,
    },

    /// Other error
    Other {
        /// Operation that failed
        context: &'static str,
        /// Detailed error message
        message: String,
    },
}

/// Result type for dualcurve operations
pub type Result<T> = core::result::Result<T, Error>;

/// Result type for signature operations
pub type SignatureResult<T> = Result<T>;

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidSignature { context, message } => {
                write!(f, "Invalid signature: {}: {}", context, message)
            }
            Self::InvalidScalar { context } => {
                write!(f, "Zero signature component in {}: retry with a fresh nonce", context)
            }
            Self::NonInvertible { context } => {
                write!(f, "Non-invertible element in {}", context)
            }
            Self::InvalidParameter { context, message } => {
                write!(f, "{}: {}", context, message)
            }
            Self::InvalidLength {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "{}: invalid length (expected {}, got {})",
                    context, expected, actual
                )
            }
            Self::RandomGenerationError { context, message } => {
                write!(f, "Random generation error: {}: {}", context, message)
            }
            Self::Other { context, message } => {
                write!(f, "{}: {}", context, message)
            }
        }
    }
}

impl std::error::Error for Error {}
