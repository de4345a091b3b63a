//! Public API types for the dualcurve library
//!
//! This crate provides the public error taxonomy shared across the dualcurve
//! ecosystem. The taxonomy deliberately separates recoverable signing
//! conditions (a zero signature component, which the caller handles by
//! retrying with a fresh nonce) from fatal invariant violations (inversion of
//! a non-invertible element, malformed curve parameters), so that an
//! implementation bug can never be mistaken for an attacker's forged
//! signature.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, SignatureResult};
