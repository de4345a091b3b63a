//! Standard curve constants for the dualcurve library
//!
//! Raw domain parameters for the supported curves, kept as hexadecimal
//! string literals so that consumers construct them through whichever
//! big-integer backend they use. This crate holds data only; parsing and
//! validation belong to `dualcurve-algorithms`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod binary;
pub mod prime;
