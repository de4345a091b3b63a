//! Field and elliptic-curve arithmetic for the dualcurve library
//!
//! This crate implements the mathematical core: arithmetic in large-prime
//! fields Z_p and binary extension fields GF(2^m), affine elliptic-curve
//! point operations over both field kinds, and the curve catalog of standard
//! parameter sets.
//!
//! Arbitrary-precision integer arithmetic is delegated to `num-bigint`
//! through the [`bigint`] adapter module; everything above that layer is
//! implemented from scratch so it can be audited end to end.
//!
//! Scalar multiplication uses plain double-and-add and is **not**
//! constant-time; the running time is proportional to the bit length of the
//! scalar and branches on its bit pattern. A constant-time ladder can be
//! substituted behind the same [`ec::CurveGroup`] contract.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Big-integer adapter
pub mod bigint;

// Field engines
pub mod field;
pub use field::{BinaryField, BinaryFieldElement, PrimeField};

// Elliptic curve engines and catalog
pub mod ec;
pub use ec::{curves, BinaryCurve, BinaryPoint, CurveGroup, PrimeCurve, PrimePoint};
