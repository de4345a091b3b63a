//! Finite field engines
//!
//! Two variants of the same capability: [`PrimeField`] for Z_p arithmetic
//! over the big-integer adapter, and [`BinaryField`] for GF(2^m) arithmetic
//! over bit-polynomials. Curve engines are written against whichever variant
//! their equation form needs; everything above the curve layer is generic.

pub mod binary;
pub mod prime;

pub use binary::{BinaryField, BinaryFieldElement};
pub use prime::PrimeField;
