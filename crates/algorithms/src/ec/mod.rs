//! Elliptic curve engines
//!
//! Affine point arithmetic over the two field variants, behind a single
//! group-shaped contract: curves over large-prime fields
//! (short-Weierstrass form, [`prime`]) and curves over binary extension
//! fields (binary-curve form, [`binary`]). The [`CurveGroup`] trait captures
//! what they share — an identity sentinel, point addition and doubling, a
//! generator and group order — and provides scalar multiplication once, on
//! top of that contract. The ECDSA layer is written against this trait only.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::error::Result;

pub mod binary;
pub mod curves;
pub mod prime;

pub use binary::{BinaryCurve, BinaryPoint};
pub use prime::{PrimeCurve, PrimePoint};

/// The group contract shared by every curve engine.
///
/// Implementors supply the chord-and-tangent formulas for their curve
/// equation; `scalar_mul` is derived from them generically.
pub trait CurveGroup {
    /// Affine point type, including a distinguished infinity value.
    type Point: Clone + PartialEq + core::fmt::Debug;

    /// Human-readable curve name.
    fn name(&self) -> &str;

    /// Order n of the cyclic subgroup generated by the base point.
    fn order(&self) -> &BigUint;

    /// Ratio between the full curve's point count and the group order.
    fn cofactor(&self) -> u32;

    /// The base point G.
    fn generator(&self) -> Self::Point;

    /// The point at infinity (group identity).
    fn identity(&self) -> Self::Point;

    /// True for the point at infinity.
    fn is_identity(&self, p: &Self::Point) -> bool;

    /// Curve-equation membership check (infinity is always a member).
    fn contains(&self, p: &Self::Point) -> bool;

    /// Group addition. Handles all identity and inverse edge cases;
    /// P + P delegates to [`Self::double`].
    fn add(&self, p: &Self::Point, q: &Self::Point) -> Result<Self::Point>;

    /// Point doubling.
    fn double(&self, p: &Self::Point) -> Result<Self::Point>;

    /// The x coordinate of a finite point, interpreted as an unsigned
    /// integer; `None` at infinity. For binary curves the field element's
    /// bit pattern maps coefficient of x^i to integer bit i.
    fn x_coordinate(&self, p: &Self::Point) -> Option<BigUint>;

    /// Scalar multiplication k * P by most-significant-bit-first
    /// double-and-add. The scalar is reduced modulo the group order, so
    /// k ≡ 0 (mod n) yields infinity, as does P = infinity.
    ///
    /// Not constant-time: both the running time and the branch pattern
    /// depend on the bits of k. A constant-time ladder can replace this
    /// method without changing the contract.
    fn scalar_mul(&self, p: &Self::Point, k: &BigUint) -> Result<Self::Point> {
        let k = k % self.order();
        if k.is_zero() || self.is_identity(p) {
            return Ok(self.identity());
        }
        let mut acc = self.identity();
        for i in (0..k.bits()).rev() {
            acc = self.double(&acc)?;
            if k.bit(i) {
                acc = self.add(&acc, p)?;
            }
        }
        Ok(acc)
    }
}
