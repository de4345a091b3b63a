//! Short-Weierstrass curves over large-prime fields
//!
//! Affine chord-and-tangent arithmetic for curves y^2 = x^3 + ax + b over
//! Z_p. Coordinates are canonical `BigUint` values; the point at infinity is
//! a distinct enum variant rather than a coordinate sentinel.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::ec::CurveGroup;
use crate::error::{validate, Error, Result};
use crate::field::PrimeField;


/// An affine point on a prime-field curve.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PrimePoint {
    /// The point at infinity (group identity).
    Infinity,
    /// A finite point with canonical coordinates in [0, p).
    Affine {
        /// x coordinate
        x: BigUint,
        /// y coordinate
        y: BigUint,
    },
}

impl PrimePoint {
    /// Construct a finite point from coordinates.
    pub fn affine(x: BigUint, y: BigUint) -> Self {
        PrimePoint::Affine { x, y }
    }
}

/// A curve y^2 = x^3 + ax + b over a prime field, with a distinguished
/// base point of known order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrimeCurve {
    name: String,
    field: PrimeField,
    a: BigUint,
    b: BigUint,
    gx: BigUint,
    gy: BigUint,
    order: BigUint,
    cofactor: u32,
}

impl PrimeCurve {
    /// Build a curve from its domain parameters.
    ///
    /// Rejects parameters that cannot describe a usable group: a modulus the
    /// field layer refuses, coefficients or base-point coordinates outside
    /// [0, p), a singular equation (4a^3 + 27b^2 ≡ 0 mod p), a base point
    /// off the curve, or an order below 2.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: &str,
        p: BigUint,
        a: BigUint,
        b: BigUint,
        gx: BigUint,
        gy: BigUint,
        order: BigUint,
        cofactor: u32,
    ) -> Result<Self> {
        let field = PrimeField::new(p)?;
        for (label, value) in [("a", &a), ("b", &b), ("gx", &gx), ("gy", &gy)] {
            if !field.contains(value) {
                return Err(Error::param(
                    "PrimeCurve",
                    format!("{label} is not a canonical field element"),
                ));
            }
        }

        // 4a^3 + 27b^2 != 0 rules out repeated roots in the cubic
        let a3 = field.mul(&field.mul(&a, &a), &a);
        let b2 = field.mul(&b, &b);
        let discriminant = field.add(
            &field.mul(&BigUint::from(4u8), &a3),
            &field.mul(&BigUint::from(27u8), &b2),
        );
        validate::parameter(!discriminant.is_zero(), "PrimeCurve", "curve is singular")?;
        validate::parameter(
            order >= BigUint::from(2u8),
            "PrimeCurve",
            "group order must be >= 2",
        )?;

        let curve = PrimeCurve {
            name: name.to_string(),
            field,
            a,
            b,
            gx,
            gy,
            order,
            cofactor,
        };
        if !curve.contains(&curve.generator()) {
            return Err(Error::param("PrimeCurve", "base point is not on the curve"));
        }
        Ok(curve)
    }

    /// The underlying prime field.
    pub fn field(&self) -> &PrimeField {
        &self.field
    }

    /// Coefficient a of the curve equation.
    pub fn a(&self) -> &BigUint {
        &self.a
    }

    /// Coefficient b of the curve equation.
    pub fn b(&self) -> &BigUint {
        &self.b
    }

    /// Additive inverse -P of a point.
    pub fn negate(&self, p: &PrimePoint) -> PrimePoint {
        match p {
            PrimePoint::Infinity => PrimePoint::Infinity,
            PrimePoint::Affine { x, y } => PrimePoint::Affine {
                x: x.clone(),
                y: self.field.neg(y),
            },
        }
    }

    /// Finish the chord/tangent step shared by addition and doubling:
    /// given the slope, x3 = λ^2 - x1 - x2 and y3 = λ(x1 - x3) - y1.
    fn apply_slope(&self, lambda: &BigUint, x1: &BigUint, y1: &BigUint, x2: &BigUint) -> PrimePoint {
        let f = &self.field;
        let x3 = f.sub(&f.sub(&f.mul(lambda, lambda), x1), x2);
        let y3 = f.sub(&f.mul(lambda, &f.sub(x1, &x3)), y1);
        PrimePoint::Affine { x: x3, y: y3 }
    }
}

impl CurveGroup for PrimeCurve {
    type Point = PrimePoint;

    fn name(&self) -> &str {
        &self.name
    }

    fn order(&self) -> &BigUint {
        &self.order
    }

    fn cofactor(&self) -> u32 {
        self.cofactor
    }

    fn generator(&self) -> PrimePoint {
        PrimePoint::Affine {
            x: self.gx.clone(),
            y: self.gy.clone(),
        }
    }

    fn identity(&self) -> PrimePoint {
        PrimePoint::Infinity
    }

    fn is_identity(&self, p: &PrimePoint) -> bool {
        matches!(p, PrimePoint::Infinity)
    }

    fn contains(&self, p: &PrimePoint) -> bool {
        match p {
            PrimePoint::Infinity => true,
            PrimePoint::Affine { x, y } => {
                if !self.field.contains(x) || !self.field.contains(y) {
                    return false;
                }
                let f = &self.field;
                let lhs = f.mul(y, y);
                let x3 = f.mul(&f.mul(x, x), x);
                let rhs = f.add(&f.add(&x3, &f.mul(&self.a, x)), &self.b);
                lhs == rhs
            }
        }
    }

    fn add(&self, p: &PrimePoint, q: &PrimePoint) -> Result<PrimePoint> {
        let (x1, y1) = match p {
            PrimePoint::Infinity => return Ok(q.clone()),
            PrimePoint::Affine { x, y } => (x, y),
        };
        let (x2, y2) = match q {
            PrimePoint::Infinity => return Ok(p.clone()),
            PrimePoint::Affine { x, y } => (x, y),
        };

        if x1 == x2 {
            // same x: either P + (-P) = O or a doubling
            return if y1 == y2 && !y1.is_zero() {
                self.double(p)
            } else {
                Ok(PrimePoint::Infinity)
            };
        }

        // λ = (y2 - y1) / (x2 - x1)
        let f = &self.field;
        let num = f.sub(y2, y1);
        let den = f.inv(&f.sub(x2, x1))?;
        let lambda = f.mul(&num, &den);
        Ok(self.apply_slope(&lambda, x1, y1, x2))
    }

    fn double(&self, p: &PrimePoint) -> Result<PrimePoint> {
        let (x, y) = match p {
            PrimePoint::Infinity => return Ok(PrimePoint::Infinity),
            PrimePoint::Affine { x, y } => (x, y),
        };
        if y.is_zero() {
            // vertical tangent
            return Ok(PrimePoint::Infinity);
        }

        // λ = (3x^2 + a) / 2y
        let f = &self.field;
        let num = f.add(&f.mul(&BigUint::from(3u8), &f.mul(x, x)), &self.a);
        let den = f.inv(&f.add(y, y))?;
        let lambda = f.mul(&num, &den);
        Ok(self.apply_slope(&lambda, x, y, x))
    }

    fn x_coordinate(&self, p: &PrimePoint) -> Option<BigUint> {
        match p {
            PrimePoint::Infinity => None,
            PrimePoint::Affine { x, .. } => Some(x.clone()),
        }
    }
}
