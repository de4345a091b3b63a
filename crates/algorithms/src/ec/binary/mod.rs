//! Curves over binary extension fields
//!
//! Affine arithmetic for curves y^2 + xy = x^3 + ax^2 + b over GF(2^m).
//! The formulas differ from the prime-field ones because the field has
//! characteristic 2: negation is (x, x + y), and doubling has its own
//! slope. The engine plugs into the same [`CurveGroup`] contract, so scalar
//! multiplication and ECDSA come for free.

use num_bigint::BigUint;

use crate::ec::CurveGroup;
use crate::error::{validate, Error, Result};
use crate::field::{BinaryField, BinaryFieldElement};

#[cfg(test)]
mod tests;

/// An affine point on a binary-field curve.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BinaryPoint {
    /// The point at infinity (group identity).
    Infinity,
    /// A finite point with canonical (degree < m) coordinates.
    Affine {
        /// x coordinate
        x: BinaryFieldElement,
        /// y coordinate
        y: BinaryFieldElement,
    },
}

impl BinaryPoint {
    /// Construct a finite point from coordinates.
    pub fn affine(x: BinaryFieldElement, y: BinaryFieldElement) -> Self {
        BinaryPoint::Affine { x, y }
    }
}

/// A curve y^2 + xy = x^3 + ax^2 + b over GF(2^m), with a distinguished
/// base point of known order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BinaryCurve {
    name: String,
    field: BinaryField,
    a: BinaryFieldElement,
    b: BinaryFieldElement,
    gx: BinaryFieldElement,
    gy: BinaryFieldElement,
    order: BigUint,
    cofactor: u32,
}

impl BinaryCurve {
    /// Build a curve from its domain parameters.
    ///
    /// Rejects a reduction polynomial the field layer refuses, coefficients
    /// or base-point coordinates that are not canonical field elements,
    /// b = 0 (which makes the equation singular), a base point off the
    /// curve, or an order below 2.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: &str,
        modulus: BinaryFieldElement,
        a: BinaryFieldElement,
        b: BinaryFieldElement,
        gx: BinaryFieldElement,
        gy: BinaryFieldElement,
        order: BigUint,
        cofactor: u32,
    ) -> Result<Self> {
        let field = BinaryField::new(modulus)?;
        for (label, value) in [("a", &a), ("b", &b), ("gx", &gx), ("gy", &gy)] {
            if !field.contains(value) {
                return Err(Error::param(
                    "BinaryCurve",
                    format!("{label} is not a canonical field element"),
                ));
            }
        }
        validate::parameter(!b.is_zero(), "BinaryCurve", "curve is singular (b = 0)")?;
        validate::parameter(
            order >= BigUint::from(2u8),
            "BinaryCurve",
            "group order must be >= 2",
        )?;

        let curve = BinaryCurve {
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
            return Err(Error::param("BinaryCurve", "base point is not on the curve"));
        }
        Ok(curve)
    }

    /// The underlying binary field.
    pub fn field(&self) -> &BinaryField {
        &self.field
    }

    /// Coefficient a of the curve equation.
    pub fn a(&self) -> &BinaryFieldElement {
        &self.a
    }

    /// Coefficient b of the curve equation.
    pub fn b(&self) -> &BinaryFieldElement {
        &self.b
    }

    /// Additive inverse -P = (x, x + y).
    pub fn negate(&self, p: &BinaryPoint) -> BinaryPoint {
        match p {
            BinaryPoint::Infinity => BinaryPoint::Infinity,
            BinaryPoint::Affine { x, y } => BinaryPoint::Affine {
                x: x.clone(),
                y: x.add(y),
            },
        }
    }
}

impl CurveGroup for BinaryCurve {
    type Point = BinaryPoint;

    fn name(&self) -> &str {
        &self.name
    }

    fn order(&self) -> &BigUint {
        &self.order
    }

    fn cofactor(&self) -> u32 {
        self.cofactor
    }

    fn generator(&self) -> BinaryPoint {
        BinaryPoint::Affine {
            x: self.gx.clone(),
            y: self.gy.clone(),
        }
    }

    fn identity(&self) -> BinaryPoint {
        BinaryPoint::Infinity
    }

    fn is_identity(&self, p: &BinaryPoint) -> bool {
        matches!(p, BinaryPoint::Infinity)
    }

    fn contains(&self, p: &BinaryPoint) -> bool {
        match p {
            BinaryPoint::Infinity => true,
            BinaryPoint::Affine { x, y } => {
                if !self.field.contains(x) || !self.field.contains(y) {
                    return false;
                }
                let f = &self.field;
                // y^2 + xy == x^3 + ax^2 + b
                let lhs = f.square(y).add(&f.mul(x, y));
                let x2 = f.square(x);
                let rhs = f.mul(&x2, x).add(&f.mul(&self.a, &x2)).add(&self.b);
                lhs == rhs
            }
        }
    }

    fn add(&self, p: &BinaryPoint, q: &BinaryPoint) -> Result<BinaryPoint> {
        let (x1, y1) = match p {
            BinaryPoint::Infinity => return Ok(q.clone()),
            BinaryPoint::Affine { x, y } => (x, y),
        };
        let (x2, y2) = match q {
            BinaryPoint::Infinity => return Ok(p.clone()),
            BinaryPoint::Affine { x, y } => (x, y),
        };

        if x1 == x2 {
            // same x: either P + (-P) = O or a doubling
            return if y1 == y2 && !x1.is_zero() {
                self.double(p)
            } else {
                Ok(BinaryPoint::Infinity)
            };
        }

        // λ = (y1 + y2) / (x1 + x2)
        let f = &self.field;
        let lambda = f.mul(&y1.add(y2), &f.inv(&x1.add(x2))?);

        // x3 = λ^2 + λ + x1 + x2 + a
        let x3 = f
            .square(&lambda)
            .add(&lambda)
            .add(x1)
            .add(x2)
            .add(&self.a);
        // y3 = λ(x1 + x3) + x3 + y1
        let y3 = f.mul(&lambda, &x1.add(&x3)).add(&x3).add(y1);
        Ok(BinaryPoint::Affine { x: x3, y: y3 })
    }

    fn double(&self, p: &BinaryPoint) -> Result<BinaryPoint> {
        let (x, y) = match p {
            BinaryPoint::Infinity => return Ok(BinaryPoint::Infinity),
            BinaryPoint::Affine { x, y } => (x, y),
        };
        if x.is_zero() {
            // (0, y) is its own negation
            return Ok(BinaryPoint::Infinity);
        }

        // λ = x + y/x
        let f = &self.field;
        let lambda = x.add(&f.mul(y, &f.inv(x)?));

        // x3 = λ^2 + λ + a
        let x3 = f.square(&lambda).add(&lambda).add(&self.a);
        // y3 = x^2 + (λ + 1) x3
        let y3 = f.square(x).add(&f.mul(&lambda, &x3)).add(&x3);
        Ok(BinaryPoint::Affine { x: x3, y: y3 })
    }

    fn x_coordinate(&self, p: &BinaryPoint) -> Option<BigUint> {
        match p {
            BinaryPoint::Infinity => None,
            // coefficient of x^i maps to integer bit i
            BinaryPoint::Affine { x, .. } => Some(x.to_biguint()),
        }
    }
}
