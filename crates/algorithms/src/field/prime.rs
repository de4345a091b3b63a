//! Prime field arithmetic over the big-integer adapter

use num_bigint::BigUint;
use num_traits::Zero;

use crate::bigint;
use crate::error::{validate, Result};

/// A large-prime field Z_p.
///
/// The modulus is fixed at construction; elements are canonical `BigUint`
/// values in [0, p). All arithmetic goes through the [`bigint`] adapter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrimeField {
    modulus: BigUint,
}

impl PrimeField {
    /// Create a prime field with the given modulus.
    ///
    /// The modulus must be an odd integer of at least 3; primality is the
    /// caller's responsibility (curve constructors feed standardized primes).
    pub fn new(modulus: BigUint) -> Result<Self> {
        validate::parameter(
            modulus >= BigUint::from(3u8) && modulus.bit(0),
            "PrimeField",
            "modulus must be an odd integer >= 3",
        )?;
        Ok(PrimeField { modulus })
    }

    /// The field modulus p.
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// Check that a value is a canonical field element (< p).
    pub fn contains(&self, a: &BigUint) -> bool {
        a < &self.modulus
    }

    /// Reduce an arbitrary integer into the field.
    pub fn reduce(&self, a: &BigUint) -> BigUint {
        a % &self.modulus
    }

    /// (a + b) mod p
    pub fn add(&self, a: &BigUint, b: &BigUint) -> BigUint {
        bigint::mod_add(a, b, &self.modulus)
    }

    /// (a - b) mod p
    pub fn sub(&self, a: &BigUint, b: &BigUint) -> BigUint {
        bigint::mod_sub(a, b, &self.modulus)
    }

    /// (a * b) mod p
    pub fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        bigint::mod_mul(a, b, &self.modulus)
    }

    /// a^-1 mod p; errors on a ≡ 0 (mod p).
    pub fn inv(&self, a: &BigUint) -> Result<BigUint> {
        bigint::mod_inv(a, &self.modulus)
    }

    /// -a mod p
    pub fn neg(&self, a: &BigUint) -> BigUint {
        let a = self.reduce(a);
        if a.is_zero() {
            a
        } else {
            &self.modulus - a
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::One;

    fn f17() -> PrimeField {
        PrimeField::new(BigUint::from(17u8)).unwrap()
    }

    #[test]
    fn rejects_even_or_tiny_moduli() {
        assert!(PrimeField::new(BigUint::from(16u8)).is_err());
        assert!(PrimeField::new(BigUint::from(1u8)).is_err());
        assert!(PrimeField::new(BigUint::from(2u8)).is_err());
        assert!(PrimeField::new(BigUint::from(3u8)).is_ok());
    }

    #[test]
    fn field_arithmetic() {
        let f = f17();
        let a = BigUint::from(5u8);
        let b = BigUint::from(12u8);

        assert_eq!(f.add(&a, &b), BigUint::zero());
        assert_eq!(f.sub(&a, &b), BigUint::from(10u8));
        assert_eq!(f.mul(&a, &b), BigUint::from(9u8));
        assert_eq!(f.inv(&a).unwrap(), BigUint::from(7u8));
        assert_eq!(f.neg(&a), BigUint::from(12u8));
        assert_eq!(f.neg(&BigUint::zero()), BigUint::zero());
    }

    #[test]
    fn inverse_round_trips_to_one() {
        let f = f17();
        for i in 1u8..17 {
            let a = BigUint::from(i);
            let inv = f.inv(&a).unwrap();
            assert_eq!(f.mul(&a, &inv), BigUint::one());
        }
    }

    #[test]
    fn membership_check() {
        let f = f17();
        assert!(f.contains(&BigUint::from(16u8)));
        assert!(!f.contains(&BigUint::from(17u8)));
    }
}
