//! Big-integer adapter
//!
//! Thin seam over `num-bigint` exposing exactly the operations the prime
//! field and ECDSA layers need: construction from decimal/hexadecimal
//! strings, modular add/sub/mul, and modular inversion. Routing all Z_p and
//! Z_n arithmetic through this module keeps the dependency on the backend in
//! one auditable place.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::error::{Error, Result};

/// Parse a big-endian hexadecimal string (with or without a `0x` prefix)
/// into an unsigned big integer.
pub fn from_hex(s: &str) -> Result<BigUint> {
    let digits = s.trim_start_matches("0x").trim_start_matches("0X");
    BigUint::parse_bytes(digits.as_bytes(), 16)
        .ok_or_else(|| Error::param("bigint", "malformed hexadecimal integer"))
}

/// Parse a decimal string into an unsigned big integer.
pub fn from_dec(s: &str) -> Result<BigUint> {
    BigUint::parse_bytes(s.as_bytes(), 10)
        .ok_or_else(|| Error::param("bigint", "malformed decimal integer"))
}

/// Render an unsigned big integer as lowercase hexadecimal (no prefix).
pub fn to_hex(n: &BigUint) -> String {
    n.to_str_radix(16)
}

/// (a + b) mod m
pub fn mod_add(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    (a + b) % m
}

/// (a - b) mod m, well-defined for any a, b
pub fn mod_sub(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    let a = a % m;
    let b = b % m;
    ((a + m) - b) % m
}

/// (a * b) mod m
pub fn mod_mul(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    (a * b) % m
}

/// a^-1 mod m
///
/// Errors with [`Error::NonInvertible`] when a is zero mod m or shares a
/// factor with m. For a prime modulus this only happens for a ≡ 0.
pub fn mod_inv(a: &BigUint, m: &BigUint) -> Result<BigUint> {
    if (a % m).is_zero() {
        return Err(Error::NonInvertible {
            context: "modular inversion of zero",
        });
    }
    a.modinv(m).ok_or(Error::NonInvertible {
        context: "modular inversion",
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::One;

    #[test]
    fn hex_parsing_accepts_prefix_and_odd_length() {
        let a = from_hex("0x0f").unwrap();
        let b = from_hex("f").unwrap();
        assert_eq!(a, b);
        assert_eq!(a, BigUint::from(15u8));
    }

    #[test]
    fn hex_parsing_rejects_garbage() {
        assert!(from_hex("xyz").is_err());
        assert!(from_dec("12a").is_err());
    }

    #[test]
    fn hex_round_trip() {
        let n = from_hex("4000000000000000000020108a2e0cc0d99f8a5ef").unwrap();
        assert_eq!(to_hex(&n), "4000000000000000000020108a2e0cc0d99f8a5ef");
    }

    #[test]
    fn modular_arithmetic_small_values() {
        let m = BigUint::from(17u8);
        let a = BigUint::from(5u8);
        let b = BigUint::from(12u8);

        assert_eq!(mod_add(&a, &b, &m), BigUint::zero());
        assert_eq!(mod_sub(&a, &b, &m), BigUint::from(10u8));
        assert_eq!(mod_mul(&a, &b, &m), BigUint::from(9u8));
        assert_eq!(mod_inv(&a, &m).unwrap(), BigUint::from(7u8));
    }

    #[test]
    fn mod_sub_handles_operands_above_modulus() {
        let m = BigUint::from(7u8);
        let a = BigUint::from(3u8);
        let b = BigUint::from(100u8);
        // 3 - 100 = -97 = -97 + 14*7 = 1 (mod 7)
        assert_eq!(mod_sub(&a, &b, &m), BigUint::one());
    }

    #[test]
    fn inversion_of_zero_is_rejected() {
        let m = BigUint::from(17u8);
        assert!(matches!(
            mod_inv(&BigUint::zero(), &m),
            Err(Error::NonInvertible { .. })
        ));
        // 17 = 0 mod 17
        assert!(mod_inv(&m, &m).is_err());
    }

    #[test]
    fn inversion_with_composite_modulus_can_fail() {
        let m = BigUint::from(15u8);
        let a = BigUint::from(5u8);
        assert!(mod_inv(&a, &m).is_err());
    }
}
