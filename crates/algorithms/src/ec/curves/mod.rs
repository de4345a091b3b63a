//! Standardized curve catalog
//!
//! Builders for the supported named curves, parsing the baked-in constants
//! from `dualcurve-params`. Construction runs the full parameter validation,
//! so each builder doubles as a self-check of the constants; a failure here
//! means the compiled-in values are corrupt, which is why `expect` is used
//! instead of surfacing a `Result`.

use dualcurve_params::{binary as bp, prime as pp};
use num_bigint::BigUint;

use crate::bigint;
use crate::ec::{BinaryCurve, PrimeCurve};
use crate::field::BinaryFieldElement;


fn hex(context: &str, s: &str) -> BigUint {
    bigint::from_hex(s).unwrap_or_else(|_| panic!("{context}: bad baked-in constant"))
}

fn bits(s: &str) -> BinaryFieldElement {
    BinaryFieldElement::from_hex(s).expect("bad baked-in binary field constant")
}

/// NIST P-256 (secp256r1).
pub fn nist_p256() -> PrimeCurve {
    PrimeCurve::new(
        "P-256",
        hex("P-256 p", pp::P256_P),
        hex("P-256 a", pp::P256_A),
        hex("P-256 b", pp::P256_B),
        hex("P-256 gx", pp::P256_GX),
        hex("P-256 gy", pp::P256_GY),
        hex("P-256 n", pp::P256_N),
        pp::P256_H,
    )
    .expect("P-256 parameters must be valid")
}

/// secp256k1, the Koblitz curve used by Bitcoin.
pub fn secp256k1() -> PrimeCurve {
    PrimeCurve::new(
        "secp256k1",
        hex("secp256k1 p", pp::SECP256K1_P),
        hex("secp256k1 a", pp::SECP256K1_A),
        hex("secp256k1 b", pp::SECP256K1_B),
        hex("secp256k1 gx", pp::SECP256K1_GX),
        hex("secp256k1 gy", pp::SECP256K1_GY),
        hex("secp256k1 n", pp::SECP256K1_N),
        pp::SECP256K1_H,
    )
    .expect("secp256k1 parameters must be valid")
}

/// NIST K-163 (sect163k1), a Koblitz curve over GF(2^163).
pub fn nist_k163() -> BinaryCurve {
    BinaryCurve::new(
        "K-163",
        BinaryFieldElement::from_bit_positions(&bp::K163_REDUCTION_POLY),
        bits(bp::K163_A),
        bits(bp::K163_B),
        bits(bp::K163_GX),
        bits(bp::K163_GY),
        hex("K-163 n", bp::K163_N),
        bp::K163_H,
    )
    .expect("K-163 parameters must be valid")
}
