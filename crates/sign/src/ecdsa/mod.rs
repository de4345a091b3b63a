//! ECDSA over any [`CurveGroup`] implementation
//!
//! This implementation follows FIPS 186-4: Digital Signature Standard (DSS).
//! The caller supplies the message digest; any hash (or none) can sit in
//! front. The digest is interpreted as a big-endian integer and used as-is,
//! so with a hash wider than the curve order the caller decides whether to
//! truncate first.
//!
//! Nonce hygiene is the caller's lever: [`sign`] draws a fresh random nonce
//! per attempt from the explicit RNG argument, while [`sign_with_nonce`]
//! accepts an externally derived nonce (e.g. RFC 6979) and surfaces a zero
//! r or s as [`ApiError::InvalidScalar`] for the caller to retry.

use dualcurve_algorithms::ec::CurveGroup;
use dualcurve_api::{Error as ApiError, SignatureResult};
use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand::{CryptoRng, RngCore};
use subtle::ConstantTimeEq;
use zeroize::Zeroize;

pub mod common;

pub use common::Signature;


/// Check that a scalar is a usable private key or nonce: 1 <= x < n.
fn validate_scalar<C: CurveGroup>(curve: &C, x: &BigUint, context: &'static str) -> SignatureResult<()> {
    if x.is_zero() || x >= curve.order() {
        return Err(ApiError::InvalidParameter {
            context,
            message: format!("scalar is out of range for {}", curve.name()),
        });
    }
    Ok(())
}

/// Draw a uniform scalar in [1, n-1] by rejection sampling.
///
/// Candidate buffers are drawn at the byte width of n with excess high bits
/// masked off, so on average fewer than two draws are needed. Rejected
/// buffers are wiped before redrawing.
pub fn random_scalar<C, R>(curve: &C, rng: &mut R) -> BigUint
where
    C: CurveGroup,
    R: CryptoRng + RngCore,
{
    let n = curve.order();
    let byte_len = ((n.bits() + 7) / 8) as usize;
    let top_mask = if n.bits() % 8 == 0 {
        0xff
    } else {
        (1u8 << (n.bits() % 8)) - 1
    };

    let mut buf = vec![0u8; byte_len];
    loop {
        rng.fill_bytes(&mut buf);
        buf[0] &= top_mask;
        let candidate = BigUint::from_bytes_be(&buf);
        buf.as_mut_slice().zeroize();
        if !candidate.is_zero() && &candidate < n {
            return candidate;
        }
    }
}

/// Generate an ECDSA key pair: a private scalar d and the public point dG.
pub fn generate_keypair<C, R>(curve: &C, rng: &mut R) -> SignatureResult<(BigUint, C::Point)>
where
    C: CurveGroup,
    R: CryptoRng + RngCore,
{
    let d = random_scalar(curve, rng);
    let q = curve.scalar_mul(&curve.generator(), &d).map_err(ApiError::from)?;
    Ok((d, q))
}

/// Derive the public point dG for an existing private scalar.
pub fn public_key<C: CurveGroup>(curve: &C, d: &BigUint) -> SignatureResult<C::Point> {
    validate_scalar(curve, d, "ECDSA public_key")?;
    curve
        .scalar_mul(&curve.generator(), d)
        .map_err(ApiError::from)
}

/// Sign a digest with a caller-supplied nonce.
///
/// Steps per FIPS 186-4 §6.4:
/// 1. R = kG; r = x(R) mod n
/// 2. s = k^-1 (z + r d) mod n
///
/// If r or s comes out zero the nonce is unusable and the error is
/// [`ApiError::InvalidScalar`]; the caller retries with a fresh nonce. The
/// zero component is never returned in a signature.
pub fn sign_with_nonce<C: CurveGroup>(
    curve: &C,
    d: &BigUint,
    k: &BigUint,
    digest: &[u8],
) -> SignatureResult<Signature> {
    validate_scalar(curve, d, "ECDSA sign (private key)")?;
    validate_scalar(curve, k, "ECDSA sign (nonce)")?;

    let n = curve.order();
    let z = BigUint::from_bytes_be(digest) % n;

    let kg = curve.scalar_mul(&curve.generator(), k).map_err(ApiError::from)?;
    let r = match curve.x_coordinate(&kg) {
        Some(x) => x % n,
        None => BigUint::zero(),
    };
    if r.is_zero() {
        return Err(ApiError::InvalidScalar {
            context: "ECDSA sign (r)",
        });
    }

    let k_inv = mod_inv_n(curve, k, "ECDSA sign (k^-1)")?;
    let s = (&k_inv * ((&z + &r * d) % n)) % n;
    if s.is_zero() {
        return Err(ApiError::InvalidScalar {
            context: "ECDSA sign (s)",
        });
    }

    Ok(Signature::new(r, s))
}

/// Sign a digest, drawing nonces from the given RNG until one yields
/// nonzero components.
pub fn sign<C, R>(curve: &C, d: &BigUint, digest: &[u8], rng: &mut R) -> SignatureResult<Signature>
where
    C: CurveGroup,
    R: CryptoRng + RngCore,
{
    validate_scalar(curve, d, "ECDSA sign (private key)")?;
    loop {
        let k = random_scalar(curve, rng);
        match sign_with_nonce(curve, d, &k, digest) {
            Ok(sig) => return Ok(sig),
            Err(ApiError::InvalidScalar { .. }) => continue,
            Err(e) => return Err(e),
        }
    }
}

/// Verify a signature over a digest.
///
/// Returns `Ok(false)` for any well-formed signature that fails the check,
/// including (r, s) pairs outside [1, n-1] and a verification point at
/// infinity. Errors are reserved for unusable inputs: a public key that is
/// the identity or off the curve.
pub fn verify<C: CurveGroup>(
    curve: &C,
    q: &C::Point,
    digest: &[u8],
    signature: &Signature,
) -> SignatureResult<bool> {
    if curve.is_identity(q) {
        return Err(ApiError::InvalidParameter {
            context: "ECDSA verify",
            message: "public key is the point at infinity".to_string(),
        });
    }
    if !curve.contains(q) {
        return Err(ApiError::InvalidParameter {
            context: "ECDSA verify",
            message: format!("public key is not on {}", curve.name()),
        });
    }

    let n = curve.order();
    let one = BigUint::one();
    if signature.r < one || &signature.r >= n || signature.s < one || &signature.s >= n {
        return Ok(false);
    }

    let z = BigUint::from_bytes_be(digest) % n;
    let s_inv = mod_inv_n(curve, &signature.s, "ECDSA verify (s^-1)")?;
    let u1 = (&z * &s_inv) % n;
    let u2 = (&signature.r * &s_inv) % n;

    let u1g = curve.scalar_mul(&curve.generator(), &u1).map_err(ApiError::from)?;
    let u2q = curve.scalar_mul(q, &u2).map_err(ApiError::from)?;
    let point = curve.add(&u1g, &u2q).map_err(ApiError::from)?;

    let v = match curve.x_coordinate(&point) {
        Some(x) => x % n,
        None => return Ok(false),
    };

    // fixed-width comparison so the verdict leaks nothing about where the
    // mismatch occurs
    let width = ((n.bits() + 7) / 8) as usize;
    let r_bytes = to_fixed_width(&signature.r, width);
    let v_bytes = to_fixed_width(&v, width);
    Ok(r_bytes.ct_eq(&v_bytes).into())
}

fn to_fixed_width(value: &BigUint, width: usize) -> Vec<u8> {
    let bytes = value.to_bytes_be();
    let mut out = vec![0u8; width];
    out[width - bytes.len()..].copy_from_slice(&bytes);
    out
}

/// Inverse modulo the group order. The order of a standardized curve is
/// prime, so a failure here means the operand was a multiple of n.
fn mod_inv_n<C: CurveGroup>(
    curve: &C,
    value: &BigUint,
    context: &'static str,
) -> SignatureResult<BigUint> {
    value
        .modinv(curve.order())
        .ok_or(ApiError::NonInvertible { context })
}
