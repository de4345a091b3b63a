//! # dualcurve
//!
//! A from-scratch elliptic-curve cryptography primitive library.
//!
//! dualcurve implements finite-field arithmetic over two distinct algebraic
//! structures — large-prime fields Z_p and binary extension fields GF(2^m) —
//! builds affine elliptic-curve point arithmetic on top of each, and provides
//! ECDSA signing and verification generic over either curve kind.
//!
//! ## Crate structure
//!
//! This is a facade crate that re-exports functionality from the workspace
//! sub-crates:
//!
//! - [`dualcurve_api`]: Error taxonomy and result types
//! - [`dualcurve_params`]: Standard curve constants (P-256, secp256k1, K-163)
//! - [`dualcurve_algorithms`]: Field engines and curve group arithmetic
//! - [`dualcurve_sign`]: ECDSA signing and verification
//!
//! ## Quick start
//!
//! ```rust
//! use dualcurve::prelude::*;
//! use num_bigint::BigUint;
//!
//! let curve = curves::nist_p256();
//! let d = BigUint::parse_bytes(
//!     b"70a12c2db16845ed56ff68cfc21a472b3f04d7d6851bf6349f2d7d5b3452b38a",
//!     16,
//! ).unwrap();
//! let k = BigUint::parse_bytes(
//!     b"580ec00d856434334cef3f71ecaed4965b12ae37fa47055b1965c7b134ee45d0",
//!     16,
//! ).unwrap();
//! let digest = BigUint::parse_bytes(
//!     b"7c3e883ddc8bd688f96eac5e9324222c8f30f9d6bb59e9c5f020bd39ba2b8377",
//!     16,
//! ).unwrap().to_bytes_be();
//!
//! let sig = ecdsa::sign_with_nonce(&curve, &d, &k, &digest).unwrap();
//! let q = ecdsa::public_key(&curve, &d).unwrap();
//! assert!(ecdsa::verify(&curve, &q, &digest, &sig).unwrap());
//! ```

#![forbid(unsafe_code)]

pub use dualcurve_api as api;
pub use dualcurve_params as params;
pub use dualcurve_algorithms as algorithms;
pub use dualcurve_sign as sign;

/// Common imports for dualcurve users
pub mod prelude {
    pub use crate::api::{Error, Result};
    pub use crate::algorithms::ec::{
        curves, BinaryCurve, BinaryPoint, CurveGroup, PrimeCurve, PrimePoint,
    };
    pub use crate::algorithms::field::{BinaryField, BinaryFieldElement, PrimeField};
    pub use crate::sign::ecdsa::{self, Signature};
}
