//! ECDSA signing and verification for dualcurve
//!
//! One generic implementation of the signature scheme, written against the
//! [`CurveGroup`](dualcurve_algorithms::ec::CurveGroup) contract from
//! `dualcurve-algorithms`. The same code signs and verifies over prime-field
//! curves (P-256, secp256k1) and binary-field curves (K-163); the curve
//! engine is the only thing that changes.
//!
//! Callers provide a message digest, not a message: this crate does no
//! hashing. Randomness is always an explicit argument, never an ambient
//! global.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod ecdsa;

pub use ecdsa::common::Signature;
