//! End-to-end signing flows through the facade crate.

use dualcurve::prelude::*;
use num_bigint::BigUint;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn int(hex: &str) -> BigUint {
    BigUint::parse_bytes(hex.as_bytes(), 16).unwrap()
}

#[test]
fn p256_suite_b_vector_through_facade() {
    let curve = curves::nist_p256();
    let d = int("70a12c2db16845ed56ff68cfc21a472b3f04d7d6851bf6349f2d7d5b3452b38a");
    let k = int("580ec00d856434334cef3f71ecaed4965b12ae37fa47055b1965c7b134ee45d0");
    let digest = int("7c3e883ddc8bd688f96eac5e9324222c8f30f9d6bb59e9c5f020bd39ba2b8377").to_bytes_be();

    let sig = ecdsa::sign_with_nonce(&curve, &d, &k, &digest).unwrap();
    let (r, s) = sig.to_hex_pair();
    assert_eq!(r, "7214bc9647160bbd39ff2f80533f5dc6ddd70ddf86bb815661e805d5d4e6f27c");
    assert_eq!(s, "7d1ff961980f961bdaa3233b6209f4013317d3e3f9e1493592dbeaa1af2bc367");

    let q = ecdsa::public_key(&curve, &d).unwrap();
    assert!(ecdsa::verify(&curve, &q, &digest, &sig).unwrap());
}

#[test]
fn same_code_path_signs_on_both_curve_kinds() {
    let digest = b"one digest, two algebraic worlds";
    let mut rng = ChaCha20Rng::seed_from_u64(2024);

    let p256 = curves::nist_p256();
    let (d, q) = ecdsa::generate_keypair(&p256, &mut rng).unwrap();
    let sig = ecdsa::sign(&p256, &d, digest, &mut rng).unwrap();
    assert!(ecdsa::verify(&p256, &q, digest, &sig).unwrap());

    let k163 = curves::nist_k163();
    let (d, q) = ecdsa::generate_keypair(&k163, &mut rng).unwrap();
    let sig = ecdsa::sign(&k163, &d, digest, &mut rng).unwrap();
    assert!(ecdsa::verify(&k163, &q, digest, &sig).unwrap());
}

#[test]
fn der_encoded_signature_survives_transport() {
    let curve = curves::secp256k1();
    let mut rng = ChaCha20Rng::seed_from_u64(5);
    let (d, q) = ecdsa::generate_keypair(&curve, &mut rng).unwrap();
    let digest = [0x5au8; 32];

    let sig = ecdsa::sign(&curve, &d, &digest, &mut rng).unwrap();
    let wire = sig.to_der();
    let received = Signature::from_der(&wire).unwrap();
    assert!(ecdsa::verify(&curve, &q, &digest, &received).unwrap());
}

#[test]
fn signature_from_one_key_fails_under_another() {
    let curve = curves::nist_p256();
    let mut rng = ChaCha20Rng::seed_from_u64(77);
    let (d, _) = ecdsa::generate_keypair(&curve, &mut rng).unwrap();
    let (_, other_q) = ecdsa::generate_keypair(&curve, &mut rng).unwrap();
    let digest = [0x33u8; 32];

    let sig = ecdsa::sign(&curve, &d, &digest, &mut rng).unwrap();
    assert!(!ecdsa::verify(&curve, &other_q, &digest, &sig).unwrap());
}
