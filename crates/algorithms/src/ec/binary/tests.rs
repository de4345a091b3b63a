use super::*;
use crate::ec::curves;

fn el(hex: &str) -> BinaryFieldElement {
    BinaryFieldElement::from_hex(hex).unwrap()
}

#[test]
fn construction_rejects_malformed_parameters() {
    let modulus = BinaryFieldElement::from_bit_positions(&[163, 7, 6, 3, 0]);
    let one = BinaryFieldElement::one();

    // b = 0 is singular
    assert!(BinaryCurve::new(
        "bad",
        modulus.clone(),
        one.clone(),
        BinaryFieldElement::zero(),
        one.clone(),
        one.clone(),
        BigUint::from(5u8),
        2,
    )
    .is_err());

    // base point off the curve
    assert!(BinaryCurve::new(
        "bad",
        modulus.clone(),
        one.clone(),
        one.clone(),
        BinaryFieldElement::from_bit_positions(&[5]),
        BinaryFieldElement::from_bit_positions(&[9]),
        BigUint::from(5u8),
        2,
    )
    .is_err());

    // coefficient not reduced below the field degree
    assert!(BinaryCurve::new(
        "bad",
        modulus.clone(),
        BinaryFieldElement::from_bit_positions(&[163]),
        one.clone(),
        one.clone(),
        one,
        BigUint::from(5u8),
        2,
    )
    .is_err());
}

#[test]
fn base_point_satisfies_curve_equation() {
    let curve = curves::nist_k163();
    assert!(curve.contains(&curve.generator()));
    assert!(curve.contains(&curve.identity()));
}

#[test]
fn identity_laws() {
    let curve = curves::nist_k163();
    let g = curve.generator();
    let o = curve.identity();

    assert_eq!(curve.add(&g, &o).unwrap(), g);
    assert_eq!(curve.add(&o, &g).unwrap(), g);
    assert!(curve.is_identity(&curve.double(&o).unwrap()));
    assert_eq!(curve.x_coordinate(&o), None);
}

#[test]
fn adding_a_point_to_its_negation_gives_infinity() {
    let curve = curves::nist_k163();
    let g = curve.generator();
    let neg = curve.negate(&g);

    assert!(curve.contains(&neg));
    assert!(curve.is_identity(&curve.add(&g, &neg).unwrap()));
    // negation is an involution
    assert_eq!(curve.negate(&neg), g);
}

#[test]
fn doubling_a_zero_x_point_gives_infinity() {
    let curve = curves::nist_k163();
    // (0, sqrt(b)) is on the curve and equals its own negation; for K-163
    // b = 1 so (0, 1) works directly.
    let p = BinaryPoint::affine(BinaryFieldElement::zero(), BinaryFieldElement::one());
    assert!(curve.contains(&p));
    assert!(curve.is_identity(&curve.double(&p).unwrap()));
    assert!(curve.is_identity(&curve.add(&p, &p).unwrap()));
}

#[test]
fn add_of_equal_points_routes_through_double() {
    let curve = curves::nist_k163();
    let g = curve.generator();
    assert_eq!(curve.add(&g, &g).unwrap(), curve.double(&g).unwrap());
}

#[test]
fn k163_base_point_multiplication_matches_reference() {
    // Q = dG for the RFC 6979 A.2.8 private key.
    let curve = curves::nist_k163();
    let d = BigUint::parse_bytes(b"09A4D6792295A7F730FC3F2B49CBC0F62E862272F", 16).unwrap();

    let q = curve.scalar_mul(&curve.generator(), &d).unwrap();
    let expected = BinaryPoint::affine(
        el("79aee090db05ec252d5cb4452f356be198a4ff96f"),
        el("782e29634ddc9a31ef40386e896baa18b53afa5a3"),
    );
    assert_eq!(q, expected);
    assert!(curve.contains(&q));
}

#[test]
fn order_minus_one_times_g_is_minus_g() {
    let curve = curves::nist_k163();
    let g = curve.generator();
    let n_minus_1 = curve.order() - BigUint::from(1u8);

    assert_eq!(curve.scalar_mul(&g, &n_minus_1).unwrap(), curve.negate(&g));
    // and n G collapses to infinity via the mod-n reduction
    assert!(curve.is_identity(&curve.scalar_mul(&g, curve.order()).unwrap()));
}

#[test]
fn addition_is_associative() {
    let curve = curves::nist_k163();
    let g = curve.generator();
    let p = curve.double(&g).unwrap();
    let q = curve.scalar_mul(&g, &BigUint::from(3u8)).unwrap();

    let lhs = curve.add(&curve.add(&g, &p).unwrap(), &q).unwrap();
    let rhs = curve.add(&g, &curve.add(&p, &q).unwrap()).unwrap();
    assert_eq!(lhs, rhs);
}

#[test]
fn scalar_mul_distributes_over_addition() {
    let curve = curves::nist_k163();
    let g = curve.generator();
    let a = BigUint::from(0xdead_beefu32);
    let b = BigUint::from(0x0bad_cafeu32);

    let lhs = curve.scalar_mul(&g, &(&a + &b)).unwrap();
    let rhs = curve
        .add(
            &curve.scalar_mul(&g, &a).unwrap(),
            &curve.scalar_mul(&g, &b).unwrap(),
        )
        .unwrap();
    assert_eq!(lhs, rhs);
}

#[test]
fn x_coordinate_uses_bit_pattern_rule() {
    let curve = curves::nist_k163();
    let p = BinaryPoint::affine(
        BinaryFieldElement::from_bit_positions(&[4, 1, 0]),
        BinaryFieldElement::zero(),
    );
    assert_eq!(curve.x_coordinate(&p), Some(BigUint::from(0b10011u32)));
}
