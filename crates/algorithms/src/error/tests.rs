use super::*;
use dualcurve_api::Error as ApiError;

#[test]
fn param_shorthand_builds_parameter_error() {
    let err = Error::param("curve", "base point not on curve");
    match err {
        Error::Parameter { name, reason } => {
            assert_eq!(name, "curve");
            assert_eq!(reason, "base point not on curve");
        }
        other => panic!("unexpected error variant: {:?}", other),
    }
}

#[test]
fn validate_parameter_passes_and_fails() {
    assert!(validate::parameter(true, "x", "must hold").is_ok());
    assert!(validate::parameter(false, "x", "must hold").is_err());
}

#[test]
fn validate_length_reports_expected_and_actual() {
    let err = validate::length("scalar", 3, 21).unwrap_err();
    match err {
        Error::Length {
            expected, actual, ..
        } => {
            assert_eq!(expected, 21);
            assert_eq!(actual, 3);
        }
        other => panic!("unexpected error variant: {:?}", other),
    }
}

#[test]
fn validate_max_length_allows_shorter_inputs() {
    assert!(validate::max_length("digest", 20, 64).is_ok());
    assert!(validate::max_length("digest", 65, 64).is_err());
}

#[test]
fn non_invertible_maps_to_api_error() {
    let err = Error::NonInvertible {
        context: "field inversion",
    };
    match ApiError::from(err) {
        ApiError::NonInvertible { context } => assert_eq!(context, "field inversion"),
        other => panic!("unexpected error variant: {:?}", other),
    }
}

#[test]
fn parameter_maps_to_api_invalid_parameter() {
    let err = Error::param("modulus", "must be odd");
    match ApiError::from(err) {
        ApiError::InvalidParameter { context, message } => {
            assert_eq!(context, "modulus");
            assert_eq!(message, "must be odd");
        }
        other => panic!("unexpected error variant: {:?}", other),
    }
}
