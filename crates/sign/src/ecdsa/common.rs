//! Signature container and encodings

use dualcurve_api::{Error as ApiError, Result as ApiResult};
use num_bigint::BigUint;
use num_traits::Zero;

/// An ECDSA signature (r, s).
///
/// Components are plain non-negative integers; range validity against a
/// particular curve order is checked at verification time, not here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature {
    /// The r component
    pub r: BigUint,
    /// The s component
    pub s: BigUint,
}

impl Signature {
    /// Build a signature from its components.
    pub fn new(r: BigUint, s: BigUint) -> Self {
        Signature { r, s }
    }

    /// The (r, s) pair as lowercase hex strings without leading zeros.
    pub fn to_hex_pair(&self) -> (String, String) {
        (self.r.to_str_radix(16), self.s.to_str_radix(16))
    }

    /// Parse a signature from a pair of hex strings.
    pub fn from_hex_pair(r: &str, s: &str) -> ApiResult<Self> {
        let parse = |label, text: &str| {
            BigUint::parse_bytes(text.as_bytes(), 16).ok_or(ApiError::InvalidSignature {
                context: "Signature hex parsing",
                message: format!("{label} is not a valid hex integer"),
            })
        };
        Ok(Signature {
            r: parse("r", r)?,
            s: parse("s", s)?,
        })
    }

    /// Serialize to ASN.1 DER: SEQUENCE { INTEGER r, INTEGER s }.
    pub fn to_der(&self) -> Vec<u8> {
        let r_bytes = encode_integer(&self.r);
        let s_bytes = encode_integer(&self.s);

        let mut der = Vec::with_capacity(6 + r_bytes.len() + s_bytes.len());
        der.push(0x30);
        der.push((4 + r_bytes.len() + s_bytes.len()) as u8);
        der.push(0x02);
        der.push(r_bytes.len() as u8);
        der.extend_from_slice(&r_bytes);
        der.push(0x02);
        der.push(s_bytes.len() as u8);
        der.extend_from_slice(&s_bytes);
        der
    }

    /// Parse a signature from ASN.1 DER.
    ///
    /// Accepts only the short-form SEQUENCE { INTEGER, INTEGER } layout
    /// produced by [`Self::to_der`]; trailing garbage is rejected.
    pub fn from_der(der: &[u8]) -> ApiResult<Self> {
        let malformed = |message: &str| ApiError::InvalidSignature {
            context: "ECDSA DER parsing",
            message: message.to_string(),
        };

        if der.len() < 8 {
            return Err(ApiError::InvalidLength {
                context: "ECDSA DER parsing",
                expected: 8,
                actual: der.len(),
            });
        }
        if der[0] != 0x30 {
            return Err(malformed("missing SEQUENCE tag"));
        }
        if der[1] as usize != der.len() - 2 {
            return Err(malformed("SEQUENCE length does not match input"));
        }

        let (r, rest) = parse_integer(&der[2..]).ok_or_else(|| malformed("bad INTEGER for r"))?;
        let (s, rest) = parse_integer(rest).ok_or_else(|| malformed("bad INTEGER for s"))?;
        if !rest.is_empty() {
            return Err(malformed("trailing bytes after s"));
        }
        Ok(Signature { r, s })
    }
}

/// Minimal positive-INTEGER encoding: big-endian magnitude, with a leading
/// zero byte when the high bit is set.
fn encode_integer(value: &BigUint) -> Vec<u8> {
    if value.is_zero() {
        return vec![0x00];
    }
    let bytes = value.to_bytes_be();
    if bytes[0] & 0x80 != 0 {
        let mut padded = Vec::with_capacity(bytes.len() + 1);
        padded.push(0x00);
        padded.extend_from_slice(&bytes);
        padded
    } else {
        bytes
    }
}

/// Parse one DER INTEGER; returns the value and the remaining input.
fn parse_integer(input: &[u8]) -> Option<(BigUint, &[u8])> {
    let (&tag, rest) = input.split_first()?;
    if tag != 0x02 {
        return None;
    }
    let (&len, rest) = rest.split_first()?;
    let len = len as usize;
    if len == 0 || len > rest.len() {
        return None;
    }
    let (bytes, rest) = rest.split_at(len);
    // negative integers cannot appear in a valid signature
    if bytes[0] & 0x80 != 0 {
        return None;
    }
    Some((BigUint::from_bytes_be(bytes), rest))
}
