//! Binary extension field arithmetic
//!
//! Elements of GF(2^m) are polynomials over GF(2), stored as owned
//! little-endian bit-vectors: bit i set means the coefficient of x^i is 1.
//! Addition is XOR, multiplication is schoolbook shift-and-XOR followed by
//! reduction modulo a fixed irreducible polynomial, and inversion is the
//! polynomial extended-Euclidean algorithm. No hardware carry-less multiply
//! is assumed.

use std::fmt;

use num_bigint::BigUint;

use crate::error::{Error, Result};

const WORD_BITS: usize = 64;

/// An element of GF(2^m): a bit-polynomial over GF(2).
///
/// Stored as little-endian 64-bit words with no trailing zero words, so two
/// elements are equal exactly when their word vectors are equal. Elements
/// are value-like: cloning yields an independent polynomial and no two
/// elements ever alias storage.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct BinaryFieldElement {
    words: Vec<u64>,
}

impl BinaryFieldElement {
    /// The zero polynomial.
    pub fn zero() -> Self {
        BinaryFieldElement { words: Vec::new() }
    }

    /// The constant polynomial 1.
    pub fn one() -> Self {
        BinaryFieldElement { words: vec![1] }
    }

    /// Build a polynomial from the exponents of its nonzero terms,
    /// e.g. `[163, 7, 6, 3, 0]` for x^163 + x^7 + x^6 + x^3 + 1.
    pub fn from_bit_positions(bits: &[usize]) -> Self {
        let mut elem = Self::zero();
        for &i in bits {
            elem.set_bit(i);
        }
        elem
    }

    /// Build a polynomial from big-endian bytes (integer bit i = coefficient
    /// of x^i).
    pub fn from_bytes_be(bytes: &[u8]) -> Self {
        let mut words = Vec::with_capacity(bytes.len() / 8 + 1);
        let mut word = 0u64;
        let mut shift = 0usize;
        for &byte in bytes.iter().rev() {
            word |= (byte as u64) << shift;
            shift += 8;
            if shift == WORD_BITS {
                words.push(word);
                word = 0;
                shift = 0;
            }
        }
        if word != 0 || shift > 0 {
            words.push(word);
        }
        let mut elem = BinaryFieldElement { words };
        elem.normalize();
        elem
    }

    /// Serialize to big-endian bytes with no leading zero bytes
    /// (the zero polynomial serializes to a single zero byte).
    pub fn to_bytes_be(&self) -> Vec<u8> {
        let degree = match self.degree() {
            Some(d) => d,
            None => return vec![0],
        };
        let len = degree / 8 + 1;
        let mut out = vec![0u8; len];
        for (i, word) in self.words.iter().enumerate() {
            for b in 0..8 {
                let byte_index = i * 8 + b;
                if byte_index >= len {
                    break;
                }
                out[len - 1 - byte_index] = (word >> (b * 8)) as u8;
            }
        }
        out
    }

    /// Parse a big-endian hexadecimal string (with or without `0x` prefix).
    pub fn from_hex(s: &str) -> Result<Self> {
        let digits = s.trim_start_matches("0x").trim_start_matches("0X");
        let padded;
        let digits = if digits.len() % 2 == 1 {
            padded = format!("0{}", digits);
            &padded
        } else {
            digits
        };
        let bytes = hex::decode(digits)
            .map_err(|_| Error::param("BinaryFieldElement", "malformed hexadecimal polynomial"))?;
        Ok(Self::from_bytes_be(&bytes))
    }

    /// Render as lowercase hexadecimal with no leading zero digits.
    pub fn to_hex(&self) -> String {
        let encoded = hex::encode(self.to_bytes_be());
        let trimmed = encoded.trim_start_matches('0');
        if trimmed.is_empty() {
            "0".to_string()
        } else {
            trimmed.to_string()
        }
    }

    /// Interpret the bit pattern as an unsigned integer (polynomial
    /// coefficient of x^i becomes integer bit i). This is the conversion
    /// ECDSA uses to derive r from a binary-field x-coordinate.
    pub fn to_biguint(&self) -> BigUint {
        BigUint::from_bytes_be(&self.to_bytes_be())
    }

    /// Inverse of [`Self::to_biguint`].
    pub fn from_biguint(n: &BigUint) -> Self {
        Self::from_bytes_be(&n.to_bytes_be())
    }

    /// True for the zero polynomial.
    pub fn is_zero(&self) -> bool {
        self.words.is_empty()
    }

    /// True iff this is the constant polynomial 1 (only bit 0 set).
    pub fn is_one(&self) -> bool {
        self.words.len() == 1 && self.words[0] == 1
    }

    /// Test the coefficient of x^i.
    pub fn bit(&self, i: usize) -> bool {
        let word = i / WORD_BITS;
        word < self.words.len() && (self.words[word] >> (i % WORD_BITS)) & 1 == 1
    }

    /// Set the coefficient of x^i to 1.
    pub fn set_bit(&mut self, i: usize) {
        let word = i / WORD_BITS;
        if word >= self.words.len() {
            self.words.resize(word + 1, 0);
        }
        self.words[word] |= 1 << (i % WORD_BITS);
    }

    /// The polynomial degree: the highest set bit, or `None` for zero.
    pub fn degree(&self) -> Option<usize> {
        let top = *self.words.last()?;
        Some((self.words.len() - 1) * WORD_BITS + (WORD_BITS - 1 - top.leading_zeros() as usize))
    }

    /// In-place XOR with another polynomial.
    pub fn xor_assign(&mut self, other: &Self) {
        if other.words.len() > self.words.len() {
            self.words.resize(other.words.len(), 0);
        }
        for (i, w) in other.words.iter().enumerate() {
            self.words[i] ^= w;
        }
        self.normalize();
    }

    /// Field addition: bitwise XOR. Never fails and never needs reduction,
    /// since the degree cannot exceed the larger operand's degree.
    pub fn add(&self, other: &Self) -> Self {
        let mut out = self.clone();
        out.xor_assign(other);
        out
    }

    /// In-place left shift by k bit positions (multiplication by x^k).
    pub fn shl_assign(&mut self, k: usize) {
        if self.is_zero() || k == 0 {
            return;
        }
        let word_shift = k / WORD_BITS;
        let bit_shift = k % WORD_BITS;
        let old = std::mem::take(&mut self.words);
        let mut words = vec![0u64; old.len() + word_shift + 1];
        for (i, &w) in old.iter().enumerate() {
            words[i + word_shift] |= w << bit_shift;
            if bit_shift > 0 {
                words[i + word_shift + 1] |= w >> (WORD_BITS - bit_shift);
            }
        }
        self.words = words;
        self.normalize();
    }

    /// Left shift by k bit positions.
    pub fn shl(&self, k: usize) -> Self {
        let mut out = self.clone();
        out.shl_assign(k);
        out
    }

    /// Unreduced polynomial product: for each set bit i of `other`, XOR in
    /// `self` shifted left by i. The result's degree is the sum of the
    /// operand degrees; callers reduce it through [`BinaryField::reduce`].
    pub fn mul(&self, other: &Self) -> Self {
        let mut acc = Self::zero();
        let top = match (self.degree(), other.degree()) {
            (Some(_), Some(top)) => top,
            _ => return acc,
        };
        let mut shifted = self.clone();
        for i in 0..=top {
            if other.bit(i) {
                acc.xor_assign(&shifted);
            }
            if i < top {
                shifted.shl_assign(1);
            }
        }
        acc
    }

    fn normalize(&mut self) {
        while let Some(&0) = self.words.last() {
            self.words.pop();
        }
    }
}

/// Pretty-print as a sum of powers of X, e.g. `X^161 + X^100 + X^51 + 1`.
impl fmt::Display for BinaryFieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let degree = match self.degree() {
            Some(d) => d,
            None => return write!(f, "0"),
        };
        let mut first = true;
        for i in (0..=degree).rev() {
            if !self.bit(i) {
                continue;
            }
            if !first {
                write!(f, " + ")?;
            }
            match i {
                0 => write!(f, "1")?,
                1 => write!(f, "X")?,
                _ => write!(f, "X^{}", i)?,
            }
            first = false;
        }
        Ok(())
    }
}

/// A binary extension field GF(2^m), defined by an irreducible reduction
/// polynomial of degree m.
///
/// Shared read-only by every element operation for a given curve; the
/// reduction polynomial is fixed at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BinaryField {
    modulus: BinaryFieldElement,
    degree: usize,
}

impl BinaryField {
    /// Create a field from its reduction polynomial.
    ///
    /// The polynomial must have degree >= 1; irreducibility is the caller's
    /// responsibility (curve constructors feed standardized polynomials).
    pub fn new(modulus: BinaryFieldElement) -> Result<Self> {
        let degree = match modulus.degree() {
            Some(d) if d >= 1 => d,
            _ => {
                return Err(Error::param(
                    "BinaryField",
                    "reduction polynomial must have degree >= 1",
                ))
            }
        };
        Ok(BinaryField { modulus, degree })
    }

    /// The reduction polynomial.
    pub fn modulus(&self) -> &BinaryFieldElement {
        &self.modulus
    }

    /// The extension degree m.
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Check that an element is a canonical representative (degree < m).
    pub fn contains(&self, a: &BinaryFieldElement) -> bool {
        match a.degree() {
            Some(d) => d < self.degree,
            None => true,
        }
    }

    /// Reduce a polynomial modulo the reduction polynomial: repeatedly XOR
    /// in the modulus shifted to cancel the current highest bit until the
    /// degree drops below m.
    pub fn reduce(&self, a: &BinaryFieldElement) -> BinaryFieldElement {
        let mut r = a.clone();
        while let Some(d) = r.degree() {
            if d < self.degree {
                break;
            }
            r.xor_assign(&self.modulus.shl(d - self.degree));
        }
        r
    }

    /// Field addition (XOR); canonical in, canonical out.
    pub fn add(&self, a: &BinaryFieldElement, b: &BinaryFieldElement) -> BinaryFieldElement {
        a.add(b)
    }

    /// Field multiplication: schoolbook product followed by reduction.
    /// Produces the canonical representative of degree < m.
    pub fn mul(&self, a: &BinaryFieldElement, b: &BinaryFieldElement) -> BinaryFieldElement {
        self.reduce(&a.mul(b))
    }

    /// Field squaring.
    pub fn square(&self, a: &BinaryFieldElement) -> BinaryFieldElement {
        self.mul(a, a)
    }

    /// Multiplicative inverse via the polynomial extended-Euclidean
    /// algorithm: degrees are reduced with shifted XORs while the Bézout
    /// coefficient of the input is tracked alongside.
    ///
    /// Errors with [`Error::NonInvertible`] for the zero element, or when
    /// the input shares a nontrivial factor with the modulus (impossible for
    /// an irreducible modulus and nonzero input).
    pub fn inv(&self, a: &BinaryFieldElement) -> Result<BinaryFieldElement> {
        let mut u = self.reduce(a);
        if u.is_zero() {
            return Err(Error::NonInvertible {
                context: "binary field inversion of zero",
            });
        }
        let mut v = self.modulus.clone();
        let mut g1 = BinaryFieldElement::one();
        let mut g2 = BinaryFieldElement::zero();

        // Invariant: g1 * a = u and g2 * a = v, modulo the reduction
        // polynomial. Terminates because max(deg u, deg v) strictly
        // decreases every two iterations.
        while !u.is_one() {
            let du = match u.degree() {
                Some(d) => d,
                // gcd(a, modulus) != 1
                None => {
                    return Err(Error::NonInvertible {
                        context: "binary field inversion: input shares a factor with the modulus",
                    })
                }
            };
            let dv = match v.degree() {
                Some(d) => d,
                None => {
                    return Err(Error::NonInvertible {
                        context: "binary field inversion: input shares a factor with the modulus",
                    })
                }
            };
            if du < dv {
                std::mem::swap(&mut u, &mut v);
                std::mem::swap(&mut g1, &mut g2);
                continue;
            }
            let j = du - dv;
            u.xor_assign(&v.shl(j));
            g1.xor_assign(&g2.shl(j));
        }
        Ok(self.reduce(&g1))
    }
}
