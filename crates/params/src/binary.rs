//! Constants for curves over binary extension fields GF(2^m)
//!
//! Source: SEC 2 v2 (<http://www.secg.org/sec2-v2.pdf>), curve sect163k1
//! (NIST K-163). Field elements are bit-polynomials; their hexadecimal form
//! maps integer bit i to the coefficient of x^i.

/// K-163 field extension degree m
pub const K163_DEGREE: usize = 163;

/// K-163 reduction polynomial x^163 + x^7 + x^6 + x^3 + 1,
/// given as the exponents of its nonzero terms
pub const K163_REDUCTION_POLY: [usize; 5] = [163, 7, 6, 3, 0];

/// K-163 curve coefficient a = 1 (y^2 + xy = x^3 + a*x^2 + b)
pub const K163_A: &str = "1";

/// K-163 curve coefficient b = 1
pub const K163_B: &str = "1";

/// K-163 base point, x coordinate
pub const K163_GX: &str = "02fe13c0537bbc11acaa07d793de4e6d5e5c94eee8";

/// K-163 base point, y coordinate
pub const K163_GY: &str = "0289070fb05d38ff58321f2e800536d538ccdaa3d9";

/// K-163 base point order n
pub const K163_N: &str = "04000000000000000000020108a2e0cc0d99f8a5ef";

/// K-163 cofactor
pub const K163_H: u32 = 2;
