//! Constants for curves over large-prime fields
//!
//! Sources: NIST "Mathematical routines for the NIST prime elliptic curves"
//! and SEC 2 v2 (<http://www.secg.org/sec2-v2.pdf>). All values are
//! big-endian hexadecimal.

/// NIST P-256 field modulus p = 2^256 - 2^224 + 2^192 + 2^96 - 1
pub const P256_P: &str = "ffffffff00000001000000000000000000000000ffffffffffffffffffffffff";

/// NIST P-256 curve coefficient a = -3 mod p
pub const P256_A: &str = "ffffffff00000001000000000000000000000000fffffffffffffffffffffffc";

/// NIST P-256 curve coefficient b
pub const P256_B: &str = "5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b";

/// NIST P-256 base point, x coordinate
pub const P256_GX: &str = "6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296";

/// NIST P-256 base point, y coordinate
pub const P256_GY: &str = "4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5";

/// NIST P-256 base point order n
pub const P256_N: &str = "ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551";

/// NIST P-256 cofactor
pub const P256_H: u32 = 1;

/// secp256k1 field modulus p = 2^256 - 2^32 - 977
pub const SECP256K1_P: &str = "fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f";

/// secp256k1 curve coefficient a = 0
pub const SECP256K1_A: &str = "0";

/// secp256k1 curve coefficient b = 7
pub const SECP256K1_B: &str = "7";

/// secp256k1 base point, x coordinate
pub const SECP256K1_GX: &str = "79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798";

/// secp256k1 base point, y coordinate
pub const SECP256K1_GY: &str = "483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8";

/// secp256k1 base point order n
pub const SECP256K1_N: &str = "fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141";

/// secp256k1 cofactor
pub const SECP256K1_H: u32 = 1;
