use dashu::integer::{fast_div::ConstDivisor, modular::IntoRing, UBig};

use crate::*;

pub struct Curve;

impl Curve {
    /// ### Curve order 𝑁
    ///
    /// 0xfffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141
    ///
    /// Order of the cyclic group generated by the base point 𝐺. Every valid
    /// private key is a scalar in `[1, 𝑁)`, and all scalar arithmetic in the
    /// ECDSA layer is performed modulo 𝑁.
    pub const N: [u8; 32] = [
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xfe, 0xba, 0xae, 0xdc, 0xe6, 0xaf, 0x48, 0xa0, 0x3b, 0xbf, 0xd2, 0x5e, 0x8c, 0xd0, 0x36,
        0x41, 0x41,
    ];

    /// ### Curve order 𝑁/2
    ///
    /// 0x7fffffffffffffffffffffffffffffff5d576e7357a4501ddfe92f46681b20a0
    ///
    /// Precomputed half order, used for the high-S check when normalizing
    /// signatures per BIP 62.
    pub const N_DIV_2: [u8; 32] = [
        0x7f, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0x5d, 0x57, 0x6e, 0x73, 0x57, 0xa4, 0x50, 0x1d, 0xdf, 0xe9, 0x2f, 0x46, 0x68, 0x1b,
        0x20, 0xa0,
    ];

    /// ### Field prime modulus 𝑃
    ///
    /// 0xfffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f
    ///
    /// The prime defining the finite field over which secp256k1 is defined.
    /// All coordinate arithmetic is performed modulo this prime.
    pub const P: [u8; 32] = [
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfe, 0xff, 0xff,
        0xfc, 0x2f,
    ];

    /// ### (𝑃+1)/4
    ///
    /// 0x3fffffffffffffffffffffffffffffffffffffffffffffffffffffffbfffff0c
    ///
    /// Square-root exponent. Since 𝑃 ≡ 3 (mod 4), `a^((𝑃+1)/4)` is a square
    /// root of `a` whenever one exists.
    pub const P_1_4: [u8; 32] = [
        0x3f, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xbf, 0xff,
        0xff, 0x0c,
    ];

    /// Coefficient `a` of the short Weierstrass equation `y² = x³ + ax + b`.
    pub const A: u8 = 0;

    /// Coefficient `b` of the short Weierstrass equation `y² = x³ + ax + b`.
    pub const B: u8 = 7;

    /// Cofactor of the curve group.
    pub const H: u8 = 1;

    /// ### Generator point 𝐺
    ///
    /// 𝐺.𝑋: 0x79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798
    /// 𝐺.𝑌: 0x483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8
    ///
    /// The fixed base point of the group. Public keys are scalar multiples
    /// of this point.
    pub const G: UncompressedPoint = UncompressedPoint([
        0x79, 0xBE, 0x66, 0x7E, 0xF9, 0xDC, 0xBB, 0xAC, 0x55, 0xA0, 0x62, 0x95, 0xCE, 0x87, 0x0B,
        0x07, 0x02, 0x9B, 0xFC, 0xDB, 0x2D, 0xCE, 0x28, 0xD9, 0x59, 0xF2, 0x81, 0x5B, 0x16, 0xF8,
        0x17, 0x98, 0x48, 0x3A, 0xDA, 0x77, 0x26, 0xA3, 0xC4, 0x65, 0x5D, 0xA4, 0xFB, 0xFC, 0x0E,
        0x11, 0x08, 0xA8, 0xFD, 0x17, 0xB4, 0x48, 0xA6, 0x85, 0x54, 0x19, 0x9C, 0x47, 0xD0, 0x8F,
        0xFB, 0x10, 0xD4, 0xB8,
    ]);

    /// Field prime as a big integer.
    pub fn p() -> UBig {
        UBig::from_be_bytes(&Self::P)
    }

    /// Group order as a big integer.
    pub fn n() -> UBig {
        UBig::from_be_bytes(&Self::N)
    }

    /// Half the group order, the low-S boundary.
    pub fn half_n() -> UBig {
        UBig::from_be_bytes(&Self::N_DIV_2)
    }

    /// Fixed-width big-endian export. Values must already be reduced below
    /// 2²⁵⁶; smaller values are left-padded with zeros.
    pub fn to_be_32(value: &UBig) -> [u8; 32] {
        let raw = value.to_be_bytes();
        let raw = raw.as_ref();
        let mut out = [0u8; 32];
        out[32 - raw.len()..].copy_from_slice(raw);
        out
    }

    /// ### Add mod 𝑁
    ///
    /// Adds two scalars modulo the curve order 𝑁.
    pub fn add_mod_n(a: &UBig, b: &UBig) -> UBig {
        (a + b) % Self::n()
    }

    /// ### Mul mod 𝑁
    ///
    /// Multiplies two scalars modulo the curve order 𝑁.
    pub fn mul_mod_n(a: &UBig, b: &UBig) -> UBig {
        (a * b) % Self::n()
    }

    /// ### Add mod 𝑃
    ///
    /// Adds two field elements modulo the field prime 𝑃.
    pub fn add_mod_p(a: &UBig, b: &UBig) -> UBig {
        (a + b) % Self::p()
    }

    /// ### Sub mod 𝑃
    ///
    /// Subtracts `b` from `a` modulo the field prime 𝑃. Both inputs must be
    /// reduced field elements, so `a + 𝑃` always dominates `b`.
    pub fn sub_mod_p(a: &UBig, b: &UBig) -> UBig {
        (a + Self::p() - b) % Self::p()
    }

    /// ### Mul mod 𝑃
    ///
    /// Multiplies two field elements modulo the field prime 𝑃.
    pub fn mul_mod_p(a: &UBig, b: &UBig) -> UBig {
        (a * b) % Self::p()
    }

    /// ### Modular inverse mod 𝑁
    ///
    /// Multiplicative inverse of `k` modulo the curve order. Returns zero for
    /// an input with no inverse (only zero itself, as 𝑁 is prime); callers
    /// must treat a zero result as "undefined".
    pub fn mod_inv_n(k: &UBig) -> UBig {
        let ring = ConstDivisor::new(Self::n());
        match ring.reduce(k.clone()).inv() {
            Some(inverse) => inverse.residue(),
            None => UBig::ZERO,
        }
    }

    /// ### Modular inverse mod 𝑃
    ///
    /// Multiplicative inverse of `k` modulo the field prime, zero when no
    /// inverse exists.
    pub fn mod_inv_p(k: &UBig) -> UBig {
        let ring = ConstDivisor::new(Self::p());
        match ring.reduce(k.clone()).inv() {
            Some(inverse) => inverse.residue(),
            None => UBig::ZERO,
        }
    }

    /// ### Square root mod 𝑃
    ///
    /// Computes `a^((𝑃+1)/4) mod 𝑃` and verifies the candidate actually
    /// squares back to `a`. Returns `None` when `a` is not a quadratic
    /// residue, which is how an off-curve x-coordinate surfaces during
    /// public key decompression.
    pub fn sqrt_p(a: &UBig) -> Option<UBig> {
        let root = Self::sqrt_p_unchecked(a);
        if (&root * &root) % Self::p() == a % Self::p() {
            Some(root)
        } else {
            None
        }
    }

    /// The `(𝑃+1)/4` exponentiation alone, with no residue check. The
    /// result is a square root of `a` only when one exists.
    pub fn sqrt_p_unchecked(a: &UBig) -> UBig {
        let divisor = ConstDivisor::new(Self::p());
        (a % Self::p())
            .into_ring(&divisor)
            .pow(&UBig::from_be_bytes(&Self::P_1_4))
            .residue()
    }
}
