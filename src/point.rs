use dashu::base::BitTest;
use dashu::integer::UBig;

use crate::*;

/// Affine curve point. `(0, 0)` is the additive identity; every other
/// value is expected to satisfy `y² ≡ x³ + 7 (mod 𝑃)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Point {
    pub x: UBig,
    pub y: UBig,
}

/// Projective point `(X, Y, Z)` standing for the affine point
/// `(X/Z², Y/Z³)`. Used only inside the arithmetic layer so that group
/// operations need no per-step modular inverse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JacobianPoint {
    pub x: UBig,
    pub y: UBig,
    pub z: UBig,
}

impl Point {
    /// The additive identity, `(0, 0)`.
    pub fn identity() -> Self {
        Self {
            x: UBig::ZERO,
            y: UBig::ZERO,
        }
    }

    pub fn is_identity(&self) -> bool {
        self.x == UBig::ZERO && self.y == UBig::ZERO
    }

    /// The base point 𝐺.
    pub fn generator() -> Self {
        Self::from(&Curve::G)
    }

    /// Checks `y² ≡ x³ + 7 (mod 𝑃)`. The identity is not on the curve.
    pub fn is_on_curve(&self) -> bool {
        if self.is_identity() {
            return false;
        }
        let p = Curve::p();
        let lhs = (&self.y * &self.y) % &p;
        let rhs = (self.x.clone().pow(3) + UBig::from_word(Curve::B as u64)) % &p;
        lhs == rhs
    }

    /// Maps `(x, y)` to `(x, (−y) mod 𝑃)`.
    pub fn negate(&self) -> Self {
        if self.is_identity() {
            return self.clone();
        }
        Self {
            x: self.x.clone(),
            y: Curve::sub_mod_p(&UBig::ZERO, &self.y),
        }
    }

    pub fn add(&self, other: &Self) -> Self {
        self.to_jacobian().add(&other.to_jacobian()).to_affine()
    }

    pub fn double(&self) -> Self {
        self.to_jacobian().double().to_affine()
    }

    /// Scalar multiplication `k·P`. The scalar is reduced modulo 𝑁 first.
    pub fn mul(&self, k: &UBig) -> Self {
        self.to_jacobian().mul(k).to_affine()
    }

    /// Scalar multiplication of the base point, `k·𝐺`.
    pub fn generator_mul(k: &UBig) -> Self {
        Self::generator().mul(k)
    }

    pub fn to_jacobian(&self) -> JacobianPoint {
        JacobianPoint {
            x: self.x.clone(),
            y: self.y.clone(),
            z: UBig::ONE,
        }
    }

    /// ### Point recovery from an ECDSA signature
    ///
    /// Reconstructs the public point `Q = r⁻¹·(s·R − e·𝐺)` from `(r, s)`,
    /// the message digest integer `e`, and a recovery id. The low recid bit
    /// selects the parity of R's 𝑌-coordinate. Bit 1, which would indicate
    /// an r value that wrapped past 𝑁, is accepted but not acted on; the
    /// wrap case is astronomically rare on secp256k1 and common
    /// implementations ignore it the same way.
    pub fn recover(r: &UBig, s: &UBig, e: &UBig, recid: u8) -> Result<Self, Secp256k1Error> {
        if *r == UBig::ZERO || *s == UBig::ZERO {
            return Err(Secp256k1Error::InvalidSignature);
        }
        let mut sec1 = [0u8; 33];
        sec1[0] = SEC1_OCTET_COMPRESSED_EVEN + (recid & 1);
        sec1[1..].copy_from_slice(&Curve::to_be_32(r));
        let big_r = UncompressedPoint::try_from(CompressedPoint(sec1))?;

        let n = Curve::n();
        let r_inv = Curve::mod_inv_n(r);
        let u1 = Curve::mul_mod_n(s, &r_inv);
        let e_neg = (&n - e % &n) % &n;
        let u2 = Curve::mul_mod_n(&e_neg, &r_inv);

        let q = Point::from(&big_r)
            .to_jacobian()
            .mul(&u1)
            .add(&Point::generator().to_jacobian().mul(&u2));
        Ok(q.to_affine())
    }
}

impl From<&UncompressedPoint> for Point {
    fn from(point: &UncompressedPoint) -> Self {
        Self {
            x: UBig::from_be_bytes(&point.x()),
            y: UBig::from_be_bytes(&point.y()),
        }
    }
}

impl JacobianPoint {
    /// The additive identity, `(0, 0, 1)`.
    pub fn identity() -> Self {
        Self {
            x: UBig::ZERO,
            y: UBig::ZERO,
            z: UBig::ONE,
        }
    }

    /// Any point with `X = Y = 0` stands for the identity; doubling leaves
    /// such points with `Z = 0` and both shapes must be treated alike.
    pub fn is_identity(&self) -> bool {
        self.x == UBig::ZERO && self.y == UBig::ZERO
    }

    /// ### Jacobian addition
    ///
    /// `u1 = X₁·Z₂², u2 = X₂·Z₁², s1 = Y₁·Z₂³, s2 = Y₂·Z₁³`. Matching
    /// x-classes delegate to doubling when the y-classes also match and
    /// collapse to the identity otherwise (adding P and −P).
    pub fn add(&self, other: &Self) -> Self {
        if self.is_identity() {
            return other.clone();
        }
        if other.is_identity() {
            return self.clone();
        }

        let z1z1 = Curve::mul_mod_p(&self.z, &self.z);
        let z2z2 = Curve::mul_mod_p(&other.z, &other.z);
        let u1 = Curve::mul_mod_p(&self.x, &z2z2);
        let u2 = Curve::mul_mod_p(&other.x, &z1z1);
        let s1 = Curve::mul_mod_p(&self.y, &Curve::mul_mod_p(&other.z, &z2z2));
        let s2 = Curve::mul_mod_p(&other.y, &Curve::mul_mod_p(&self.z, &z1z1));

        if u1 == u2 {
            if s1 != s2 {
                return Self::identity();
            }
            return self.double();
        }

        let h = Curve::sub_mod_p(&u2, &u1);
        let h2 = Curve::mul_mod_p(&h, &h);
        let h3 = Curve::mul_mod_p(&h2, &h);
        let r = Curve::sub_mod_p(&s2, &s1);
        let v = Curve::mul_mod_p(&u1, &h2);

        // X₃ = r² − h³ − 2v, Y₃ = r·(v − X₃) − s1·h³, Z₃ = h·Z₁·Z₂
        let r2 = Curve::mul_mod_p(&r, &r);
        let x = Curve::sub_mod_p(&Curve::sub_mod_p(&r2, &h3), &Curve::add_mod_p(&v, &v));
        let y = Curve::sub_mod_p(
            &Curve::mul_mod_p(&r, &Curve::sub_mod_p(&v, &x)),
            &Curve::mul_mod_p(&s1, &h3),
        );
        let z = Curve::mul_mod_p(&h, &Curve::mul_mod_p(&self.z, &other.z));

        Self { x, y, z }
    }

    /// ### Jacobian doubling
    ///
    /// `ysq = Y², s = 4·X·ysq, m = 3·X²` (the `a·Z⁴` term vanishes since
    /// `a = 0`), then `X' = m² − 2s`, `Y' = m·(s − X') − 8·ysq²`,
    /// `Z' = 2·Y·Z`. The identity doubles to `(0, 0, 0)`.
    pub fn double(&self) -> Self {
        let ysq = Curve::mul_mod_p(&self.y, &self.y);
        let s = Curve::mul_mod_p(
            &UBig::from_word(4),
            &Curve::mul_mod_p(&self.x, &ysq),
        );
        let m = Curve::mul_mod_p(&UBig::from_word(3), &Curve::mul_mod_p(&self.x, &self.x));

        let x = Curve::sub_mod_p(&Curve::mul_mod_p(&m, &m), &Curve::add_mod_p(&s, &s));
        let ysq2 = Curve::mul_mod_p(&ysq, &ysq);
        let y = Curve::sub_mod_p(
            &Curve::mul_mod_p(&m, &Curve::sub_mod_p(&s, &x)),
            &Curve::mul_mod_p(&UBig::from_word(8), &ysq2),
        );
        let z = Curve::mul_mod_p(
            &UBig::from_word(2),
            &Curve::mul_mod_p(&self.y, &self.z),
        );

        Self { x, y, z }
    }

    /// ### Double-and-add scalar multiplication
    ///
    /// Iterates the bits of `k mod 𝑁` from the most significant down.
    /// `0·P` and `k·identity` give the identity, `1·P` gives P back.
    /// This walk is not constant-time.
    pub fn mul(&self, k: &UBig) -> Self {
        let k = k % Curve::n();
        if k == UBig::ZERO || self.is_identity() {
            return Self::identity();
        }
        if k == UBig::ONE {
            return self.clone();
        }

        let mut acc = Self::identity();
        for i in (0..k.bit_len()).rev() {
            acc = acc.double();
            if k.bit(i) {
                acc = acc.add(self);
            }
        }
        acc
    }

    /// Converts back to affine coordinates, dividing by Z² and Z³.
    pub fn to_affine(&self) -> Point {
        if self.is_identity() || self.z == UBig::ZERO {
            return Point::identity();
        }
        let z_inv = Curve::mod_inv_p(&self.z);
        let z_inv2 = Curve::mul_mod_p(&z_inv, &z_inv);
        Point {
            x: Curve::mul_mod_p(&self.x, &z_inv2),
            y: Curve::mul_mod_p(&self.y, &Curve::mul_mod_p(&z_inv2, &z_inv)),
        }
    }
}
