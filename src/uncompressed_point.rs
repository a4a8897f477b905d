use core::fmt::{Debug, Formatter};

use dashu::integer::UBig;

use crate::*;

pub const SEC1_OCTET_UNCOMPRESSED: u8 = 0x04;

/// Uncompressed SEC1 point, stored as `X ‖ Y` without the `0x04` prefix.
/// [`Self::to_sec1_bytes`] produces the full 65-byte wire form.
#[derive(PartialEq, Eq, Clone, Copy)]
pub struct UncompressedPoint(pub [u8; Self::SIZE]);

impl Secp256k1Point for UncompressedPoint {
    const SIZE: usize = 64;

    fn is_odd(&self) -> bool {
        self.0[63] & 1 != 0
    }

    fn is_even(&self) -> bool {
        self.0[63] & 1 != 1
    }

    fn x(&self) -> [u8; 32] {
        let mut x = [0u8; 32];
        x.copy_from_slice(&self.0[..32]);
        x
    }

    fn y(&self) -> [u8; 32] {
        let mut y = [0u8; 32];
        y.copy_from_slice(&self.0[32..]);
        y
    }

    fn lift_x(x: &[u8; 32]) -> Result<Self, Secp256k1Error> {
        // y² = x³ + 7 mod 𝑃
        let p = Curve::p();
        let x_3 = (UBig::from_be_bytes(x).pow(3) + UBig::from_word(Curve::B as u64)) % &p;
        let y = Curve::sqrt_p(&x_3).ok_or(Secp256k1Error::InvalidYCoordinate)?;
        let mut x_y = [0u8; 64];
        x_y[..32].copy_from_slice(x);
        x_y[32..].copy_from_slice(&Curve::to_be_32(&y));
        Ok(Self(x_y))
    }

    fn lift_x_unchecked(x: &[u8; 32]) -> Self {
        // y² = x³ + 7 mod 𝑃
        let p = Curve::p();
        let x_3 = (UBig::from_be_bytes(x).pow(3) + UBig::from_word(Curve::B as u64)) % &p;
        let y = Curve::sqrt_p_unchecked(&x_3);
        let mut x_y = [0u8; 64];
        x_y[..32].copy_from_slice(x);
        x_y[32..].copy_from_slice(&Curve::to_be_32(&y));
        Self(x_y)
    }

    fn invert(&mut self) {
        let y = UBig::from_be_bytes(&self.y());
        let flipped = Curve::sub_mod_p(&UBig::ZERO, &y);
        self.0[32..].copy_from_slice(&Curve::to_be_32(&flipped));
    }
}

impl Debug for UncompressedPoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02X}", byte)?;
        }
        Ok(())
    }
}

impl UncompressedPoint {
    /// Full 65-byte SEC1 form, `0x04 ‖ X ‖ Y`.
    pub fn to_sec1_bytes(&self) -> [u8; 65] {
        let mut out = [0u8; 65];
        out[0] = SEC1_OCTET_UNCOMPRESSED;
        out[1..].copy_from_slice(&self.0);
        out
    }
}

impl From<&Point> for UncompressedPoint {
    fn from(point: &Point) -> Self {
        let mut out = [0u8; 64];
        out[..32].copy_from_slice(&Curve::to_be_32(&point.x));
        out[32..].copy_from_slice(&Curve::to_be_32(&point.y));
        Self(out)
    }
}

impl TryFrom<CompressedPoint> for UncompressedPoint {
    type Error = Secp256k1Error;

    fn try_from(x: CompressedPoint) -> Result<Self, Self::Error> {
        let mut point = UncompressedPoint::lift_x(&x.x())?;
        if point.is_odd() != x.is_odd() {
            point.invert();
        }
        Ok(point)
    }
}

impl From<[u8; 65]> for UncompressedPoint {
    fn from(p: [u8; 65]) -> Self {
        let mut s = [0u8; 64];
        s.copy_from_slice(&p[1..]);
        UncompressedPoint(s)
    }
}

impl TryFrom<[u8; 32]> for UncompressedPoint {
    type Error = Secp256k1Error;

    /// Derives the public point of a 32-byte secret scalar.
    fn try_from(scalar: [u8; 32]) -> Result<Self, Self::Error> {
        let d = UBig::from_be_bytes(&scalar);
        if d == UBig::ZERO || d >= Curve::n() {
            return Err(Secp256k1Error::InvalidSecretKey);
        }
        Ok(Self::from(&Point::generator_mul(&d)))
    }
}
