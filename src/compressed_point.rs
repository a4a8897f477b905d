use core::fmt::{Debug, Formatter};

use crate::*;

pub const SEC1_OCTET_COMPRESSED_EVEN: u8 = 0x02;
pub const SEC1_OCTET_COMPRESSED_ODD: u8 = 0x03;

/// Compressed SEC1 point: a parity prefix octet followed by the 32-byte
/// 𝑋-coordinate.
#[derive(PartialEq, Eq, Clone)]
pub struct CompressedPoint(pub [u8; Self::SIZE]);

impl Secp256k1Point for CompressedPoint {
    const SIZE: usize = 33;

    fn is_odd(&self) -> bool {
        self.0[0] == SEC1_OCTET_COMPRESSED_ODD
    }

    fn is_even(&self) -> bool {
        self.0[0] == SEC1_OCTET_COMPRESSED_EVEN
    }

    fn x(&self) -> [u8; 32] {
        let mut x = [0u8; 32];
        x.copy_from_slice(&self.0[1..]);
        x
    }

    fn y(&self) -> [u8; 32] {
        // Raise X to an uncompressed point, then match our stored parity.
        let mut p = UncompressedPoint::lift_x_unchecked(&self.x());
        if p.is_even() != self.is_even() {
            p.invert()
        }
        p.y()
    }

    fn lift_x(x: &[u8; 32]) -> Result<Self, Secp256k1Error> {
        Ok(UncompressedPoint::lift_x(x)?.into())
    }

    fn lift_x_unchecked(x: &[u8; 32]) -> Self {
        UncompressedPoint::lift_x_unchecked(x).into()
    }

    fn invert(&mut self) {
        self.0[0] = self.is_even() as u8 + SEC1_OCTET_COMPRESSED_EVEN;
    }
}

impl Debug for CompressedPoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02X}", byte)?;
        }
        Ok(())
    }
}

impl From<UncompressedPoint> for CompressedPoint {
    fn from(p: UncompressedPoint) -> Self {
        let mut out = [0u8; 33];
        out[0] = p.is_odd() as u8 + SEC1_OCTET_COMPRESSED_EVEN;
        out[1..].copy_from_slice(&p.x());
        Self(out)
    }
}

impl From<[u8; 65]> for CompressedPoint {
    fn from(p: [u8; 65]) -> Self {
        UncompressedPoint::from(p).into()
    }
}

impl TryFrom<[u8; 32]> for CompressedPoint {
    type Error = Secp256k1Error;

    /// Derives the public point of a 32-byte secret scalar.
    fn try_from(scalar: [u8; 32]) -> Result<Self, Secp256k1Error> {
        Ok(UncompressedPoint::try_from(scalar)?.into())
    }
}
