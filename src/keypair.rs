use core::fmt::{Debug, Formatter};

use dashu::integer::UBig;
use rand::rngs::OsRng;
use rand::RngCore;

use crate::*;

/// A secp256k1 keypair value: the affine public point, the optional
/// 32-byte secret scalar, and the preferred public-key serialization form.
///
/// The point and scalar are fixed at construction. Keys built from public
/// bytes carry no secret and can only verify or be recovered against.
#[derive(Clone, PartialEq, Eq)]
pub struct Keypair {
    point: Point,
    secret: Option<[u8; 32]>,
    pub compressed: bool,
}

impl Keypair {
    /// ### Generate
    ///
    /// Draws 32-byte candidates from the operating system's secure source
    /// until one lands in `[1, 𝑁)`, then derives the public point `d·𝐺`.
    pub fn generate() -> Self {
        let mut rng = OsRng;
        let mut secret = [0u8; 32];
        loop {
            rng.fill_bytes(&mut secret);
            let d = UBig::from_be_bytes(&secret);
            if d != UBig::ZERO && d < Curve::n() {
                return Self {
                    point: Point::generator_mul(&d),
                    secret: Some(secret),
                    compressed: true,
                };
            }
        }
    }

    /// ### From secret key
    ///
    /// Imports a 32-byte big-endian scalar, rejecting zero and anything at
    /// or above the group order, and derives the public point.
    pub fn from_secret_key(secret: &[u8; 32]) -> Result<Self, Secp256k1Error> {
        let d = UBig::from_be_bytes(secret);
        if d == UBig::ZERO || d >= Curve::n() {
            return Err(Secp256k1Error::InvalidSecretKey);
        }
        Ok(Self {
            point: Point::generator_mul(&d),
            secret: Some(*secret),
            compressed: true,
        })
    }

    /// ### From public key
    ///
    /// Accepts 33-byte compressed (`0x02`/`0x03` prefix) or 65-byte
    /// uncompressed (`0x04` prefix) SEC1 bytes. The result carries no
    /// secret; `compressed` mirrors the input form.
    pub fn from_public_key(bytes: &[u8]) -> Result<Self, Secp256k1Error> {
        match (bytes.first(), bytes.len()) {
            (Some(&SEC1_OCTET_COMPRESSED_EVEN | &SEC1_OCTET_COMPRESSED_ODD), 33) => {
                let mut raw = [0u8; 33];
                raw.copy_from_slice(bytes);
                let uncompressed = UncompressedPoint::try_from(CompressedPoint(raw))?;
                Ok(Self {
                    point: Point::from(&uncompressed),
                    secret: None,
                    compressed: true,
                })
            }
            (Some(&SEC1_OCTET_UNCOMPRESSED), 65) => {
                let mut raw = [0u8; 64];
                raw.copy_from_slice(&bytes[1..]);
                let point = Point::from(&UncompressedPoint(raw));
                if !point.is_on_curve() {
                    return Err(Secp256k1Error::InvalidPublicKey);
                }
                Ok(Self {
                    point,
                    secret: None,
                    compressed: false,
                })
            }
            _ => Err(Secp256k1Error::InvalidPublicKey),
        }
    }

    /// Wraps an already-computed point, as produced by signature recovery.
    pub fn from_point(point: Point, compressed: bool) -> Self {
        Self {
            point,
            secret: None,
            compressed,
        }
    }

    pub fn public_point(&self) -> &Point {
        &self.point
    }

    /// The bare 32-byte big-endian secret scalar, if this key holds one.
    pub fn to_secret_key(&self) -> Option<[u8; 32]> {
        self.secret
    }

    /// SEC1 public key bytes in this key's preferred form: 33 bytes when
    /// `compressed`, 65 bytes otherwise.
    pub fn to_public_key(&self) -> Vec<u8> {
        let uncompressed = UncompressedPoint::from(&self.point);
        if self.compressed {
            CompressedPoint::from(uncompressed).0.to_vec()
        } else {
            uncompressed.to_sec1_bytes().to_vec()
        }
    }
}

impl Debug for Keypair {
    /// Formats the public half only; the secret scalar never leaves through
    /// `Debug`.
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "Keypair(")?;
        for byte in self.to_public_key() {
            write!(f, "{:02X}", byte)?;
        }
        write!(f, ")")
    }
}

impl TryFrom<&[u8]> for Keypair {
    type Error = Secp256k1Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::from_public_key(bytes)
    }
}

impl TryFrom<[u8; 32]> for Keypair {
    type Error = Secp256k1Error;

    fn try_from(secret: [u8; 32]) -> Result<Self, Self::Error> {
        Self::from_secret_key(&secret)
    }
}
