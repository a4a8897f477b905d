use base64ct::{Base64, Encoding as Base64Variant};
use dashu::base::BitTest;
use dashu::integer::UBig;
use sha2::{Digest, Sha256, Sha384, Sha512};

use crate::*;

/// Message digest selection for signing, verification and recovery.
///
/// With `None` the message bytes are used verbatim as the digest. The full
/// digest always becomes the integer `e`, with no bit-length truncation for
/// SHA-384/512. This deviates from FIPS 186-4 and is kept for wire
/// compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HashAlg {
    #[default]
    Sha256,
    Sha384,
    Sha512,
    None,
}

impl HashAlg {
    pub fn digest(&self, message: &[u8]) -> Vec<u8> {
        match self {
            Self::Sha256 => Sha256::digest(message).to_vec(),
            Self::Sha384 => Sha384::digest(message).to_vec(),
            Self::Sha512 => Sha512::digest(message).to_vec(),
            Self::None => message.to_vec(),
        }
    }
}

/// Transport encoding applied to serialized signatures: lowercase hex or
/// standard padded base64. Hex decoding is case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransportEncoding {
    #[default]
    None,
    Hex,
    Base64,
}

impl TransportEncoding {
    pub fn encode(&self, bytes: &[u8]) -> Vec<u8> {
        match self {
            Self::None => bytes.to_vec(),
            Self::Hex => hex::encode(bytes).into_bytes(),
            Self::Base64 => Base64::encode_string(bytes).into_bytes(),
        }
    }

    pub fn decode(&self, bytes: &[u8]) -> Result<Vec<u8>, Secp256k1Error> {
        match self {
            Self::None => Ok(bytes.to_vec()),
            Self::Hex => hex::decode(bytes).map_err(|_| Secp256k1Error::InvalidEncoding),
            Self::Base64 => {
                let text =
                    core::str::from_utf8(bytes).map_err(|_| Secp256k1Error::InvalidEncoding)?;
                Base64::decode_vec(text).map_err(|_| Secp256k1Error::InvalidEncoding)
            }
        }
    }
}

/// Options for [`sign`] and [`sign_recoverable`].
#[derive(Debug, Clone, Copy)]
pub struct SignOptions {
    pub hash: HashAlg,
    /// Apply low-S normalization (BIP 62). On by default.
    pub normalize: bool,
    /// Serialize as 65-byte compact instead of DER.
    pub compact: bool,
    pub encoding: TransportEncoding,
    /// Override for the key's compressed preference, used by the compact
    /// prefix byte.
    pub compressed: Option<bool>,
}

impl Default for SignOptions {
    fn default() -> Self {
        Self {
            hash: HashAlg::default(),
            normalize: true,
            compact: false,
            encoding: TransportEncoding::default(),
            compressed: None,
        }
    }
}

/// Options for [`verify`].
#[derive(Debug, Clone, Copy, Default)]
pub struct VerifyOptions {
    pub hash: HashAlg,
    pub encoding: TransportEncoding,
}

/// Options for [`recover`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RecoverOptions {
    pub hash: HashAlg,
    pub encoding: TransportEncoding,
    /// Recovery id for signatures that do not carry one (DER).
    pub recovery_id: Option<u8>,
}

/// Fresh random keypair from the operating system's secure source.
pub fn generate_keypair() -> Keypair {
    Keypair::generate()
}

/// ### Sign
///
/// Deterministic ECDSA: digest the message, derive the nonce per RFC 6979,
/// normalize unless told otherwise, then serialize (DER by default,
/// compact on request) and apply the transport encoding.
pub fn sign(
    message: &[u8],
    keypair: &Keypair,
    options: &SignOptions,
) -> Result<Vec<u8>, Secp256k1Error> {
    let (bytes, _) = sign_with_recovery(message, keypair, options)?;
    Ok(bytes)
}

/// ### Sign, returning the recovery id
///
/// Same pipeline as [`sign`]; the second element of the pair is the
/// recovery id matching the serialized signature.
pub fn sign_recoverable(
    message: &[u8],
    keypair: &Keypair,
    options: &SignOptions,
) -> Result<(Vec<u8>, u8), Secp256k1Error> {
    sign_with_recovery(message, keypair, options)
}

fn sign_with_recovery(
    message: &[u8],
    keypair: &Keypair,
    options: &SignOptions,
) -> Result<(Vec<u8>, u8), Secp256k1Error> {
    let secret = keypair
        .to_secret_key()
        .ok_or(Secp256k1Error::InvalidSecretKey)?;
    let digest = options.hash.digest(message);
    let mut signature = sign_digest(&digest, &secret);

    if options.normalize {
        signature.normalize();
    }
    let recid = match signature.recid {
        Some(recid) => recid,
        None => unreachable!("signing always assigns a recovery id"),
    };

    let serialized = if options.compact {
        let compressed = options.compressed.unwrap_or(keypair.compressed);
        signature.to_compact(None, compressed).to_vec()
    } else {
        signature.to_der()
    };
    Ok((options.encoding.encode(&serialized), recid))
}

/// RFC 6979 signing loop over an already-computed digest. Candidates
/// outside `(0, 𝑁)` and trial signatures with a zero `r` or `s` are
/// rejected and the generator refreshed.
///
/// # Panics
///
/// Panics after [`MAX_NONCE_ATTEMPTS`] rejected candidates; reaching the
/// cap is impossible for an intact generator.
fn sign_digest(digest: &[u8], secret: &[u8; 32]) -> Signature {
    let d = UBig::from_be_bytes(secret);
    let e = UBig::from_be_bytes(digest);
    let n = Curve::n();

    let mut nonces = NonceGenerator::new(secret, digest);
    for _ in 0..MAX_NONCE_ATTEMPTS {
        let t = nonces.next_candidate();
        if t > UBig::ZERO && t < n {
            let q = Point::generator_mul(&t);
            let r = &q.x % &n;
            let s = Curve::mul_mod_n(
                &Curve::mod_inv_n(&t),
                &Curve::add_mod_n(&e, &Curve::mul_mod_n(&r, &d)),
            );
            if r != UBig::ZERO && s != UBig::ZERO {
                let parity = q.y.bit(0) as u8;
                let recid = if q.x == r { parity } else { 2 | parity };
                return Signature {
                    r,
                    s,
                    recid: Some(recid),
                };
            }
        }
        nonces.refresh();
    }
    panic!("deterministic nonce generation exhausted {MAX_NONCE_ATTEMPTS} attempts");
}

/// ### Verify
///
/// Decodes and parses the signature, then checks
/// `((e·s⁻¹)·𝐺 + (r·s⁻¹)·Q).x ≡ r (mod 𝑁)`.
///
/// A signature that does not decode or parse is an `Err`; a well-formed
/// signature that does not match the message and key is `Ok(false)`.
pub fn verify(
    signature: &[u8],
    message: &[u8],
    keypair: &Keypair,
    options: &VerifyOptions,
) -> Result<bool, Secp256k1Error> {
    let raw = options.encoding.decode(signature)?;
    let parsed = Signature::parse(&raw)?;
    let n = Curve::n();
    if parsed.r == UBig::ZERO || parsed.r >= n || parsed.s == UBig::ZERO || parsed.s >= n {
        return Ok(false);
    }

    let e = UBig::from_be_bytes(&options.hash.digest(message));
    let s_inv = Curve::mod_inv_n(&parsed.s);
    let u1 = Curve::mul_mod_n(&e, &s_inv);
    let u2 = Curve::mul_mod_n(&parsed.r, &s_inv);

    let candidate = Point::generator()
        .to_jacobian()
        .mul(&u1)
        .add(&keypair.public_point().to_jacobian().mul(&u2));
    if candidate.is_identity() {
        return Ok(false);
    }
    Ok(&candidate.to_affine().x % &n == parsed.r)
}

/// ### Recover
///
/// Reconstructs the signer's public key from a signature and the message.
/// Compact signatures carry their recovery id; DER signatures need
/// `recovery_id` supplied in the options. A compact prefix below 31 (the
/// uncompressed family) clears the `compressed` preference on the result.
///
/// # Panics
///
/// Panics when no recovery id is available, or the id lies outside `0..=3`.
pub fn recover(
    signature: &[u8],
    message: &[u8],
    options: &RecoverOptions,
) -> Result<Keypair, Secp256k1Error> {
    let raw = options.encoding.decode(signature)?;
    let compressed = if raw.len() == COMPACT_SIZE && raw[0] != DER_SEQUENCE {
        Signature::compact_prefix_is_compressed(raw[0])
    } else {
        true
    };
    let mut parsed = Signature::parse(&raw)?;

    let recid = parsed
        .recid
        .or(options.recovery_id)
        .expect("recovery requires a recovery id");
    assert!(recid < 4, "recovery id {recid} out of range 0..=3");
    parsed.recid = Some(recid);
    parsed.normalize();

    let e = UBig::from_be_bytes(&options.hash.digest(message));
    let recid = match parsed.recid {
        Some(recid) => recid,
        None => unreachable!("recovery id was just assigned"),
    };
    let point = Point::recover(&parsed.r, &parsed.s, &e, recid)?;
    Ok(Keypair::from_point(point, compressed))
}

/// ### Shared secret
///
/// Raw ECDH: the 32-byte big-endian x-coordinate of `d·Q`, where `d` is
/// the local secret scalar and `Q` the peer's public point. No KDF is
/// applied. Symmetric in the two keypairs.
pub fn shared_secret(local: &Keypair, peer: &Keypair) -> Result<[u8; 32], Secp256k1Error> {
    let secret = local
        .to_secret_key()
        .ok_or(Secp256k1Error::InvalidSecretKey)?;
    let d = UBig::from_be_bytes(&secret);
    let shared = peer.public_point().mul(&d);
    Ok(Curve::to_be_32(&shared.x))
}
