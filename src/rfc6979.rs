use dashu::integer::UBig;
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::*;

type HmacSha256 = Hmac<Sha256>;

/// Upper bound on nonce candidates per signature. Running past it means
/// the generator state is broken, which is a fatal invariant violation.
pub const MAX_NONCE_ATTEMPTS: usize = 1000;

/// Deterministic nonce generator per RFC 6979 over HMAC-SHA-256.
///
/// Seeding starts from `V = 0x01 × 32`, `K = 0x00 × 32` and runs the two
/// keying rounds in order. Each [`Self::next_candidate`] steps
/// `V = HMAC(K, V)` and exposes `V` as a 256-bit big-endian integer; the
/// signing loop calls [`Self::refresh`] after every rejected candidate.
pub struct NonceGenerator {
    k: [u8; 32],
    v: [u8; 32],
}

impl NonceGenerator {
    pub fn new(secret: &[u8; 32], digest: &[u8]) -> Self {
        let mut generator = Self {
            k: [0u8; 32],
            v: [1u8; 32],
        };
        generator.seed(0x00, secret, digest);
        generator.seed(0x01, secret, digest);
        generator
    }

    fn seed(&mut self, tag: u8, secret: &[u8; 32], digest: &[u8]) {
        self.k = hmac_sha256(&self.k, &[&self.v, &[tag], secret, digest]);
        self.v = hmac_sha256(&self.k, &[&self.v]);
    }

    pub fn next_candidate(&mut self) -> UBig {
        self.v = hmac_sha256(&self.k, &[&self.v]);
        UBig::from_be_bytes(&self.v)
    }

    /// The standard rejection step: `K = HMAC(K, V ‖ 0x00)`, then
    /// `V = HMAC(K, V)`.
    pub fn refresh(&mut self) {
        self.k = hmac_sha256(&self.k, &[&self.v, &[0x00]]);
        self.v = hmac_sha256(&self.k, &[&self.v]);
    }
}

fn hmac_sha256(key: &[u8; 32], parts: &[&[u8]]) -> [u8; 32] {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC can take any size key");
    for part in parts {
        mac.update(part);
    }
    mac.finalize().into_bytes().into()
}
