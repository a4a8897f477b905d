use dashu::integer::UBig;

use crate::*;

/// Wire size of a compact recoverable signature.
pub const COMPACT_SIZE: usize = 65;

/// DER SEQUENCE tag opening an ECDSA-Sig-Value.
pub const DER_SEQUENCE: u8 = 0x30;

/// DER INTEGER tag.
pub const DER_INTEGER: u8 = 0x02;

/// An ECDSA signature `(r, s)` with an optional recovery id.
///
/// A signature parsed from DER has no recovery id; one parsed from the
/// 65-byte compact form always carries it. After [`Self::normalize`],
/// `s ≤ 𝑁/2` and any recovery id reflects the flip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pub r: UBig,
    pub s: UBig,
    pub recid: Option<u8>,
}

impl Signature {
    /// ### Parse
    ///
    /// Recognizes DER (leading SEQUENCE tag) and the 65-byte compact form
    /// (prefix octet 27..=34). Anything else is an [`Secp256k1Error::InvalidSignature`].
    pub fn parse(bytes: &[u8]) -> Result<Self, Secp256k1Error> {
        match bytes.first() {
            Some(&DER_SEQUENCE) => Self::from_der(bytes),
            Some(_) if bytes.len() == COMPACT_SIZE => {
                let mut raw = [0u8; COMPACT_SIZE];
                raw.copy_from_slice(bytes);
                Self::from_compact(&raw)
            }
            _ => Err(Secp256k1Error::InvalidSignature),
        }
    }

    /// ### From DER
    ///
    /// `0x30 len 0x02 rlen rbytes 0x02 slen sbytes`, both integers decoded
    /// as unsigned big-endian. The recovery id is absent in this form.
    pub fn from_der(bytes: &[u8]) -> Result<Self, Secp256k1Error> {
        if bytes.len() < 8
            || bytes[0] != DER_SEQUENCE
            || bytes[1] as usize != bytes.len() - 2
            || bytes[2] != DER_INTEGER
        {
            return Err(Secp256k1Error::InvalidSignature);
        }
        let r_len = bytes[3] as usize;
        let s_tag = 4 + r_len;
        if r_len == 0 || s_tag + 2 > bytes.len() || bytes[s_tag] != DER_INTEGER {
            return Err(Secp256k1Error::InvalidSignature);
        }
        let s_len = bytes[s_tag + 1] as usize;
        let s_start = s_tag + 2;
        if s_len == 0 || s_start + s_len != bytes.len() {
            return Err(Secp256k1Error::InvalidSignature);
        }
        Ok(Self {
            r: UBig::from_be_bytes(&bytes[4..4 + r_len]),
            s: UBig::from_be_bytes(&bytes[s_start..]),
            recid: None,
        })
    }

    /// ### From compact
    ///
    /// `prefix ‖ r(32) ‖ s(32)`. Prefixes 27..=30 are the uncompressed
    /// family, 31..=34 the compressed family; the recovery id is the offset
    /// within the family.
    pub fn from_compact(bytes: &[u8; COMPACT_SIZE]) -> Result<Self, Secp256k1Error> {
        let prefix = bytes[0];
        if !(27..=34).contains(&prefix) {
            return Err(Secp256k1Error::InvalidSignature);
        }
        let t = prefix as i16 - 27 - 4;
        let recid = if t < 0 { (t + 4) as u8 } else { t as u8 };
        Ok(Self {
            r: UBig::from_be_bytes(&bytes[1..33]),
            s: UBig::from_be_bytes(&bytes[33..]),
            recid: Some(recid),
        })
    }

    /// Whether a compact prefix belongs to the compressed-public-key family.
    pub fn compact_prefix_is_compressed(prefix: u8) -> bool {
        prefix >= 31
    }

    pub fn is_high_s(&self) -> bool {
        self.s > Curve::half_n()
    }

    /// ### Normalize
    ///
    /// Low-S normalization per BIP 62: when `s > 𝑁/2`, replace it with
    /// `𝑁 − s` and flip the low bit of the recovery id if one is present.
    pub fn normalize(&mut self) {
        if self.is_high_s() {
            self.s = Curve::n() - &self.s;
            if let Some(recid) = self.recid.as_mut() {
                *recid ^= 1;
            }
        }
    }

    /// ### To DER
    ///
    /// Minimal unsigned encoding of each integer: leading zeros trimmed, a
    /// `0x00` octet prepended whenever the top bit of the leading byte is
    /// set.
    pub fn to_der(&self) -> Vec<u8> {
        let r = Self::der_integer(&self.r);
        let s = Self::der_integer(&self.s);
        let mut out = Vec::with_capacity(6 + r.len() + s.len());
        out.push(DER_SEQUENCE);
        out.push((4 + r.len() + s.len()) as u8);
        out.push(DER_INTEGER);
        out.push(r.len() as u8);
        out.extend_from_slice(&r);
        out.push(DER_INTEGER);
        out.push(s.len() as u8);
        out.extend_from_slice(&s);
        out
    }

    /// ### To compact
    ///
    /// 65-byte recoverable form. The prefix is
    /// `recid + 27 + (4 if compressed else 0)`, taking the recovery id from
    /// the explicit override or from the signature itself.
    ///
    /// # Panics
    ///
    /// Panics when no recovery id is available or it lies outside `0..=3`;
    /// serializing without one is unrecoverable API misuse.
    pub fn to_compact(&self, recid: Option<u8>, compressed: bool) -> [u8; COMPACT_SIZE] {
        let recid = recid
            .or(self.recid)
            .expect("compact serialization requires a recovery id");
        assert!(recid < 4, "recovery id {recid} out of range 0..=3");
        let mut out = [0u8; COMPACT_SIZE];
        out[0] = recid + 27 + if compressed { 4 } else { 0 };
        out[1..33].copy_from_slice(&Curve::to_be_32(&self.r));
        out[33..].copy_from_slice(&Curve::to_be_32(&self.s));
        out
    }

    fn der_integer(value: &UBig) -> Vec<u8> {
        let raw = value.to_be_bytes();
        let mut bytes = raw.as_ref().to_vec();
        if bytes.is_empty() {
            bytes.push(0);
        }
        if bytes[0] & 0x80 != 0 {
            bytes.insert(0, 0);
        }
        bytes
    }
}
