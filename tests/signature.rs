use dashu::integer::UBig;

use secp256k1_pure::{Curve, Secp256k1Error, Signature, COMPACT_SIZE};

const S3_DER: &str = "304402202a41a2d679ffcccce389d3b27a80ace8a47635389904ae66701ca2402c3cd5640220311388a038e938b02804e32f87514fe9e95df9920274d527b7f248bc2c42733c";

#[test]
fn der_round_trip() {
    let der = hex::decode(S3_DER).unwrap();
    let sig = Signature::parse(&der).unwrap();
    assert_eq!(sig.recid, None, "DER carries no recovery id");
    assert_eq!(sig.to_der(), der);
}

#[test]
fn compact_round_trip_preserves_r_s_and_recid() {
    let der = hex::decode(S3_DER).unwrap();
    let sig = Signature::parse(&der).unwrap();

    for recid in 0..4u8 {
        for compressed in [true, false] {
            let compact = sig.to_compact(Some(recid), compressed);
            let parsed = Signature::parse(&compact).unwrap();
            assert_eq!(parsed.r, sig.r);
            assert_eq!(parsed.s, sig.s);
            assert_eq!(parsed.recid, Some(recid));
            assert_eq!(
                Signature::compact_prefix_is_compressed(compact[0]),
                compressed,
                "prefix must encode the compressed flag"
            );
        }
    }
}

#[test]
fn normalize_flips_high_s_and_recid() {
    let der = hex::decode(S3_DER).unwrap();
    let low = Signature::parse(&der).unwrap();
    assert!(!low.is_high_s());

    let mut high = Signature {
        r: low.r.clone(),
        s: Curve::n() - &low.s,
        recid: Some(0),
    };
    assert!(high.is_high_s());
    high.normalize();
    assert_eq!(high.s, low.s, "normalization must mirror s across n/2");
    assert_eq!(high.recid, Some(1), "normalization must flip the recid low bit");

    // Already-low signatures are untouched.
    let mut again = high.clone();
    again.normalize();
    assert_eq!(again, high);
}

#[test]
fn der_trims_leading_zeros_minimally() {
    let sig = Signature {
        r: UBig::from_word(0x7f),
        s: UBig::from_word(0x80),
        recid: None,
    };
    let der = sig.to_der();
    // r fits one byte; s needs the 0x00 pad for its high bit.
    assert_eq!(der, vec![0x30, 0x07, 0x02, 0x01, 0x7f, 0x02, 0x02, 0x00, 0x80]);
    assert_eq!(Signature::parse(&der).unwrap(), sig);
}

#[test]
fn rejects_short_or_untagged_input() {
    assert_eq!(
        Signature::parse(&[0x30, 0x01, 0x02]),
        Err(Secp256k1Error::InvalidSignature)
    );
    assert_eq!(
        Signature::parse(&[0u8; 64]),
        Err(Secp256k1Error::InvalidSignature)
    );
    assert_eq!(
        Signature::parse(&[0u8; 65]),
        Err(Secp256k1Error::InvalidSignature)
    );
    assert_eq!(Signature::parse(&[]), Err(Secp256k1Error::InvalidSignature));
}

#[test]
fn rejects_prefixes_outside_both_families() {
    let mut raw = [0u8; COMPACT_SIZE];
    raw[32] = 1;
    raw[64] = 1;
    raw[0] = 26;
    assert!(Signature::from_compact(&raw).is_err());
    raw[0] = 35;
    assert!(Signature::from_compact(&raw).is_err());
}

#[test]
#[should_panic(expected = "recovery id")]
fn compact_without_recid_is_fatal() {
    let der = hex::decode(S3_DER).unwrap();
    let sig = Signature::parse(&der).unwrap();
    sig.to_compact(None, true);
}

#[test]
#[should_panic(expected = "out of range")]
fn compact_with_out_of_range_recid_is_fatal() {
    let der = hex::decode(S3_DER).unwrap();
    let sig = Signature::parse(&der).unwrap();
    sig.to_compact(Some(4), true);
}
