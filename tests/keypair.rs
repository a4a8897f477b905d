use dashu::integer::UBig;

use secp256k1_pure::{Curve, Keypair, Secp256k1Error};

const S1_SECRET: &str = "5EC0A1AA3526F46E6251D8926922A4EF3D8B2198BFF538EC19C063638A5505B9";
const S1_X: &str = "091B1002F340C1F19286A46AD1C4626C686A185B2324777E5CB3F6E3B31E33B7";
const S1_Y: &str = "93ABFC832D02E5DA90BC0D2FD3A927C86A5D6295BD6DB1DF3F7CC1F74D8A7F81";

fn s1_secret() -> [u8; 32] {
    hex::decode(S1_SECRET).unwrap().try_into().unwrap()
}

#[test]
fn known_secret_derives_known_point() {
    let keypair = Keypair::from_secret_key(&s1_secret()).unwrap();
    let point = keypair.public_point();
    assert_eq!(
        point.x,
        UBig::from_be_bytes(&hex::decode(S1_X).unwrap()),
        "derived x-coordinate mismatch"
    );
    assert_eq!(
        point.y,
        UBig::from_be_bytes(&hex::decode(S1_Y).unwrap()),
        "derived y-coordinate mismatch"
    );
    assert_eq!(keypair.to_secret_key(), Some(s1_secret()));
}

#[test]
fn rejects_out_of_range_secrets() {
    assert_eq!(
        Keypair::from_secret_key(&[0u8; 32]),
        Err(Secp256k1Error::InvalidSecretKey)
    );
    assert_eq!(
        Keypair::from_secret_key(&Curve::N),
        Err(Secp256k1Error::InvalidSecretKey)
    );
    assert_eq!(
        Keypair::from_secret_key(&[0xff; 32]),
        Err(Secp256k1Error::InvalidSecretKey)
    );
}

#[test]
fn compressed_public_key_round_trip() {
    let keypair = Keypair::from_secret_key(&s1_secret()).unwrap();
    let compressed = keypair.to_public_key();
    assert_eq!(compressed.len(), 33);
    // Odd y from the S1 vector.
    assert_eq!(compressed[0], 0x03);

    let imported = Keypair::from_public_key(&compressed).unwrap();
    assert_eq!(imported.public_point(), keypair.public_point());
    assert!(imported.compressed);
    assert_eq!(imported.to_secret_key(), None);
    assert_eq!(imported.to_public_key(), compressed);
}

#[test]
fn uncompressed_public_key_round_trip() {
    let mut keypair = Keypair::generate();
    keypair.compressed = false;
    let uncompressed = keypair.to_public_key();
    assert_eq!(uncompressed.len(), 65);
    assert_eq!(uncompressed[0], 0x04);

    let imported = Keypair::from_public_key(&uncompressed).unwrap();
    assert_eq!(imported.public_point(), keypair.public_point());
    assert!(!imported.compressed);
}

#[test]
fn compressed_and_uncompressed_forms_agree() {
    let keypair = Keypair::generate();
    let compressed = keypair.to_public_key();
    let mut uncompressed_form = keypair.clone();
    uncompressed_form.compressed = false;
    let uncompressed = uncompressed_form.to_public_key();

    let a = Keypair::from_public_key(&compressed).unwrap();
    let b = Keypair::from_public_key(&uncompressed).unwrap();
    assert_eq!(
        a.public_point(),
        b.public_point(),
        "decompression must recover the same point the uncompressed form carries"
    );
}

#[test]
fn rejects_malformed_public_keys() {
    assert_eq!(
        Keypair::from_public_key(&[]),
        Err(Secp256k1Error::InvalidPublicKey)
    );
    // Unknown prefix byte.
    let mut bad = vec![0x05u8];
    bad.extend_from_slice(&[0x11; 32]);
    assert_eq!(
        Keypair::from_public_key(&bad),
        Err(Secp256k1Error::InvalidPublicKey)
    );
    // Right prefix, wrong length.
    assert_eq!(
        Keypair::from_public_key(&[0x02; 34]),
        Err(Secp256k1Error::InvalidPublicKey)
    );
    // Uncompressed point that is not on the curve.
    let mut off_curve = vec![0x04u8];
    off_curve.extend_from_slice(&[0x01; 64]);
    assert_eq!(
        Keypair::from_public_key(&off_curve),
        Err(Secp256k1Error::InvalidPublicKey)
    );
}

#[test]
fn generated_keys_are_distinct() {
    let a = Keypair::generate();
    let b = Keypair::generate();
    assert_ne!(
        a.to_secret_key(),
        b.to_secret_key(),
        "secure source must not repeat scalars"
    );
}
