use secp256k1_pure::NonceGenerator;

#[test]
fn candidates_are_deterministic_and_distinct() {
    let secret = [0x42u8; 32];
    let digest = [0x07u8; 32];
    let mut a = NonceGenerator::new(&secret, &digest);
    let mut b = NonceGenerator::new(&secret, &digest);
    let first = a.next_candidate();
    assert_eq!(first, b.next_candidate(), "same seed must replay");

    a.refresh();
    assert_ne!(first, a.next_candidate(), "refresh must move the state");
}

#[test]
fn digest_changes_the_stream() {
    let secret = [0x42u8; 32];
    let mut a = NonceGenerator::new(&secret, &[0x01u8; 32]);
    let mut b = NonceGenerator::new(&secret, &[0x02u8; 32]);
    assert_ne!(a.next_candidate(), b.next_candidate());
}

#[test]
fn secret_changes_the_stream() {
    let digest = [0x07u8; 32];
    let mut a = NonceGenerator::new(&[0x01u8; 32], &digest);
    let mut b = NonceGenerator::new(&[0x02u8; 32], &digest);
    assert_ne!(a.next_candidate(), b.next_candidate());
}
