use dashu::integer::UBig;

use secp256k1_pure::{Curve, JacobianPoint, Keypair, Point};

#[test]
fn identity_is_absorbing_and_doubles_flat() {
    let g = Point::generator().to_jacobian();
    let id = JacobianPoint::identity();
    assert_eq!(id.add(&g).to_affine(), Point::generator());
    assert_eq!(g.add(&id).to_affine(), Point::generator());
    assert!(id.double().is_identity());
    assert!(id.double().to_affine().is_identity());
}

#[test]
fn generator_is_on_curve() {
    assert!(Point::generator().is_on_curve());
    assert!(!Point::identity().is_on_curve());
}

#[test]
fn scalar_mul_identities() {
    let g = Point::generator();

    assert!(g.mul(&UBig::ZERO).is_identity(), "0·G must be the identity");
    assert_eq!(g.mul(&UBig::ONE), g, "1·G must be G");
    assert!(
        g.mul(&Curve::n()).is_identity(),
        "n·G must be the identity"
    );
}

#[test]
fn identity_times_scalar_is_identity() {
    let k = UBig::from_word(1234567);
    assert!(Point::identity().mul(&k).is_identity());
}

#[test]
fn scalar_addition_distributes_over_the_group() {
    let k1 = UBig::from_be_bytes(&Keypair::generate().to_secret_key().unwrap());
    let k2 = UBig::from_be_bytes(&Keypair::generate().to_secret_key().unwrap());

    let combined = Point::generator_mul(&Curve::add_mod_n(&k1, &k2));
    let separate = Point::generator_mul(&k1).add(&Point::generator_mul(&k2));
    assert_eq!(combined, separate, "(k1 + k2)·G must equal k1·G + k2·G");
}

#[test]
fn scalars_are_reduced_modulo_the_order() {
    let k = UBig::from_word(42);
    let wrapped = &k + Curve::n();
    assert_eq!(Point::generator_mul(&wrapped), Point::generator_mul(&k));
}

#[test]
fn doubling_matches_self_addition() {
    let g = Point::generator();
    assert_eq!(g.double(), g.add(&g));
}

#[test]
fn generated_public_points_are_on_curve() {
    for _ in 0..4 {
        let keypair = Keypair::generate();
        assert!(
            keypair.public_point().is_on_curve(),
            "every generated public point must satisfy y² = x³ + 7"
        );
    }
}

#[test]
fn negation_cancels() {
    let keypair = Keypair::generate();
    let point = keypair.public_point();
    assert!(point.add(&point.negate()).is_identity());
    assert!(point.negate().is_on_curve());
}
