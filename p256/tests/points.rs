//! Jacobian and affine point arithmetic tests.

use jacobian_p256::{AffinePoint, JacobianPoint, ORDER, U256};
use proptest::{prelude::*, test_runner::Config};

fn point(x: &str, y: &str, z: &str) -> JacobianPoint {
    JacobianPoint::new(
        U256::from_be_hex(x),
        U256::from_be_hex(y),
        U256::from_be_hex(z),
    )
}

const BX: &str = "3a84ab26ce5a414df351ddaeb8ca4ff9e25caf950b99716df556b9e40ae166e2";
const BY: &str = "349805df5f532f97dd10b6fd6fee238325ff65bf0722cd1473721a52fa3dea27";
const ONE: &str = "0000000000000000000000000000000000000000000000000000000000000001";

#[test]
fn add_identity_returns_other_unchanged() {
    let b = point(BX, BY, ONE);
    assert_eq!(b.add(&JacobianPoint::IDENTITY).coordinates(), b.coordinates());
    assert_eq!(JacobianPoint::IDENTITY.add(&b).coordinates(), b.coordinates());

    let c = point(
        "5f5b588a35a1433300173ebbdb41a479b8230c6b2b2b350697755cc7af4e2424",
        "fe9d0907cf4d4551327fc51ed93c0ef3ff04b06e5e798d85f5a841c55114bd5d",
        ONE,
    );
    assert_eq!(JacobianPoint::IDENTITY.add(&c).coordinates(), c.coordinates());
}

#[test]
fn double_with_nontrivial_z() {
    let p = point(
        "72cbd243918790276c5c746cf4519820ee7f4b36fb2ac27aeaffaac68640dd9e",
        "813f09630351889026105742fb6a6d6f0163a5bd59e578611f4be3814abaef60",
        "d865bee79a7dc726b18d8408cbf34115844da7c61430f3fed2b8aa7585976a94",
    );
    let expected = point(
        "42b584e65ae61d0f8dee20f9da9b9cd3d840a43532cbe6da34d47232dda79722",
        "f5eee53385bf702d945c7d78774d734d62a20a097deac2d8fddd4db0df4a7d20",
        "0284cd63b82e44d5c29535f556508ec553a11c5ecfb20a8f4785e442305ef4b4",
    );
    assert_eq!(p.double().coordinates(), expected.coordinates());
}

#[test]
fn double_identity_then_add_then_double() {
    let b = point(BX, BY, ONE);
    let sum = JacobianPoint::IDENTITY.double().add(&b);
    assert_eq!(sum.coordinates(), b.coordinates());

    let (x, y, _) = sum.double().coordinates();
    assert_eq!(
        x,
        U256::from_be_hex("3efbbc62b16ddd811af7b116dbfba8a99e22280f1f8d477c70c4d6f1da7d1557")
    );
    assert_eq!(
        y,
        U256::from_be_hex("5496b2ec97d09e82b59509cd1fa587eb9957b714b7358cc8b08b81fd7f8ff527")
    );
}

#[test]
fn scalar_mult_arbitrary_point() {
    let b = AffinePoint::from_coordinates(U256::from_be_hex(BX), U256::from_be_hex(BY)).unwrap();
    let k = U256::from_be_hex("67fd9324008c01cd43c620246131241b4bd120acf3dc7ec7ff7e474b43556add");

    let expected = AffinePoint::from_coordinates(
        U256::from_be_hex("77f55b9620c882d547eb739adba3690ff506d95ac2915bbe10eff27fe97a9163"),
        U256::from_be_hex("cee4d6e830e77a50932e3b80b6c154ad751067025c7d5c86552f68eb3556cd4e"),
    )
    .unwrap();

    assert_eq!(jacobian_p256::scalar_mult(&k, &b), expected);
    assert_eq!(jacobian_p256::scalar_mult(&U256::ONE, &b), b);
}

#[test]
fn scalar_base_mult_matches_generator_mult() {
    let k = U256::from_be_hex("67fd9324008c01cd43c620246131241b4bd120acf3dc7ec7ff7e474b43556add");
    assert_eq!(
        jacobian_p256::scalar_base_mult(&k),
        jacobian_p256::scalar_mult(&k, &AffinePoint::GENERATOR)
    );
}

prop_compose! {
    fn scalar()(bytes in any::<[u8; 32]>()) -> U256 {
        ORDER.reduce(&U256::from_be_slice(&bytes))
    }
}

prop_compose! {
    fn jacobian()(k in scalar()) -> JacobianPoint {
        JacobianPoint::mul_by_generator(&k)
    }
}

proptest! {
    #![proptest_config(Config::with_cases(8))]

    #[test]
    fn double_matches_self_addition(p in jacobian()) {
        prop_assert_eq!(p.double().to_affine(), p.add(&p).to_affine());
    }

    #[test]
    fn identity_is_neutral(p in jacobian()) {
        prop_assert_eq!(JacobianPoint::IDENTITY.add(&p), p);
        prop_assert_eq!(p.add(&JacobianPoint::IDENTITY), p);
    }

    #[test]
    fn scalar_mult_distributes_over_addition(d1 in scalar(), d2 in scalar()) {
        let sum = ORDER.add(&d1, &d2);
        prop_assert_eq!(
            jacobian_p256::scalar_base_mult(&sum),
            jacobian_p256::scalar_base_mult(&d1).add(&jacobian_p256::scalar_base_mult(&d2))
        );
    }

    #[test]
    fn addition_commutes(p in jacobian(), q in jacobian()) {
        prop_assert_eq!(p + q, q + p);
    }
}
