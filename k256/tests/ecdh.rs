//! Elliptic Curve Diffie-Hellman tests.

#![cfg(feature = "ecdh")]

use jacobian_k256::{AffinePoint, Error, ORDER, U256, ecdh};
use proptest::prelude::*;

prop_compose! {
    fn secret()(bytes in any::<[u8; 32]>()) -> U256 {
        let secret = ORDER.reduce(&U256::from_be_slice(&bytes));
        if secret == U256::ZERO { U256::ONE } else { secret }
    }
}

#[test]
fn derive_key_vector() {
    let alice = U256::from_u64(0xdeadbeef);
    let bob = U256::from_be_hex("4f1e8f0e4f6ac6a0b5f4b8b4e1e9b2c3d4a5968778695a4b3c2d1e0f00112233");

    let expected = AffinePoint::from_coordinates(
        U256::from_be_hex("7b6845ff50cbdd04f589f79a13ecf7ee93e935562af5cd809c0d03d971d86e32"),
        U256::from_be_hex("95d0e9076e3fa85233babc70a1a340424f9bd3012a0da852c3a0dd134c96dfce"),
    )
    .unwrap();

    assert_eq!(ecdh::derive_key(&alice, &ecdh::public_key(&bob)), expected);
    assert_eq!(ecdh::derive_key(&bob, &ecdh::public_key(&alice)), expected);

    let shared = ecdh::diffie_hellman(&alice, &ecdh::public_key(&bob)).unwrap();
    assert_eq!(
        shared.raw_secret_bytes()[..4],
        [0x7b, 0x68, 0x45, 0xff]
    );
}

#[test]
fn rejects_off_curve_public_key() {
    let bogus = AffinePoint::from_coordinates(U256::ONE, U256::ONE);
    assert_eq!(bogus, Err(Error::NotOnCurve));
    assert!(matches!(
        ecdh::diffie_hellman(&U256::ONE, &AffinePoint::IDENTITY),
        Err(Error::Identity)
    ));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn derive_key_is_symmetric(d1 in secret(), d2 in secret()) {
        prop_assert_eq!(
            ecdh::derive_key(&d1, &ecdh::public_key(&d2)),
            ecdh::derive_key(&d2, &ecdh::public_key(&d1))
        );
    }
}
