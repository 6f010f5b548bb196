//! ECDSA tests.

#![cfg(feature = "ecdsa")]

use hex_literal::hex;
use jacobian_k256::{
    Error, U256,
    ecdsa::{Signature, VerifyingKey, hash_to_uint, verify},
};
use proptest::prelude::*;

const Q_X: U256 =
    U256::from_be_hex("779dd197a5df977ed2cf6cb31d82d43328b790dc6b3b7d4437a427bd5847dfcd");
const Q_Y: U256 =
    U256::from_be_hex("e94b724a555b6d017bb7607c3e3281daf5b1699d6ef4124975c9237b917d426f");

const SAMPLE_DIGEST: [u8; 32] =
    hex!("af2bdbe1aa9b6ec1e2ade1d694f41fc71a831d0268e9891562113d8a62add1bf");

/// Signature over SHA-256("sample") by the key above.
const SAMPLE_SIGNATURE: [u8; 64] = hex!(
    "fab558eb0854eeca3aedaa31472d01d1fc1d35c5438e4c4bbddf59fac13b80a1
     eb2c7b85093fba5743897172209ed3c0926077cdd30175aafd960bbb48b90af6"
);

#[test]
fn rejects_public_key_not_on_curve() {
    let q_x = Q_X.wrapping_add(&U256::ONE);
    let r = U256::from_be_hex("241097efbf8b63bf145c8961dbdf10c310efbb3b2676bbc0f8b08505c9e2f795");
    let s = U256::from_be_hex("021006b7838609339e8b415a7f9acb1b661828131aef1ecbc7955dfb01f3ca0e");
    let hash = hex!("4b688df40bcedbe641ddb16ff0a1842d9c67ea1c3bf63f3e0471baa664531d1a");

    assert_eq!(verify(&q_x, &Q_Y, &hash, &r, &s), Err(Error::NotOnCurve));
    assert_eq!(verify(&Q_X, &Q_Y, &hash, &r, &s), Ok(true));
}

#[test]
fn hash_wider_than_order_is_folded() {
    let mut wide = [0u8; 48];
    wide[16..].copy_from_slice(&hex!(
        "4b688df40bcedbe641ddb16ff0a1842d9c67ea1c3bf63f3e0471baa664531d1a"
    ));

    // leading zero bytes do not change the integer value
    assert_eq!(
        hash_to_uint(&wide),
        U256::from_be_hex("4b688df40bcedbe641ddb16ff0a1842d9c67ea1c3bf63f3e0471baa664531d1a")
    );
}

#[cfg(feature = "sha256")]
#[test]
fn verify_sha256_message() {
    use jacobian_k256::ecdsa::signature::Verifier;

    let verifying_key = VerifyingKey::from_coordinates(Q_X, Q_Y).unwrap();
    let signature = Signature::from_bytes(&SAMPLE_SIGNATURE).unwrap();

    assert!(verifying_key.verify(b"sample", &signature).is_ok());
    assert!(verifying_key.verify(b"sample!", &signature).is_err());
}

#[test]
fn verify_prehash_with_sha2() {
    use sha2::{Digest, Sha256};

    let verifying_key = VerifyingKey::from_coordinates(Q_X, Q_Y).unwrap();
    let signature = Signature::from_bytes(&SAMPLE_SIGNATURE).unwrap();
    let digest = Sha256::digest(b"sample");

    assert_eq!(verifying_key.verify_prehash(&digest, &signature), Ok(()));
    assert_eq!(
        verifying_key.verify_prehash(&digest[..31], &signature),
        Err(Error::Verification)
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(4))]

    #[test]
    fn random_hash_does_not_verify(hash in any::<[u8; 32]>()) {
        let signature = Signature::from_bytes(&SAMPLE_SIGNATURE).unwrap();
        prop_assume!(hash_to_uint(&hash) != hash_to_uint(&SAMPLE_DIGEST));
        prop_assert_eq!(
            verify(&Q_X, &Q_Y, &hash, signature.r(), signature.s()),
            Ok(false)
        );
    }
}
