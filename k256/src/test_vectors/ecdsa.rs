//! ECDSA/secp256k1 test vectors

use hex_literal::hex;
use jacobian::dev::EcdsaTestVector;

/// ECDSA/secp256k1 test vectors.
///
/// The last two entries sign the SHA-256 digests of "sample" and "test".
pub const ECDSA_TEST_VECTORS: &[EcdsaTestVector] = &[
    EcdsaTestVector {
        d: &hex!("ebb2c082fd7727890a28ac82f6bdf97bad8de9f5d7c9028692de1a255cad3e0f"),
        q_x: &hex!("779dd197a5df977ed2cf6cb31d82d43328b790dc6b3b7d4437a427bd5847dfcd"),
        q_y: &hex!("e94b724a555b6d017bb7607c3e3281daf5b1699d6ef4124975c9237b917d426f"),
        m: &hex!("4b688df40bcedbe641ddb16ff0a1842d9c67ea1c3bf63f3e0471baa664531d1a"),
        r: &hex!("241097efbf8b63bf145c8961dbdf10c310efbb3b2676bbc0f8b08505c9e2f795"),
        s: &hex!("021006b7838609339e8b415a7f9acb1b661828131aef1ecbc7955dfb01f3ca0e"),
    },
    EcdsaTestVector {
        d: &hex!("ebb2c082fd7727890a28ac82f6bdf97bad8de9f5d7c9028692de1a255cad3e0f"),
        q_x: &hex!("779dd197a5df977ed2cf6cb31d82d43328b790dc6b3b7d4437a427bd5847dfcd"),
        q_y: &hex!("e94b724a555b6d017bb7607c3e3281daf5b1699d6ef4124975c9237b917d426f"),
        m: &hex!("af2bdbe1aa9b6ec1e2ade1d694f41fc71a831d0268e9891562113d8a62add1bf"),
        r: &hex!("fab558eb0854eeca3aedaa31472d01d1fc1d35c5438e4c4bbddf59fac13b80a1"),
        s: &hex!("eb2c7b85093fba5743897172209ed3c0926077cdd30175aafd960bbb48b90af6"),
    },
    EcdsaTestVector {
        d: &hex!("ebb2c082fd7727890a28ac82f6bdf97bad8de9f5d7c9028692de1a255cad3e0f"),
        q_x: &hex!("779dd197a5df977ed2cf6cb31d82d43328b790dc6b3b7d4437a427bd5847dfcd"),
        q_y: &hex!("e94b724a555b6d017bb7607c3e3281daf5b1699d6ef4124975c9237b917d426f"),
        m: &hex!("9f86d081884c7d659a2feaa0c55ad015a3bf4f1b2b0b822cd15d6c15b0f00a08"),
        r: &hex!("675a8fd13b2eb8ab4d6e5e2a39b5f4db0cbd3bde157b6d46756ac02c47db7f43"),
        s: &hex!("afb191bce1f72aac8e22cb7e812110c7ac18fea1498230b6cdf5fa3e3913455b"),
    },
];
