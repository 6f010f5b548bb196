//! secp256k1 test vectors.

#[cfg(feature = "ecdsa")]
pub mod ecdsa;
pub mod group;
