//! secp256r1 test vectors.

#[cfg(feature = "ecdsa")]
pub mod ecdsa;
pub mod group;
