//! Elliptic Curve Digital Signature Algorithm (ECDSA) verification
//!
//! This module contains support for verifying ECDSA signatures over the
//! secp256k1 elliptic curve, either against a message digest or, with the
//! `sha256` feature, against a message hashed with SHA-256.
//!
//! ## Verification Example
//!
//! ```
//! # #[cfg(feature = "ecdsa")]
//! # {
//! use hex_literal::hex;
//! use jacobian_k256::{U256, ecdsa};
//!
//! let verified = ecdsa::verify(
//!     &U256::from_be_hex("779dd197a5df977ed2cf6cb31d82d43328b790dc6b3b7d4437a427bd5847dfcd"),
//!     &U256::from_be_hex("e94b724a555b6d017bb7607c3e3281daf5b1699d6ef4124975c9237b917d426f"),
//!     &hex!("4b688df40bcedbe641ddb16ff0a1842d9c67ea1c3bf63f3e0471baa664531d1a"),
//!     &U256::from_be_hex("241097efbf8b63bf145c8961dbdf10c310efbb3b2676bbc0f8b08505c9e2f795"),
//!     &U256::from_be_hex("021006b7838609339e8b415a7f9acb1b661828131aef1ecbc7955dfb01f3ca0e"),
//! );
//!
//! assert_eq!(verified, Ok(true));
//! # }
//! ```

pub use jacobian::ecdsa::{SIGNATURE_SIZE, signature};

use crate::{Result, Secp256k1, U256};

/// ECDSA/secp256k1 signature (fixed-size)
pub type Signature = jacobian::ecdsa::Signature<Secp256k1>;

/// ECDSA/secp256k1 verification key (i.e. public key)
pub type VerifyingKey = jacobian::ecdsa::VerifyingKey<Secp256k1>;

/// Convert a message digest to an integer for secp256k1 verification.
pub fn hash_to_uint(hash: &[u8]) -> U256 {
    jacobian::ecdsa::hash_to_uint::<Secp256k1>(hash)
}

/// Verify an ECDSA/secp256k1 signature `(r, s)` over `hash` against the public
/// key `(pub_x, pub_y)`.
pub fn verify(pub_x: &U256, pub_y: &U256, hash: &[u8], r: &U256, s: &U256) -> Result<bool> {
    jacobian::ecdsa::verify::<Secp256k1>(pub_x, pub_y, hash, r, s)
}
