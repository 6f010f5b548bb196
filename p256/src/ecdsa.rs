//! Elliptic Curve Digital Signature Algorithm (ECDSA) verification
//!
//! ## Verification Example
//!
//! ```
//! # #[cfg(feature = "ecdsa")]
//! # {
//! use hex_literal::hex;
//! use jacobian_p256::ecdsa::{Signature, VerifyingKey};
//!
//! let verifying_key = VerifyingKey::from_sec1_bytes(&hex!(
//!     "04 a6ad1deeababc22e1eeba4bc93f6535ff95391a1981d9276bbe39b1ce473d6ed
//!         688c2d5b0231d21e9f6ad264cfcdcf09aec15ea8c5c354f38b2fae95e82959e4"
//! ))
//! .expect("public key invalid");
//!
//! let signature = Signature::from_bytes(&hex!(
//!     "912177ddfa310e5daf1a0d53c567b3c19261cda206bf788eaa4a3a708f090856
//!      1bd0b92ff302efae4782e16c1b3eeb32b05df7cca4c84d74535bd4fb613e02bb"
//! ))
//! .expect("signature invalid");
//!
//! let prehash = hex!("a591a6d40bf420404a011733cfb7b190d62c65bf0bcda32b57b277d9ad9f146e");
//! assert!(verifying_key.verify_prehash(&prehash, &signature).is_ok());
//! # }
//! ```

pub use jacobian::ecdsa::{SIGNATURE_SIZE, signature};

use crate::{NistP256, Result, U256};

/// ECDSA/P-256 signature (fixed-size)
pub type Signature = jacobian::ecdsa::Signature<NistP256>;

/// ECDSA/P-256 verification key (i.e. public key)
pub type VerifyingKey = jacobian::ecdsa::VerifyingKey<NistP256>;

/// Convert a message digest to an integer for P-256 verification.
pub fn hash_to_uint(hash: &[u8]) -> U256 {
    jacobian::ecdsa::hash_to_uint::<NistP256>(hash)
}

/// Verify an ECDSA/P-256 signature `(r, s)` over `hash` against the public
/// key `(pub_x, pub_y)`.
///
/// Malformed inputs are rejected with an error; a well-formed signature which
/// does not match yields `Ok(false)`.
pub fn verify(pub_x: &U256, pub_y: &U256, hash: &[u8], r: &U256, s: &U256) -> Result<bool> {
    jacobian::ecdsa::verify::<NistP256>(pub_x, pub_y, hash, r, s)
}
