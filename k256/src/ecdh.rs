//! Elliptic Curve Diffie-Hellman Support.
//!
//! This module contains a low-level interface for Diffie-Hellman key
//! agreement over the secp256k1 elliptic curve.
//!
//! # Usage
//!
//! This usage example is from the perspective of two participants in the
//! exchange, nicknamed "Alice" and "Bob".
//!
//! ```
//! # #[cfg(feature = "ecdh")]
//! # {
//! use jacobian_k256::{AffinePoint, U256, ecdh};
//!
//! // Alice
//! let alice_secret = U256::from_u64(0xa11ce);
//! let alice_pk_bytes = ecdh::public_key(&alice_secret).to_uncompressed().unwrap();
//!
//! // Bob
//! let bob_secret = U256::from_u64(0xb0b);
//! let bob_pk_bytes = ecdh::public_key(&bob_secret).to_uncompressed().unwrap();
//!
//! // Alice decodes Bob's serialized public key and computes a shared secret from it
//! let bob_public = AffinePoint::from_uncompressed(&bob_pk_bytes)
//!     .expect("bob's public key is invalid!"); // In real usage, don't panic, handle this!
//!
//! let alice_shared = ecdh::diffie_hellman(&alice_secret, &bob_public).unwrap();
//!
//! // Bob decodes Alice's serialized public key and computes the same shared secret
//! let alice_public = AffinePoint::from_uncompressed(&alice_pk_bytes)
//!     .expect("alice's public key is invalid!"); // In real usage, don't panic, handle this!
//!
//! let bob_shared = ecdh::diffie_hellman(&bob_secret, &alice_public).unwrap();
//!
//! // Both participants arrive on the same shared secret
//! assert_eq!(alice_shared.raw_secret_bytes(), bob_shared.raw_secret_bytes());
//! # }
//! ```

use crate::{AffinePoint, Result, Secp256k1, U256};

/// Shared secret value computed via ECDH key agreement.
pub use jacobian::ecdh::SharedSecret;

/// secp256k1 public key `[secret] G`.
pub fn public_key(secret: &U256) -> AffinePoint {
    jacobian::ecdh::public_key::<Secp256k1>(secret)
}

/// Shared point `[secret] public`, without validating either input.
pub fn derive_key(secret: &U256, public: &AffinePoint) -> AffinePoint {
    jacobian::ecdh::derive_key(secret, public)
}

/// Validate `secret` and `public`, then compute the shared secret.
pub fn diffie_hellman(secret: &U256, public: &AffinePoint) -> Result<SharedSecret> {
    jacobian::ecdh::diffie_hellman(secret, public)
}
