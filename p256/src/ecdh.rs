//! Elliptic Curve Diffie-Hellman Support.
//!
//! # ECDH Ephemeral (ECDHE) Usage
//!
//! ```
//! # #[cfg(feature = "ecdh")]
//! # {
//! use jacobian_p256::{U256, ecdh};
//!
//! // Alice
//! let alice_secret = U256::from_u64(0xa11ce);
//! let alice_pk = ecdh::public_key(&alice_secret);
//!
//! // Bob
//! let bob_secret = U256::from_u64(0xb0b);
//! let bob_pk = ecdh::public_key(&bob_secret);
//!
//! // Alice computes shared secret from Bob's public key
//! let alice_shared = ecdh::diffie_hellman(&alice_secret, &bob_pk).unwrap();
//!
//! // Bob computes the same shared secret from Alice's public key
//! let bob_shared = ecdh::diffie_hellman(&bob_secret, &alice_pk).unwrap();
//!
//! assert_eq!(alice_shared.raw_secret_bytes(), bob_shared.raw_secret_bytes());
//! # }
//! ```

use crate::{AffinePoint, NistP256, Result, U256};

pub use jacobian::ecdh::SharedSecret;

/// Derive the public key `[secret] G`.
///
/// Unchecked: a zero secret yields the identity.
pub fn public_key(secret: &U256) -> AffinePoint {
    jacobian::ecdh::public_key::<NistP256>(secret)
}

/// Derive the shared point `[secret] public`.
///
/// Unchecked: see [`diffie_hellman`] for the validating variant.
pub fn derive_key(secret: &U256, public: &AffinePoint) -> AffinePoint {
    jacobian::ecdh::derive_key(secret, public)
}

/// Compute a Diffie-Hellman shared secret, validating both inputs.
pub fn diffie_hellman(secret: &U256, public: &AffinePoint) -> Result<SharedSecret> {
    jacobian::ecdh::diffie_hellman(secret, public)
}
