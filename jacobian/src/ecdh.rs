//! Elliptic Curve Diffie-Hellman key agreement.
//!
//! The raw helpers [`public_key`] and [`derive_key`] are plain scalar
//! multiplications and validate nothing: a secret of zero yields the identity
//! and secrets `≥ n` wrap around the group order. [`diffie_hellman`] is the
//! checked entry point.
//!
//! For two secrets `a` and `b` the agreement is symmetric:
//!
//! ```text
//! derive_key(a, public_key(b)) == derive_key(b, public_key(a)) == [a·b] G
//! ```

use crate::{AffinePoint, CurveParams, Error, FIELD_BYTES, JacobianPoint, Result, U256};
use bigint::Encoding;
use core::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Compute the public key `[secret] G`.
pub fn public_key<C: CurveParams>(secret: &U256) -> AffinePoint<C> {
    JacobianPoint::<C>::mul_by_generator(secret).to_affine()
}

/// Compute the shared point `[secret] public`.
pub fn derive_key<C: CurveParams>(secret: &U256, public: &AffinePoint<C>) -> AffinePoint<C> {
    public.mul(secret)
}

/// Perform a checked Diffie-Hellman key agreement.
///
/// `secret` must lie in `[1, n)` and `public` must be a finite point.
pub fn diffie_hellman<C: CurveParams>(
    secret: &U256,
    public: &AffinePoint<C>,
) -> Result<SharedSecret> {
    if *secret == U256::ZERO || !C::ORDER.contains(secret) {
        return Err(Error::ScalarOutOfRange);
    }

    if public.is_identity().into() {
        return Err(Error::Identity);
    }

    if !bool::from(public.is_on_curve()) {
        return Err(Error::NotOnCurve);
    }

    let (x, _) = derive_key(secret, public)
        .coordinates()
        .ok_or(Error::Identity)?;

    Ok(SharedSecret {
        secret_bytes: x.to_be_bytes(),
    })
}

/// Shared secret value computed via ECDH key agreement.
///
/// Holds the big-endian x-coordinate of the shared point. It is not uniformly
/// random and should be passed through a key derivation function before use
/// as a symmetric key.
pub struct SharedSecret {
    secret_bytes: [u8; FIELD_BYTES],
}

impl SharedSecret {
    /// Shared secret value, not suitable as a key as-is.
    pub fn raw_secret_bytes(&self) -> &[u8; FIELD_BYTES] {
        &self.secret_bytes
    }
}

impl fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedSecret").finish_non_exhaustive()
    }
}

impl From<[u8; FIELD_BYTES]> for SharedSecret {
    fn from(secret_bytes: [u8; FIELD_BYTES]) -> Self {
        Self { secret_bytes }
    }
}

impl Drop for SharedSecret {
    fn drop(&mut self) {
        self.secret_bytes.zeroize();
    }
}

impl ZeroizeOnDrop for SharedSecret {}

#[cfg(test)]
mod tests {
    use super::{derive_key, diffie_hellman, public_key};
    use crate::{
        AffinePoint, Error, U256,
        test_curves::{K256Affine, NistP256},
    };

    #[test]
    fn public_key_of_small_scalars() {
        assert_eq!(public_key::<NistP256>(&U256::ONE), AffinePoint::GENERATOR);
        assert_eq!(public_key::<NistP256>(&U256::ZERO), AffinePoint::IDENTITY);
    }

    #[test]
    fn agreement_is_symmetric() {
        let a = U256::from_u64(0xdeadbeef);
        let b = U256::from_be_hex("4f1e8f0e4f6ac6a0b5f4b8b4e1e9b2c3d4a5968778695a4b3c2d1e0f00112233");

        let ab = derive_key(&a, &public_key::<NistP256>(&b));
        let ba = derive_key(&b, &public_key::<NistP256>(&a));
        assert_eq!(ab, ba);

        let shared = diffie_hellman(&a, &public_key::<NistP256>(&b)).unwrap();
        assert_eq!(shared.raw_secret_bytes(), &ab.to_uncompressed().unwrap()[1..33]);
    }

    #[test]
    fn checked_agreement_rejects_bad_inputs() {
        let g = K256Affine::GENERATOR;
        let n = *<crate::test_curves::Secp256k1 as crate::CurveParams>::ORDER.get();

        assert_eq!(
            diffie_hellman(&U256::ZERO, &g).unwrap_err(),
            Error::ScalarOutOfRange
        );
        assert_eq!(diffie_hellman(&n, &g).unwrap_err(), Error::ScalarOutOfRange);
        assert_eq!(
            diffie_hellman(&U256::ONE, &K256Affine::IDENTITY).unwrap_err(),
            Error::Identity
        );
    }
}
