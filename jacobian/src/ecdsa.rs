//! Elliptic Curve Digital Signature Algorithm (ECDSA) verification.
//!
//! Signatures are verified against a message digest ("prehash"). With the
//! `sha256` feature enabled, [`VerifyingKey`] also implements
//! [`signature::Verifier`], hashing the message with SHA-256 first.
//!
//! Inputs are validated once at this boundary: `0 < r, s < n`, and the public
//! key must be a finite point on the curve. Everything below assumes reduced,
//! well-formed operands.

pub use signature;

use crate::{AffinePoint, CurveParams, Error, FIELD_BYTES, JacobianPoint, Result, U256};
use bigint::Encoding;
use core::marker::PhantomData;
use signature::hazmat::PrehashVerifier;

#[cfg(feature = "sha256")]
use sha2::{Digest, Sha256};

/// Size of a serialized signature `r ‖ s` in bytes.
pub const SIGNATURE_SIZE: usize = 2 * FIELD_BYTES;

/// Convert a message digest to an integer.
///
/// A digest of at most 32 bytes is read as a big-endian integer and returned
/// as-is, without reduction. Longer digests are folded modulo the group order
/// one byte at a time, so no bits are discarded.
pub fn hash_to_uint<C: CurveParams>(hash: &[u8]) -> U256 {
    if hash.len() <= FIELD_BYTES {
        let mut bytes = [0u8; FIELD_BYTES];
        bytes[FIELD_BYTES - hash.len()..].copy_from_slice(hash);
        return U256::from_be_bytes(bytes);
    }

    let n = &C::ORDER;
    let radix = U256::from_u16(0x100);

    hash.iter().fold(U256::ZERO, |acc, byte| {
        n.add(&n.mul(&acc, &radix), &U256::from_u8(*byte))
    })
}

/// Verify an ECDSA signature `(r, s)` over `hash` against the public key
/// `(pub_x, pub_y)`.
///
/// Returns `Err` when the inputs are malformed (see [`Signature::from_scalars`]
/// and [`VerifyingKey::from_coordinates`]), `Ok(false)` when they are
/// well-formed but the signature does not match, and `Ok(true)` otherwise.
pub fn verify<C: CurveParams>(
    pub_x: &U256,
    pub_y: &U256,
    hash: &[u8],
    r: &U256,
    s: &U256,
) -> Result<bool> {
    let signature = Signature::<C>::from_scalars(*r, *s)?;
    let verifying_key = VerifyingKey::<C>::from_coordinates(*pub_x, *pub_y)?;
    Ok(verifying_key.is_valid(hash, &signature))
}

/// ECDSA signature: a pair of scalars `(r, s)`, each in `[1, n)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Signature<C: CurveParams> {
    r: U256,
    s: U256,
    curve: PhantomData<C>,
}

impl<C> Signature<C>
where
    C: CurveParams,
{
    /// Create a signature from its scalar components.
    pub fn from_scalars(r: U256, s: U256) -> Result<Self> {
        let n = &C::ORDER;

        for scalar in [&r, &s] {
            if *scalar == U256::ZERO || !n.contains(scalar) {
                return Err(Error::ScalarOutOfRange);
            }
        }

        Ok(Self {
            r,
            s,
            curve: PhantomData,
        })
    }

    /// Parse a signature from its fixed-width `r ‖ s` encoding.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != SIGNATURE_SIZE {
            return Err(Error::Encoding);
        }

        let (r, s) = bytes.split_at(FIELD_BYTES);
        Self::from_scalars(U256::from_be_slice(r), U256::from_be_slice(s))
    }

    /// Serialize as `r ‖ s`.
    pub fn to_bytes(&self) -> [u8; SIGNATURE_SIZE] {
        let mut out = [0u8; SIGNATURE_SIZE];
        out[..FIELD_BYTES].copy_from_slice(&self.r.to_be_bytes());
        out[FIELD_BYTES..].copy_from_slice(&self.s.to_be_bytes());
        out
    }

    /// The `r` component.
    pub fn r(&self) -> &U256 {
        &self.r
    }

    /// The `s` component.
    pub fn s(&self) -> &U256 {
        &self.s
    }
}

impl<C> TryFrom<&[u8]> for Signature<C>
where
    C: CurveParams,
{
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_bytes(bytes)
    }
}

/// ECDSA verification key (i.e. public key): a finite point on the curve.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VerifyingKey<C: CurveParams> {
    point: AffinePoint<C>,
}

impl<C> VerifyingKey<C>
where
    C: CurveParams,
{
    /// Initialize from an affine point, rejecting the identity.
    pub fn from_affine(point: AffinePoint<C>) -> Result<Self> {
        if point.is_identity().into() {
            return Err(Error::Identity);
        }

        if !bool::from(point.is_on_curve()) {
            return Err(Error::NotOnCurve);
        }

        Ok(Self { point })
    }

    /// Initialize from affine coordinates.
    pub fn from_coordinates(x: U256, y: U256) -> Result<Self> {
        Self::from_affine(AffinePoint::from_coordinates(x, y)?)
    }

    /// Initialize from an uncompressed SEC1-encoded public key.
    pub fn from_sec1_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_affine(AffinePoint::from_uncompressed(bytes)?)
    }

    /// Borrow the inner [`AffinePoint`] for this public key.
    pub fn as_affine(&self) -> &AffinePoint<C> {
        &self.point
    }

    /// Verify `signature` over the message digest `prehash`.
    pub fn verify_prehash(&self, prehash: &[u8], signature: &Signature<C>) -> Result<()> {
        if self.is_valid(prehash, signature) {
            Ok(())
        } else {
            Err(Error::Verification)
        }
    }

    fn is_valid(&self, prehash: &[u8], signature: &Signature<C>) -> bool {
        let n = &C::ORDER;
        let e = n.reduce(&hash_to_uint::<C>(prehash));

        let w = n.invert(&signature.s);
        let u1 = n.mul(&e, &w);
        let u2 = n.mul(&signature.r, &w);

        let point = JacobianPoint::mul_by_generator(&u1)
            .add(&JacobianPoint::from(&self.point).mul(&u2))
            .to_affine();

        match point.coordinates() {
            Some((x, _)) => n.reduce(&x) == signature.r,
            None => false,
        }
    }
}

impl<C> PrehashVerifier<Signature<C>> for VerifyingKey<C>
where
    C: CurveParams,
{
    fn verify_prehash(&self, prehash: &[u8], signature: &Signature<C>) -> signature::Result<()> {
        Ok(VerifyingKey::verify_prehash(self, prehash, signature)?)
    }
}

#[cfg(feature = "sha256")]
impl<C> signature::Verifier<Signature<C>> for VerifyingKey<C>
where
    C: CurveParams,
{
    fn verify(&self, msg: &[u8], signature: &Signature<C>) -> signature::Result<()> {
        let digest = Sha256::digest(msg);
        Ok(VerifyingKey::verify_prehash(self, digest.as_slice(), signature)?)
    }
}

impl<C> From<VerifyingKey<C>> for AffinePoint<C>
where
    C: CurveParams,
{
    fn from(verifying_key: VerifyingKey<C>) -> AffinePoint<C> {
        verifying_key.point
    }
}

impl<C> TryFrom<AffinePoint<C>> for VerifyingKey<C>
where
    C: CurveParams,
{
    type Error = Error;

    fn try_from(point: AffinePoint<C>) -> Result<Self> {
        Self::from_affine(point)
    }
}
