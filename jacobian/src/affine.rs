//! Affine curve points.

use crate::{CurveParams, Error, FIELD_BYTES, JacobianPoint, Result, U256};
use bigint::Encoding;
use core::{marker::PhantomData, ops::Neg};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Size of an uncompressed SEC1 point encoding: `0x04 ‖ x ‖ y`.
pub const UNCOMPRESSED_POINT_SIZE: usize = 1 + 2 * FIELD_BYTES;

/// Point on a short Weierstrass curve in affine coordinates.
///
/// The point at infinity has no affine coordinates and is tracked by an
/// explicit tag rather than a sentinel coordinate value.
#[derive(Clone, Copy, Debug)]
pub struct AffinePoint<C: CurveParams> {
    x: U256,
    y: U256,

    /// Is this point the point at infinity? 0 = no, 1 = yes
    ///
    /// This is a proxy for [`Choice`], but uses `u8` instead to permit `const`
    /// constructors for `IDENTITY` and `GENERATOR`.
    infinity: u8,

    curve: PhantomData<C>,
}

impl<C> AffinePoint<C>
where
    C: CurveParams,
{
    /// Additive identity of the group a.k.a. the point at infinity.
    pub const IDENTITY: Self = Self {
        x: U256::ZERO,
        y: U256::ZERO,
        infinity: 1,
        curve: PhantomData,
    };

    /// Base point of the curve.
    pub const GENERATOR: Self = Self::new_unchecked(C::GENERATOR.0, C::GENERATOR.1);

    pub(crate) const fn new_unchecked(x: U256, y: U256) -> Self {
        Self {
            x,
            y,
            infinity: 0,
            curve: PhantomData,
        }
    }

    /// Create a finite point from its affine coordinates.
    ///
    /// Both coordinates must be reduced modulo the field prime and satisfy
    /// `y² = x³ + a·x + b`.
    pub fn from_coordinates(x: U256, y: U256) -> Result<Self> {
        let p = &C::FIELD_MODULUS;

        if !p.contains(&x) || !p.contains(&y) {
            return Err(Error::CoordinateOutOfRange);
        }

        let point = Self::new_unchecked(x, y);

        if point.is_on_curve().into() {
            Ok(point)
        } else {
            Err(Error::NotOnCurve)
        }
    }

    /// Decode a point from its uncompressed SEC1 encoding `0x04 ‖ x ‖ y`.
    pub fn from_uncompressed(bytes: &[u8]) -> Result<Self> {
        match bytes {
            [0x04, coordinates @ ..] if coordinates.len() == 2 * FIELD_BYTES => {
                let (x, y) = coordinates.split_at(FIELD_BYTES);
                Self::from_coordinates(U256::from_be_slice(x), U256::from_be_slice(y))
            }
            _ => Err(Error::Encoding),
        }
    }

    /// Encode a finite point as `0x04 ‖ x ‖ y`.
    ///
    /// The identity has no uncompressed encoding.
    pub fn to_uncompressed(&self) -> Result<[u8; UNCOMPRESSED_POINT_SIZE]> {
        let (x, y) = self.coordinates().ok_or(Error::Identity)?;

        let mut out = [0u8; UNCOMPRESSED_POINT_SIZE];
        out[0] = 0x04;
        out[1..=FIELD_BYTES].copy_from_slice(&x.to_be_bytes());
        out[FIELD_BYTES + 1..].copy_from_slice(&y.to_be_bytes());
        Ok(out)
    }

    /// Affine `(x, y)` coordinates, or `None` for the identity.
    pub fn coordinates(&self) -> Option<(U256, U256)> {
        if self.is_identity().into() {
            None
        } else {
            Some((self.x, self.y))
        }
    }

    /// Is this point the identity point?
    pub fn is_identity(&self) -> Choice {
        Choice::from(self.infinity)
    }

    /// Does this point satisfy the curve equation? The identity always does.
    pub fn is_on_curve(&self) -> Choice {
        let p = &C::FIELD_MODULUS;
        let lhs = p.square(&self.y);
        let x3 = p.mul(&p.square(&self.x), &self.x);
        let ax = p.mul(&C::EQUATION_A, &self.x);
        let rhs = p.add(&p.add(&x3, &ax), &C::EQUATION_B);

        self.is_identity() | lhs.ct_eq(&rhs)
    }

    /// Returns `-self`.
    pub fn neg(&self) -> Self {
        Self {
            y: C::FIELD_MODULUS.neg(&self.y),
            ..*self
        }
    }

    /// Returns `self + other`, computed in Jacobian coordinates.
    pub fn add(&self, other: &Self) -> Self {
        JacobianPoint::from(self).add(&other.into()).to_affine()
    }

    /// Returns `self + self`, computed in Jacobian coordinates.
    pub fn double(&self) -> Self {
        JacobianPoint::from(self).double().to_affine()
    }

    /// Returns `[k] self`, accumulating in Jacobian coordinates and converting
    /// back with a single inversion.
    pub fn mul(&self, k: &U256) -> Self {
        JacobianPoint::from(self).mul(k).to_affine()
    }

    /// Convert to Jacobian coordinates with `Z = 1`.
    pub fn to_jacobian(&self) -> JacobianPoint<C> {
        self.into()
    }
}

impl<C> ConditionallySelectable for AffinePoint<C>
where
    C: CurveParams,
{
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            x: U256::conditional_select(&a.x, &b.x, choice),
            y: U256::conditional_select(&a.y, &b.y, choice),
            infinity: u8::conditional_select(&a.infinity, &b.infinity, choice),
            curve: PhantomData,
        }
    }
}

impl<C> ConstantTimeEq for AffinePoint<C>
where
    C: CurveParams,
{
    fn ct_eq(&self, other: &Self) -> Choice {
        self.x.ct_eq(&other.x) & self.y.ct_eq(&other.y) & self.infinity.ct_eq(&other.infinity)
    }
}

impl<C> Default for AffinePoint<C>
where
    C: CurveParams,
{
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<C> Eq for AffinePoint<C> where C: CurveParams {}

impl<C> PartialEq for AffinePoint<C>
where
    C: CurveParams,
{
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<C> From<JacobianPoint<C>> for AffinePoint<C>
where
    C: CurveParams,
{
    fn from(p: JacobianPoint<C>) -> AffinePoint<C> {
        p.to_affine()
    }
}

impl<C> From<&JacobianPoint<C>> for AffinePoint<C>
where
    C: CurveParams,
{
    fn from(p: &JacobianPoint<C>) -> AffinePoint<C> {
        p.to_affine()
    }
}

impl<C> Neg for AffinePoint<C>
where
    C: CurveParams,
{
    type Output = Self;

    fn neg(self) -> Self {
        AffinePoint::neg(&self)
    }
}
