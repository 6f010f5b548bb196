//! Jacobian curve points.

use crate::{AffinePoint, CurveParams, Fraction, U256, point_arithmetic::PointArithmetic};
use core::{
    marker::PhantomData,
    ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign},
};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Point on a short Weierstrass curve in Jacobian coordinates.
///
/// The triple `(X, Y, Z)` stands for the affine point `(X/Z², Y/Z³)`. Any
/// triple with `Z = 0` is the point at infinity; arithmetic always produces
/// the canonical form [`JacobianPoint::IDENTITY`] for it.
///
/// Coordinates are expected to be reduced modulo the field prime.
#[derive(Clone, Copy, Debug)]
pub struct JacobianPoint<C: CurveParams> {
    pub(crate) x: U256,
    pub(crate) y: U256,
    pub(crate) z: U256,
    curve: PhantomData<C>,
}

impl<C> JacobianPoint<C>
where
    C: CurveParams,
{
    /// Additive identity of the group a.k.a. the point at infinity: `(0, 0, 0)`.
    pub const IDENTITY: Self = Self::new(U256::ZERO, U256::ZERO, U256::ZERO);

    /// Base point of the curve.
    pub const GENERATOR: Self = Self::new(C::GENERATOR.0, C::GENERATOR.1, U256::ONE);

    /// Create a point from raw Jacobian coordinates.
    ///
    /// No curve membership check is performed; the coordinates must already be
    /// reduced modulo the field prime.
    pub const fn new(x: U256, y: U256, z: U256) -> Self {
        Self {
            x,
            y,
            z,
            curve: PhantomData,
        }
    }

    /// Raw `(X, Y, Z)` coordinates.
    pub const fn coordinates(&self) -> (U256, U256, U256) {
        (self.x, self.y, self.z)
    }

    /// Is this point the identity, i.e. `Z = 0`?
    pub fn is_identity(&self) -> Choice {
        self.z.ct_eq(&U256::ZERO)
    }

    /// Returns `self + self`.
    ///
    /// The identity doubles to the canonical identity without touching the
    /// formula.
    pub fn double(&self) -> Self {
        if self.is_identity().into() {
            return Self::IDENTITY;
        }

        C::PointArithmetic::double(self)
    }

    /// Returns `self + other`.
    ///
    /// Implements the `add-2007-bl` formula from the [Explicit-Formulas Database].
    /// The formula is undefined for `P + P` and `P + (-P)`; both are detected
    /// by comparing cross-multiplied coordinates and handled separately.
    ///
    /// [Explicit-Formulas Database]: https://hyperelliptic.org/EFD/g1p/auto-shortw-jacobian.html#addition-add-2007-bl
    pub fn add(&self, other: &Self) -> Self {
        if self.is_identity().into() {
            return *other;
        }

        if other.is_identity().into() {
            return *self;
        }

        let p = &C::FIELD_MODULUS;

        let z1z1 = p.square(&self.z);
        let z2z2 = p.square(&other.z);
        let u1 = p.mul(&self.x, &z2z2); // U₁ = X₁·Z₂²
        let u2 = p.mul(&other.x, &z1z1); // U₂ = X₂·Z₁²
        let s1 = p.mul(&self.y, &p.mul(&other.z, &z2z2)); // S₁ = Y₁·Z₂³
        let s2 = p.mul(&other.y, &p.mul(&self.z, &z1z1)); // S₂ = Y₂·Z₁³

        if u1 == u2 {
            return if s1 == s2 {
                self.double()
            } else {
                Self::IDENTITY
            };
        }

        let h = p.sub(&u2, &u1); // H = U₂ - U₁
        let i = p.square(&p.double(&h)); // I = (2·H)²
        let j = p.mul(&h, &i); // J = H·I
        let r = p.double(&p.sub(&s2, &s1)); // r = 2·(S₂ - S₁)
        let v = p.mul(&u1, &i); // V = U₁·I

        let x3 = p.sub(&p.sub(&p.square(&r), &j), &p.double(&v));
        let y3 = p.sub(&p.mul(&r, &p.sub(&v, &x3)), &p.double(&p.mul(&s1, &j)));
        let zz = p.square(&p.add(&self.z, &other.z));
        let z3 = p.mul(&p.sub(&p.sub(&zz, &z1z1), &z2z2), &h);

        Self::new(x3, y3, z3)
    }

    /// Returns `-self`.
    pub fn neg(&self) -> Self {
        Self::new(self.x, C::FIELD_MODULUS.neg(&self.y), self.z)
    }

    /// Returns `self - other`.
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Returns `[k] self`.
    ///
    /// Left-to-right double-and-add over all 256 bits of `k`: every bit costs
    /// one doubling and one addition, and the sum is kept or discarded with a
    /// conditional select. `k` is used as a plain integer, so `k = 0` yields
    /// the identity and `k ≥ n` wraps around the group order.
    pub fn mul(&self, k: &U256) -> Self {
        let mut q = Self::IDENTITY;

        for i in (0..U256::BITS).rev() {
            q = q.double();
            let sum = q.add(self);
            q.conditional_assign(&sum, Choice::from(k.bit_vartime(i) as u8));
        }

        q
    }

    /// Returns `[k] G` for the curve's generator `G`.
    pub fn mul_by_generator(k: &U256) -> Self {
        Self::GENERATOR.mul(k)
    }

    /// Returns the affine representation of this point.
    ///
    /// Pays a single inversion of `Z`; the identity maps to
    /// [`AffinePoint::IDENTITY`].
    pub fn to_affine(&self) -> AffinePoint<C> {
        if self.is_identity().into() {
            return AffinePoint::IDENTITY;
        }

        let p = &C::FIELD_MODULUS;
        let zinv = p.invert(&self.z);
        let zinv2 = p.square(&zinv);
        let x = p.mul(&self.x, &zinv2);
        let y = p.mul(&self.y, &p.mul(&zinv2, &zinv));

        AffinePoint::new_unchecked(x, y)
    }
}

impl<C> ConditionallySelectable for JacobianPoint<C>
where
    C: CurveParams,
{
    #[inline(always)]
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self::new(
            U256::conditional_select(&a.x, &b.x, choice),
            U256::conditional_select(&a.y, &b.y, choice),
            U256::conditional_select(&a.z, &b.z, choice),
        )
    }
}

impl<C> ConstantTimeEq for JacobianPoint<C>
where
    C: CurveParams,
{
    /// Compares the represented affine points: `X₁·Z₂² = X₂·Z₁²` and
    /// `Y₁·Z₂³ = Y₂·Z₁³`, without inverting either `Z`.
    fn ct_eq(&self, other: &Self) -> Choice {
        let p = &C::FIELD_MODULUS;
        let z1z1 = p.square(&self.z);
        let z2z2 = p.square(&other.z);

        let same_x = Fraction::new(self.x, z1z1).is_equivalent(&Fraction::new(other.x, z2z2), p);
        let same_y = Fraction::new(self.y, p.mul(&z1z1, &self.z))
            .is_equivalent(&Fraction::new(other.y, p.mul(&z2z2, &other.z)), p);

        let lhs_identity = self.is_identity();
        let rhs_identity = other.is_identity();

        (lhs_identity & rhs_identity) | (!lhs_identity & !rhs_identity & same_x & same_y)
    }
}

impl<C> Default for JacobianPoint<C>
where
    C: CurveParams,
{
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<C> Eq for JacobianPoint<C> where C: CurveParams {}

impl<C> PartialEq for JacobianPoint<C>
where
    C: CurveParams,
{
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<C> From<AffinePoint<C>> for JacobianPoint<C>
where
    C: CurveParams,
{
    fn from(p: AffinePoint<C>) -> Self {
        Self::from(&p)
    }
}

impl<C> From<&AffinePoint<C>> for JacobianPoint<C>
where
    C: CurveParams,
{
    fn from(p: &AffinePoint<C>) -> Self {
        match p.coordinates() {
            Some((x, y)) => Self::new(x, y, U256::ONE),
            None => Self::IDENTITY,
        }
    }
}

//
// Arithmetic trait impls
//

impl<C> Add<JacobianPoint<C>> for JacobianPoint<C>
where
    C: CurveParams,
{
    type Output = JacobianPoint<C>;

    fn add(self, other: JacobianPoint<C>) -> JacobianPoint<C> {
        JacobianPoint::add(&self, &other)
    }
}

impl<C> Add<&JacobianPoint<C>> for &JacobianPoint<C>
where
    C: CurveParams,
{
    type Output = JacobianPoint<C>;

    fn add(self, other: &JacobianPoint<C>) -> JacobianPoint<C> {
        JacobianPoint::add(self, other)
    }
}

impl<C> Add<&JacobianPoint<C>> for JacobianPoint<C>
where
    C: CurveParams,
{
    type Output = JacobianPoint<C>;

    fn add(self, other: &JacobianPoint<C>) -> JacobianPoint<C> {
        JacobianPoint::add(&self, other)
    }
}

impl<C> AddAssign<JacobianPoint<C>> for JacobianPoint<C>
where
    C: CurveParams,
{
    fn add_assign(&mut self, rhs: JacobianPoint<C>) {
        *self = JacobianPoint::add(self, &rhs);
    }
}

impl<C> Sub<JacobianPoint<C>> for JacobianPoint<C>
where
    C: CurveParams,
{
    type Output = JacobianPoint<C>;

    fn sub(self, other: JacobianPoint<C>) -> JacobianPoint<C> {
        JacobianPoint::sub(&self, &other)
    }
}

impl<C> Sub<&JacobianPoint<C>> for &JacobianPoint<C>
where
    C: CurveParams,
{
    type Output = JacobianPoint<C>;

    fn sub(self, other: &JacobianPoint<C>) -> JacobianPoint<C> {
        JacobianPoint::sub(self, other)
    }
}

impl<C> Sub<&JacobianPoint<C>> for JacobianPoint<C>
where
    C: CurveParams,
{
    type Output = JacobianPoint<C>;

    fn sub(self, other: &JacobianPoint<C>) -> JacobianPoint<C> {
        JacobianPoint::sub(&self, other)
    }
}

impl<C> SubAssign<JacobianPoint<C>> for JacobianPoint<C>
where
    C: CurveParams,
{
    fn sub_assign(&mut self, rhs: JacobianPoint<C>) {
        *self = JacobianPoint::sub(self, &rhs);
    }
}

impl<C> Mul<&U256> for JacobianPoint<C>
where
    C: CurveParams,
{
    type Output = JacobianPoint<C>;

    fn mul(self, k: &U256) -> JacobianPoint<C> {
        JacobianPoint::mul(&self, k)
    }
}

impl<C> Mul<&U256> for &JacobianPoint<C>
where
    C: CurveParams,
{
    type Output = JacobianPoint<C>;

    fn mul(self, k: &U256) -> JacobianPoint<C> {
        JacobianPoint::mul(self, k)
    }
}

impl<C> Neg for JacobianPoint<C>
where
    C: CurveParams,
{
    type Output = JacobianPoint<C>;

    fn neg(self) -> JacobianPoint<C> {
        JacobianPoint::neg(&self)
    }
}

impl<C> Neg for &JacobianPoint<C>
where
    C: CurveParams,
{
    type Output = JacobianPoint<C>;

    fn neg(self) -> JacobianPoint<C> {
        JacobianPoint::neg(self)
    }
}
