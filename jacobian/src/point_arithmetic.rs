//! Point doubling formulas specialized to the short Weierstrass equation's
//! 𝒂-coefficient.
//!
//! Both formulas take a Jacobian point `(X, Y, Z)` standing for the affine
//! point `(X/Z², Y/Z³)`. Callers handle the identity (`Z = 0`) before
//! dispatching here.

use crate::{CurveParams, JacobianPoint, U256};

mod sealed {
    use crate::{CurveParams, JacobianPoint};

    /// Elliptic point arithmetic implementation
    ///
    /// Provides point doubling which might be optimized for the curve.
    pub trait PointArithmetic<C: CurveParams> {
        /// Returns `point + point`
        fn double(point: &JacobianPoint<C>) -> JacobianPoint<C>;
    }
}

pub use sealed::PointArithmetic;

/// The 𝒂-coefficient of the short Weierstrass equation is 0.
pub struct EquationAIsZero {}

impl<C: CurveParams> PointArithmetic<C> for EquationAIsZero {
    /// Implements point doubling for curves with `a = 0`
    ///
    /// Implements the `dbl-2009-l` formula from the [Explicit-Formulas Database].
    /// The comments after each line name the intermediate values of the
    /// formula.
    ///
    /// [Explicit-Formulas Database]: https://hyperelliptic.org/EFD/g1p/auto-shortw-jacobian-0.html#doubling-dbl-2009-l
    fn double(point: &JacobianPoint<C>) -> JacobianPoint<C> {
        debug_assert_eq!(
            C::EQUATION_A,
            U256::ZERO,
            "this implementation is only valid for C::EQUATION_A = 0"
        );

        let p = &C::FIELD_MODULUS;

        let a = p.square(&point.x); // A = X²
        let b = p.square(&point.y); // B = Y²
        let c = p.square(&b); // C = B²
        let xb = p.square(&p.add(&point.x, &b));
        let d = p.double(&p.sub(&p.sub(&xb, &a), &c)); // D = 2·((X + B)² - A - C)
        let e = p.add(&p.double(&a), &a); // E = 3·A
        let f = p.square(&e); // F = E²

        let x = p.sub(&f, &p.double(&d)); // X₃ = F - 2·D
        let c8 = p.double(&p.double(&p.double(&c)));
        let y = p.sub(&p.mul(&e, &p.sub(&d, &x)), &c8); // Y₃ = E·(D - X₃) - 8·C
        let z = p.double(&p.mul(&point.y, &point.z)); // Z₃ = 2·Y·Z

        JacobianPoint::new(x, y, z)
    }
}

/// The 𝒂-coefficient of the short Weierstrass equation is -3.
pub struct EquationAIsMinusThree {}

impl<C: CurveParams> PointArithmetic<C> for EquationAIsMinusThree {
    /// Implements point doubling for curves with `a = -3`
    ///
    /// Implements the `dbl-2001-b` formula from the [Explicit-Formulas Database].
    /// The slope numerator `α = 3·(X - Z²)·(X + Z²)` folds `a·Z⁴` into a single
    /// product.
    ///
    /// [Explicit-Formulas Database]: https://hyperelliptic.org/EFD/g1p/auto-shortw-jacobian-3.html#doubling-dbl-2001-b
    fn double(point: &JacobianPoint<C>) -> JacobianPoint<C> {
        debug_assert_eq!(
            C::EQUATION_A,
            C::FIELD_MODULUS.neg(&U256::from_u8(3)),
            "this implementation is only valid for C::EQUATION_A = -3"
        );

        let p = &C::FIELD_MODULUS;

        let delta = p.square(&point.z); // δ = Z²
        let gamma = p.square(&point.y); // γ = Y²
        let beta = p.mul(&point.x, &gamma); // β = X·γ
        let alpha = p.mul(
            &p.sub(&point.x, &delta),
            &p.add(&point.x, &delta),
        );
        let alpha = p.add(&p.double(&alpha), &alpha); // α = 3·(X - δ)·(X + δ)

        let beta4 = p.double(&p.double(&beta));
        let x = p.sub(&p.square(&alpha), &p.double(&beta4)); // X₃ = α² - 8·β
        let yz = p.square(&p.add(&point.y, &point.z));
        let z = p.sub(&p.sub(&yz, &gamma), &delta); // Z₃ = (Y + Z)² - γ - δ
        let gamma_sq8 = p.double(&p.double(&p.double(&p.square(&gamma))));
        let y = p.sub(&p.mul(&alpha, &p.sub(&beta4, &x)), &gamma_sq8); // Y₃ = α·(4·β - X₃) - 8·γ²

        JacobianPoint::new(x, y, z)
    }
}
