//! Numerator/denominator pairs with deferred inversion.
//!
//! A [`Fraction`] `(x, z)` stands for the residue `x · z⁻¹` without paying for
//! the inversion. Sums, differences, products and quotients are formed by
//! cross multiplication; [`Fraction::reduce`] performs the single inversion
//! once a plain residue is actually needed.

use crate::{Modulus, U256};
use subtle::{Choice, ConstantTimeEq};

/// Unreduced ratio `numerator / denominator` of two residues.
///
/// The denominator is not required to be one, and may be zero after dividing
/// by a zero fraction: such a fraction is degenerate and reduces to zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fraction {
    numerator: U256,
    denominator: U256,
}

impl Fraction {
    /// The fraction `0 / 1`.
    pub const ZERO: Self = Self::from_uint(U256::ZERO);

    /// The fraction `1 / 1`.
    pub const ONE: Self = Self::from_uint(U256::ONE);

    /// Create a fraction from a numerator and denominator, both reduced.
    pub const fn new(numerator: U256, denominator: U256) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Create the fraction `value / 1`.
    pub const fn from_uint(value: U256) -> Self {
        Self::new(value, U256::ONE)
    }

    /// Numerator.
    pub const fn numerator(&self) -> &U256 {
        &self.numerator
    }

    /// Denominator.
    pub const fn denominator(&self) -> &U256 {
        &self.denominator
    }

    /// Returns `self + rhs`: `(x·z₂ + x₂·z, z·z₂)`.
    pub fn add(&self, rhs: &Self, m: &Modulus) -> Self {
        Self {
            numerator: m.add(
                &m.mul(&self.numerator, &rhs.denominator),
                &m.mul(&rhs.numerator, &self.denominator),
            ),
            denominator: m.mul(&self.denominator, &rhs.denominator),
        }
    }

    /// Returns `self - rhs`: `(x·z₂ - x₂·z, z·z₂)`.
    ///
    /// The numerator is brought back into `[0, m)` when the raw difference is
    /// negative.
    pub fn sub(&self, rhs: &Self, m: &Modulus) -> Self {
        Self {
            numerator: m.sub(
                &m.mul(&self.numerator, &rhs.denominator),
                &m.mul(&rhs.numerator, &self.denominator),
            ),
            denominator: m.mul(&self.denominator, &rhs.denominator),
        }
    }

    /// Returns `self · rhs`: `(x·x₂, z·z₂)`.
    pub fn mul(&self, rhs: &Self, m: &Modulus) -> Self {
        Self {
            numerator: m.mul(&self.numerator, &rhs.numerator),
            denominator: m.mul(&self.denominator, &rhs.denominator),
        }
    }

    /// Returns `self / rhs`: `(x·z₂, z·x₂)`.
    ///
    /// No inversion takes place. Dividing by a fraction with a zero numerator
    /// produces a zero denominator rather than an error.
    pub fn div(&self, rhs: &Self, m: &Modulus) -> Self {
        Self {
            numerator: m.mul(&self.numerator, &rhs.denominator),
            denominator: m.mul(&self.denominator, &rhs.numerator),
        }
    }

    /// Collapse into the residue `x · z⁻¹ mod m`.
    ///
    /// A degenerate fraction (zero denominator) reduces to zero.
    pub fn reduce(&self, m: &Modulus) -> U256 {
        m.mul(&self.numerator, &m.invert(&self.denominator))
    }

    /// Do both fractions denote the same residue? Compared as
    /// `x·z₂ == x₂·z`, without inverting anything.
    pub fn is_equivalent(&self, rhs: &Self, m: &Modulus) -> Choice {
        m.mul(&self.numerator, &rhs.denominator)
            .ct_eq(&m.mul(&rhs.numerator, &self.denominator))
    }
}

impl From<U256> for Fraction {
    fn from(value: U256) -> Self {
        Self::from_uint(value)
    }
}

#[cfg(test)]
mod tests {
    use super::Fraction;
    use crate::{Modulus, U256};
    use proptest::prelude::*;

    const P: Modulus =
        Modulus::from_be_hex("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F");

    fn frac(numerator: u64, denominator: u64) -> Fraction {
        Fraction::new(U256::from_u64(numerator), U256::from_u64(denominator))
    }

    fn p_minus(k: u64) -> Fraction {
        Fraction::from_uint(P.get().wrapping_sub(&U256::from_u64(k)))
    }

    #[test]
    fn add() {
        assert_eq!(frac(2, 3).add(&frac(4, 5), &P), frac(22, 15));
        assert_eq!(p_minus(1).add(&frac(2, 1), &P), frac(1, 1));
        assert_eq!(p_minus(1).add(&p_minus(2), &P), p_minus(3));
    }

    #[test]
    fn sub() {
        assert_eq!(
            frac(2, 3).sub(&frac(4, 5), &P),
            Fraction::new(*p_minus(2).numerator(), U256::from_u8(15))
        );
        assert_eq!(frac(2, 1).sub(&p_minus(1), &P), frac(3, 1));
        assert_eq!(p_minus(2).sub(&p_minus(1), &P), p_minus(1));
        assert_eq!(p_minus(16).sub(&p_minus(16), &P), frac(0, 1));
    }

    #[test]
    fn mul() {
        assert_eq!(frac(2, 3).mul(&frac(4, 5), &P), frac(8, 15));
        assert_eq!(p_minus(1).mul(&frac(2, 1), &P), p_minus(2));
        assert_eq!(p_minus(2).mul(&p_minus(3), &P), frac(6, 1));
        assert_eq!(frac(2, 3).mul(&frac(0, 5), &P), frac(0, 15));
    }

    #[test]
    fn div() {
        assert_eq!(frac(2, 3).div(&frac(4, 5), &P), frac(10, 12));
        assert_eq!(
            p_minus(1).div(&frac(2, 1), &P),
            Fraction::new(*p_minus(1).numerator(), U256::from_u8(2))
        );
        assert_eq!(
            p_minus(2).div(&p_minus(3), &P),
            Fraction::new(*p_minus(2).numerator(), *p_minus(3).numerator())
        );
        assert_eq!(frac(2, 3).div(&frac(0, 5), &P), frac(10, 0));
    }

    #[test]
    fn reduce() {
        assert_eq!(frac(10, 5).reduce(&P), U256::from_u8(2));
        assert_eq!(frac(10, 0).reduce(&P), U256::ZERO);
        assert_eq!(
            p_minus(1).div(&frac(2, 1), &P).reduce(&P),
            P.get().shr_vartime(1)
        );
    }

    #[test]
    fn equivalence_ignores_representation() {
        assert!(bool::from(frac(2, 3).is_equivalent(&frac(4, 6), &P)));
        assert!(bool::from(frac(1, 2).is_equivalent(&p_minus(1).div(&p_minus(2), &P), &P)));
        assert!(!bool::from(frac(2, 3).is_equivalent(&frac(3, 2), &P)));
    }

    prop_compose! {
        fn element()(bytes in any::<[u8; 32]>()) -> U256 {
            P.reduce(&U256::from_be_slice(&bytes))
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn scaling_preserves_equivalence(x in element(), z in element(), k in element()) {
            prop_assume!(z != U256::ZERO && k != U256::ZERO);
            let fraction = Fraction::new(x, z);
            let scaled = Fraction::new(P.mul(&x, &k), P.mul(&z, &k));

            prop_assert!(bool::from(fraction.is_equivalent(&scaled, &P)));
            prop_assert_eq!(fraction.reduce(&P), scaled.reduce(&P));
        }

        #[test]
        fn equivalence_matches_reduction(a in element(), b in element(), z in element()) {
            prop_assume!(z != U256::ZERO);
            let lhs = Fraction::new(a, z);
            let rhs = Fraction::new(b, P.square(&z));

            prop_assert_eq!(
                bool::from(lhs.is_equivalent(&rhs, &P)),
                lhs.reduce(&P) == rhs.reduce(&P)
            );
        }
    }
}
