//! Arithmetic modulo a fixed odd 256-bit modulus.
//!
//! Every operation expects its operands to already be reduced, i.e. in
//! `[0, m)`. Inputs outside that range are a caller bug: results are
//! unspecified and no validation is performed here. Range checks live at the
//! API boundary, in [`AffinePoint::from_coordinates`] and the ECDSA
//! signature constructors.
//!
//! [`AffinePoint::from_coordinates`]: crate::AffinePoint::from_coordinates

use crate::U256;
use subtle::{ConditionallySelectable, ConstantTimeEq};

/// Odd 256-bit modulus: either a curve's field prime `p` or its group order
/// `n`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Modulus(U256);

impl Modulus {
    /// Create a new modulus.
    ///
    /// # Panics
    ///
    /// If `modulus` is even.
    pub const fn new(modulus: U256) -> Self {
        assert!(modulus.bit_vartime(0), "modulus must be odd");
        Self(modulus)
    }

    /// Parse a modulus from a big-endian hexadecimal string.
    pub const fn from_be_hex(hex: &str) -> Self {
        Self::new(U256::from_be_hex(hex))
    }

    /// Borrow the modulus as an integer.
    pub const fn get(&self) -> &U256 {
        &self.0
    }

    /// Is `value` a canonical residue, i.e. in `[0, m)`?
    pub fn contains(&self, value: &U256) -> bool {
        value < &self.0
    }

    /// Reduce an arbitrary 256-bit integer into `[0, m)`.
    pub fn reduce(&self, value: &U256) -> U256 {
        U256::const_rem_wide((*value, U256::ZERO), &self.0).0
    }

    /// Returns `a + b mod m`.
    pub fn add(&self, a: &U256, b: &U256) -> U256 {
        a.add_mod(b, &self.0)
    }

    /// Returns `a - b mod m`, always in `[0, m)`.
    pub fn sub(&self, a: &U256, b: &U256) -> U256 {
        a.sub_mod(b, &self.0)
    }

    /// Returns `-a mod m`.
    pub fn neg(&self, a: &U256) -> U256 {
        U256::ZERO.sub_mod(a, &self.0)
    }

    /// Returns `2·a mod m`.
    pub fn double(&self, a: &U256) -> U256 {
        a.add_mod(a, &self.0)
    }

    /// Returns `a · b mod m`.
    ///
    /// The full 512-bit product is computed before reducing, so no
    /// intermediate value is truncated.
    pub fn mul(&self, a: &U256, b: &U256) -> U256 {
        U256::const_rem_wide(a.mul_wide(b), &self.0).0
    }

    /// Returns `a² mod m`.
    pub fn square(&self, a: &U256) -> U256 {
        self.mul(a, a)
    }

    /// Returns `base ^ exp mod m` by left-to-right square-and-multiply.
    ///
    /// Variable-time in `exp`.
    pub fn pow(&self, base: &U256, exp: &U256) -> U256 {
        let mut acc = U256::ONE;

        for i in (0..U256::BITS).rev() {
            acc = self.square(&acc);

            if exp.bit_vartime(i) {
                acc = self.mul(&acc, base);
            }
        }

        acc
    }

    /// Returns the multiplicative inverse `a⁻¹ mod m`.
    ///
    /// `invert(0) == 0`: zero has no inverse and callers must treat a zero
    /// result as "undefined" and propagate the identity instead of using it
    /// as a field element. Computed as `a^(m-2)`, which requires `m` to be
    /// prime.
    pub fn invert(&self, a: &U256) -> U256 {
        let exp = self.0.wrapping_sub(&U256::from_u8(2));
        let inv = self.pow(a, &exp);
        U256::conditional_select(&inv, &U256::ZERO, a.ct_eq(&U256::ZERO))
    }
}

/// Returns `value⁻¹ mod modulus` for an explicit modulus.
///
/// `modulus` must be prime and `value` must be reduced. Inverting zero
/// yields zero. Odd moduli are enforced when the [`Modulus`] is built.
pub fn invmod(value: &U256, modulus: &Modulus) -> U256 {
    modulus.invert(value)
}
