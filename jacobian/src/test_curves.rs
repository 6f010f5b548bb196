//! Curve parameters for unit tests within this crate.

use crate::{
    AffinePoint, CurveParams, JacobianPoint, Modulus, U256,
    point_arithmetic::{EquationAIsMinusThree, EquationAIsZero},
};

pub const K256_FIELD_MODULUS: Modulus =
    Modulus::from_be_hex("fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f");

const P256_FIELD_MODULUS: Modulus =
    Modulus::from_be_hex("ffffffff00000001000000000000000000000000ffffffffffffffffffffffff");

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, PartialOrd, Ord)]
pub struct Secp256k1;

impl CurveParams for Secp256k1 {
    const FIELD_MODULUS: Modulus = K256_FIELD_MODULUS;
    const ORDER: Modulus =
        Modulus::from_be_hex("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141");
    const EQUATION_A: U256 = U256::ZERO;
    const EQUATION_B: U256 = U256::from_u8(7);
    const GENERATOR: (U256, U256) = (
        U256::from_be_hex("79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"),
        U256::from_be_hex("483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8"),
    );
    type PointArithmetic = EquationAIsZero;
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, PartialOrd, Ord)]
pub struct NistP256;

impl CurveParams for NistP256 {
    const FIELD_MODULUS: Modulus = P256_FIELD_MODULUS;
    const ORDER: Modulus =
        Modulus::from_be_hex("ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551");
    const EQUATION_A: U256 =
        U256::from_be_hex("ffffffff00000001000000000000000000000000fffffffffffffffffffffffc");
    const EQUATION_B: U256 =
        U256::from_be_hex("5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b");
    const GENERATOR: (U256, U256) = (
        U256::from_be_hex("6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296"),
        U256::from_be_hex("4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5"),
    );
    type PointArithmetic = EquationAIsMinusThree;
}

pub type K256Point = JacobianPoint<Secp256k1>;
pub type K256Affine = AffinePoint<Secp256k1>;
pub type P256Point = JacobianPoint<NistP256>;
pub type P256Affine = AffinePoint<NistP256>;
