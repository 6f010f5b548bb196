#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(
    clippy::mod_module_files,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

#[cfg(feature = "ecdh")]
pub mod ecdh;

#[cfg(feature = "ecdsa")]
pub mod ecdsa;

#[cfg(any(feature = "test-vectors", test))]
pub mod test_vectors;

pub use jacobian::{self, Error, Fraction, Modulus, Result, U256};

use jacobian::{CurveParams, point_arithmetic::EquationAIsZero};

/// Order of the secp256k1 group serialized as hexadecimal.
///
/// ```text
/// n = FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFE BAAEDCE6 AF48A03B BFD25E8C D0364141
/// ```
const ORDER_HEX: &str = "fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141";

/// Field modulus `p = 2^256 - 2^32 - 977`.
const MODULUS_HEX: &str = "fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f";

/// secp256k1 elliptic curve.
///
/// Specified in Certicom's SECG in SEC 2: Recommended Elliptic Curve Domain Parameters:
///
/// <https://www.secg.org/sec2-v2.pdf>
///
/// The curve's equation is `y² = x³ + 7` over a ~256-bit prime field.
///
/// It's primarily notable for its use in Bitcoin and other cryptocurrencies.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, PartialOrd, Ord)]
pub struct Secp256k1;

impl CurveParams for Secp256k1 {
    const FIELD_MODULUS: Modulus = Modulus::from_be_hex(MODULUS_HEX);
    const ORDER: Modulus = Modulus::from_be_hex(ORDER_HEX);

    /// a = 0
    const EQUATION_A: U256 = U256::ZERO;

    /// b = 7
    const EQUATION_B: U256 = U256::from_u8(7);

    /// Base point of secp256k1.
    ///
    /// ```text
    /// Gₓ = 79be667e f9dcbbac 55a06295 ce870b07 029bfcdb 2dce28d9 59f2815b 16f81798
    /// Gᵧ = 483ada77 26a3c465 5da4fbfc 0e1108a8 fd17b448 a6855419 9c47d08f fb10d4b8
    /// ```
    const GENERATOR: (U256, U256) = (
        U256::from_be_hex("79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"),
        U256::from_be_hex("483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8"),
    );

    type PointArithmetic = EquationAIsZero;
}

/// Elliptic curve point in affine coordinates.
pub type AffinePoint = jacobian::AffinePoint<Secp256k1>;

/// Elliptic curve point in Jacobian coordinates.
pub type JacobianPoint = jacobian::JacobianPoint<Secp256k1>;

/// Field modulus `p`.
pub const FIELD_MODULUS: Modulus = Secp256k1::FIELD_MODULUS;

/// Group order `n`.
pub const ORDER: Modulus = Secp256k1::ORDER;

/// Compute `[k] P`, returned in affine coordinates.
pub fn scalar_mult(k: &U256, point: &AffinePoint) -> AffinePoint {
    point.mul(k)
}

/// Compute `[k] G` for the secp256k1 base point `G`.
pub fn scalar_base_mult(k: &U256) -> AffinePoint {
    JacobianPoint::mul_by_generator(k).to_affine()
}
