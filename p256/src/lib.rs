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

use jacobian::{CurveParams, point_arithmetic::EquationAIsMinusThree};

/// Order of NIST P-256's elliptic curve group (i.e. scalar modulus) serialized
/// as hexadecimal.
///
/// ```text
/// n = FFFFFFFF 00000000 FFFFFFFF FFFFFFFF BCE6FAAD A7179E84 F3B9CAC2 FC632551
/// ```
///
/// # Calculating the order
/// One way to calculate the order is with `GP/PARI`:
///
/// ```text
/// p = (2^224) * (2^32 - 1) + 2^192 + 2^96 - 1
/// b = 41058363725152142129326129780047268409114441015993725554835256314039467401291
/// E = ellinit([Mod(-3, p), Mod(b, p)])
/// default(parisize, 120000000)
/// n = ellsea(E)
/// isprime(n)
/// ```
const ORDER_HEX: &str = "ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551";

/// Field modulus `p = 2^{224}(2^{32} − 1) + 2^{192} + 2^{96} − 1`.
const MODULUS_HEX: &str = "ffffffff00000001000000000000000000000000ffffffffffffffffffffffff";

/// NIST P-256 elliptic curve.
///
/// This curve is also known as prime256v1 (ANSI X9.62) and secp256r1 (SECG)
/// and is specified in [NIST SP 800-186]:
/// Recommendations for Discrete Logarithm-based Cryptography:
/// Elliptic Curve Domain Parameters.
///
/// Its equation is `y² = x³ - 3x + b` over a ~256-bit prime field where `b` is
/// the "verifiably random"† constant:
///
/// ```text
/// b = 41058363725152142129326129780047268409114441015993725554835256314039467401291
/// ```
///
/// † *NOTE: the specific origins of this constant have never been fully disclosed
///   (it is the SHA-1 digest of an unknown NSA-selected constant)*
///
/// [NIST SP 800-186]: https://csrc.nist.gov/publications/detail/sp/800-186/final
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, PartialOrd, Ord)]
pub struct NistP256;

impl CurveParams for NistP256 {
    const FIELD_MODULUS: Modulus = Modulus::from_be_hex(MODULUS_HEX);
    const ORDER: Modulus = Modulus::from_be_hex(ORDER_HEX);

    /// a = -3
    const EQUATION_A: U256 =
        U256::from_be_hex("ffffffff00000001000000000000000000000000fffffffffffffffffffffffc");

    const EQUATION_B: U256 =
        U256::from_be_hex("5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b");

    /// Base point of P-256.
    ///
    /// Defined in NIST SP 800-186 § 3.2.1.3: P-256.
    ///
    /// ```text
    /// Gₓ = 6b17d1f2 e12c4247 f8bce6e5 63a440f2 77037d81 2deb33a0 f4a13945 d898c296
    /// Gᵧ = 4fe342e2 fe1a7f9b 8ee7eb4a 7c0f9e16 2bce3357 6b315ece cbb64068 37bf51f5
    /// ```
    const GENERATOR: (U256, U256) = (
        U256::from_be_hex("6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296"),
        U256::from_be_hex("4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5"),
    );

    type PointArithmetic = EquationAIsMinusThree;
}

/// Elliptic curve point in affine coordinates.
pub type AffinePoint = jacobian::AffinePoint<NistP256>;

/// Elliptic curve point in Jacobian coordinates.
pub type JacobianPoint = jacobian::JacobianPoint<NistP256>;

/// Field modulus `p`.
pub const FIELD_MODULUS: Modulus = NistP256::FIELD_MODULUS;

/// Group order `n`.
pub const ORDER: Modulus = NistP256::ORDER;

/// Compute `[k] P`, returned in affine coordinates.
pub fn scalar_mult(k: &U256, point: &AffinePoint) -> AffinePoint {
    point.mul(k)
}

/// Compute `[k] G` for the P-256 base point `G`, returned in affine
/// coordinates.
pub fn scalar_base_mult(k: &U256) -> AffinePoint {
    JacobianPoint::mul_by_generator(k).to_affine()
}
