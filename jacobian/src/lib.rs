#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

pub mod point_arithmetic;

#[cfg(feature = "dev")]
pub mod dev;
#[cfg(feature = "ecdh")]
pub mod ecdh;
#[cfg(feature = "ecdsa")]
pub mod ecdsa;

mod affine;
mod error;
mod fraction;
mod jacobian;
mod modular;

#[cfg(test)]
mod test_curves;

pub use crate::{
    affine::{AffinePoint, UNCOMPRESSED_POINT_SIZE},
    error::{Error, Result},
    fraction::Fraction,
    jacobian::JacobianPoint,
    modular::{Modulus, invmod},
};
pub use bigint::{self, U256};
pub use subtle;

use core::fmt::Debug;

/// Size of a serialized field element or scalar in bytes.
pub const FIELD_BYTES: usize = 32;

/// Parameters of a prime order elliptic curve described by the short
/// Weierstrass equation `y² = x³ + a·x + b` over a 256-bit prime field.
///
/// Implemented by a zero-sized marker type per curve. Points are generic over
/// the marker, which keeps values belonging to different curves from ever
/// being combined.
pub trait CurveParams:
    Copy + Clone + Debug + Default + Eq + Ord + Send + Sync + 'static
{
    /// Field modulus `p`.
    const FIELD_MODULUS: Modulus;

    /// Order `n` of the group generated by [`CurveParams::GENERATOR`].
    const ORDER: Modulus;

    /// Coefficient `a` in the curve equation, reduced modulo `p`.
    const EQUATION_A: U256;

    /// Coefficient `b` in the curve equation.
    const EQUATION_B: U256;

    /// Generator point's affine coordinates: (x, y).
    const GENERATOR: (U256, U256);

    /// Point doubling formula specialized to the `a`-coefficient.
    type PointArithmetic: point_arithmetic::PointArithmetic<Self>;
}
