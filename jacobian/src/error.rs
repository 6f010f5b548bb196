//! Error type

use core::fmt::{self, Display};

/// Result type with the `jacobian` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors raised while validating points, scalars and signatures.
///
/// Arithmetic itself never fails: degenerate inputs such as the identity or
/// a zero denominator follow documented conventions instead. Errors only
/// surface where untrusted values enter the crate.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Scalar is zero or not less than the group order.
    ScalarOutOfRange,

    /// Coordinate is not less than the field modulus.
    CoordinateOutOfRange,

    /// Coordinates do not satisfy the curve equation.
    NotOnCurve,

    /// Point at infinity where a finite point is required.
    Identity,

    /// Malformed byte encoding.
    Encoding,

    /// Well-formed signature which does not match the message and key.
    Verification,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Error::ScalarOutOfRange => "scalar out of range",
            Error::CoordinateOutOfRange => "coordinate out of range",
            Error::NotOnCurve => "point not on curve",
            Error::Identity => "point at infinity",
            Error::Encoding => "malformed encoding",
            Error::Verification => "signature verification failed",
        })
    }
}

impl core::error::Error for Error {}

#[cfg(feature = "ecdsa")]
impl From<Error> for signature::Error {
    fn from(_: Error) -> signature::Error {
        signature::Error::new()
    }
}
