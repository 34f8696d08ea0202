use num_bigint::BigInt;
use num_rational::BigRational;
use thiserror::Error;

use crate::base::{MAX_BASE, MIN_BASE};

/// Common result type used across this crate.
pub type Result<T, E = MathError> = core::result::Result<T, E>;

/// Top-level error type to keep error management simple for users.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum MathError {
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Interpolation(#[from] InterpolationError),
}

/// Errors returned while turning a share's textual value into an integer.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum DecodeError {
    #[error("base {0} is outside the supported range {min}..={max}", min = MIN_BASE, max = MAX_BASE)]
    InvalidBase(u32),
    #[error("invalid base literal {0:?}")]
    MalformedBase(String),
    #[error("invalid digit {digit:?} at position {position} for base {base}")]
    InvalidDigit {
        digit: char,
        position: usize,
        base: u32,
    },
    #[error("value is empty")]
    EmptyValue,
}

/// Errors returned by the Lagrange interpolation helpers.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum InterpolationError {
    #[error("cannot interpolate over an empty point set")]
    EmptyPointSet,
    #[error("duplicate abscissa x = {0}")]
    DuplicateAbscissa(BigInt),
    #[error("value at x = {x} is not an integer: {value}")]
    NonIntegralResult { x: BigInt, value: BigRational },
}
