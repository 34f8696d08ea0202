//! Miscellaneous helpers shared across math modules.

use num_bigint::BigInt;
use num_traits::Zero;

/// Evaluate `c_0 + c_1 x + ... + c_n x^n` at `x` using Horner's rule.
///
/// Coefficients are ordered from the constant term upwards; an empty slice is
/// the zero polynomial.
pub fn evaluate_polynomial(coefficients: &[BigInt], x: &BigInt) -> BigInt {
    coefficients
        .iter()
        .rev()
        .fold(BigInt::zero(), |acc, coefficient| acc * x + coefficient)
}
