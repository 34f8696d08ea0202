//! Exact Lagrange interpolation over the integers.
//!
//! For a basis `(x_0, y_0) .. (x_{n-1}, y_{n-1})` with distinct abscissas the
//! interpolating polynomial of degree `< n` evaluates at `x` to
//!
//! ```text
//! L(x) = Σ_i y_i · Π_{j≠i} (x − x_j) / Π_{j≠i} (x_i − x_j)
//! ```
//!
//! Each term is kept as a single fraction and the sum is accumulated as one
//! exact rational. Individual terms are routinely fractional even when the
//! sum is an integer, so nothing is divided until the very end, and a sum
//! with a non-zero remainder is reported instead of truncated.

use std::collections::HashSet;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};

use crate::error::{InterpolationError, Result};
use crate::point::Point;

/// Fail with [`InterpolationError::DuplicateAbscissa`] on the first repeated x.
pub fn ensure_distinct_abscissas(
    points: &[Point],
) -> Result<(), InterpolationError> {
    let mut seen = HashSet::with_capacity(points.len());
    match points.iter().find(|point| !seen.insert(point.x())) {
        Some(point) => {
            Err(InterpolationError::DuplicateAbscissa(point.x().clone()))
        }
        None => Ok(()),
    }
}

/// A validated interpolation basis.
///
/// The per-term denominators `Π_{j≠i} (x_i − x_j)` only depend on the basis,
/// so they are computed once and reused for every evaluation.
#[derive(Clone, Debug)]
pub struct LagrangeBasis<'a> {
    points: &'a [Point],
    denominators: Vec<BigInt>,
}

impl<'a> LagrangeBasis<'a> {
    pub fn new(points: &'a [Point]) -> Result<Self, InterpolationError> {
        if points.is_empty() {
            return Err(InterpolationError::EmptyPointSet);
        }
        ensure_distinct_abscissas(points)?;

        let denominators = points
            .iter()
            .enumerate()
            .map(|(i, point)| {
                Self::others(points, i).fold(BigInt::one(), |acc, other| {
                    acc * (point.x() - other.x())
                })
            })
            .collect();

        Ok(Self {
            points,
            denominators,
        })
    }

    fn others(
        points: &'a [Point],
        skip: usize,
    ) -> impl Iterator<Item = &'a Point> {
        points
            .iter()
            .enumerate()
            .filter(move |(j, _)| *j != skip)
            .map(|(_, point)| point)
    }

    pub fn points(&self) -> &'a [Point] {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Upper bound on the degree of the interpolating polynomial.
    pub fn degree_bound(&self) -> usize {
        self.len() - 1
    }

    /// Value of the interpolating polynomial at `x` as an exact rational.
    pub fn evaluate_exact(&self, x: &BigInt) -> BigRational {
        self.points
            .iter()
            .zip(&self.denominators)
            .enumerate()
            .map(|(i, (point, denominator))| {
                let numerator = Self::others(self.points, i)
                    .fold(point.y().clone(), |acc, other| {
                        acc * (x - other.x())
                    });
                BigRational::new(numerator, denominator.clone())
            })
            .fold(BigRational::zero(), |sum, term| sum + term)
    }

    /// Value of the interpolating polynomial at `x`.
    ///
    /// Fails with [`InterpolationError::NonIntegralResult`] when the value is
    /// not an integer, which means the basis does not lie on an integer
    /// polynomial of degree `< len()`.
    pub fn evaluate(&self, x: &BigInt) -> Result<BigInt, InterpolationError> {
        let value = self.evaluate_exact(x);
        if value.is_integer() {
            Ok(value.to_integer())
        } else {
            Err(InterpolationError::NonIntegralResult {
                x: x.clone(),
                value,
            })
        }
    }

    /// The constant term, i.e. the value at `x = 0`.
    pub fn secret(&self) -> Result<BigInt, InterpolationError> {
        self.evaluate(&BigInt::zero())
    }

    /// Whether `point` lies on the interpolating polynomial.
    pub fn passes_through(&self, point: &Point) -> bool {
        self.evaluate_exact(point.x())
            == BigRational::from_integer(point.y().clone())
    }
}

/// Evaluate the minimal-degree polynomial through `points` at `x`.
///
/// ```
/// use math::prelude::*;
/// use num_bigint::BigInt;
///
/// let points = points![(1, 4), (2, 7), (3, 12)];
/// let secret = interpolate_at(&points, &BigInt::from(0)).unwrap();
/// assert_eq!(secret, BigInt::from(2));
/// ```
pub fn interpolate_at(
    points: &[Point],
    x: &BigInt,
) -> Result<BigInt, InterpolationError> {
    LagrangeBasis::new(points)?.evaluate(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::points;
    use crate::utils::evaluate_polynomial;
    use quickcheck_macros::quickcheck;

    fn big(value: i64) -> BigInt {
        BigInt::from(value)
    }

    #[test]
    fn recovers_constant_term_of_quadratic() {
        // y = x^2 + x + 2
        let points = points![(1, 4), (2, 7), (3, 12)];
        assert_eq!(interpolate_at(&points, &big(0)), Ok(big(2)));
        assert_eq!(interpolate_at(&points, &big(4)), Ok(big(19)));
        assert_eq!(interpolate_at(&points, &big(5)), Ok(big(28)));
    }

    #[test]
    fn returns_basis_values_at_basis_abscissas() {
        let points = points![(1, 4), (2, 7), (3, 12)];
        let basis = LagrangeBasis::new(&points).unwrap();
        for point in &points {
            assert_eq!(basis.evaluate(point.x()).as_ref(), Ok(point.y()));
            assert!(basis.passes_through(point));
        }
    }

    #[test]
    fn fractional_terms_still_sum_exactly() {
        // y = 2x + 1 through x = 1 and x = 3: both terms at x = 2 are halves.
        let points = points![(1, 3), (3, 7)];
        assert_eq!(interpolate_at(&points, &big(2)), Ok(big(5)));
        assert_eq!(interpolate_at(&points, &big(0)), Ok(big(1)));
    }

    #[test]
    fn per_factor_truncation_would_be_wrong_here() {
        // y = 2x^3 - x + 1. Dividing after every factor yields 1 and 56.
        let points = points![(2, 15), (-1, 0), (0, 1), (-3, -50)];
        assert_eq!(interpolate_at(&points, &big(1)), Ok(big(2)));
        assert_eq!(interpolate_at(&points, &big(3)), Ok(big(52)));
    }

    #[test]
    fn single_point_is_a_constant() {
        let points = points![(9, 42)];
        let basis = LagrangeBasis::new(&points).unwrap();
        assert_eq!(basis.degree_bound(), 0);
        assert_eq!(basis.secret(), Ok(big(42)));
        assert_eq!(basis.evaluate(&big(-1000)), Ok(big(42)));
    }

    #[test]
    fn accepts_unordered_abscissas() {
        // y = 3x^2 + 5x + 7
        let points = points![(6, 145), (1, 15), (3, 49)];
        assert_eq!(interpolate_at(&points, &big(0)), Ok(big(7)));
        assert_eq!(interpolate_at(&points, &big(-2)), Ok(big(9)));
    }

    #[test]
    fn rejects_empty_point_sets() {
        assert_eq!(
            interpolate_at(&[], &big(0)),
            Err(InterpolationError::EmptyPointSet)
        );
    }

    #[test]
    fn rejects_duplicate_abscissas() {
        let points = points![(1, 4), (2, 7), (1, 5)];
        assert_eq!(
            interpolate_at(&points, &big(0)),
            Err(InterpolationError::DuplicateAbscissa(big(1)))
        );
    }

    #[test]
    fn reports_non_integral_values_instead_of_truncating() {
        // The line through (1, 1) and (3, 0) crosses x = 0 at 3/2.
        let points = points![(1, 1), (3, 0)];
        let err = interpolate_at(&points, &big(0)).unwrap_err();
        assert_eq!(
            err,
            InterpolationError::NonIntegralResult {
                x: big(0),
                value: BigRational::new(big(3), big(2)),
            }
        );
    }

    #[test]
    fn exact_value_is_available_for_non_integral_points() {
        let points = points![(2, 0), (4, 1)];
        let basis = LagrangeBasis::new(&points).unwrap();
        assert_eq!(basis.secret(), Ok(big(-1)));
        assert_eq!(
            basis.evaluate_exact(&big(3)),
            BigRational::new(big(1), big(2))
        );
        assert!(!basis.passes_through(&Point::new(3, 0)));
        assert!(!basis.passes_through(&Point::new(3, 1)));
    }

    #[test]
    fn handles_large_coefficients() {
        let coefficients: Vec<BigInt> = vec![
            BigInt::parse_bytes(b"123456789012345678901234567890", 10)
                .unwrap(),
            BigInt::from(u64::MAX),
            BigInt::from(i64::MIN),
            BigInt::from(1) << 300,
        ];
        let points: Vec<Point> = (1..=4)
            .map(|x| {
                let x = big(x);
                let y = evaluate_polynomial(&coefficients, &x);
                Point::new(x, y)
            })
            .collect();
        assert_eq!(interpolate_at(&points, &big(0)), Ok(coefficients[0].clone()));
    }

    #[quickcheck]
    fn interpolation_reproduces_integer_polynomials(
        coefficients: Vec<i64>,
        start: i16,
        stride: i8,
        target: i32,
    ) -> bool {
        let mut coefficients: Vec<BigInt> =
            coefficients.into_iter().take(8).map(BigInt::from).collect();
        if coefficients.is_empty() {
            coefficients.push(BigInt::zero());
        }
        let stride = if stride == 0 { 1 } else { i64::from(stride) };

        let points: Vec<Point> = (0..coefficients.len() as i64)
            .map(|i| {
                let x = BigInt::from(i64::from(start) + i * stride);
                let y = evaluate_polynomial(&coefficients, &x);
                Point::new(x, y)
            })
            .collect();

        let target = BigInt::from(target);
        interpolate_at(&points, &target)
            == Ok(evaluate_polynomial(&coefficients, &target))
    }
}
