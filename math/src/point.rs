use std::fmt;

use num_bigint::BigInt;

/// An evaluation `(x, y)` of a share polynomial.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    x: BigInt,
    y: BigInt,
}

impl Point {
    pub fn new(x: impl Into<BigInt>, y: impl Into<BigInt>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }

    #[inline]
    pub fn x(&self) -> &BigInt {
        &self.x
    }

    #[inline]
    pub fn y(&self) -> &BigInt {
        &self.y
    }

    pub fn into_parts(self) -> (BigInt, BigInt) {
        (self.x, self.y)
    }
}

impl<X, Y> From<(X, Y)> for Point
where
    X: Into<BigInt>,
    Y: Into<BigInt>,
{
    fn from((x, y): (X, Y)) -> Self {
        Point::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
