//! Shared macros for constructing core math primitives.

/// Create a [`Vec`] of [`Point`](crate::point::Point)s from `(x, y)` pairs.
///
/// Each coordinate may be any type that converts into `BigInt`.
///
/// ```
/// use math::prelude::*;
///
/// let pts = points![(1, 4), (2, 7)];
/// assert_eq!(pts, vec![Point::new(1, 4), Point::new(2, 7)]);
/// ```
#[macro_export]
macro_rules! points {
    () => {
        ::std::vec::Vec::<$crate::point::Point>::new()
    };
    ($(($x:expr, $y:expr)),+ $(,)?) => {
        vec![$($crate::point::Point::new($x, $y)),+]
    };
}
