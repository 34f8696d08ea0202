//! Integer arithmetic behind share reconstruction: radix decoding of share
//! values and exact Lagrange interpolation over unbounded integers.

mod macros;

pub mod base;
pub mod error;
pub mod lagrange;
pub mod point;
pub mod prelude;
pub mod utils;

pub use lagrange::{interpolate_at, LagrangeBasis};
pub use point::Point;
