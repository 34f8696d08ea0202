pub use crate::points;
pub use crate::{
    base::{decode, encode, Base},
    error::{DecodeError, InterpolationError, MathError},
    lagrange::{interpolate_at, LagrangeBasis},
    point::Point,
    utils::evaluate_polynomial,
};
