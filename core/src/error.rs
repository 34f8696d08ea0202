use math::error::{DecodeError, InterpolationError, MathError};
use thiserror::Error;

/// Result type specialized for reconstruction operations.
pub type ShamirResult<T> = std::result::Result<T, ShamirError>;

/// Errors that can arise while turning shares back into a secret.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShamirError {
    #[error("Invalid threshold: need at least one share, got {0}")]
    InvalidThreshold(usize),
    #[error("Insufficient points: need {required}, got {provided}")]
    InsufficientPoints { required: usize, provided: usize },
    #[error("Invalid share index: {0}")]
    InvalidShareIndex(u64),
    #[error("Share {index}: {source}")]
    Decode {
        index: u64,
        #[source]
        source: DecodeError,
    },
    #[error(transparent)]
    Math(#[from] MathError),
}

impl From<InterpolationError> for ShamirError {
    fn from(value: InterpolationError) -> Self {
        ShamirError::Math(value.into())
    }
}

impl ShamirError {
    /// True when the basis did not interpolate to an integer secret.
    pub fn is_non_integral(&self) -> bool {
        matches!(
            self,
            ShamirError::Math(MathError::Interpolation(
                InterpolationError::NonIntegralResult { .. }
            ))
        )
    }
}
