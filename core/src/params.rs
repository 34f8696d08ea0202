use crate::error::{ShamirError, ShamirResult};

/// Check that `threshold` shares can be drawn from `available` points.
pub fn validate_threshold_config(threshold: usize, available: usize) -> bool {
    (1..=available).contains(&threshold)
}

/// Reconstruction threshold `k`: the polynomial has degree at most `k - 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ThresholdParams {
    threshold: usize,
}

impl ThresholdParams {
    pub fn new(threshold: usize) -> ShamirResult<Self> {
        if threshold == 0 {
            return Err(ShamirError::InvalidThreshold(threshold));
        }
        Ok(Self { threshold })
    }

    #[inline]
    pub const fn threshold(self) -> usize {
        self.threshold
    }

    #[inline]
    pub const fn degree_bound(self) -> usize {
        self.threshold - 1
    }

    /// Fail unless at least `threshold` points are available.
    pub fn ensure_available(self, available: usize) -> ShamirResult<()> {
        if validate_threshold_config(self.threshold, available) {
            Ok(())
        } else {
            Err(ShamirError::InsufficientPoints {
                required: self.threshold,
                provided: available,
            })
        }
    }

    /// Number of points beyond the basis that can expose corrupted shares.
    pub fn redundancy(self, available: usize) -> usize {
        available.saturating_sub(self.threshold)
    }
}

impl TryFrom<usize> for ThresholdParams {
    type Error = ShamirError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        ThresholdParams::new(value)
    }
}
