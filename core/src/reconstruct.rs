//! Secret reconstruction and detection of corrupted shares.
//!
//! The first `k` points of a [`PointSet`] form the interpolation basis. The
//! secret is the basis polynomial evaluated at zero, and every point of the
//! set is checked against that polynomial. Points that disagree are
//! reported by their 1-based position in the set.
//!
//! Only points outside the basis carry any evidence: basis points agree with
//! their own interpolant by construction. When most of that evidence
//! disagrees with the basis, the basis itself is the likelier culprit and the
//! result is marked [`Integrity::Unreliable`].

use math::LagrangeBasis;
use num_bigint::BigInt;
use serde::Serialize;

use crate::error::ShamirResult;
use crate::params::ThresholdParams;
use crate::point_set::PointSet;
use crate::share::Share;

/// How much the redundant points back up a reconstruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Integrity {
    /// Exactly `k` points were available, nothing could be cross-checked.
    Unchecked,
    /// Every redundant point agrees with the basis.
    Consistent,
    /// Some redundant points disagree, but no more than half of them.
    Flagged,
    /// More than half of the redundant points disagree with the basis.
    Unreliable,
}

impl Integrity {
    fn assess(redundant: usize, flagged: usize) -> Self {
        if redundant == 0 {
            Integrity::Unchecked
        } else if flagged == 0 {
            Integrity::Consistent
        } else if flagged * 2 <= redundant {
            Integrity::Flagged
        } else {
            Integrity::Unreliable
        }
    }

    /// False only for [`Integrity::Unreliable`].
    pub fn is_trustworthy(self) -> bool {
        !matches!(self, Integrity::Unreliable)
    }
}

/// Outcome of a reconstruction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reconstruction {
    secret: BigInt,
    flagged: Vec<usize>,
    flagged_shares: Vec<u64>,
    threshold: usize,
    total: usize,
}

impl Reconstruction {
    pub fn secret(&self) -> &BigInt {
        &self.secret
    }

    /// 1-based positions of the points that disagree with the basis.
    pub fn flagged(&self) -> &[usize] {
        &self.flagged
    }

    /// Share indices of the flagged points.
    pub fn flagged_share_indices(&self) -> &[u64] {
        &self.flagged_shares
    }

    pub fn has_wrong_points(&self) -> bool {
        !self.flagged.is_empty()
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Number of points that were validated.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn integrity(&self) -> Integrity {
        Integrity::assess(
            self.total.saturating_sub(self.threshold),
            self.flagged.len(),
        )
    }

    pub fn into_parts(self) -> (BigInt, Vec<usize>) {
        (self.secret, self.flagged)
    }
}

/// Reconstructs secrets for a fixed threshold.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reconstructor {
    params: ThresholdParams,
}

impl Reconstructor {
    pub fn new(threshold: usize) -> ShamirResult<Self> {
        Ok(Self::with_params(ThresholdParams::new(threshold)?))
    }

    pub const fn with_params(params: ThresholdParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> ThresholdParams {
        self.params
    }

    pub fn reconstruct(
        &self,
        point_set: &PointSet,
    ) -> ShamirResult<Reconstruction> {
        let basis = LagrangeBasis::new(point_set.basis(self.params)?)?;
        let secret = basis.secret()?;

        let (flagged, flagged_shares) = point_set
            .iter()
            .enumerate()
            .filter(|(_, (_, point))| !basis.passes_through(point))
            .map(|(offset, (index, _))| (offset + 1, index))
            .unzip();

        Ok(Reconstruction {
            secret,
            flagged,
            flagged_shares,
            threshold: self.params.threshold(),
            total: point_set.len(),
        })
    }
}

/// Recover the secret from the first `threshold` points and flag every point
/// that disagrees with it.
pub fn reconstruct(
    point_set: &PointSet,
    threshold: usize,
) -> ShamirResult<Reconstruction> {
    Reconstructor::new(threshold)?.reconstruct(point_set)
}

/// Decode `shares` and run [`reconstruct`] over them.
pub fn reconstruct_shares(
    shares: &[Share],
    threshold: usize,
) -> ShamirResult<Reconstruction> {
    reconstruct(&PointSet::from_shares(shares)?, threshold)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShamirError;
    use math::points;

    fn scenario(last: i64) -> PointSet {
        PointSet::from_points(points![
            (1, 4),
            (2, 7),
            (3, 12),
            (4, 19),
            (5, last)
        ])
        .unwrap()
    }

    #[test]
    fn integrity_thresholds() {
        assert_eq!(Integrity::assess(0, 0), Integrity::Unchecked);
        assert_eq!(Integrity::assess(4, 0), Integrity::Consistent);
        assert_eq!(Integrity::assess(4, 2), Integrity::Flagged);
        assert_eq!(Integrity::assess(4, 3), Integrity::Unreliable);
        assert_eq!(Integrity::assess(1, 1), Integrity::Unreliable);
        assert!(Integrity::Flagged.is_trustworthy());
        assert!(!Integrity::Unreliable.is_trustworthy());
    }

    #[test]
    fn clean_points_are_not_flagged() {
        let result = reconstruct(&scenario(28), 3).unwrap();
        assert_eq!(result.secret(), &BigInt::from(2));
        assert!(result.flagged().is_empty());
        assert!(!result.has_wrong_points());
        assert_eq!(result.integrity(), Integrity::Consistent);
        assert_eq!(result.threshold(), 3);
        assert_eq!(result.total(), 5);
    }

    #[test]
    fn corrupted_point_is_flagged() {
        let result = reconstruct(&scenario(99), 3).unwrap();
        assert_eq!(result.secret(), &BigInt::from(2));
        assert_eq!(result.flagged(), &[5]);
        assert_eq!(result.flagged_share_indices(), &[5]);
        assert_eq!(result.integrity(), Integrity::Flagged);
    }

    #[test]
    fn threshold_equal_to_set_size_is_unchecked() {
        let result = reconstruct(&scenario(99), 5).unwrap();
        assert!(result.flagged().is_empty());
        assert_eq!(result.integrity(), Integrity::Unchecked);
    }

    #[test]
    fn reconstructor_reuses_its_params() {
        let params = ThresholdParams::new(3).unwrap();
        let reconstructor = Reconstructor::with_params(params);
        assert_eq!(reconstructor.params(), params);
        assert_eq!(Reconstructor::new(3).unwrap(), reconstructor);

        let result = reconstructor.reconstruct(&scenario(99)).unwrap();
        assert_eq!(result.threshold(), reconstructor.params().threshold());
        assert_eq!(result.flagged(), &[5]);
    }

    #[test]
    fn rejects_zero_threshold() {
        assert_eq!(
            reconstruct(&scenario(28), 0),
            Err(ShamirError::InvalidThreshold(0))
        );
    }

    #[test]
    fn rejects_threshold_above_available_points() {
        assert_eq!(
            reconstruct(&scenario(28), 6),
            Err(ShamirError::InsufficientPoints {
                required: 6,
                provided: 5,
            })
        );
    }

    #[test]
    fn non_integral_secret_is_an_error() {
        let set = PointSet::from_points(points![(1, 1), (3, 0)]).unwrap();
        let err = reconstruct(&set, 2).unwrap_err();
        assert!(err.is_non_integral());
    }

    #[test]
    fn non_integral_predictions_are_flagged() {
        // The line through (2, 0) and (4, 1) passes x = 3 at 1/2.
        let set =
            PointSet::from_points(points![(2, 0), (4, 1), (3, 0)]).unwrap();
        let result = reconstruct(&set, 2).unwrap();
        assert_eq!(result.secret(), &BigInt::from(-1));
        assert_eq!(result.flagged(), &[3]);
    }

    #[test]
    fn into_parts_returns_secret_and_positions() {
        let (secret, flagged) =
            reconstruct(&scenario(99), 3).unwrap().into_parts();
        assert_eq!(secret, BigInt::from(2));
        assert_eq!(flagged, vec![5]);
    }
}
