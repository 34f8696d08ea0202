use math::{lagrange::ensure_distinct_abscissas, Point};

use crate::error::{ShamirError, ShamirResult};
use crate::params::ThresholdParams;
use crate::share::Share;

/// Decoded shares in ascending share-index order.
///
/// Each point remembers the index of the share it was decoded from. Abscissas
/// are pairwise distinct.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PointSet {
    indices: Vec<u64>,
    points: Vec<Point>,
}

impl PointSet {
    /// Decode `shares` and order them by share index.
    pub fn from_shares(shares: &[Share]) -> ShamirResult<Self> {
        let mut decoded = shares
            .iter()
            .map(|share| share.decode().map(|point| (share.index(), point)))
            .collect::<ShamirResult<Vec<(u64, Point)>>>()?;
        decoded.sort_by_key(|(index, _)| *index);

        let (indices, points): (Vec<u64>, Vec<Point>) =
            decoded.into_iter().unzip();
        ensure_distinct_abscissas(&points)?;

        Ok(Self { indices, points })
    }

    /// Wrap already decoded points, keeping their order.
    ///
    /// The share index of each point is its 1-based position.
    pub fn from_points(points: Vec<Point>) -> ShamirResult<Self> {
        ensure_distinct_abscissas(&points)?;
        let indices = (1..=points.len() as u64).collect();
        Ok(Self { indices, points })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Share index of every point, aligned with [`PointSet::points`].
    pub fn indices(&self) -> &[u64] {
        &self.indices
    }

    /// Share index of the point at 1-based `position`.
    pub fn index_at(&self, position: usize) -> Option<u64> {
        position
            .checked_sub(1)
            .and_then(|offset| self.indices.get(offset))
            .copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u64, &Point)> + '_ {
        self.indices.iter().copied().zip(self.points.iter())
    }

    /// The first `threshold` points, used as the interpolation basis.
    pub fn basis(&self, params: ThresholdParams) -> ShamirResult<&[Point]> {
        params.ensure_available(self.len())?;
        Ok(&self.points[..params.threshold()])
    }
}

impl TryFrom<Vec<Point>> for PointSet {
    type Error = ShamirError;

    fn try_from(points: Vec<Point>) -> Result<Self, Self::Error> {
        PointSet::from_points(points)
    }
}
