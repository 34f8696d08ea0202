use math::{base::Base, Point};

use crate::error::{ShamirError, ShamirResult};

/// One party's share: a 1-based index and a value written in `base`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Share {
    index: u64,
    base: Base,
    raw_value: String,
}

impl Share {
    pub fn new(
        index: u64,
        base: Base,
        raw_value: impl Into<String>,
    ) -> ShamirResult<Self> {
        if index == 0 {
            return Err(ShamirError::InvalidShareIndex(index));
        }

        Ok(Share {
            index,
            base,
            raw_value: raw_value.into(),
        })
    }

    /// Build a share from an unchecked radix.
    pub fn with_radix(
        index: u64,
        radix: u32,
        raw_value: impl Into<String>,
    ) -> ShamirResult<Self> {
        let base = Base::new(radix)
            .map_err(|source| ShamirError::Decode { index, source })?;
        Share::new(index, base, raw_value)
    }

    #[inline]
    pub fn index(&self) -> u64 {
        self.index
    }

    #[inline]
    pub fn base(&self) -> Base {
        self.base
    }

    pub fn raw_value(&self) -> &str {
        &self.raw_value
    }

    /// Decode the value into the point `(index, value)`.
    pub fn decode(&self) -> ShamirResult<Point> {
        let y = self.base.decode(&self.raw_value).map_err(|source| {
            ShamirError::Decode {
                index: self.index,
                source,
            }
        })?;
        Ok(Point::new(self.index, y))
    }
}
