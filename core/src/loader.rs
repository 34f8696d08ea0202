//! Loading share sets from JSON.
//!
//! The expected layout is a `keys` record with the declared share count `n`
//! and threshold `k`, followed by one entry per share index:
//!
//! ```json
//! {
//!   "keys": { "n": 4, "k": 3 },
//!   "1": { "base": "10", "value": "4" },
//!   "2": { "base": 2, "value": "111" }
//! }
//! ```
//!
//! Only indices `1..=n` are read. Missing indices are skipped and entries
//! beyond `n` are ignored.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::{debug, warn};
use math::base::Base;
use math::error::DecodeError;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::error::ShamirError;
use crate::point_set::PointSet;
use crate::reconstruct::{reconstruct, Reconstruction};
use crate::share::Share;

/// Errors raised while reading a share file.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read share file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed share file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid share key {0:?}: expected a positive integer index")]
    InvalidKey(String),
    #[error(transparent)]
    Shamir(#[from] ShamirError),
}

pub type LoadResult<T> = std::result::Result<T, LoadError>;

#[derive(Debug, Deserialize)]
struct RawKeys {
    n: usize,
    k: usize,
}

/// The base may be written as a JSON string or number.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawBase {
    Text(String),
    Number(u32),
}

impl RawBase {
    fn parse(&self) -> Result<Base, DecodeError> {
        match self {
            RawBase::Text(text) => text.parse(),
            RawBase::Number(radix) => Base::new(*radix),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawShare {
    base: RawBase,
    value: String,
}

/// Entries are kept as raw JSON until their key is known to be in range.
#[derive(Debug, Deserialize)]
struct RawShareFile {
    keys: RawKeys,
    #[serde(flatten)]
    shares: BTreeMap<String, Value>,
}

/// A share set as stored on disk: declared count, threshold and shares.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShareFile {
    declared_total: usize,
    threshold: usize,
    shares: Vec<Share>,
}

impl ShareFile {
    pub fn from_json_str(json: &str) -> LoadResult<Self> {
        Self::from_raw(serde_json::from_str(json)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> LoadResult<Self> {
        Self::from_raw(serde_json::from_reader(reader)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> LoadResult<Self> {
        let path = path.as_ref();
        debug!("loading shares from {}", path.display());
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    fn from_raw(raw: RawShareFile) -> LoadResult<Self> {
        let RawShareFile { keys, shares: raw_shares } = raw;
        let mut shares = Vec::with_capacity(raw_shares.len());

        for (key, entry) in raw_shares {
            let index: u64 = key
                .parse()
                .map_err(|_| LoadError::InvalidKey(key.clone()))?;
            if index == 0 {
                return Err(ShamirError::InvalidShareIndex(index).into());
            }
            if index > keys.n as u64 {
                warn!(
                    "ignoring share {index}: outside declared range 1..={}",
                    keys.n
                );
                continue;
            }

            let raw_share: RawShare = serde_json::from_value(entry)?;
            let base = raw_share
                .base
                .parse()
                .map_err(|source| ShamirError::Decode { index, source })?;
            let share = Share::new(index, base, raw_share.value)?;
            debug!(
                "share {index}: base {base}, {} digits",
                share.raw_value().len()
            );
            shares.push(share);
        }

        // Keys are ordered as strings, so "10" sorts before "2".
        shares.sort_by_key(Share::index);

        if shares.len() < keys.n {
            debug!(
                "{} of {} declared shares present",
                shares.len(),
                keys.n
            );
        }

        Ok(Self {
            declared_total: keys.n,
            threshold: keys.k,
            shares,
        })
    }

    /// The `n` from the `keys` record.
    pub fn declared_total(&self) -> usize {
        self.declared_total
    }

    /// The `k` from the `keys` record.
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    pub fn shares(&self) -> &[Share] {
        &self.shares
    }

    pub fn into_shares(self) -> Vec<Share> {
        self.shares
    }

    pub fn point_set(&self) -> Result<PointSet, ShamirError> {
        PointSet::from_shares(&self.shares)
    }

    /// Reconstruct with the file's own threshold.
    pub fn reconstruct(&self) -> Result<Reconstruction, ShamirError> {
        self.reconstruct_with(self.threshold)
    }

    pub fn reconstruct_with(
        &self,
        threshold: usize,
    ) -> Result<Reconstruction, ShamirError> {
        reconstruct(&self.point_set()?, threshold)
    }
}

impl std::str::FromStr for ShareFile {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShareFile::from_json_str(s)
    }
}
