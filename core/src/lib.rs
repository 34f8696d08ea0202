//! Reconstruction of Shamir-shared secrets over the integers.
//!
//! Shares are decoded into points, the first `k` points are interpolated at
//! zero to recover the secret, and every point is checked against the
//! recovered polynomial so that corrupted shares can be reported.
//!
//! ```
//! use shamir_core::{reconstruct_shares, Share};
//!
//! let shares = [
//!     Share::with_radix(1, 10, "4").unwrap(),
//!     Share::with_radix(2, 2, "111").unwrap(),
//!     Share::with_radix(3, 16, "c").unwrap(),
//!     Share::with_radix(4, 10, "19").unwrap(),
//!     Share::with_radix(5, 10, "99").unwrap(),
//! ];
//! let result = reconstruct_shares(&shares, 3).unwrap();
//! assert_eq!(result.secret().to_string(), "2");
//! assert_eq!(result.flagged(), &[5]);
//! ```

pub mod error;
pub mod loader;
pub mod params;
pub mod point_set;
pub mod reconstruct;
pub mod share;

pub use error::{ShamirError, ShamirResult};
pub use loader::{LoadError, ShareFile};
pub use params::ThresholdParams;
pub use point_set::PointSet;
pub use reconstruct::{
    reconstruct, reconstruct_shares, Integrity, Reconstruction, Reconstructor,
};
pub use share::Share;
