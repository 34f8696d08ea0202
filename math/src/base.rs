//! Radix handling for share values.
//!
//! Share values travel as digit strings in a stated base between 2 and 36.
//! Digits map as `0-9` then `a-z` (case insensitive), the same table used by
//! [`char::to_digit`]. Values carry no sign and have no upper bound.

use std::fmt;
use std::str::FromStr;

use num_bigint::{BigInt, BigUint};

use crate::error::{DecodeError, Result};

/// Smallest supported base.
pub const MIN_BASE: u32 = 2;

/// Largest supported base (`0-9` plus `a-z`).
pub const MAX_BASE: u32 = 36;

/// A validated numeric base in `MIN_BASE..=MAX_BASE`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Base(u32);

impl Base {
    pub const BINARY: Base = Base(2);
    pub const OCTAL: Base = Base(8);
    pub const DECIMAL: Base = Base(10);
    pub const HEXADECIMAL: Base = Base(16);

    pub fn new(radix: u32) -> Result<Self, DecodeError> {
        if (MIN_BASE..=MAX_BASE).contains(&radix) {
            Ok(Self(radix))
        } else {
            Err(DecodeError::InvalidBase(radix))
        }
    }

    #[inline]
    pub const fn radix(self) -> u32 {
        self.0
    }

    /// Decode `raw` as a non-negative integer written in this base.
    pub fn decode(self, raw: &str) -> Result<BigInt, DecodeError> {
        if raw.is_empty() {
            return Err(DecodeError::EmptyValue);
        }

        let digits = raw
            .chars()
            .enumerate()
            .map(|(position, digit)| {
                digit
                    .to_digit(self.0)
                    .map(|value| value as u8)
                    .ok_or(DecodeError::InvalidDigit {
                        digit,
                        position,
                        base: self.0,
                    })
            })
            .collect::<Result<Vec<u8>, DecodeError>>()?;

        // Every digit is below the radix, so this only fails on a bad radix.
        BigUint::from_radix_be(&digits, self.0)
            .map(BigInt::from)
            .ok_or(DecodeError::InvalidBase(self.0))
    }

    /// Render `value` in this base using lowercase digits.
    pub fn encode(self, value: &BigInt) -> String {
        value.to_str_radix(self.0)
    }
}

impl TryFrom<u32> for Base {
    type Error = DecodeError;

    fn try_from(radix: u32) -> Result<Self, Self::Error> {
        Base::new(radix)
    }
}

impl From<Base> for u32 {
    fn from(base: Base) -> Self {
        base.radix()
    }
}

impl FromStr for Base {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let radix = s
            .trim()
            .parse::<u32>()
            .map_err(|_| DecodeError::MalformedBase(s.to_owned()))?;
        Base::new(radix)
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Decode a share value written in `radix`.
///
/// ```
/// use math::base::decode;
/// use num_bigint::BigInt;
///
/// assert_eq!(decode(2, "111").unwrap(), BigInt::from(7));
/// assert_eq!(decode(16, "Ff").unwrap(), BigInt::from(255));
/// ```
pub fn decode(radix: u32, raw: &str) -> Result<BigInt, DecodeError> {
    Base::new(radix)?.decode(raw)
}

/// Inverse of [`decode`].
pub fn encode(value: &BigInt, base: Base) -> String {
    base.encode(value)
}
