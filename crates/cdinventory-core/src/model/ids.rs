use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// User-supplied identifier of a CD in the catalog.
///
/// Identifiers are not required to be unique; the inventory keeps whatever
/// the user enters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CdId(i64);

impl CdId {
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for CdId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for CdId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Input that does not name a whole number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("not an integer: {input:?}")]
pub struct ParseCdIdError {
    input: String,
}

impl FromStr for CdId {
    type Err = ParseCdIdError;

    /// Parses an identifier typed at the console.
    ///
    /// Anything that reads as a number with no fractional part is accepted,
    /// so `"12"` and `"12.0"` both give `12`. `"12.7"` and `"abc"` are
    /// rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(value) = trimmed.parse::<i64>() {
            return Ok(Self(value));
        }

        let err = || ParseCdIdError {
            input: s.to_string(),
        };
        let value: f64 = trimmed.parse().map_err(|_| err())?;

        // i64::MAX as f64 rounds up to 2^63, hence the strict upper bound.
        #[allow(clippy::cast_precision_loss)]
        let in_range = value >= i64::MIN as f64 && value < i64::MAX as f64;
        if !value.is_finite() || value.fract() != 0.0 || !in_range {
            return Err(err());
        }

        #[allow(clippy::cast_possible_truncation)]
        let whole = value as i64;
        Ok(Self(whole))
    }
}
