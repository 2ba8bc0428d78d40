use serde::{Deserialize, Serialize};

use crate::{YearMonthError, prelude::*};

/// A signed number of years, stored in the same width as the year it is
/// added to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Serialize, Deserialize)]
#[display(fmt = "{} years", _0)]
#[serde(transparent)]
pub struct Years<W>(pub W);

impl<W> Years<W> {
    pub const fn new(value: W) -> Self {
        Self(value)
    }

    /// Returns the number of years
    #[inline]
    pub fn get(self) -> W {
        self.0
    }
}

/// A signed number of months.
///
/// Used both as an arithmetic operand and as the distance between two
/// year-months.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Display, From, Into, Serialize, Deserialize,
)]
#[display(fmt = "{_0} months")]
#[serde(transparent)]
pub struct Months(pub i64);

impl Months {
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the number of months
    #[inline]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// The same distance in the other direction.
    ///
    /// # Errors
    /// Returns `YearMonthError::Overflow` for `i64::MIN` months.
    pub fn checked_neg(self) -> Result<Self, YearMonthError> {
        self.0
            .checked_neg()
            .map(Self)
            .ok_or_else(|| YearMonthError::Overflow(format!("{self} has no opposite in i64")))
    }
}
