mod consts;
mod ops;
mod parse;
mod prelude;
mod types;
mod width;

pub use consts::*;
pub use types::{Months, Years};
pub use width::{AnyYearMonth, Promote, SignedYear, YearInt};

// Re-export for convenience
pub use num_bigint::BigInt;

use chrono::{Datelike, NaiveDate};
use consts::{LONGEST_MONTH_DAYS, SHORTEST_MONTH_DAYS, YEAR_SCALE};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A calendar year and month, with the year stored as `W`.
///
/// The month is always in `1..=12`. Ordering is chronological: by year,
/// then by month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth<W = i64> {
    year:  W,
    month: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum YearMonthError {
    #[error("Month should be between 1 and 12")]
    MonthOutOfRange,
    #[error("Empty year-month string")]
    EmptyInput,
    #[error("{0:?} can't be parsed as a year-month (expected yyyy-mm or yyyymm)")]
    InvalidFormat(String),
    #[error("Numeric overflow: {0}")]
    Overflow(String),
    #[error("Date out of range: {0}")]
    DateOutOfRange(String),
}

impl<W: YearInt> YearMonth<W> {
    /// Creates a new year-month, validating the month.
    ///
    /// # Errors
    /// Returns `YearMonthError::MonthOutOfRange` if `month` is not in `1..=12`.
    pub fn new<M: TryInto<u8>>(year: W, month: M) -> Result<Self, YearMonthError> {
        let month = month.try_into().map_err(|_| YearMonthError::MonthOutOfRange)?;
        if !(MIN_MONTH..=MAX_MONTH).contains(&month) {
            return Err(YearMonthError::MonthOutOfRange);
        }
        Ok(Self { year, month })
    }

    /// Takes the year and month of any chrono date.
    ///
    /// # Errors
    /// Returns `YearMonthError::Overflow` if the date's year does not fit in `W`.
    pub fn from_date<D: Datelike>(date: &D) -> Result<Self, YearMonthError> {
        let year = W::from_i32(date.year()).ok_or_else(|| {
            YearMonthError::Overflow(format!("year {} does not fit in {}", date.year(), W::WIDTH))
        })?;
        Self::new(year, date.month())
    }

    /// Returns the year
    #[inline]
    pub const fn year(&self) -> &W {
        &self.year
    }

    /// Returns the month, in `1..=12`
    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Returns `(year, month)`
    pub fn year_month(&self) -> (W, u8) {
        (self.year.clone(), self.month)
    }

    /// Consumes the value, returning `(year, month)`
    pub fn into_parts(self) -> (W, u8) {
        (self.year, self.month)
    }

    /// The first day of the month as a chrono date.
    ///
    /// # Errors
    /// Returns `YearMonthError::DateOutOfRange` if the year is outside
    /// chrono's supported range.
    pub fn to_date(&self) -> Result<NaiveDate, YearMonthError> {
        self.year
            .to_i32()
            .and_then(|year| NaiveDate::from_ymd_opt(year, u32::from(self.month), FIRST_DAY))
            .ok_or_else(|| YearMonthError::DateOutOfRange(self.to_string()))
    }

    /// Same as [`YearMonth::to_date`].
    ///
    /// # Errors
    /// See [`YearMonth::to_date`].
    pub fn first_day_of_month(&self) -> Result<NaiveDate, YearMonthError> {
        self.to_date()
    }

    /// The last day of the month as a chrono date.
    ///
    /// # Errors
    /// Returns `YearMonthError::DateOutOfRange` if the year is outside
    /// chrono's supported range.
    pub fn last_day_of_month(&self) -> Result<NaiveDate, YearMonthError> {
        let first = self.to_date()?;
        (SHORTEST_MONTH_DAYS..=LONGEST_MONTH_DAYS)
            .rev()
            .find_map(|day| first.with_day(day))
            .ok_or_else(|| YearMonthError::DateOutOfRange(self.to_string()))
    }

    pub(crate) fn year_bigint(&self) -> Result<BigInt, YearMonthError> {
        self.year
            .to_bigint()
            .ok_or_else(|| YearMonthError::Overflow(format!("year {} has no integer value", self.year)))
    }

    /// The `yyyymm` integer form: `year * 100 + month`, with the month
    /// subtracted instead when the year is negative.
    ///
    /// `2010-01` is `201001`, `-2010-01` is `-201001`, `0-01` is `1`.
    ///
    /// # Errors
    /// Returns `YearMonthError::Overflow` if the value does not fit in `T`.
    pub fn to_integer<T: TryFrom<BigInt>>(&self) -> Result<T, YearMonthError> {
        let scaled = self.year_bigint()? * BigInt::from(YEAR_SCALE);
        let value = if self.year.is_negative() {
            scaled - BigInt::from(self.month)
        } else {
            scaled + BigInt::from(self.month)
        };
        T::try_from(value).map_err(|_| {
            YearMonthError::Overflow(format!(
                "{self} does not fit in {} as an integer",
                std::any::type_name::<T>()
            ))
        })
    }
}

impl YearMonth<i64> {
    /// Parses `yyyy-mm` or `yyyymm` into a year-month with an `i64` year.
    ///
    /// # Errors
    /// Returns `YearMonthError::EmptyInput` or `YearMonthError::InvalidFormat`
    /// if `s` matches neither shape, `YearMonthError::MonthOutOfRange` for a
    /// bad month and `YearMonthError::Overflow` if the year exceeds `i64`.
    pub fn from_string(s: &str) -> Result<Self, YearMonthError> {
        s.parse()
    }

    /// Parses the decimal form of `n` as in [`YearMonth::from_string`], so
    /// `201810` is October 2018.
    ///
    /// # Errors
    /// See [`YearMonth::from_string`].
    pub fn from_integer<N: Into<BigInt>>(n: N) -> Result<Self, YearMonthError> {
        Self::from_string(&n.into().to_string())
    }
}

impl<W: fmt::Display> fmt::Display for YearMonth<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{DATE_SEPARATOR}{:02}", self.year, self.month)
    }
}

impl<W: YearInt> TryFrom<(W, u8)> for YearMonth<W> {
    type Error = YearMonthError;

    fn try_from(value: (W, u8)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1)
    }
}

macro_rules! integer_conversions {
    ($($int:ty),*) => {
        $(
            impl<W: YearInt> TryFrom<YearMonth<W>> for $int {
                type Error = YearMonthError;

                fn try_from(ym: YearMonth<W>) -> Result<Self, Self::Error> {
                    ym.to_integer()
                }
            }
        )*
    };
}

integer_conversions!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, BigInt);

impl<W: fmt::Display> Serialize for YearMonth<W> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de, W: YearInt> Deserialize<'de> for YearMonth<W> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
