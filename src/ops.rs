//! Year and month arithmetic.
//!
//! Operators return `Result` because every step can leave the range of the
//! year width or of chrono's calendar.

use std::ops::{Add, Sub};

use chrono::Months as DateMonths;

use crate::consts::MONTHS_PER_YEAR;
use crate::{BigInt, Months, YearInt, YearMonth, YearMonthError, Years};

impl<W: YearInt> YearMonth<W> {
    /// Moves the year by `years`, keeping the month.
    ///
    /// # Errors
    /// Returns `YearMonthError::Overflow` if the year leaves `W`.
    pub fn checked_add_years(&self, years: &Years<W>) -> Result<Self, YearMonthError> {
        let year = self.year().checked_add(&years.0).ok_or_else(|| self.year_overflow(years))?;
        Self::new(year, self.month())
    }

    /// Moves the year back by `years`, keeping the month.
    ///
    /// # Errors
    /// Returns `YearMonthError::Overflow` if the year leaves `W`.
    pub fn checked_sub_years(&self, years: &Years<W>) -> Result<Self, YearMonthError> {
        let year = self.year().checked_sub(&years.0).ok_or_else(|| self.year_overflow(years))?;
        Self::new(year, self.month())
    }

    fn year_overflow(&self, years: &Years<W>) -> YearMonthError {
        YearMonthError::Overflow(format!("{self} moved by {} years leaves {}", years.0, W::WIDTH))
    }

    /// Moves forward by `months`, rolling over year boundaries.
    ///
    /// # Errors
    /// Returns `YearMonthError::DateOutOfRange` if either end is outside
    /// chrono's calendar and `YearMonthError::Overflow` if the resulting
    /// year does not fit in `W`.
    pub fn checked_add_months(&self, months: Months) -> Result<Self, YearMonthError> {
        self.shift_months(months, true)
    }

    /// Moves back by `months`, rolling over year boundaries.
    ///
    /// # Errors
    /// See [`YearMonth::checked_add_months`].
    pub fn checked_sub_months(&self, months: Months) -> Result<Self, YearMonthError> {
        self.shift_months(months, false)
    }

    fn shift_months(&self, months: Months, forward: bool) -> Result<Self, YearMonthError> {
        let out_of_range = || YearMonthError::DateOutOfRange(format!("{self} moved by {months}"));

        let span = u32::try_from(months.get().unsigned_abs()).map_err(|_| out_of_range())?;
        let span = DateMonths::new(span);
        let date = self.to_date()?;
        let shifted = if forward == (months.get() >= 0) {
            date.checked_add_months(span)
        } else {
            date.checked_sub_months(span)
        }
        .ok_or_else(out_of_range)?;

        Self::from_date(&shifted)
    }

    /// The next month
    ///
    /// # Errors
    /// See [`YearMonth::checked_add_months`].
    pub fn succ(&self) -> Result<Self, YearMonthError> {
        self.checked_add_months(Months(1))
    }

    /// The previous month
    ///
    /// # Errors
    /// See [`YearMonth::checked_add_months`].
    pub fn pred(&self) -> Result<Self, YearMonthError> {
        self.checked_sub_months(Months(1))
    }

    /// Number of months from `earlier` to `self`: negative when `self` comes
    /// first. Computed from the parts, without going through a date.
    ///
    /// # Errors
    /// Returns `YearMonthError::Overflow` if the distance does not fit in `i64`.
    pub fn months_since(&self, earlier: &Self) -> Result<Months, YearMonthError> {
        let years = self.year_bigint()? - earlier.year_bigint()?;
        let months = years * BigInt::from(MONTHS_PER_YEAR) + BigInt::from(self.month()) - BigInt::from(earlier.month());
        i64::try_from(months).map(Months).map_err(|_| {
            YearMonthError::Overflow(format!("months between {earlier} and {self} do not fit in i64"))
        })
    }
}

impl<W: YearInt> Add<Years<W>> for YearMonth<W> {
    type Output = Result<Self, YearMonthError>;

    fn add(self, rhs: Years<W>) -> Self::Output {
        self.checked_add_years(&rhs)
    }
}

impl<W: YearInt> Add<YearMonth<W>> for Years<W> {
    type Output = Result<YearMonth<W>, YearMonthError>;

    fn add(self, rhs: YearMonth<W>) -> Self::Output {
        rhs.checked_add_years(&self)
    }
}

impl<W: YearInt> Sub<Years<W>> for YearMonth<W> {
    type Output = Result<Self, YearMonthError>;

    fn sub(self, rhs: Years<W>) -> Self::Output {
        self.checked_sub_years(&rhs)
    }
}

impl<W: YearInt> Add<Months> for YearMonth<W> {
    type Output = Result<Self, YearMonthError>;

    fn add(self, rhs: Months) -> Self::Output {
        self.checked_add_months(rhs)
    }
}

impl<W: YearInt> Add<YearMonth<W>> for Months {
    type Output = Result<YearMonth<W>, YearMonthError>;

    fn add(self, rhs: YearMonth<W>) -> Self::Output {
        rhs.checked_add_months(self)
    }
}

impl<W: YearInt> Sub<Months> for YearMonth<W> {
    type Output = Result<Self, YearMonthError>;

    fn sub(self, rhs: Months) -> Self::Output {
        self.checked_sub_months(rhs)
    }
}

impl<W: YearInt> Sub for YearMonth<W> {
    type Output = Result<Months, YearMonthError>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.months_since(&rhs)
    }
}

impl<W: YearInt> Sub for &YearMonth<W> {
    type Output = Result<Months, YearMonthError>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.months_since(rhs)
    }
}
