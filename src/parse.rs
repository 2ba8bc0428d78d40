//! The two accepted textual shapes: `yyyy-mm` and `yyyymm`.
//!
//! A leading `-` is accepted in front of either shape so that negative
//! years survive a `Display` round trip.

use std::str::FromStr;

use log::trace;

use crate::consts::{DATE_SEPARATOR, MONTH_DIGITS, NEGATIVE_SIGN};
use crate::{YearInt, YearMonth, YearMonthError};

/// Which shape a string matched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Shape {
    /// `yyyy-mm`: one or more digits, a hyphen, exactly two digits
    Hyphenated,
    /// `yyyymm`: three or more digits, no separator
    Compact,
}

/// The year and month text of a matched string, still unparsed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Fields<'a> {
    pub shape: Shape,
    pub year:  &'a str,
    pub month: &'a str,
}

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn match_shape(body: &str) -> Option<Shape> {
    // Both shapes need at least three characters.
    let separator_at = body.len().checked_sub(MONTH_DIGITS + 1)?;
    let hyphenated = separator_at > 0
        && body.as_bytes()[separator_at] == DATE_SEPARATOR as u8
        && all_digits(&body[..separator_at])
        && all_digits(&body[separator_at + 1..]);
    if hyphenated {
        return Some(Shape::Hyphenated);
    }
    all_digits(body).then_some(Shape::Compact)
}

/// Splits `s` into year and month text without interpreting the numbers.
///
/// # Errors
/// Returns `YearMonthError::EmptyInput` for an empty string and
/// `YearMonthError::InvalidFormat` if neither shape matches.
pub(crate) fn split(s: &str) -> Result<Fields<'_>, YearMonthError> {
    if s.is_empty() {
        return Err(YearMonthError::EmptyInput);
    }

    let body = s.strip_prefix(NEGATIVE_SIGN).unwrap_or(s);
    let shape = match_shape(body).ok_or_else(|| YearMonthError::InvalidFormat(s.to_owned()))?;

    // Both shapes end in the month digits; only the hyphenated one has a
    // separator to drop in front of them.
    let month_at = s.len() - MONTH_DIGITS;
    let year_end = match shape {
        Shape::Hyphenated => month_at - 1,
        Shape::Compact => month_at,
    };

    Ok(Fields {
        shape,
        year: &s[..year_end],
        month: &s[month_at..],
    })
}

impl<W: YearInt> FromStr for YearMonth<W> {
    type Err = YearMonthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields = split(s)?;
        trace!("{s:?} matched the {:?} year-month shape", fields.shape);

        // Digits are already validated, so a failed parse means the year
        // is too large for `W`.
        let year = fields.year.parse::<W>().map_err(|_| {
            YearMonthError::Overflow(format!("year {} does not fit in {}", fields.year, W::WIDTH))
        })?;
        let month = fields
            .month
            .parse::<u8>()
            .map_err(|_| YearMonthError::InvalidFormat(s.to_owned()))?;

        Self::new(year, month)
    }
}
