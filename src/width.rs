//! Year widths and the unsigned-to-signed promotion rule.

use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::str::FromStr;

use log::trace;
use num_bigint::{BigInt, BigUint, ToBigInt};
use num_traits::{CheckedAdd, CheckedSub, FromPrimitive, Signed, ToPrimitive};

use crate::{YearMonth, YearMonthError, prelude::*};

/// A signed integer type usable as the year of a [`YearMonth`].
///
/// Implemented for the fixed tiers `i8` through `i128` and for [`BigInt`].
pub trait YearInt:
    Clone
    + Debug
    + Display
    + Eq
    + Ord
    + Hash
    + FromStr
    + Signed
    + CheckedAdd
    + CheckedSub
    + FromPrimitive
    + ToPrimitive
    + ToBigInt
{
    /// Name of the width, used in overflow diagnostics
    const WIDTH: &'static str;
}

macro_rules! year_int {
    ($($int:ty),*) => {
        $(
            impl YearInt for $int {
                const WIDTH: &'static str = stringify!($int);
            }
        )*
    };
}

year_int!(i8, i16, i32, i64, i128);

impl YearInt for BigInt {
    const WIDTH: &'static str = "BigInt";
}

/// A signed year whose width was chosen at runtime by [`Promote`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, From)]
pub enum SignedYear {
    #[display(fmt = "{_0}")]
    I8(i8),
    #[display(fmt = "{_0}")]
    I16(i16),
    #[display(fmt = "{_0}")]
    I32(i32),
    #[display(fmt = "{_0}")]
    I64(i64),
    #[display(fmt = "{_0}")]
    I128(i128),
    #[display(fmt = "{_0}")]
    Big(BigInt),
}

impl SignedYear {
    /// Stores `value` in the narrowest fixed width that holds it, falling
    /// back to [`BigInt`].
    pub fn narrowest(value: BigInt) -> Self {
        i8::try_from(&value)
            .map(Self::I8)
            .or_else(|_| i16::try_from(&value).map(Self::I16))
            .or_else(|_| i32::try_from(&value).map(Self::I32))
            .or_else(|_| i64::try_from(&value).map(Self::I64))
            .or_else(|_| i128::try_from(&value).map(Self::I128))
            .unwrap_or(Self::Big(value))
    }
}

impl<W: YearInt> YearMonth<W> {
    /// The integer form of [`YearMonth::to_integer`] in the narrowest signed
    /// width that holds it, so `2-01` (`201`) is an `i16`.
    ///
    /// # Errors
    /// Returns `YearMonthError::Overflow` if the year has no integer value.
    pub fn to_signed_integer(&self) -> Result<SignedYear, YearMonthError> {
        self.to_integer::<BigInt>().map(SignedYear::narrowest)
    }
}

/// Converts an unsigned year into the smallest signed width of the same
/// size, or into the next wider signed width when the value exceeds that
/// width's positive range. `u128` values beyond `i128::MAX` become [`BigInt`].
pub trait Promote {
    fn promote(self) -> SignedYear;
}

macro_rules! promote_tier {
    ($($unsigned:ty => $same:ident($same_ty:ty) | $wider:ident($wider_ty:ty)),* $(,)?) => {
        $(
            impl Promote for $unsigned {
                fn promote(self) -> SignedYear {
                    <$same_ty>::try_from(self).map_or_else(
                        |_| {
                            trace!(
                                "promoting {self} from {} to {}",
                                stringify!($unsigned),
                                stringify!($wider_ty)
                            );
                            SignedYear::$wider(<$wider_ty>::from(self))
                        },
                        SignedYear::$same,
                    )
                }
            }
        )*
    };
}

promote_tier!(
    u8 => I8(i8) | I16(i16),
    u16 => I16(i16) | I32(i32),
    u32 => I32(i32) | I64(i64),
    u64 => I64(i64) | I128(i128),
    u128 => I128(i128) | Big(BigInt),
);

impl Promote for usize {
    fn promote(self) -> SignedYear {
        u64::try_from(self).map_or_else(|_| SignedYear::Big(BigInt::from(self)), Promote::promote)
    }
}

impl Promote for BigUint {
    fn promote(self) -> SignedYear {
        SignedYear::Big(BigInt::from(self))
    }
}

/// A [`YearMonth`] whose year width was picked by [`Promote`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, From)]
pub enum AnyYearMonth {
    #[display(fmt = "{_0}")]
    I8(YearMonth<i8>),
    #[display(fmt = "{_0}")]
    I16(YearMonth<i16>),
    #[display(fmt = "{_0}")]
    I32(YearMonth<i32>),
    #[display(fmt = "{_0}")]
    I64(YearMonth<i64>),
    #[display(fmt = "{_0}")]
    I128(YearMonth<i128>),
    #[display(fmt = "{_0}")]
    Big(YearMonth<BigInt>),
}

macro_rules! each_width {
    ($value:expr, $ym:ident => $body:expr) => {
        match $value {
            AnyYearMonth::I8($ym) => $body,
            AnyYearMonth::I16($ym) => $body,
            AnyYearMonth::I32($ym) => $body,
            AnyYearMonth::I64($ym) => $body,
            AnyYearMonth::I128($ym) => $body,
            AnyYearMonth::Big($ym) => $body,
        }
    };
}

impl AnyYearMonth {
    /// Builds a year-month from an unsigned year, promoting the year to a
    /// signed width first.
    ///
    /// # Errors
    /// Returns `YearMonthError::MonthOutOfRange` if `month` is not in `1..=12`.
    pub fn from_unsigned_year<U, M>(year: U, month: M) -> Result<Self, YearMonthError>
    where
        U: Promote,
        M: TryInto<u8>,
    {
        match year.promote() {
            SignedYear::I8(y) => YearMonth::new(y, month).map(Self::I8),
            SignedYear::I16(y) => YearMonth::new(y, month).map(Self::I16),
            SignedYear::I32(y) => YearMonth::new(y, month).map(Self::I32),
            SignedYear::I64(y) => YearMonth::new(y, month).map(Self::I64),
            SignedYear::I128(y) => YearMonth::new(y, month).map(Self::I128),
            SignedYear::Big(y) => YearMonth::new(y, month).map(Self::Big),
        }
    }

    /// Returns the year together with the width it is stored in
    pub fn year(&self) -> SignedYear {
        match self {
            Self::I8(ym) => SignedYear::I8(*ym.year()),
            Self::I16(ym) => SignedYear::I16(*ym.year()),
            Self::I32(ym) => SignedYear::I32(*ym.year()),
            Self::I64(ym) => SignedYear::I64(*ym.year()),
            Self::I128(ym) => SignedYear::I128(*ym.year()),
            Self::Big(ym) => SignedYear::Big(ym.year().clone()),
        }
    }

    pub fn month(&self) -> u8 {
        each_width!(self, ym => ym.month())
    }

    /// See [`YearMonth::to_integer`].
    ///
    /// # Errors
    /// Returns `YearMonthError::Overflow` if the value does not fit in `T`.
    pub fn to_integer<T: TryFrom<BigInt>>(&self) -> Result<T, YearMonthError> {
        each_width!(self, ym => ym.to_integer())
    }

    /// See [`YearMonth::to_signed_integer`].
    ///
    /// # Errors
    /// Returns `YearMonthError::Overflow` if the year has no integer value.
    pub fn to_signed_integer(&self) -> Result<SignedYear, YearMonthError> {
        each_width!(self, ym => ym.to_signed_integer())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_promote_tiers() {
        struct TestCase {
            promoted:    SignedYear,
            expected:    SignedYear,
            description: &'static str,
        }

        let cases = [
            TestCase {
                promoted:    127_u8.promote(),
                expected:    SignedYear::I8(127),
                description: "u8 at i8::MAX stays 8-bit",
            },
            TestCase {
                promoted:    128_u8.promote(),
                expected:    SignedYear::I16(128),
                description: "u8 above i8::MAX widens to i16",
            },
            TestCase {
                promoted:    32_767_u16.promote(),
                expected:    SignedYear::I16(32_767),
                description: "u16 at i16::MAX stays 16-bit",
            },
            TestCase {
                promoted:    32_768_u16.promote(),
                expected:    SignedYear::I32(32_768),
                description: "u16 above i16::MAX widens to i32",
            },
            TestCase {
                promoted:    2018_u32.promote(),
                expected:    SignedYear::I32(2018),
                description: "small u32 stays 32-bit",
            },
            TestCase {
                promoted:    (i32::MAX as u32 + 1).promote(),
                expected:    SignedYear::I64(i64::from(i32::MAX) + 1),
                description: "u32 above i32::MAX widens to i64",
            },
            TestCase {
                promoted:    (i64::MAX as u64 + 1).promote(),
                expected:    SignedYear::I128(i128::from(i64::MAX) + 1),
                description: "u64 above i64::MAX widens to i128",
            },
            TestCase {
                promoted:    (i128::MAX as u128).promote(),
                expected:    SignedYear::I128(i128::MAX),
                description: "u128 at i128::MAX stays 128-bit",
            },
            TestCase {
                promoted:    (i128::MAX as u128 + 1).promote(),
                expected:    SignedYear::Big(BigInt::from(i128::MAX) + 1),
                description: "u128 above i128::MAX becomes arbitrary precision",
            },
            TestCase {
                promoted:    BigUint::from(5_u8).promote(),
                expected:    SignedYear::Big(BigInt::from(5)),
                description: "BigUint stays arbitrary precision",
            },
        ];

        for case in cases {
            assert_eq!(case.promoted, case.expected, "{}", case.description);
        }
    }

    #[test]
    fn test_usize_promotes_like_u64() {
        assert_eq!(2018_usize.promote(), SignedYear::I64(2018));
    }

    #[test]
    fn test_from_unsigned_year_widens_instead_of_wrapping() {
        let ym = AnyYearMonth::from_unsigned_year(200_u8, 3).unwrap();
        assert_eq!(ym, AnyYearMonth::I16(YearMonth::new(200_i16, 3).unwrap()));
        assert_eq!(ym.year(), SignedYear::I16(200));
        assert_eq!(ym.month(), 3);
        assert_eq!(ym.to_string(), "200-03");

        let ym = AnyYearMonth::from_unsigned_year(100_u8, 3).unwrap();
        assert_eq!(ym, AnyYearMonth::from(YearMonth::new(100_i8, 3).unwrap()));
    }

    #[test]
    fn test_from_unsigned_year_big() {
        let year = i128::MAX as u128 + 1;
        let ym = AnyYearMonth::from_unsigned_year(year, 12).unwrap();
        assert_eq!(ym.year(), SignedYear::Big(BigInt::from(year)));
        assert_eq!(ym.to_string(), format!("{year}-12"));
    }

    #[test]
    fn test_from_unsigned_year_invalid_month() {
        let result = AnyYearMonth::from_unsigned_year(2018_u32, 13);
        assert_eq!(result, Err(YearMonthError::MonthOutOfRange));
    }

    #[test]
    fn test_any_to_integer() {
        let ym = AnyYearMonth::from_unsigned_year(200_u8, 1).unwrap();
        assert_eq!(ym.to_integer::<i32>(), Ok(20001));
        assert!(matches!(ym.to_integer::<i8>(), Err(YearMonthError::Overflow(_))));
    }

    #[test]
    fn test_narrowest_signed_width() {
        struct TestCase {
            value:       BigInt,
            expected:    SignedYear,
            description: &'static str,
        }

        let cases = [
            TestCase {
                value:       BigInt::from(1),
                expected:    SignedYear::I8(1),
                description: "fits i8",
            },
            TestCase {
                value:       BigInt::from(-128),
                expected:    SignedYear::I8(-128),
                description: "i8::MIN stays 8-bit",
            },
            TestCase {
                value:       BigInt::from(128),
                expected:    SignedYear::I16(128),
                description: "one past i8::MAX",
            },
            TestCase {
                value:       BigInt::from(201_001),
                expected:    SignedYear::I32(201_001),
                description: "six digit integer form",
            },
            TestCase {
                value:       BigInt::from(i64::MIN),
                expected:    SignedYear::I64(i64::MIN),
                description: "i64::MIN stays 64-bit",
            },
            TestCase {
                value:       BigInt::from(i64::MAX) + 1,
                expected:    SignedYear::I128(i128::from(i64::MAX) + 1),
                description: "one past i64::MAX",
            },
            TestCase {
                value:       BigInt::from(i128::MAX) + 1,
                expected:    SignedYear::Big(BigInt::from(i128::MAX) + 1),
                description: "beyond i128",
            },
        ];

        for case in cases {
            assert_eq!(SignedYear::narrowest(case.value), case.expected, "{}", case.description);
        }
    }

    #[test]
    fn test_to_signed_integer() {
        let value = YearMonth::new(2_i8, 1).unwrap();
        assert_eq!(value.to_signed_integer(), Ok(SignedYear::I16(201)));

        let value = YearMonth::new(-2010_i64, 1).unwrap();
        assert_eq!(value.to_signed_integer(), Ok(SignedYear::I32(-201_001)));

        let value = YearMonth::new(0_i128, 1).unwrap();
        assert_eq!(value.to_signed_integer(), Ok(SignedYear::I8(1)));

        let value = YearMonth::new(i64::MAX, 12).unwrap();
        let expected = i128::from(i64::MAX) * 100 + 12;
        assert_eq!(value.to_signed_integer(), Ok(SignedYear::I128(expected)));

        let any = AnyYearMonth::from_unsigned_year(200_u8, 1).unwrap();
        assert_eq!(any.to_signed_integer(), Ok(SignedYear::I16(20_001)));
    }

    #[test]
    fn test_signed_year_display() {
        assert_eq!(SignedYear::I16(-300).to_string(), "-300");
        assert_eq!(SignedYear::Big(BigInt::from(7)).to_string(), "7");
    }
}
