/// Minimum valid month (January)
pub const MIN_MONTH: u8 = 1;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// Number of months in a calendar year
pub const MONTHS_PER_YEAR: u8 = 12;

/// Day used when a year-month is turned into a concrete date
pub const FIRST_DAY: u32 = 1;

/// Year/month separator of the `yyyy-mm` form
pub const DATE_SEPARATOR: char = '-';

/// Sign prefix accepted in front of a negative year
pub const NEGATIVE_SIGN: char = '-';

/// Number of trailing digits that carry the month
pub(crate) const MONTH_DIGITS: usize = 2;

/// Decimal scale of the year inside the integer form (`yyyymm`)
pub(crate) const YEAR_SCALE: u8 = 100;

/// Fewest days any month has
pub(crate) const SHORTEST_MONTH_DAYS: u32 = 28;

/// Most days any month has
pub(crate) const LONGEST_MONTH_DAYS: u32 = 31;
