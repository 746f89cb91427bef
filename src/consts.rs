/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Longest month length, the upper clamp applied before day repair
pub const MAX_DAY: u8 = 31;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for March
pub(crate) const MARCH: u8 = 3;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Every month has at least this many days, so a day at or below it never needs repair
pub(crate) const ALWAYS_VALID_DAY: u8 = 28;
/// `MAX_DAY - ALWAYS_VALID_DAY`: the longest repair-by-decrement cascade
pub(crate) const MAX_DAY_REPAIRS: u8 = MAX_DAY - ALWAYS_VALID_DAY;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i64 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i64 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i64 = 400;

/// Days in a common year
pub(crate) const DAYS_PER_YEAR: i64 = 365;
/// Days in one full Gregorian cycle; the leap pattern repeats exactly after it
pub const DAYS_PER_400_YEARS: i64 = 146_097;

pub(crate) const MONTHS_PER_YEAR: i64 = 12;

/// Sakamoto month offsets, January first
pub(crate) const WEEKDAY_MONTH_OFFSETS: [i64; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];
pub(crate) const DAYS_PER_WEEK: i64 = 7;

pub const MS_PER_SECOND: u32 = 1_000;
pub const MS_PER_MINUTE: u32 = 60_000;
pub const MS_PER_HOUR: u32 = 3_600_000;
/// Milliseconds in a day; every clock offset lies in `0..MS_PER_DAY`
pub const MS_PER_DAY: u32 = 86_400_000;

pub(crate) const MAX_HOUR: u8 = 23;
pub(crate) const MAX_MINUTE: u8 = 59;
pub(crate) const MAX_SECOND: u8 = 59;
pub(crate) const MAX_MILLISECOND: u16 = 999;

/// Year of the reference instant used for absolute timestamps (midnight, January 1st)
pub const EPOCH_YEAR: i32 = 1970;
