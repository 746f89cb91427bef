//! Timezone-independent calendar arithmetic on the proleptic Gregorian calendar.
//!
//! [`Date`] is an always-valid `(year, month, day)` value and [`DateTime`] pairs one with a
//! millisecond offset from midnight. Constructors and setters clamp out-of-range input
//! rather than failing; [`is_valid_date`] and the `try_new` constructors are the strict
//! alternatives.
//!
//! ```
//! use naive_calendar::{Date, DateTime, Weekday};
//!
//! let date = Date::new(2018, 3, 31).add_months(-1);
//! assert_eq!(date, Date::new(2018, 2, 28));
//! assert_eq!(Date::new(2018, 5, 26).weekday(), Weekday::Saturday);
//!
//! let dt = DateTime::from_timestamp(1_527_336_000_000);
//! assert_eq!((dt.year(), dt.month(), dt.day(), dt.hour()), (2018, 5, 26, 12));
//! ```

#[macro_use]
mod logging;

mod consts;
mod date;
mod datetime;
mod prelude;
#[cfg(test)]
mod test_utils;
mod types;

pub use consts::*;
pub use date::Date;
pub use datetime::DateTime;
pub use types::{DateDelta, DateTimeDelta, Weekday, days_in_month, is_leap_year, is_valid_date};

/// Error type for the strict constructors and weekday conversions.
///
/// The clamping constructors never produce it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// The triple does not name a real calendar date.
    #[error("Invalid date: {year}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: i32, day: i32 },

    /// A clock field is outside its range.
    #[error("Invalid time: {hour:02}:{minute:02}:{second:02}.{millisecond:03}")]
    InvalidTime {
        hour: i32,
        minute: i32,
        second: i32,
        millisecond: i32,
    },

    /// Weekday numbers run from 0 (Sunday) to 6 (Saturday).
    #[error("Invalid weekday number: {0} (must be 0-6)")]
    InvalidWeekday(u8),

    #[error("Unknown weekday name: {0}")]
    UnknownWeekday(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{date, datetime};

    #[test]
    fn test_error_messages() {
        let err = Date::try_new(2018, 2, 29).unwrap_err();
        assert_eq!(err.to_string(), "Invalid date: 2018-02-29");

        let err = DateTime::try_new(date(2018, 2, 28), 7, 5, 60, 3).unwrap_err();
        assert_eq!(err.to_string(), "Invalid time: 07:05:60.003");

        let err = Weekday::try_from(9).unwrap_err();
        assert_eq!(err.to_string(), "Invalid weekday number: 9 (must be 0-6)");
    }

    #[test]
    fn test_constants() {
        assert_eq!(MS_PER_DAY, 24 * MS_PER_HOUR);
        assert_eq!(MS_PER_HOUR, 60 * MS_PER_MINUTE);
        assert_eq!(MS_PER_MINUTE, 60 * MS_PER_SECOND);
        assert_eq!(DAYS_PER_400_YEARS, 400 * 365 + 97);
        assert_eq!(EPOCH_YEAR, 1970);
    }

    #[test]
    fn test_date_engine_properties() {
        assert_eq!(date(2018, 3, 31).add_months(-1).day(), 28);
        assert_eq!(date(2000, 2, 29).add_years(-1).day(), 28);
        assert_eq!(date(2018, 2, 28).add_days(1), date(2018, 3, 1));
        assert_eq!(date(2018, 5, 26).weekday(), Weekday::Saturday);
        assert_eq!(
            date(2019, 1, 1) - date(2018, 12, 31),
            DateDelta {
                years: 1,
                months: 1,
                days: 1,
            }
        );
        assert!(is_valid_date(2016, 2, 29));
        assert!(!is_valid_date(2018, 2, 29));
        assert!(!is_valid_date(2016, 12, 32));
    }

    #[test]
    fn test_clock_engine_properties() {
        let dt = DateTime::midnight(Date::EPOCH).add_milliseconds(-i64::from(MS_PER_DAY));
        assert_eq!(dt.offset(), 0);
        assert_eq!(dt.date().day_count() - Date::EPOCH.day_count(), -1);
        assert_eq!(dt, datetime(1969, 12, 31, 0, 0, 0, 0));
        for timestamp in [-86_400_001, -1, 0, 1_527_336_000_000] {
            assert_eq!(DateTime::from_timestamp(timestamp).to_timestamp(), timestamp);
        }
    }
}
