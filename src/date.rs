use crate::consts::{
    ALWAYS_VALID_DAY, DAYS_PER_400_YEARS, DAYS_PER_WEEK, DAYS_PER_YEAR, DECEMBER, EPOCH_YEAR,
    GREGORIAN_CYCLE, JANUARY, MARCH, MAX_DAY, MAX_DAY_REPAIRS, MAX_MONTH, MIN_DAY,
    MONTHS_PER_YEAR, WEEKDAY_MONTH_OFFSETS,
};
use crate::prelude::*;
use crate::types::{DateDelta, Weekday, is_leap_year, is_valid_date, month_length};
use crate::CalendarError;
use serde::{Deserialize, Serialize};
use std::ops::Sub;

/// A proleptic Gregorian calendar date.
///
/// A `Date` is valid by construction: the constructors and setters clamp and repair
/// out-of-range input instead of rejecting it, so an invalid `(year, month, day)` can never
/// be observed. Use [`Date::try_new`] or [`is_valid_date`] for strict validation.
///
/// Ordering is lexicographic on `(year, month, day)`.
///
/// [`is_valid_date`]: crate::is_valid_date
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Into, Serialize, Deserialize)]
#[serde(from = "(i32, i32, i32)", into = "(i32, u8, u8)")]
pub struct Date {
    year: i32,
    month: u8,
    day: u8,
}

impl Date {
    /// 1970-01-01, the date of the absolute-timestamp reference instant
    pub const EPOCH: Self = Self {
        year: EPOCH_YEAR,
        month: JANUARY,
        day: MIN_DAY,
    };
    /// Earliest representable date
    pub const MIN: Self = Self {
        year: i32::MIN,
        month: JANUARY,
        day: MIN_DAY,
    };
    /// Latest representable date
    pub const MAX: Self = Self {
        year: i32::MAX,
        month: DECEMBER,
        day: 31,
    };

    /// Builds a date from any three integers.
    ///
    /// The month is clamped into `1..=12`, then the day into `1..=31`. If the result is
    /// still not a real date the day is stepped down one at a time, at most three times,
    /// until it is (`2018-02-31` becomes `2018-02-28`).
    pub fn new(year: i32, month: i32, day: i32) -> Self {
        let month = month.clamp(1, i32::from(MAX_MONTH));
        let clamped_day = day.clamp(i32::from(MIN_DAY), i32::from(MAX_DAY));
        let repaired_day = (0..=i32::from(MAX_DAY_REPAIRS))
            .map(|step| clamped_day - step)
            .find(|&candidate| is_valid_date(year, month, candidate))
            .unwrap_or(i32::from(ALWAYS_VALID_DAY));

        if repaired_day != day {
            trace!("repaired day {year}-{month}-{day} to {repaired_day}");
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let (month, day) = (month as u8, repaired_day as u8);
        Self { year, month, day }
    }

    /// Builds a date only if `(year, month, day)` is already valid.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDate` when the triple is not a real calendar date.
    pub fn try_new(year: i32, month: i32, day: i32) -> Result<Self, CalendarError> {
        if !is_valid_date(year, month, day) {
            return Err(CalendarError::InvalidDate { year, month, day });
        }
        Ok(Self::new(year, month, day))
    }

    /// Converts a day count (days since 0000-01-01) back into a date.
    ///
    /// Counts whose year does not fit in `i32` saturate to [`Date::MIN`] or [`Date::MAX`].
    pub fn from_day_count(days: i64) -> Self {
        let cycles = days.div_euclid(DAYS_PER_400_YEARS);
        let cycle_day = days.rem_euclid(DAYS_PER_400_YEARS);

        // The cycle starts on a leap year, so `year_of_cycle` shares its leap status with
        // the absolute year.
        let mut year_of_cycle = cycle_day / DAYS_PER_YEAR;
        if days_from_year(year_of_cycle) > cycle_day {
            year_of_cycle -= 1;
        }
        let mut day_of_year = cycle_day - days_from_year(year_of_cycle);

        let year = cycles * GREGORIAN_CYCLE + year_of_cycle;
        let Ok(year) = i32::try_from(year) else {
            return Self::saturated(year);
        };

        let mut month = JANUARY;
        while month < MAX_MONTH {
            let length = i64::from(month_length(year, month));
            if day_of_year < length {
                break;
            }
            day_of_year -= length;
            month += 1;
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let day = day_of_year as u8 + MIN_DAY;
        Self { year, month, day }
    }

    /// Days elapsed from 0000-01-01 to this date.
    pub fn day_count(&self) -> i64 {
        days_from_year_month_day(self.year, self.month, self.day)
    }

    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    #[inline]
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Day of the year, starting at 1 for January 1st
    pub fn day_of_year(&self) -> u16 {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let preceding = days_before_month(self.year, self.month) as u16;
        preceding + u16::from(self.day)
    }

    pub const fn is_leap_year(&self) -> bool {
        is_leap_year(self.year)
    }

    /// Length of this date's month
    pub const fn days_in_month(&self) -> u8 {
        month_length(self.year, self.month)
    }

    /// Day of the week, using Sakamoto's method with floored division.
    pub fn weekday(&self) -> Weekday {
        let year = if self.month < MARCH {
            i64::from(self.year) - 1
        } else {
            i64::from(self.year)
        };
        let month_offset = WEEKDAY_MONTH_OFFSETS[usize::from(self.month - 1)];
        let number = (year + year.div_euclid(4) - year.div_euclid(100)
            + year.div_euclid(400)
            + month_offset
            + i64::from(self.day))
        .rem_euclid(DAYS_PER_WEEK);

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let index = number as usize;
        Weekday::ALL[index]
    }

    /// Replaces the year, repairing the day if it no longer exists (Feb 29th).
    pub fn set_year(self, year: i32) -> Self {
        Self::new(year, self.month.into(), self.day.into())
    }

    /// Replaces the month, repairing the day if the new month is shorter.
    pub fn set_month(self, month: i32) -> Self {
        Self::new(self.year, month, self.day.into())
    }

    /// Replaces the day, clamping it into the current month.
    pub fn set_day(self, day: i32) -> Self {
        Self::new(self.year, self.month.into(), day)
    }

    /// Adds whole years, keeping month and day where possible (Feb 29th becomes Feb 28th).
    ///
    /// A year outside the `i32` range saturates to [`Date::MIN`] or [`Date::MAX`].
    pub fn add_years(self, years: i64) -> Self {
        let year = i64::from(self.year).saturating_add(years);
        match i32::try_from(year) {
            Ok(year) => self.set_year(year),
            Err(_) => Self::saturated(year),
        }
    }

    /// Adds whole months, keeping the original day where possible
    /// (Mar 31st minus one month is the last day of February).
    ///
    /// A year outside the `i32` range saturates to [`Date::MIN`] or [`Date::MAX`].
    pub fn add_months(self, months: i64) -> Self {
        let total = (i64::from(self.year) * MONTHS_PER_YEAR + i64::from(self.month) - 1)
            .saturating_add(months);
        let year = total.div_euclid(MONTHS_PER_YEAR);
        let Ok(year) = i32::try_from(year) else {
            return Self::saturated(year);
        };

        #[allow(clippy::cast_possible_truncation)]
        let month = total.rem_euclid(MONTHS_PER_YEAR) as i32 + 1;
        Self::new(year, month, self.day.into())
    }

    /// Adds an exact number of days. No clamping is involved.
    pub fn add_days(self, days: i64) -> Self {
        Self::from_day_count(self.day_count().saturating_add(days))
    }

    /// Compares `self` against `other`, field by field.
    ///
    /// - `years` is `self.year - other.year`.
    /// - `months` is `(|self.year| * 12 + self.month) - (|other.year| * 12 + other.month)`.
    ///   The absolute year makes this unintuitive across year zero; callers rely on it as is.
    /// - `days` is the exact day-count distance.
    pub fn delta(&self, other: &Self) -> DateDelta {
        let month_index =
            |date: &Self| i64::from(date.year).abs() * MONTHS_PER_YEAR + i64::from(date.month);
        DateDelta {
            years: i64::from(self.year) - i64::from(other.year),
            months: month_index(self) - month_index(other),
            days: self.day_count() - other.day_count(),
        }
    }

    /// The representable bound on the side of `year`, which lies outside the `i32` range.
    fn saturated(year: i64) -> Self {
        debug!("year {year} saturated to the representable range");
        if year < 0 { Self::MIN } else { Self::MAX }
    }
}

impl From<(i32, i32, i32)> for Date {
    fn from((year, month, day): (i32, i32, i32)) -> Self {
        Self::new(year, month, day)
    }
}

impl Sub for Date {
    type Output = DateDelta;

    fn sub(self, rhs: Self) -> Self::Output {
        self.delta(&rhs)
    }
}

// --- day-count conversion ---

/// Days from 0000-01-01 to January 1st of `year`.
const fn days_from_year(year: i64) -> i64 {
    match year {
        0 => 0,
        // Year 0 and the leap years among 1..year all precede January 1st.
        1.. => {
            let prior = year - 1;
            DAYS_PER_YEAR * year + prior / 4 - prior / 100 + prior / 400 + 1
        }
        // Years year..=-1 lie before the reference; leap status mirrors positive years.
        _ => {
            let span = -year;
            -(DAYS_PER_YEAR * span + span / 4 - span / 100 + span / 400)
        }
    }
}

/// Days in the months of `year` that precede `month`.
fn days_before_month(year: i32, month: u8) -> i64 {
    (JANUARY..month)
        .map(|m| i64::from(month_length(year, m)))
        .sum()
}

/// Days from 0000-01-01 to the first of `month` in `year`.
fn days_from_year_month(year: i32, month: u8) -> i64 {
    days_from_year(i64::from(year)) + days_before_month(year, month)
}

fn days_from_year_month_day(year: i32, month: u8, day: u8) -> i64 {
    days_from_year_month(year, month) + i64::from(day - MIN_DAY)
}
