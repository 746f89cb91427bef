use crate::consts::{
    MAX_HOUR, MAX_MILLISECOND, MAX_MINUTE, MAX_SECOND, MS_PER_DAY, MS_PER_HOUR, MS_PER_MINUTE,
    MS_PER_SECOND,
};
use crate::date::Date;
use crate::types::{DateTimeDelta, Weekday};
use crate::CalendarError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::ops::Sub;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// A [`Date`] together with a millisecond offset from its midnight.
///
/// The offset always lies in `0..MS_PER_DAY`; arithmetic that leaves that range carries
/// whole days into the date. Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(Date, i64)", into = "(Date, u32)")]
pub struct DateTime {
    date: Date,
    offset: u32,
}

impl DateTime {
    /// 1970-01-01 00:00:00.000, the zero of absolute timestamps
    pub const EPOCH: Self = Self::midnight(Date::EPOCH);

    /// Builds a date-time from a date and clock fields.
    ///
    /// Each field is clamped on its own: hour into `0..=23`, minute and second into
    /// `0..=59`, millisecond into `0..=999`.
    pub fn new(date: Date, hour: i32, minute: i32, second: i32, millisecond: i32) -> Self {
        let offset = clamp_field(hour, MAX_HOUR.into()) * MS_PER_HOUR
            + clamp_field(minute, MAX_MINUTE.into()) * MS_PER_MINUTE
            + clamp_field(second, MAX_SECOND.into()) * MS_PER_SECOND
            + clamp_field(millisecond, MAX_MILLISECOND);
        Self { date, offset }
    }

    /// Builds a date-time from raw calendar and clock fields, clamping every one of them.
    pub fn from_parts(
        year: i32,
        month: i32,
        day: i32,
        hour: i32,
        minute: i32,
        second: i32,
        millisecond: i32,
    ) -> Self {
        Self::new(Date::new(year, month, day), hour, minute, second, millisecond)
    }

    /// Builds a date-time only if every clock field is in range.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidTime` when any field would need clamping.
    pub fn try_new(
        date: Date,
        hour: i32,
        minute: i32,
        second: i32,
        millisecond: i32,
    ) -> Result<Self, CalendarError> {
        let in_range = |value: i32, max: u16| (0..=i32::from(max)).contains(&value);
        if !(in_range(hour, MAX_HOUR.into())
            && in_range(minute, MAX_MINUTE.into())
            && in_range(second, MAX_SECOND.into())
            && in_range(millisecond, MAX_MILLISECOND))
        {
            return Err(CalendarError::InvalidTime {
                hour,
                minute,
                second,
                millisecond,
            });
        }
        Ok(Self::new(date, hour, minute, second, millisecond))
    }

    /// Start of `date`.
    pub const fn midnight(date: Date) -> Self {
        Self { date, offset: 0 }
    }

    /// Instant `timestamp` milliseconds after [`DateTime::EPOCH`] (before it when negative).
    pub fn from_timestamp(timestamp: i64) -> Self {
        Self::EPOCH.add_milliseconds(timestamp)
    }

    /// Milliseconds from [`DateTime::EPOCH`] to `self`.
    pub fn to_timestamp(&self) -> i64 {
        self.delta(&Self::EPOCH).milliseconds
    }

    /// Converts from the standard library's absolute clock type, truncating to milliseconds
    /// toward the past.
    pub fn from_system_time(time: SystemTime) -> Self {
        let timestamp = match time.duration_since(UNIX_EPOCH) {
            Ok(after) => i64::try_from(after.as_millis()).unwrap_or(i64::MAX),
            Err(err) => {
                let before = err.duration();
                let whole = i64::try_from(before.as_millis()).unwrap_or(i64::MAX);
                // A partial millisecond before the epoch rounds down to the previous one.
                let partial = before.subsec_nanos() % 1_000_000 != 0;
                whole.saturating_neg().saturating_sub(i64::from(partial))
            }
        };
        Self::from_timestamp(timestamp)
    }

    /// Converts to the standard library's absolute clock type, or `None` if the platform
    /// cannot represent this instant.
    pub fn to_system_time(&self) -> Option<SystemTime> {
        let timestamp = self.to_timestamp();
        let magnitude = Duration::from_millis(timestamp.unsigned_abs());
        if timestamp < 0 {
            UNIX_EPOCH.checked_sub(magnitude)
        } else {
            UNIX_EPOCH.checked_add(magnitude)
        }
    }

    #[inline]
    pub const fn date(&self) -> Date {
        self.date
    }

    /// Milliseconds since midnight
    #[inline]
    pub const fn offset(&self) -> u32 {
        self.offset
    }

    pub const fn year(&self) -> i32 {
        self.date.year()
    }

    pub const fn month(&self) -> u8 {
        self.date.month()
    }

    pub const fn day(&self) -> u8 {
        self.date.day()
    }

    #[allow(clippy::cast_possible_truncation)]
    pub const fn hour(&self) -> u8 {
        (self.offset / MS_PER_HOUR) as u8
    }

    #[allow(clippy::cast_possible_truncation)]
    pub const fn minute(&self) -> u8 {
        (self.offset % MS_PER_HOUR / MS_PER_MINUTE) as u8
    }

    #[allow(clippy::cast_possible_truncation)]
    pub const fn second(&self) -> u8 {
        (self.offset % MS_PER_HOUR % MS_PER_MINUTE / MS_PER_SECOND) as u8
    }

    #[allow(clippy::cast_possible_truncation)]
    pub const fn millisecond(&self) -> u16 {
        (self.offset % MS_PER_HOUR % MS_PER_MINUTE % MS_PER_SECOND) as u16
    }

    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }

    pub fn set_year(self, year: i32) -> Self {
        self.with_date(self.date.set_year(year))
    }

    pub fn set_month(self, month: i32) -> Self {
        self.with_date(self.date.set_month(month))
    }

    pub fn set_day(self, day: i32) -> Self {
        self.with_date(self.date.set_day(day))
    }

    pub fn set_hour(self, hour: i32) -> Self {
        Self::new(
            self.date,
            hour,
            self.minute().into(),
            self.second().into(),
            self.millisecond().into(),
        )
    }

    pub fn set_minute(self, minute: i32) -> Self {
        Self::new(
            self.date,
            self.hour().into(),
            minute,
            self.second().into(),
            self.millisecond().into(),
        )
    }

    pub fn set_second(self, second: i32) -> Self {
        Self::new(
            self.date,
            self.hour().into(),
            self.minute().into(),
            second,
            self.millisecond().into(),
        )
    }

    pub fn set_millisecond(self, millisecond: i32) -> Self {
        Self::new(
            self.date,
            self.hour().into(),
            self.minute().into(),
            self.second().into(),
            millisecond,
        )
    }

    /// Same clock offset on another date.
    pub const fn with_date(self, date: Date) -> Self {
        Self { date, ..self }
    }

    pub fn add_years(self, years: i64) -> Self {
        self.with_date(self.date.add_years(years))
    }

    pub fn add_months(self, months: i64) -> Self {
        self.with_date(self.date.add_months(months))
    }

    pub fn add_days(self, days: i64) -> Self {
        self.with_date(self.date.add_days(days))
    }

    pub fn add_hours(self, hours: i64) -> Self {
        self.add_milliseconds(hours.saturating_mul(MS_PER_HOUR.into()))
    }

    pub fn add_minutes(self, minutes: i64) -> Self {
        self.add_milliseconds(minutes.saturating_mul(MS_PER_MINUTE.into()))
    }

    pub fn add_seconds(self, seconds: i64) -> Self {
        self.add_milliseconds(seconds.saturating_mul(MS_PER_SECOND.into()))
    }

    /// Adds a signed number of milliseconds, carrying whole days into the date.
    pub fn add_milliseconds(self, milliseconds: i64) -> Self {
        let (extra_days, offset) = carry(self.offset, milliseconds);
        Self {
            date: self.date.add_days(extra_days),
            offset,
        }
    }

    /// Compares `self` against `other`.
    ///
    /// `years`, `months` and `days` are the [`Date::delta`] fields. `milliseconds` is
    /// `days * MS_PER_DAY + (self.offset - other.offset)` and `hours`, `minutes` and `seconds`
    /// are that same total divided down, truncating toward zero.
    pub fn delta(&self, other: &Self) -> DateTimeDelta {
        let date_delta = self.date.delta(&other.date);
        let milliseconds = saturate_i64(
            i128::from(date_delta.days) * i128::from(MS_PER_DAY) + i128::from(self.offset)
                - i128::from(other.offset),
        );
        DateTimeDelta {
            years: date_delta.years,
            months: date_delta.months,
            days: date_delta.days,
            hours: milliseconds / i64::from(MS_PER_HOUR),
            minutes: milliseconds / i64::from(MS_PER_MINUTE),
            seconds: milliseconds / i64::from(MS_PER_SECOND),
            milliseconds,
        }
    }

    /// Exact milliseconds since the epoch, wide enough for every representable value.
    fn elapsed(&self) -> i128 {
        let since_epoch = self.date.day_count() - Date::EPOCH.day_count();
        i128::from(since_epoch) * i128::from(MS_PER_DAY) + i128::from(self.offset)
    }
}

impl PartialOrd for DateTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DateTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.elapsed().cmp(&other.elapsed())
    }
}

impl Sub for DateTime {
    type Output = DateTimeDelta;

    fn sub(self, rhs: Self) -> Self::Output {
        self.delta(&rhs)
    }
}

impl From<Date> for DateTime {
    fn from(date: Date) -> Self {
        Self::midnight(date)
    }
}

impl From<(Date, i64)> for DateTime {
    /// Normalizes any offset, carrying whole days into the date.
    fn from((date, offset): (Date, i64)) -> Self {
        Self::midnight(date).add_milliseconds(offset)
    }
}

impl From<DateTime> for (Date, u32) {
    fn from(datetime: DateTime) -> Self {
        (datetime.date, datetime.offset)
    }
}

// --- helpers ---

fn saturate_i64(value: i128) -> i64 {
    i64::try_from(value).unwrap_or(if value < 0 { i64::MIN } else { i64::MAX })
}

#[allow(clippy::cast_sign_loss)]
fn clamp_field(value: i32, max: u16) -> u32 {
    let clamped = value.clamp(0, i32::from(max));
    if clamped != value {
        trace!("clamped clock field {value} into 0..={max}");
    }
    clamped as u32
}

/// Splits `offset + milliseconds` into whole days (floored) and an offset in `0..MS_PER_DAY`.
///
/// An exact negative multiple of a day lands on offset 0 of the earlier day, so
/// `carry(0, -MS_PER_DAY)` is `(-1, 0)`.
fn carry(offset: u32, milliseconds: i64) -> (i64, u32) {
    let day = i64::from(MS_PER_DAY);
    let days = milliseconds.div_euclid(day);
    // `remainder < 2 * day`, so it cannot overflow and carries at most one more day.
    let remainder = milliseconds.rem_euclid(day) + i64::from(offset);

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let offset = (remainder % day) as u32;
    (days + remainder / day, offset)
}
