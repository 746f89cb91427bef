use crate::CalendarError;
use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    MAX_MONTH, MIN_DAY,
};
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Day of the week, numbered from Sunday (0) to Saturday (6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
pub enum Weekday {
    #[display(fmt = "Sunday")]
    Sunday,
    #[display(fmt = "Monday")]
    Monday,
    #[display(fmt = "Tuesday")]
    Tuesday,
    #[display(fmt = "Wednesday")]
    Wednesday,
    #[display(fmt = "Thursday")]
    Thursday,
    #[display(fmt = "Friday")]
    Friday,
    #[display(fmt = "Saturday")]
    Saturday,
}

impl Weekday {
    /// All weekdays in enumeration order, Sunday first
    pub const ALL: [Self; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// Returns the weekday number, Sunday = 0 through Saturday = 6
    #[inline]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// The following day, wrapping Saturday to Sunday
    pub const fn next(self) -> Self {
        Self::ALL[(self.number() as usize + 1) % Self::ALL.len()]
    }

    /// The preceding day, wrapping Sunday to Saturday
    pub const fn previous(self) -> Self {
        Self::ALL[(self.number() as usize + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Full English name of the day
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sunday => "Sunday",
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
        }
    }
}

impl TryFrom<u8> for Weekday {
    type Error = CalendarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(value))
            .copied()
            .ok_or(CalendarError::InvalidWeekday(value))
    }
}

impl From<Weekday> for u8 {
    fn from(weekday: Weekday) -> Self {
        weekday.number()
    }
}

impl FromStr for Weekday {
    type Err = CalendarError;

    /// Accepts full or three-letter English names, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|weekday| {
                let name = weekday.name();
                trimmed.eq_ignore_ascii_case(name) || trimmed.eq_ignore_ascii_case(&name[..3])
            })
            .ok_or_else(|| CalendarError::UnknownWeekday(trimmed.to_owned()))
    }
}

/// Difference between two dates, reported as three independent views.
///
/// `years` compares years only, `months` compares month indices and `days` is the exact
/// day-count distance. The fields are not a decomposition of one quantity, so e.g.
/// Dec 31st to Jan 1st yields one of each.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateDelta {
    pub years: i64,
    pub months: i64,
    pub days: i64,
}

/// Difference between two date-times.
///
/// `years`, `months` and `days` come from [`DateDelta`]. The remaining fields are all
/// truncating views of the single signed millisecond distance: `hours` is the total number
/// of whole hours, not an hour-of-day component.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateTimeDelta {
    pub years: i64,
    pub months: i64,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub milliseconds: i64,
}

// Helper functions

pub const fn is_leap_year(year: i32) -> bool {
    let year = year as i64;
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Number of days in `month` of `year`, or `None` when `month` is not in `1..=12`.
pub const fn days_in_month(year: i32, month: i32) -> Option<u8> {
    if month < 1 || month > MAX_MONTH as i32 {
        return None;
    }
    Some(month_length(year, month as u8))
}

/// Reports whether `(year, month, day)` names a real calendar date.
pub const fn is_valid_date(year: i32, month: i32, day: i32) -> bool {
    match days_in_month(year, month) {
        Some(max_day) => day >= MIN_DAY as i32 && day <= max_day as i32,
        None => false,
    }
}

/// Month length for an already validated month.
pub(crate) const fn month_length(year: i32, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}
