//! Fixture builders shared by the unit tests. They panic on invalid input so a typo in a
//! test cannot be silently clamped into a different value.

use crate::{Date, DateTime};

pub(crate) fn date(year: i32, month: i32, day: i32) -> Date {
    Date::try_new(year, month, day).unwrap()
}

pub(crate) fn datetime(
    year: i32,
    month: i32,
    day: i32,
    hour: i32,
    minute: i32,
    second: i32,
    millisecond: i32,
) -> DateTime {
    DateTime::try_new(date(year, month, day), hour, minute, second, millisecond).unwrap()
}
