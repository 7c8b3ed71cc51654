//! Calendar utilities for day-index arithmetic.
//!
//! All date arithmetic in the engine operates on an integer day-index
//! counted from a fixed epoch, never on the string form. The epoch is
//! 2000-01-01 (day 0), which is a Saturday; that anchor gives the
//! day-of-week formula `day_index mod 7` (0 → Sat, 1 → Sun, …, 6 → Fri)
//! and makes the Sunday starting any week the most recent day-index
//! congruent to 1 mod 7.
//!
//! Conversions between date strings and day-indexes go through
//! [`chrono::NaiveDate`], which implements the same proleptic Gregorian
//! calendar, so the round-trip is exact across month and leap-year
//! boundaries.

use chrono::{Datelike, Local, NaiveDate};

use crate::error::{EngineError, EngineResult};

/// Days from 0001-01-01 (CE day 1) to the engine epoch, 2000-01-01.
const EPOCH_DAYS_FROM_CE: i64 = 730_120;

/// Day-of-week names indexed by `day_index mod 7`, anchored on the
/// Saturday epoch.
const DAY_NAMES: [&str; 7] = ["Sat", "Sun", "Mon", "Tue", "Wed", "Thu", "Fri"];

/// Parses a `YYYY-MM-DD` date string.
///
/// # Errors
///
/// Returns [`EngineError::InvalidDate`] if the string is not a well-formed
/// calendar date. The legacy system silently mapped such strings to
/// day-index 0; this implementation deliberately does not.
///
/// # Example
///
/// ```
/// use finance_display::calendar::parse_date;
///
/// assert!(parse_date("2024-12-28").is_ok());
/// assert!(parse_date("2024-02-30").is_err());
/// assert!(parse_date("not a date").is_err());
/// ```
pub fn parse_date(input: &str) -> EngineResult<NaiveDate> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|_| EngineError::InvalidDate {
        input: input.to_string(),
    })
}

/// Returns the day-index of a calendar date.
///
/// Day 0 is 2000-01-01; dates before the epoch yield negative indexes,
/// and `day_index(d + 1 day) == day_index(d) + 1` always holds.
pub fn day_index(date: NaiveDate) -> i64 {
    i64::from(date.num_days_from_ce()) - EPOCH_DAYS_FROM_CE
}

/// Parses a `YYYY-MM-DD` string and returns its day-index.
///
/// # Errors
///
/// Returns [`EngineError::InvalidDate`] for malformed input.
///
/// # Example
///
/// ```
/// use finance_display::calendar::date_to_day_index;
///
/// assert_eq!(date_to_day_index("2000-01-01").unwrap(), 0);
/// assert_eq!(date_to_day_index("2000-01-02").unwrap(), 1);
/// assert_eq!(date_to_day_index("1999-12-31").unwrap(), -1);
/// ```
pub fn date_to_day_index(input: &str) -> EngineResult<i64> {
    Ok(day_index(parse_date(input)?))
}

/// Converts a day-index back to a calendar date.
///
/// # Errors
///
/// Returns [`EngineError::DayIndexOutOfRange`] if the index falls outside
/// the range `chrono` can represent.
pub fn day_index_to_date(day_index: i64) -> EngineResult<NaiveDate> {
    let days_from_ce = day_index + EPOCH_DAYS_FROM_CE;
    i32::try_from(days_from_ce)
        .ok()
        .and_then(NaiveDate::from_num_days_from_ce_opt)
        .ok_or(EngineError::DayIndexOutOfRange { day_index })
}

/// Converts a day-index to its `YYYY-MM-DD` string form.
///
/// Exact inverse of [`date_to_day_index`] for every index the system
/// will see.
///
/// # Example
///
/// ```
/// use finance_display::calendar::day_index_to_date_string;
///
/// assert_eq!(day_index_to_date_string(0).unwrap(), "2000-01-01");
/// assert_eq!(day_index_to_date_string(9128).unwrap(), "2024-12-28");
/// ```
pub fn day_index_to_date_string(day_index: i64) -> EngineResult<String> {
    Ok(day_index_to_date(day_index)?.format("%Y-%m-%d").to_string())
}

/// Returns the short day-of-week name for a day-index.
///
/// Uses a non-negative modulus, so pre-epoch indexes map correctly.
///
/// # Example
///
/// ```
/// use finance_display::calendar::day_of_week_name;
///
/// assert_eq!(day_of_week_name(0), "Sat");
/// assert_eq!(day_of_week_name(1), "Sun");
/// assert_eq!(day_of_week_name(-1), "Fri");
/// ```
pub fn day_of_week_name(day_index: i64) -> &'static str {
    DAY_NAMES[day_index.rem_euclid(7) as usize]
}

/// Returns the day-index of the Sunday that starts the week containing
/// `day_index`.
///
/// Weeks run Sunday through Saturday; the result is always a Sunday less
/// than or equal to the input.
///
/// # Example
///
/// ```
/// use finance_display::calendar::sunday_starting_week;
///
/// // Day 1 (2000-01-02) is a Sunday and starts its own week.
/// assert_eq!(sunday_starting_week(1), 1);
/// // Day 7 (the following Saturday) belongs to that same week.
/// assert_eq!(sunday_starting_week(7), 1);
/// // Day 0 (Saturday 2000-01-01) belongs to the week of day -6.
/// assert_eq!(sunday_starting_week(0), -6);
/// ```
pub fn sunday_starting_week(day_index: i64) -> i64 {
    let weekday = day_index.rem_euclid(7);
    if weekday == 0 {
        // Saturday: the week began six days earlier.
        day_index - 6
    } else {
        day_index - (weekday - 1)
    }
}

/// Returns today's day-index in the fixed local time zone.
pub fn today_day_index() -> i64 {
    day_index(Local::now().date_naive())
}
