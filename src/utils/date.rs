//! Calendar math: month-length table, year/week/month enumeration and ISO
//! week semantics.
//!
//! The month-length table is fixed, with February always at 28 days. The
//! original tool never adjusted for leap years and the week/month
//! enumeration (and its tests) derive from that table, so it is reproduced
//! as-is. Years containing a leap February or week 53 can come out shifted.

use chrono::{Datelike, NaiveDate};

const MONTH_DAYS: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Number of days in a month (1..=12), February fixed at 28.
pub fn days_in_month(month: u32) -> u32 {
    MONTH_DAYS[(month - 1) as usize]
}

/// All 365 dates of a year, in order, per the fixed table.
pub fn all_dates_in_year(year: i32) -> Vec<NaiveDate> {
    let mut days = Vec::with_capacity(365);

    for month in 1..=12 {
        for day in 1..=days_in_month(month) {
            days.push(NaiveDate::from_ymd_opt(year, month, day).unwrap());
        }
    }

    days
}

/// The dates of `year` whose ISO week number equals `week`, in order.
pub fn dates_in_iso_week(week: u32, year: i32) -> Vec<NaiveDate> {
    all_dates_in_year(year)
        .into_iter()
        .filter(|d| iso_week_number(*d) == week)
        .collect()
}

/// All dates of the given month, in order.
pub fn dates_in_month(month: u32, year: i32) -> Vec<NaiveDate> {
    (1..=days_in_month(month))
        .map(|day| NaiveDate::from_ymd_opt(year, month, day).unwrap())
        .collect()
}

/// ISO weekday: Monday = 1 .. Sunday = 7.
pub fn iso_weekday(date: NaiveDate) -> u32 {
    date.weekday().number_from_monday()
}

/// ISO 8601 week number (week 1 contains the year's first Thursday).
pub fn iso_week_number(date: NaiveDate) -> u32 {
    date.iso_week().week()
}
