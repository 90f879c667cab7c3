use crate::core::calculator::DayMinutes;
use crate::errors::AppResult;
use crate::store::Store;
use crate::utils::date::{dates_in_month, iso_weekday};

/// Per-day breakdown of one calendar month plus its total.
///
/// `working_days` counts the Mon-Fri dates and is the denominator for the
/// expected-hours target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthSummary {
    pub working_days: u32,
    pub days: Vec<DayMinutes>,
    pub sum: i64,
}

/// Worked minutes for every date of `month`/`year`.
pub fn month_summary(store: &Store, month: u32, year: i32) -> AppResult<MonthSummary> {
    let mut working_days = 0;
    let mut days = Vec::new();
    let mut sum = 0;

    for date in dates_in_month(month, year) {
        if iso_weekday(date) <= 5 {
            working_days += 1;
        }

        let key = date.format("%Y-%m-%d").to_string();
        let minutes = store.find_date(&key).worked_minutes()?;

        sum += minutes;
        days.push(DayMinutes { date, minutes });
    }

    Ok(MonthSummary {
        working_days,
        days,
        sum,
    })
}
