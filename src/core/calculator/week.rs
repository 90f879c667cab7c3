use crate::core::calculator::DayMinutes;
use crate::errors::AppResult;
use crate::store::Store;
use crate::utils::date::dates_in_iso_week;

/// Per-day breakdown of one ISO calendar week plus its total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekSummary {
    pub days: Vec<DayMinutes>,
    pub sum: i64,
}

/// Worked minutes for every date of ISO week `week`/`year`.
///
/// Dates without a record contribute zero; a well-formed ISO week always
/// yields seven rows.
pub fn week_summary(store: &Store, week: u32, year: i32) -> AppResult<WeekSummary> {
    let mut days = Vec::new();
    let mut sum = 0;

    for date in dates_in_iso_week(week, year) {
        let key = date.format("%Y-%m-%d").to_string();
        let minutes = store.find_date(&key).worked_minutes()?;

        sum += minutes;
        days.push(DayMinutes { date, minutes });
    }

    Ok(WeekSummary { days, sum })
}
