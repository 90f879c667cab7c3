pub mod diff;
pub mod expected;
pub mod month;
pub mod week;

use chrono::NaiveDate;

/// One row of a week or month breakdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayMinutes {
    pub date: NaiveDate,
    pub minutes: i64,
}
