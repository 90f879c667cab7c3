//! Expected-minutes targets: 8 hours per working day, 5 days per week.

pub const MINUTES_PER_DAY: i64 = 8 * 60;
pub const MINUTES_PER_WEEK: i64 = 5 * MINUTES_PER_DAY;

/// Monthly target, scaled by the number of Mon-Fri dates in the month.
pub fn expected_for_month(working_days: u32) -> i64 {
    working_days as i64 * MINUTES_PER_DAY
}
