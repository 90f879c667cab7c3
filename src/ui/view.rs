//! Terminal rendering of the day, week and month views.

use crate::core::calculator::diff::diff;
use crate::core::calculator::expected::{
    MINUTES_PER_DAY, MINUTES_PER_WEEK, expected_for_month,
};
use crate::core::calculator::month::MonthSummary;
use crate::core::calculator::week::WeekSummary;
use crate::errors::AppResult;
use crate::models::DayRecord;
use crate::store::Store;
use crate::utils::clock::Clock;
use crate::utils::colors::{RED, color_for_diff, paint};
use crate::utils::date::iso_week_number;
use crate::utils::time::format_clock;

/// "ACTUAL (DELTA)" with the delta colored green when over target,
/// yellow otherwise.
pub fn show_diff(actual: i64, expected: i64) -> String {
    let d = diff(actual, expected);
    format!(
        "{} ({})",
        format_clock(d.actual),
        paint(color_for_diff(d.favorable), &format_clock(d.delta))
    )
}

fn time_or_missing(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => paint(RED, "missing"),
    }
}

/// Print one day record: start/end lines, the break list, and the
/// worked-vs-expected diff. An unfinished but started day gets a "So far"
/// preview with the end substituted by the current time (not persisted).
pub fn show_date(day: &DayRecord, clock: &dyn Clock) -> AppResult<()> {
    println!(" Start: {}", time_or_missing(day.start.as_deref()));
    println!("   End: {}", time_or_missing(day.end.as_deref()));

    if !day.breaks.is_empty() {
        println!();
        println!("Breaks:");
        for b in &day.breaks {
            let comment = match &b.comment {
                Some(c) if !c.is_empty() => format!(" ({c})"),
                _ => String::new(),
            };
            println!("  {} - {}{}", b.start, b.end, comment);
        }
    }

    println!();
    if day.is_complete() {
        println!("= {}", show_diff(day.worked_minutes()?, MINUTES_PER_DAY));
    } else if day.start.as_deref().is_some_and(|s| !s.is_empty()) {
        let mut preview = day.clone();
        preview.end = Some(clock.now_hhmm());
        println!(
            "So far {}",
            show_diff(preview.worked_minutes()?, MINUTES_PER_DAY)
        );
    }

    Ok(())
}

/// Print today's record under a weekday header.
pub fn show_today(store: &Store, clock: &dyn Clock) -> AppResult<()> {
    let today = clock.today();

    println!("{}", today.format("%A, %d.%m.%Y"));
    println!();

    show_date(&store.find_date(&today.format("%Y-%m-%d").to_string()), clock)
}

pub fn show_week(data: &WeekSummary, week: u32) {
    println!("Calendar week {week}");
    println!();

    for item in &data.days {
        println!(
            "{}: {}",
            item.date.format("%a, %Y-%m-%d"),
            format_clock(item.minutes)
        );
    }

    println!();
    println!("               = {}", show_diff(data.sum, MINUTES_PER_WEEK));
}

pub fn show_month(data: &MonthSummary, month: u32, year: i32) {
    println!("Statistic for {month}/{year}");
    println!();

    // Blank line between ISO-week groups.
    let mut current_week = data.days.first().map(|d| iso_week_number(d.date));
    for item in &data.days {
        let week = Some(iso_week_number(item.date));
        if week != current_week {
            println!();
            current_week = week;
        }
        println!(
            "{}: {}",
            item.date.format("%a, %Y-%m-%d"),
            format_clock(item.minutes)
        );
    }

    println!();
    println!(
        "               = {}",
        show_diff(data.sum, expected_for_month(data.working_days))
    );
}
