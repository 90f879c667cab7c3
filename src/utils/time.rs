//! Time utilities: parsing HH:MM clock strings and formatting minute counts.

use crate::errors::{AppError, AppResult};

/// Parse a "HH:MM" clock string into minutes since midnight.
///
/// The hour part is not bounded to 0..24, so durations like "100:30" parse
/// fine. Anything with fewer than two `:`-separated parts or non-numeric
/// parts is rejected.
pub fn parse_clock(s: &str) -> AppResult<i64> {
    let mut parts = s.split(':');

    let hours = parts
        .next()
        .and_then(|p| p.parse::<i64>().ok())
        .ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
    let minutes = parts
        .next()
        .and_then(|p| p.parse::<i64>().ok())
        .ok_or_else(|| AppError::InvalidTime(s.to_string()))?;

    Ok(hours * 60 + minutes)
}

/// Format a (possibly negative) minute count as "HH:MM".
///
/// Negative values get a leading `-`; the hour component grows beyond two
/// digits without truncation (e.g. 6000 → "100:00").
pub fn format_clock(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{:02}:{:02}", sign, m / 60, m % 60)
}
