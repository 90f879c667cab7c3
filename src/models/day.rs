use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};
use crate::utils::clock::Clock;
use crate::utils::time::parse_clock;

/// Which of the two day boundaries a `set` command targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeField {
    Start,
    End,
}

impl TimeField {
    /// Field name as it appears in the document ("start"/"end").
    pub fn name(&self) -> &'static str {
        match self {
            TimeField::Start => "start",
            TimeField::End => "end",
        }
    }

    /// User-facing name, as printed in messages ("Start time already set…").
    pub fn display(&self) -> &'static str {
        match self {
            TimeField::Start => "Start",
            TimeField::End => "End",
        }
    }
}

/// An unpaid pause within a day.
///
/// Breaks keep their insertion order and are never validated against each
/// other; overlapping entries are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakInterval {
    pub start: String,
    pub end: String,
    pub comment: Option<String>,
}

/// The tracked state for one calendar date.
///
/// `start`/`end` hold "HH:MM" strings; both absent, one absent, or even
/// misordered values are all representable. Values are not validated when
/// set, a malformed time only surfaces when worked minutes are computed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    pub start: Option<String>,
    pub end: Option<String>,
    #[serde(default)]
    pub breaks: Vec<BreakInterval>,
    pub comment: Option<String>,
}

fn is_set(field: &Option<String>) -> bool {
    matches!(field, Some(v) if !v.is_empty())
}

impl DayRecord {
    /// Worked minutes: `end - start - Σ(break durations)`.
    ///
    /// Returns 0 for an incomplete day (start or end missing). The result
    /// may be negative when times are misordered; callers display it as-is.
    pub fn worked_minutes(&self) -> AppResult<i64> {
        let (Some(start), Some(end)) = (&self.start, &self.end) else {
            return Ok(0);
        };

        let duration = parse_clock(end)? - parse_clock(start)?;

        let mut breaks = 0;
        for b in &self.breaks {
            breaks += parse_clock(&b.end)? - parse_clock(&b.start)?;
        }

        Ok(duration - breaks)
    }

    /// True when both start and end are set and non-empty.
    pub fn is_complete(&self) -> bool {
        is_set(&self.start) && is_set(&self.end)
    }

    /// Set `start` or `end` to `value`, or to the clock's current time when
    /// no value is given.
    ///
    /// A field that already holds a value is only overwritten with `force`;
    /// in that case the previous value is returned so the caller can warn.
    /// Without `force` the record is left untouched and `AlreadySet` is
    /// reported.
    pub fn set_time(
        &mut self,
        field: TimeField,
        value: Option<String>,
        force: bool,
        clock: &dyn Clock,
    ) -> AppResult<Option<String>> {
        let slot = match field {
            TimeField::Start => &mut self.start,
            TimeField::End => &mut self.end,
        };

        let previous = if is_set(slot) {
            if !force {
                return Err(AppError::AlreadySet {
                    field: field.display().to_string(),
                    previous: slot.clone().unwrap_or_default(),
                });
            }
            slot.clone()
        } else {
            None
        };

        *slot = Some(value.unwrap_or_else(|| clock.now_hhmm()));

        Ok(previous)
    }

    /// Append a break; the end time defaults to the clock's current time.
    /// Always succeeds, no overlap check.
    pub fn add_break(
        &mut self,
        start: String,
        end: Option<String>,
        comment: Option<String>,
        clock: &dyn Clock,
    ) {
        self.breaks.push(BreakInterval {
            start,
            end: end.unwrap_or_else(|| clock.now_hhmm()),
            comment,
        });
    }
}
