//! Injectable time source.
//!
//! Every "what time is it" read goes through [`Clock`] so tests can freeze
//! the wall clock instead of depending on process-wide state.

use chrono::{Local, NaiveDate};

pub trait Clock {
    /// Today's local calendar date.
    fn today(&self) -> NaiveDate;

    /// Current local wall-clock time as "HH:MM".
    fn now_hhmm(&self) -> String;
}

/// Real wall clock, used by every CLI command.
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    fn now_hhmm(&self) -> String {
        Local::now().format("%H:%M").to_string()
    }
}

/// Frozen clock for tests.
pub struct FixedClock {
    pub date: NaiveDate,
    pub time: String,
}

impl FixedClock {
    pub fn new(date: NaiveDate, time: &str) -> Self {
        Self {
            date,
            time: time.to_string(),
        }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.date
    }

    fn now_hhmm(&self) -> String {
        self.time.clone()
    }
}
