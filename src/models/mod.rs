pub mod day;

pub use day::{BreakInterval, DayRecord, TimeField};
