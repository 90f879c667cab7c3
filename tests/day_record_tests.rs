use chrono::NaiveDate;

use arbeit::errors::AppError;
use arbeit::models::{BreakInterval, DayRecord, TimeField};
use arbeit::utils::clock::FixedClock;

fn frozen(time: &str) -> FixedClock {
    FixedClock::new(NaiveDate::from_ymd_opt(2012, 12, 12).unwrap(), time)
}

fn complete_day(start: &str, end: &str) -> DayRecord {
    DayRecord {
        start: Some(start.to_string()),
        end: Some(end.to_string()),
        breaks: vec![],
        comment: None,
    }
}

#[test]
fn test_worked_minutes_zero_when_incomplete() {
    let mut day = DayRecord::default();
    day.start = Some("09:00".to_string());
    assert_eq!(day.worked_minutes().unwrap(), 0);

    let mut day = DayRecord::default();
    day.end = Some("17:00".to_string());
    assert_eq!(day.worked_minutes().unwrap(), 0);
}

#[test]
fn test_worked_minutes_simple() {
    assert_eq!(complete_day("13:00", "14:00").worked_minutes().unwrap(), 60);
}

#[test]
fn test_worked_minutes_subtracts_breaks() {
    let mut day = complete_day("12:00", "15:00");
    day.breaks.push(BreakInterval {
        start: "12:30".to_string(),
        end: "12:52".to_string(),
        comment: None,
    });

    assert_eq!(day.worked_minutes().unwrap(), 158);
}

#[test]
fn test_worked_minutes_may_be_negative() {
    // misordered times are not validated
    assert_eq!(complete_day("15:00", "12:00").worked_minutes().unwrap(), -180);
}

#[test]
fn test_worked_minutes_propagates_malformed_times() {
    let day = complete_day("nonsense", "17:00");
    assert!(matches!(
        day.worked_minutes(),
        Err(AppError::InvalidTime(_))
    ));
}

#[test]
fn test_is_complete() {
    assert!(complete_day("09:00", "17:00").is_complete());
    assert!(!DayRecord::default().is_complete());

    // an empty string counts as unset
    let day = complete_day("", "17:00");
    assert!(!day.is_complete());
}

#[test]
fn test_set_time_stamps_current_time() {
    let mut day = DayRecord::default();

    day.set_time(TimeField::Start, None, false, &frozen("12:12"))
        .unwrap();

    assert_eq!(day.start.as_deref(), Some("12:12"));
}

#[test]
fn test_set_time_with_explicit_value() {
    let mut day = DayRecord::default();

    day.set_time(TimeField::End, Some("17:30".to_string()), false, &frozen("12:12"))
        .unwrap();

    assert_eq!(day.end.as_deref(), Some("17:30"));
}

#[test]
fn test_set_time_refuses_overwrite_without_force() {
    let mut day = complete_day("09:00", "17:00");
    day.breaks.push(BreakInterval {
        start: "12:00".to_string(),
        end: "12:30".to_string(),
        comment: None,
    });
    let before = day.clone();

    let err = day
        .set_time(TimeField::Start, Some("12:00".to_string()), false, &frozen("12:12"))
        .unwrap_err();

    assert!(matches!(
        err,
        AppError::AlreadySet { ref field, ref previous } if field == "Start" && previous == "09:00"
    ));
    assert_eq!(day, before, "record must stay untouched");
}

#[test]
fn test_set_time_overwrites_with_force() {
    let mut day = complete_day("09:00", "17:00");
    day.breaks.push(BreakInterval {
        start: "12:00".to_string(),
        end: "12:30".to_string(),
        comment: Some("lunch".to_string()),
    });

    let previous = day
        .set_time(TimeField::Start, Some("12:00".to_string()), true, &frozen("12:12"))
        .unwrap();

    assert_eq!(previous.as_deref(), Some("09:00"));
    assert_eq!(day.start.as_deref(), Some("12:00"));
    assert_eq!(day.end.as_deref(), Some("17:00"));
    assert_eq!(day.breaks.len(), 1, "breaks must be preserved");
}

#[test]
fn test_add_break_defaults_end_to_now() {
    let mut day = DayRecord::default();

    day.add_break("12:00".to_string(), None, None, &frozen("13:00"));

    assert_eq!(
        day.breaks,
        vec![BreakInterval {
            start: "12:00".to_string(),
            end: "13:00".to_string(),
            comment: None,
        }]
    );
}

#[test]
fn test_add_break_keeps_insertion_order() {
    let mut day = DayRecord::default();

    day.add_break(
        "14:00".to_string(),
        Some("14:15".to_string()),
        None,
        &frozen("16:00"),
    );
    // entered later but earlier in the day; no reordering, no overlap check
    day.add_break(
        "12:00".to_string(),
        Some("12:30".to_string()),
        Some("lunch".to_string()),
        &frozen("16:00"),
    );

    assert_eq!(day.breaks[0].start, "14:00");
    assert_eq!(day.breaks[1].start, "12:00");
    assert_eq!(day.breaks[1].comment.as_deref(), Some("lunch"));
}
