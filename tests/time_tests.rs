use arbeit::errors::AppError;
use arbeit::utils::time::{format_clock, parse_clock};

#[test]
fn test_parse_clock() {
    assert_eq!(parse_clock("13:24").unwrap(), 13 * 60 + 24);
    assert_eq!(parse_clock("1:10").unwrap(), 70);
    assert_eq!(parse_clock("00:00").unwrap(), 0);
}

#[test]
fn test_parse_clock_ignores_extra_parts() {
    // only the first two parts count
    assert_eq!(parse_clock("1:10:30").unwrap(), 70);
}

#[test]
fn test_parse_clock_rejects_malformed_input() {
    for bad in ["1324", "12", "", "ab:cd", "12:xx", ":30"] {
        let err = parse_clock(bad).unwrap_err();
        assert!(
            matches!(err, AppError::InvalidTime(ref s) if s == bad),
            "expected InvalidTime for {:?}",
            bad
        );
    }
}

#[test]
fn test_format_clock() {
    assert_eq!(format_clock(13 * 60 + 24), "13:24");
    assert_eq!(format_clock(23), "00:23");
    assert_eq!(format_clock(0), "00:00");
}

#[test]
fn test_format_clock_negative() {
    assert_eq!(format_clock(-30), "-00:30");
    assert_eq!(format_clock(-90), "-01:30");
}

#[test]
fn test_format_clock_does_not_truncate_hours() {
    assert_eq!(format_clock(6000), "100:00");
}

#[test]
fn test_round_trip() {
    for s in ["00:00", "08:15", "13:24", "23:59"] {
        assert_eq!(format_clock(parse_clock(s).unwrap()), s);
    }
}
