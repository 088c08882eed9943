use chrono::NaiveDate;
use fleet_fuel::domain::{DateRange, PeriodError};

#[test]
fn empty_bounds_mean_no_restriction() {
    let range = DateRange::from_bounds(None, None).expect("valid");
    assert_eq!(range, None);
}

#[test]
fn lone_start_is_rejected() {
    let err = DateRange::from_bounds(Some("2026-02-01"), None).unwrap_err();
    assert_eq!(err, PeriodError::MissingCounterpart);
}

#[test]
fn lone_end_is_rejected() {
    let err = DateRange::from_bounds(None, Some("2026-02-01")).unwrap_err();
    assert_eq!(err, PeriodError::MissingCounterpart);
}

#[test]
fn malformed_start_reports_the_raw_value() {
    let err = DateRange::from_bounds(Some("02/01/2026"), Some("2026-02-10")).unwrap_err();
    assert_eq!(err, PeriodError::MalformedDate("02/01/2026".into()));
}

#[test]
fn impossible_calendar_date_is_malformed() {
    let err = DateRange::from_bounds(Some("2026-02-01"), Some("2026-02-30")).unwrap_err();
    assert_eq!(err, PeriodError::MalformedDate("2026-02-30".into()));
}

#[test]
fn inverted_range_is_rejected_not_clamped() {
    let err = DateRange::from_bounds(Some("2026-02-10"), Some("2026-02-01")).unwrap_err();
    assert_eq!(
        err,
        PeriodError::InvertedRange {
            start: NaiveDate::from_ymd_opt(2026, 2, 10).unwrap(),
            end: NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
        }
    );
}

#[test]
fn single_day_range_is_valid() {
    let range = DateRange::from_bounds(Some("2026-02-01"), Some("2026-02-01"))
        .expect("valid")
        .expect("restricted");
    assert!(range.contains(NaiveDate::from_ymd_opt(2026, 2, 1).unwrap()));
    assert!(!range.contains(NaiveDate::from_ymd_opt(2026, 2, 2).unwrap()));
}

#[test]
fn range_bounds_are_inclusive() {
    let range = DateRange::from_bounds(Some("2026-02-01"), Some("2026-02-10"))
        .expect("valid")
        .expect("restricted");
    assert!(range.contains(range.start));
    assert!(range.contains(range.end));
    assert!(!range.contains(NaiveDate::from_ymd_opt(2026, 1, 31).unwrap()));
    assert!(!range.contains(NaiveDate::from_ymd_opt(2026, 2, 11).unwrap()));
}

#[test]
fn surrounding_whitespace_is_tolerated() {
    let range = DateRange::from_bounds(Some(" 2026-02-01 "), Some("2026-02-10")).expect("valid");
    assert!(range.is_some());
}
