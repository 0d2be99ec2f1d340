use crate::RecurringRestart;

use std::str::FromStr;

use chrono::{FixedOffset, TimeZone, Utc};
use googletest::assert_that;
use googletest::prelude::{anything, err};

#[test]
fn given_valid_time_when_parsed_then_ok() {
    let restart = RecurringRestart::from_str("04:30").unwrap();

    assert_eq!(restart.hour, 4);
    assert_eq!(restart.minute, 30);
    assert_eq!(restart.to_string(), "04:30");
}

#[test]
fn given_single_digit_hour_when_parsed_then_ok() {
    let restart = RecurringRestart::from_str("4:05").unwrap();

    assert_eq!(restart, RecurringRestart::new(4, 5).unwrap());
}

#[test]
fn given_malformed_times_when_parsed_then_error() {
    for value in ["24:00", "12:60", "noon", "12", "12:00:00", "ab:cd", ""] {
        assert_that!(RecurringRestart::from_str(value), err(anything()));
    }
}

#[test]
fn given_out_of_range_hour_when_parsed_then_error_names_input_and_range() {
    let result = RecurringRestart::from_str(" 24:00");

    match result {
        Err(crate::CoreError::InvalidRestartTime { value, message, .. }) => {
            assert_eq!(value, " 24:00");
            assert_eq!(message, "hour must be 0-23");
        }
        other => panic!("expected InvalidRestartTime, got {other:?}"),
    }
}

#[test]
fn given_out_of_range_minute_when_parsed_then_same_rule_as_new() {
    let parsed = RecurringRestart::from_str("12:60").unwrap_err().to_string();
    let built = RecurringRestart::new(12, 60).unwrap_err().to_string();

    assert!(parsed.contains("minute must be 0-59"));
    assert!(built.contains("minute must be 0-59"));
}

#[test]
fn given_time_later_today_when_next_occurrence_then_today() {
    // Given
    let now = Utc.with_ymd_and_hms(2026, 3, 10, 10, 0, 0).unwrap();
    let restart = RecurringRestart::new(12, 0).unwrap();

    // When
    let next = restart.next_occurrence(&now).unwrap();

    // Then
    assert_eq!(next, Utc.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap());
}

#[test]
fn given_time_already_passed_when_next_occurrence_then_tomorrow() {
    let now = Utc.with_ymd_and_hms(2026, 3, 10, 20, 15, 0).unwrap();
    let restart = RecurringRestart::new(4, 0).unwrap();

    let next = restart.next_occurrence(&now).unwrap();

    assert_eq!(next, Utc.with_ymd_and_hms(2026, 3, 11, 4, 0, 0).unwrap());
}

#[test]
fn given_exactly_now_when_next_occurrence_then_tomorrow() {
    let now = Utc.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap();
    let restart = RecurringRestart::new(12, 0).unwrap();

    let next = restart.next_occurrence(&now).unwrap();

    assert_eq!(next, Utc.with_ymd_and_hms(2026, 3, 11, 12, 0, 0).unwrap());
}

#[test]
fn given_end_of_month_when_next_occurrence_then_rolls_over() {
    let offset = FixedOffset::east_opt(2 * 3600).unwrap();
    let now = offset.with_ymd_and_hms(2026, 12, 31, 23, 30, 0).unwrap();
    let restart = RecurringRestart::new(0, 15).unwrap();

    let next = restart.next_occurrence(&now).unwrap();

    assert_eq!(next, offset.with_ymd_and_hms(2027, 1, 1, 0, 15, 0).unwrap());
}
