use crate::ScheduleTimeZone;

use std::str::FromStr;

use chrono::FixedOffset;
use googletest::assert_that;
use googletest::prelude::{anything, err};

#[test]
fn test_schedule_time_zone_keywords() {
    assert_eq!(ScheduleTimeZone::from_str("local").unwrap(), ScheduleTimeZone::Local);
    assert_eq!(ScheduleTimeZone::from_str("UTC").unwrap(), ScheduleTimeZone::Utc);
}

#[test]
fn given_offset_when_parsed_then_fixed() {
    let zone = ScheduleTimeZone::from_str("-05:30").unwrap();

    assert_eq!(
        zone,
        ScheduleTimeZone::Fixed(FixedOffset::west_opt(5 * 3600 + 30 * 60).unwrap())
    );
}

#[test]
fn given_region_name_when_parsed_then_error() {
    assert_that!(ScheduleTimeZone::from_str("Europe/Berlin"), err(anything()));
    assert_that!(ScheduleTimeZone::from_str("+25:00"), err(anything()));
}
