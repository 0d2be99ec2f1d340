use crate::{HaltMode, RestartReason};

use std::str::FromStr;

use googletest::assert_that;
use googletest::prelude::{anything, err};

#[test]
fn test_restart_reason_is_emergency() {
    assert!(RestartReason::EmergencyThroughput.is_emergency());
    assert!(RestartReason::EmergencyMemory.is_emergency());
    assert!(RestartReason::EmergencySystem.is_emergency());
    assert!(!RestartReason::Scheduled.is_emergency());
    assert!(!RestartReason::Manual.is_emergency());
    assert!(!RestartReason::ExternalRequest.is_emergency());
}

#[test]
fn test_restart_reason_halt_mode() {
    assert_eq!(RestartReason::Manual.halt_mode(), HaltMode::Reload);
    assert_eq!(RestartReason::Scheduled.halt_mode(), HaltMode::Reload);
    assert_eq!(
        RestartReason::EmergencyMemory.halt_mode(),
        HaltMode::Shutdown
    );
}

#[test]
fn test_restart_reason_from_str_round_trips_every_tag() {
    for reason in RestartReason::ALL {
        assert_eq!(RestartReason::from_str(reason.as_str()).unwrap(), reason);
    }
}

#[test]
fn given_unknown_tag_when_parsed_then_error() {
    let result = RestartReason::from_str("reboot");

    assert_that!(result, err(anything()));
}

#[test]
fn test_restart_reason_serializes_snake_case() {
    let json = serde_json::to_string(&RestartReason::EmergencyThroughput).unwrap();

    assert_eq!(json, "\"emergency_throughput\"");
}

#[test]
fn test_restart_reason_display_uses_label() {
    assert_eq!(RestartReason::EmergencySystem.to_string(), "System Emergency");
}
