use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, err, ok};
use serial_test::serial;

// =========================================================================
// Validation Tests - Monitoring
// =========================================================================

#[test]
#[serial]
fn given_check_interval_zero_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _interval = EnvGuard::set("RC_MONITORING_CHECK_INTERVAL_SECS", "0");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_check_interval_over_max_when_validate_then_error() {
    let _temp = setup_config_dir();
    let _interval = EnvGuard::set("RC_MONITORING_CHECK_INTERVAL_SECS", "3601");

    let config = Config::load().unwrap();

    assert_that!(config.validate(), err(anything()));
}

#[test]
#[serial]
fn given_throughput_threshold_over_max_when_validate_then_error() {
    let _temp = setup_config_dir();
    let _threshold = EnvGuard::set("RC_MONITORING_THROUGHPUT_THRESHOLD", "25.0");

    let config = Config::load().unwrap();

    assert_that!(config.validate(), err(anything()));
}

#[test]
#[serial]
fn given_memory_threshold_over_100_when_validate_then_error() {
    let _temp = setup_config_dir();
    let _threshold = EnvGuard::set("RC_MONITORING_MEMORY_THRESHOLD", "101");

    let config = Config::load().unwrap();

    assert_that!(config.validate(), err(anything()));
}

#[test]
#[serial]
fn given_valid_monitoring_config_when_validate_then_ok() {
    // Given
    let _temp = setup_config_dir();
    let _interval = EnvGuard::set("RC_MONITORING_CHECK_INTERVAL_SECS", "5");
    let _threshold = EnvGuard::set("RC_MONITORING_THROUGHPUT_THRESHOLD", "18.5");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}
