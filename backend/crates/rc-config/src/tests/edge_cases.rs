use crate::Config;
use crate::tests::{setup_config_dir, write_config};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, err};
use serial_test::serial;

// =========================================================================
// Edge Cases
// =========================================================================

#[test]
#[serial]
fn given_malformed_toml_when_load_then_error_mentions_file() {
    // Given
    let (temp, _guard) = setup_config_dir();
    write_config(&temp, "this is not valid toml {{{{");

    // When
    let result = Config::load();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("config.toml"));
}

#[test]
#[serial]
fn given_wrong_type_in_toml_when_load_then_error() {
    let (temp, _guard) = setup_config_dir();
    write_config(&temp, "[warnings]\nintervals = \"often\"\n");

    let result = Config::load();

    assert_that!(result, err(anything()));
}
