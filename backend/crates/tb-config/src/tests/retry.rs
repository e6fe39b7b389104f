use crate::Config;
use crate::retry_config::ATTEMPTS_RANGE;
use crate::tests::{EnvGuard, setup_config_dir, write_config};

use std::time::Duration;

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, eq, err, ok};
use serial_test::serial;

// =========================================================================
// Tracker Call Policy - Loading
// =========================================================================

#[test]
#[serial]
fn given_retry_section_in_file_when_load_then_delays_exposed_as_durations() {
    // Given
    let (temp, _guard) = setup_config_dir();
    write_config(
        &temp,
        r#"
[retry]
max_attempts = 5
initial_delay_ms = 250
max_delay_secs = 2
backoff_multiplier = 1.5
"#,
    );

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.retry.max_attempts, eq(5));
    assert_that!(config.retry.initial_delay(), eq(Duration::from_millis(250)));
    assert_that!(config.retry.max_delay(), eq(Duration::from_secs(2)));
    assert_that!(config.retry.jitter, eq(true));
    assert_that!(config.validate(), ok(anything()));
}

#[test]
#[serial]
fn given_jitter_disabled_by_env_when_load_then_false() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _jitter = EnvGuard::set("TB_RETRY_JITTER", "false");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.retry.jitter, eq(false));
    assert_that!(config.validate(), ok(anything()));
}

// =========================================================================
// Tracker Call Policy - Validation
// =========================================================================

#[test]
#[serial]
fn given_zero_attempts_when_validate_then_error_names_tracker_call() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _attempts = EnvGuard::set("TB_RETRY_MAX_ATTEMPTS", "0");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    let message = result.unwrap_err().to_string();
    assert_that!(message, contains_substring("Retry error"));
    assert_that!(message, contains_substring("retry.max_attempts must be 1-10"));
    assert_that!(message, contains_substring("per tracker call, got 0"));
}

#[test]
#[serial]
fn given_attempts_at_each_bound_when_validate_then_accepted_and_next_rejected() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let accepted = [*ATTEMPTS_RANGE.start(), *ATTEMPTS_RANGE.end()];

    for attempts in accepted {
        // When
        let _attempts = EnvGuard::set("TB_RETRY_MAX_ATTEMPTS", &attempts.to_string());
        let result = Config::load().unwrap().validate();

        // Then
        assert_that!(result, ok(anything()));
    }

    let _attempts = EnvGuard::set(
        "TB_RETRY_MAX_ATTEMPTS",
        &(ATTEMPTS_RANGE.end() + 1).to_string(),
    );
    assert_that!(Config::load().unwrap().validate(), err(anything()));
}

#[test]
#[serial]
fn given_initial_delay_below_min_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _delay = EnvGuard::set("TB_RETRY_INITIAL_DELAY_MS", "5");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(
        result.unwrap_err().to_string(),
        contains_substring("retry.initial_delay_ms must be 10-10000 ms")
    );
}

#[test]
#[serial]
fn given_initial_delay_longer_than_cap_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _delay = EnvGuard::set("TB_RETRY_INITIAL_DELAY_MS", "3000");
    let _cap = EnvGuard::set("TB_RETRY_MAX_DELAY_SECS", "2");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(
        result.unwrap_err().to_string(),
        contains_substring("retry.initial_delay_ms (3000ms) exceeds retry.max_delay_secs (2s)")
    );
}

#[test]
#[serial]
fn given_initial_delay_equal_to_cap_when_validate_then_ok() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _delay = EnvGuard::set("TB_RETRY_INITIAL_DELAY_MS", "2000");
    let _cap = EnvGuard::set("TB_RETRY_MAX_DELAY_SECS", "2");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_backoff_multiplier_below_min_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _backoff = EnvGuard::set("TB_RETRY_BACKOFF_MULTIPLIER", "0.5");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(
        result.unwrap_err().to_string(),
        contains_substring("retry.backoff_multiplier must be 1-10 x growth")
    );
}
