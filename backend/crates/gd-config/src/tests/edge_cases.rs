use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir, valid_config};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, err, none};
use serial_test::serial;

// =========================================================================
// Edge Cases
// =========================================================================

#[test]
#[serial]
fn given_malformed_toml_when_load_then_error_mentions_file() {
    // Given
    let env = setup_config_dir();
    std::fs::write(
        env.dir.path().join("config.toml"),
        "this is not valid toml {{{{",
    )
    .unwrap();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("config.toml"));
}

#[test]
#[serial]
fn given_non_numeric_owner_id_when_load_then_owner_missing_and_validate_fails() {
    // Given
    let _env = setup_config_dir();
    let _bot = EnvGuard::set("TELEGRAM_BOT_TOKEN", "123:abc");
    let _owner = EnvGuard::set("OWNER_ID", "not-a-number");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.owner.id, none());
    let err_msg = config.validate().unwrap_err().to_string();
    assert_that!(err_msg, contains_substring("OWNER_ID"));
}

#[test]
#[serial]
fn given_unparseable_numeric_override_when_load_then_default_kept() {
    // Given
    let _env = setup_config_dir();
    let _cooldown = EnvGuard::set("GD_COOLDOWN_MS", "soon");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_eq!(config.rate_limit.cooldown_ms, crate::DEFAULT_COOLDOWN_MS);
}

#[test]
fn given_log_file_with_path_separator_when_validate_then_error() {
    let mut config = valid_config();
    config.logging.file = Some("../escape.log".to_string());

    assert_that!(config.validate(), err(anything()));
}

#[test]
fn given_absolute_log_dir_when_validate_then_error() {
    let mut config = valid_config();
    config.logging.dir = "/var/log".to_string();

    let err_msg = config.validate().unwrap_err().to_string();
    assert_that!(err_msg, contains_substring("logging.dir"));
}
