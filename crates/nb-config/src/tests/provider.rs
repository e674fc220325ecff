use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, err, ok};
use serial_test::serial;

// =========================================================================
// Validation Tests - Provider
// =========================================================================

#[test]
#[serial]
fn given_base_url_without_scheme_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _url = EnvGuard::set("NB_PROVIDER_BASE_URL", "identitytoolkit.googleapis.com");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_empty_api_key_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _key = EnvGuard::set("NB_PROVIDER_API_KEY", "");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_https_base_url_when_validate_then_ok() {
    // Given
    let _temp = setup_config_dir();
    let _url = EnvGuard::set(
        "NB_PROVIDER_BASE_URL",
        "https://identitytoolkit.googleapis.com",
    );

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}
