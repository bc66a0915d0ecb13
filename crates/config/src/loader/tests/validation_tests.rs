//! Validation tests for ConfigLoader::build().
//!
//! Responsibilities:
//! - Test that a missing API key is a configuration error.
//! - Test base URL, timeout, and limit bounds.

use serial_test::serial;
use std::time::Duration;

use super::{env_lock, with_clean_env};
use crate::loader::builder::ConfigLoader;
use crate::loader::error::ConfigError;

#[test]
#[serial]
fn test_missing_api_key_is_error() {
    let _lock = env_lock().lock().unwrap();

    with_clean_env(&[("OWNER_CREDENTIALS", "owner@example.com")], || {
        let result = ConfigLoader::new().from_env().unwrap().build();
        assert!(matches!(result, Err(ConfigError::MissingApiKey)));
    });
}

#[test]
#[serial]
fn test_blank_api_key_from_builder_is_error() {
    let _lock = env_lock().lock().unwrap();

    with_clean_env(&[], || {
        let result = ConfigLoader::new().with_api_key("  ".to_string()).build();
        assert!(matches!(result, Err(ConfigError::MissingApiKey)));
    });
}

#[test]
fn test_invalid_base_url_is_error() {
    let result = ConfigLoader::new()
        .with_api_key("rnd_key".to_string())
        .with_base_url("not a url".to_string())
        .build();

    assert!(matches!(result, Err(ConfigError::InvalidBaseUrl { .. })));
}

#[test]
fn test_non_http_scheme_is_error() {
    let result = ConfigLoader::new()
        .with_api_key("rnd_key".to_string())
        .with_base_url("ftp://api.render.com/v1".to_string())
        .build();

    match result {
        Err(ConfigError::InvalidBaseUrl { message, .. }) => {
            assert!(message.contains("ftp"));
        }
        other => panic!("expected InvalidBaseUrl, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_zero_timeout_is_error() {
    let result = ConfigLoader::new()
        .with_api_key("rnd_key".to_string())
        .with_timeout(Duration::from_secs(0))
        .build();

    assert!(matches!(result, Err(ConfigError::InvalidTimeout { .. })));
}

#[test]
fn test_timeout_above_maximum_is_error() {
    let result = ConfigLoader::new()
        .with_api_key("rnd_key".to_string())
        .with_timeout(Duration::from_secs(3601))
        .build();

    assert!(matches!(result, Err(ConfigError::InvalidTimeout { .. })));
}

#[test]
fn test_limit_bounds() {
    for limit in [0, 101] {
        let result = ConfigLoader::new()
            .with_api_key("rnd_key".to_string())
            .with_default_limit(limit)
            .build();
        assert!(
            matches!(result, Err(ConfigError::InvalidLimit { .. })),
            "limit {} should be rejected",
            limit
        );
    }

    let config = ConfigLoader::new()
        .with_api_key("rnd_key".to_string())
        .with_default_limit(1)
        .build()
        .unwrap();
    assert_eq!(config.default_limit, 1);
}

#[test]
fn test_missing_api_key_message_does_not_mention_value() {
    let err = ConfigError::MissingApiKey;
    assert!(err.to_string().contains("API_KEY"));
}
