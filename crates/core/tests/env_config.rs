use serial_test::serial;
use std::env;
use terminal_core::{AppConfig, ConfigError, Environment, LoggingConfig, TerminalSession};

const VARS: [&str; 7] = [
    "TERMINAL_ENV",
    "TERMINAL_LOG_LEVEL",
    "BACKEND_API_URL",
    "BACKEND_SOCKET_URL",
    "SESSION_TIMEOUT",
    "TERMINAL_MAX_AMOUNT",
    "TERMINAL_PROTOCOL_FILE",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_from_env_defaults() {
    clear_env();

    let config = AppConfig::from_env().unwrap();
    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.backend_api_url, "https://black-rock-be.onrender.com/api/v1");
    assert!(config.config_sources().values().all(|source| source.is_default()));
}

#[test]
#[serial]
fn test_from_env_overrides() {
    clear_env();
    env::set_var("TERMINAL_ENV", "test");
    env::set_var("TERMINAL_MAX_AMOUNT", "1000");
    env::set_var("SESSION_TIMEOUT", "60");

    let config = AppConfig::from_env().unwrap();
    assert!(config.environment.is_testing());
    assert_eq!(config.max_amount, 1000.0);
    assert!(config.config_sources()["max_amount"].is_env_var());

    let session = TerminalSession::start(&config, "token").unwrap();
    let deadline = session.started_at() + chrono::Duration::seconds(60);
    assert_eq!(session.expires_at(), deadline);

    assert_eq!(LoggingConfig::for_app(&config).level, "info");

    clear_env();
}

#[test]
#[serial]
fn test_from_env_rejects_insecure_production_url() {
    clear_env();
    env::set_var("TERMINAL_ENV", "production");
    env::set_var("BACKEND_API_URL", "http://black-rock-be.onrender.com/api/v1");

    let err = AppConfig::from_env().unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "backend_api_url"));

    clear_env();
}
