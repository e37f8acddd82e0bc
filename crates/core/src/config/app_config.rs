use crate::config::{ConfigError, ConfigSource};
use std::collections::HashMap;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use url::Url;

pub const ENV_ENVIRONMENT: &str = "TERMINAL_ENV";
pub const ENV_LOG_LEVEL: &str = "TERMINAL_LOG_LEVEL";
pub const ENV_BACKEND_API_URL: &str = "BACKEND_API_URL";
pub const ENV_BACKEND_SOCKET_URL: &str = "BACKEND_SOCKET_URL";
pub const ENV_SESSION_TIMEOUT: &str = "SESSION_TIMEOUT";
pub const ENV_MAX_AMOUNT: &str = "TERMINAL_MAX_AMOUNT";
pub const ENV_PROTOCOL_FILE: &str = "TERMINAL_PROTOCOL_FILE";

const DEFAULT_API_URL: &str = "https://black-rock-be.onrender.com/api/v1";
const DEFAULT_SOCKET_URL: &str = "https://black-rock-be.onrender.com";
const DEFAULT_SESSION_TIMEOUT: u64 = 3600;
const DEFAULT_MAX_AMOUNT: f64 = 50_000.0;
const VALID_LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Environment enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Testing,
    Production,
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "testing" | "test" => Ok(Environment::Testing),
            "production" | "prod" => Ok(Environment::Production),
            _ => Err(ConfigError::invalid_value(
                "environment",
                s,
                "development, testing, or production",
            )),
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let env_str = match self {
            Environment::Development => "development",
            Environment::Testing => "testing",
            Environment::Production => "production",
        };
        write!(f, "{}", env_str)
    }
}

impl Environment {
    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }

    pub fn is_testing(&self) -> bool {
        matches!(self, Environment::Testing)
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// Terminal front-end configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub environment: Environment,
    pub log_level: String,
    pub backend_api_url: String,
    pub backend_socket_url: String,
    /// Seconds a session stays valid after sign-in
    pub session_timeout: u64,
    /// Amount ceiling applied by the amount validator
    pub max_amount: f64,
    /// YAML file replacing the built-in protocol table
    pub protocol_file: Option<PathBuf>,
}

impl AppConfig {
    /// Create a new default configuration
    pub fn new() -> Self {
        Self {
            environment: Environment::Development,
            log_level: "info".to_string(),
            backend_api_url: DEFAULT_API_URL.to_string(),
            backend_socket_url: DEFAULT_SOCKET_URL.to_string(),
            session_timeout: DEFAULT_SESSION_TIMEOUT,
            max_amount: DEFAULT_MAX_AMOUNT,
            protocol_file: None,
        }
    }

    /// Create configuration for testing
    pub fn testing() -> Self {
        Self {
            environment: Environment::Testing,
            log_level: "warn".to_string(),
            ..Self::new()
        }
    }

    /// Create configuration for production
    pub fn production() -> Self {
        Self {
            environment: Environment::Production,
            ..Self::new()
        }
    }

    /// Load configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new();

        if let Some(env_str) = lookup(ENV_ENVIRONMENT) {
            config.environment = env_str.parse()?;
        }

        if let Some(log_level) = lookup(ENV_LOG_LEVEL) {
            config.log_level = log_level.to_lowercase();
        }

        if let Some(url) = lookup(ENV_BACKEND_API_URL) {
            config.backend_api_url = url;
        }

        if let Some(url) = lookup(ENV_BACKEND_SOCKET_URL) {
            config.backend_socket_url = url;
        }

        if let Some(timeout) = lookup(ENV_SESSION_TIMEOUT) {
            config.session_timeout = timeout.trim().parse().map_err(|_| {
                ConfigError::invalid_value("session_timeout", &timeout, "whole number of seconds")
            })?;
        }

        if let Some(max) = lookup(ENV_MAX_AMOUNT) {
            config.max_amount = max
                .trim()
                .parse()
                .map_err(|_| ConfigError::invalid_value("max_amount", &max, "decimal amount"))?;
        }

        config.protocol_file = lookup(ENV_PROTOCOL_FILE)
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !VALID_LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(ConfigError::invalid_value(
                "log_level",
                &self.log_level,
                format!("one of: {}", VALID_LOG_LEVELS.join(", ")),
            ));
        }

        if !self.max_amount.is_finite() || self.max_amount <= 0.0 {
            return Err(ConfigError::invalid_value(
                "max_amount",
                self.max_amount.to_string(),
                "finite amount greater than zero",
            ));
        }

        if self.session_timeout == 0 {
            return Err(ConfigError::invalid_value(
                "session_timeout",
                "0",
                "at least one second",
            ));
        }

        for (field, value) in [
            ("backend_api_url", &self.backend_api_url),
            ("backend_socket_url", &self.backend_socket_url),
        ] {
            let url = Url::parse(value)
                .map_err(|_| ConfigError::invalid_value(field, value, "absolute URL"))?;

            if self.environment.is_production() && url.scheme() != "https" {
                return Err(ConfigError::invalid_value(
                    field,
                    value,
                    "https URL in production environment",
                ));
            }
        }

        Ok(())
    }

    /// Read the protocol file named by the configuration, if any
    pub fn read_protocol_file(&self) -> Result<Option<String>, ConfigError> {
        match &self.protocol_file {
            Some(path) => Ok(Some(std::fs::read_to_string(path)?)),
            None => Ok(None),
        }
    }

    /// Report where each value came from
    pub fn config_sources(&self) -> HashMap<String, ConfigSource> {
        Self::sources_from(|key| env::var(key).ok())
    }

    fn sources_from<F>(lookup: F) -> HashMap<String, ConfigSource>
    where
        F: Fn(&str) -> Option<String>,
    {
        [
            ("environment", ENV_ENVIRONMENT, "development"),
            ("log_level", ENV_LOG_LEVEL, "info"),
            ("backend_api_url", ENV_BACKEND_API_URL, DEFAULT_API_URL),
            ("backend_socket_url", ENV_BACKEND_SOCKET_URL, DEFAULT_SOCKET_URL),
            ("session_timeout", ENV_SESSION_TIMEOUT, "3600"),
            ("max_amount", ENV_MAX_AMOUNT, "50000"),
            ("protocol_file", ENV_PROTOCOL_FILE, "built-in protocol table"),
        ]
        .into_iter()
        .map(|(field, var, default)| {
            let source = if lookup(var).is_some() {
                ConfigSource::EnvVar(var.to_string())
            } else {
                ConfigSource::Default(default.to_string())
            };
            (field.to_string(), source)
        })
        .collect()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_vars(vars(&[])).unwrap();
        assert_eq!(config, AppConfig::new());
        assert_eq!(config.max_amount, 50_000.0);
        assert_eq!(config.session_timeout, 3600);
        assert!(config.protocol_file.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_vars(vars(&[
            (ENV_ENVIRONMENT, "prod"),
            (ENV_LOG_LEVEL, "DEBUG"),
            (ENV_SESSION_TIMEOUT, "900"),
            (ENV_MAX_AMOUNT, "2500.50"),
            (ENV_PROTOCOL_FILE, "/etc/terminal/protocols.yaml"),
        ]))
        .unwrap();

        assert!(config.environment.is_production());
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.session_timeout, 900);
        assert_eq!(config.max_amount, 2500.5);
        assert_eq!(
            config.protocol_file,
            Some(PathBuf::from("/etc/terminal/protocols.yaml"))
        );
    }

    #[test]
    fn test_invalid_values() {
        assert!(AppConfig::from_vars(vars(&[(ENV_ENVIRONMENT, "staging")])).is_err());
        assert!(AppConfig::from_vars(vars(&[(ENV_LOG_LEVEL, "verbose")])).is_err());
        assert!(AppConfig::from_vars(vars(&[(ENV_SESSION_TIMEOUT, "soon")])).is_err());
        assert!(AppConfig::from_vars(vars(&[(ENV_SESSION_TIMEOUT, "0")])).is_err());
        assert!(AppConfig::from_vars(vars(&[(ENV_MAX_AMOUNT, "-1")])).is_err());
        assert!(AppConfig::from_vars(vars(&[(ENV_MAX_AMOUNT, "NaN")])).is_err());
        assert!(AppConfig::from_vars(vars(&[(ENV_BACKEND_API_URL, "not a url")])).is_err());
    }

    #[test]
    fn test_production_requires_https() {
        let result = AppConfig::from_vars(vars(&[
            (ENV_ENVIRONMENT, "production"),
            (ENV_BACKEND_SOCKET_URL, "http://localhost:5000"),
        ]));

        match result {
            Err(ConfigError::InvalidValue { field, .. }) => assert_eq!(field, "backend_socket_url"),
            other => panic!("expected invalid socket url, got {:?}", other),
        }

        // Plain http is fine outside production
        let config = AppConfig::from_vars(vars(&[(ENV_BACKEND_SOCKET_URL, "http://localhost:5000")]));
        assert!(config.is_ok());
    }

    #[test]
    fn test_sources() {
        let sources = AppConfig::sources_from(vars(&[(ENV_MAX_AMOUNT, "100")]));
        assert!(sources["max_amount"].is_env_var());
        assert!(sources["log_level"].is_default());
        assert_eq!(sources.len(), 7);
    }

    #[test]
    fn test_read_protocol_file_missing() {
        let config = AppConfig {
            protocol_file: Some(PathBuf::from("/nonexistent/protocols.yaml")),
            ..AppConfig::testing()
        };
        assert!(matches!(config.read_protocol_file(), Err(ConfigError::Io(_))));
        assert!(AppConfig::testing().read_protocol_file().unwrap().is_none());
    }
}
