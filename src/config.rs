//! Configuration management for the birthday greeter.
//!
//! This module handles loading and validating configuration from environment
//! variables. SMTP credentials are deliberately *not* configuration: they are
//! run-time inputs passed on the command line.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Configuration for one greeter run.
#[derive(Debug, Clone)]
pub struct Config {
    /// SMTP server hostname (default: "smtp.qq.com")
    pub smtp_host: String,

    /// SMTP server port (default: 465)
    pub smtp_port: u16,

    /// Whether to wrap the connection in implicit TLS (default: true)
    pub smtp_secure: bool,

    /// Sender address; when unset, mail is sent from the authenticated
    /// username
    pub from_address: Option<String>,

    /// When true, greetings are logged instead of sent
    pub dry_run: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// All variables are optional:
    /// - `SMTP_HOST`: SMTP server hostname (default: "smtp.qq.com")
    /// - `SMTP_PORT`: SMTP server port (default: 465)
    /// - `SMTP_SECURE`: "true"/"false", implicit TLS (default: true)
    /// - `FROM_ADDRESS`: sender address (default: the authenticated username)
    /// - `DRY_RUN`: "true"/"false", log instead of send (default: false)
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let smtp_host = env::var("SMTP_HOST").unwrap_or_else(|_| "smtp.qq.com".to_string());
        let smtp_port = Self::parse_env_u16("SMTP_PORT", 465)?;
        let smtp_secure = Self::parse_env_bool("SMTP_SECURE", true)?;
        let from_address = env::var("FROM_ADDRESS").ok().filter(|v| !v.trim().is_empty());
        let dry_run = Self::parse_env_bool("DRY_RUN", false)?;

        if smtp_host.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "SMTP_HOST".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        Ok(Config {
            smtp_host,
            smtp_port,
            smtp_secure,
            from_address,
            dry_run,
        })
    }

    /// Parse an environment variable as u16 with a default value.
    fn parse_env_u16(var_name: &str, default: u16) -> ConfigResult<u16> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a port number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as bool with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.to_lowercase().as_str() {
                "true" | "1" | "yes" => Ok(true),
                "false" | "0" | "no" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            smtp_host: "smtp.qq.com".to_string(),
            smtp_port: 465,
            smtp_secure: true,
            from_address: None,
            dry_run: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    // Helper to set and unset env vars for testing
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    fn clear_greeter_vars() {
        for var in ["SMTP_HOST", "SMTP_PORT", "SMTP_SECURE", "FROM_ADDRESS", "DRY_RUN"] {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.smtp_host, "smtp.qq.com");
        assert_eq!(config.smtp_port, 465);
        assert!(config.smtp_secure);
        assert!(config.from_address.is_none());
        assert!(!config.dry_run);
    }

    #[test]
    #[serial]
    fn test_config_from_env_defaults() {
        clear_greeter_vars();

        let config = Config::from_env().unwrap();
        assert_eq!(config.smtp_host, "smtp.qq.com");
        assert_eq!(config.smtp_port, 465);
        assert!(config.smtp_secure);
        assert!(!config.dry_run);
    }

    #[test]
    #[serial]
    fn test_config_from_env_overrides() {
        clear_greeter_vars();
        let mut guard = EnvGuard::new();
        guard.set("SMTP_HOST", "localhost");
        guard.set("SMTP_PORT", "1025");
        guard.set("SMTP_SECURE", "false");
        guard.set("FROM_ADDRESS", "greetings@example.com");
        guard.set("DRY_RUN", "true");

        let config = Config::from_env().unwrap();
        assert_eq!(config.smtp_host, "localhost");
        assert_eq!(config.smtp_port, 1025);
        assert!(!config.smtp_secure);
        assert_eq!(config.from_address.as_deref(), Some("greetings@example.com"));
        assert!(config.dry_run);
    }

    #[test]
    #[serial]
    fn test_config_invalid_port() {
        clear_greeter_vars();
        let mut guard = EnvGuard::new();
        guard.set("SMTP_PORT", "not-a-port");

        let result = Config::from_env();
        assert!(result.is_err());
        if let Err(ConfigError::InvalidValue { var, .. }) = result {
            assert_eq!(var, "SMTP_PORT");
        }
    }

    #[test]
    #[serial]
    fn test_config_invalid_bool() {
        clear_greeter_vars();
        let mut guard = EnvGuard::new();
        guard.set("DRY_RUN", "maybe");

        let result = Config::from_env();
        assert!(result.is_err());
        if let Err(ConfigError::InvalidValue { var, .. }) = result {
            assert_eq!(var, "DRY_RUN");
        }
    }

    #[test]
    #[serial]
    fn test_config_blank_from_address_is_none() {
        clear_greeter_vars();
        let mut guard = EnvGuard::new();
        guard.set("FROM_ADDRESS", "   ");

        let config = Config::from_env().unwrap();
        assert!(config.from_address.is_none());
    }
}
