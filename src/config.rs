//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export PORT=3000
//! export LOG_FORMAT=json
//! export SEED_DATA=false
//! ```
//!
//! ## Optional Variables
//!
//! - `PORT` - Listening port (default: `3000`)
//! - `HOST` - Bind host (default: `0.0.0.0`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `SEED_DATA` - Populate the store with sample posts and comments (default: `true`)

use anyhow::{Context, Result};
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub log_format: String,
    /// When false, the server starts with an empty store.
    pub seed_data: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            seed_data: true,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is set but is not a valid port number, or if
    /// `SEED_DATA` is set to something other than a boolean flag.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT must be a number between 1 and 65535, got '{raw}'"))?,
            Err(_) => defaults.port,
        };

        let host = env::var("HOST").unwrap_or(defaults.host);
        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);

        let seed_data = match env::var("SEED_DATA") {
            Ok(raw) => parse_flag(&raw)
                .with_context(|| format!("SEED_DATA must be true, false, 1 or 0, got '{raw}'"))?,
            Err(_) => defaults.seed_data,
        };

        Ok(Self {
            host,
            port,
            log_level,
            log_format,
            seed_data,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `port` is 0
    /// - `log_format` is not `text` or `json`
    /// - `host` is empty
    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            anyhow::bail!("PORT must be between 1 and 65535, got 0");
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.host.trim().is_empty() {
            anyhow::bail!("HOST must not be empty");
        }

        Ok(())
    }

    /// Socket address string the server binds to.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr());
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!(
            "  Seed data: {}",
            if self.seed_data { "enabled" } else { "disabled" }
        );
    }
}

/// Parses a boolean flag such as `true`, `FALSE`, `1` or `0`.
fn parse_flag(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => anyhow::bail!("not a boolean flag"),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable cannot be parsed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        // SAFETY: Tests touching the environment are run serially
        unsafe {
            env::remove_var("PORT");
            env::remove_var("HOST");
            env::remove_var("LOG_FORMAT");
            env::remove_var("SEED_DATA");
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.port = 0;
        assert!(config.validate().is_err());

        config.port = 8080;
        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.host = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_listen_addr() {
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 4000,
            ..Config::default()
        };

        assert_eq!(config.listen_addr(), "127.0.0.1:4000");
    }

    #[test]
    #[serial]
    fn test_defaults_when_env_is_empty() {
        clear_env();

        let config = Config::from_env().unwrap();

        assert_eq!(config.port, 3000);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.log_format, "text");
        assert!(config.seed_data);
    }

    #[test]
    #[serial]
    fn test_port_from_env() {
        clear_env();
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("PORT", "8081");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.port, 8081);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_port_is_rejected() {
        clear_env();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("PORT", "not-a-port");
        }

        assert!(Config::from_env().is_err());

        clear_env();
    }

    #[test]
    #[serial]
    fn test_seed_data_can_be_disabled() {
        clear_env();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("SEED_DATA", "false");
        }
        assert!(!Config::from_env().unwrap().seed_data);

        unsafe {
            env::set_var("SEED_DATA", "0");
        }
        assert!(!Config::from_env().unwrap().seed_data);

        unsafe {
            env::set_var("SEED_DATA", "true");
        }
        assert!(Config::from_env().unwrap().seed_data);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_unknown_seed_data_value_is_rejected() {
        clear_env();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("SEED_DATA", "garbage");
        }

        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("SEED_DATA"));

        clear_env();
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("TRUE").unwrap());
        assert!(parse_flag(" 1 ").unwrap());
        assert!(!parse_flag("False").unwrap());
        assert!(!parse_flag("0").unwrap());
        assert!(parse_flag("yes").is_err());
        assert!(parse_flag("").is_err());
    }
}
