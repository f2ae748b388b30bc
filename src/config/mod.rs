//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `COMBO_QUIZ` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use combo_quiz::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Combos live under {}", config.redirect.base_path);
//! ```

mod catalog;
mod error;
mod logging;
mod redirect;

pub use catalog::CatalogConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use redirect::RedirectConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields the built-in
/// music quiz redirecting to `/combos/` after two seconds.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Redirect configuration (base path, auto-redirect delay)
    #[serde(default)]
    pub redirect: RedirectConfig,

    /// Catalog configuration (optional YAML file)
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Logging configuration (filter, format)
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `COMBO_QUIZ` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `COMBO_QUIZ__REDIRECT__BASE_PATH=./combos/` -> `redirect.base_path`
    /// - `COMBO_QUIZ__REDIRECT__AUTO_REDIRECT_DELAY_MS=1500` -> `redirect.auto_redirect_delay_ms`
    /// - `COMBO_QUIZ__CATALOG__PATH=quiz.yaml` -> `catalog.path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("COMBO_QUIZ")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.redirect.validate()?;
        self.catalog.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("COMBO_QUIZ__REDIRECT__BASE_PATH");
        env::remove_var("COMBO_QUIZ__REDIRECT__AUTO_REDIRECT_DELAY_MS");
        env::remove_var("COMBO_QUIZ__LOGGING__JSON");
    }

    #[test]
    fn test_load_defaults_from_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.redirect.base_path, "/combos/");
        assert_eq!(config.redirect.auto_redirect_delay_ms, 2000);
        assert!(config.catalog.path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_overrides_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("COMBO_QUIZ__REDIRECT__BASE_PATH", "./combos/");
        env::set_var("COMBO_QUIZ__REDIRECT__AUTO_REDIRECT_DELAY_MS", "500");
        env::set_var("COMBO_QUIZ__LOGGING__JSON", "true");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.redirect.base_path, "./combos/");
        assert_eq!(config.redirect.auto_redirect_delay_ms, 500);
        assert!(config.logging.json);
    }

    #[test]
    fn test_validate_reports_first_invalid_section() {
        let config = AppConfig {
            redirect: RedirectConfig {
                base_path: String::new(),
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::EmptyBasePath));
    }
}
