//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Redirect base path cannot be empty")]
    EmptyBasePath,

    #[error("Redirect base path must end with '/'")]
    BasePathMissingTrailingSlash,

    #[error("Auto-redirect delay exceeds maximum allowed (60000 ms)")]
    RedirectDelayTooLong,

    #[error("Catalog file not found: {0}")]
    CatalogFileNotFound(String),

    #[error("Invalid log filter directive: {0}")]
    InvalidLogFilter(String),
}
