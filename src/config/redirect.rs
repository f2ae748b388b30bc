//! Redirect configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::domain::redirect::{DestinationResolver, DEFAULT_BASE_PATH};

const MAX_AUTO_REDIRECT_DELAY_MS: u64 = 60_000;

/// Where combo pages live and how long the confirmation screen stays up.
#[derive(Debug, Clone, Deserialize)]
pub struct RedirectConfig {
    /// Prefix of every combo page path (e.g. `/combos/`)
    #[serde(default = "default_base_path")]
    pub base_path: String,

    /// Delay before the automatic redirect, in milliseconds
    #[serde(default = "default_auto_redirect_delay_ms")]
    pub auto_redirect_delay_ms: u64,
}

impl RedirectConfig {
    /// Delay before the automatic redirect
    pub fn auto_redirect_delay(&self) -> Duration {
        Duration::from_millis(self.auto_redirect_delay_ms)
    }

    /// Build the destination resolver for this base path
    pub fn resolver(&self) -> DestinationResolver {
        DestinationResolver::new(self.base_path.clone())
    }

    /// Validate redirect configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.base_path.trim().is_empty() {
            return Err(ValidationError::EmptyBasePath);
        }
        if !self.base_path.ends_with('/') {
            return Err(ValidationError::BasePathMissingTrailingSlash);
        }
        if self.auto_redirect_delay_ms > MAX_AUTO_REDIRECT_DELAY_MS {
            return Err(ValidationError::RedirectDelayTooLong);
        }
        Ok(())
    }
}

impl Default for RedirectConfig {
    fn default() -> Self {
        Self {
            base_path: default_base_path(),
            auto_redirect_delay_ms: default_auto_redirect_delay_ms(),
        }
    }
}

fn default_base_path() -> String {
    DEFAULT_BASE_PATH.to_string()
}

fn default_auto_redirect_delay_ms() -> u64 {
    2000
}
