//! Navigator that only logs the redirect.
//!
//! Used by headless front-ends that read the destination from the log or
//! from the coordinator's return value instead of following it.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::redirect::Destination;
use crate::ports::Navigator;

/// Logs each destination at `info` level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNavigator;

impl TracingNavigator {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Navigator for TracingNavigator {
    async fn navigate(&self, destination: &Destination) -> Result<(), DomainError> {
        tracing::info!(destination = %destination, "Redirecting to combo page");
        Ok(())
    }
}
