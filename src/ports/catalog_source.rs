//! CatalogSource port - Where the step catalog comes from.

use crate::domain::catalog::StepCatalog;
use crate::domain::foundation::DomainError;

/// Port for loading the step catalog once at startup.
///
/// Loading happens before any quiz run begins, so the port is synchronous.
pub trait CatalogSource: Send + Sync {
    /// Loads and validates the catalog.
    ///
    /// Errors should use `ErrorCode::CatalogUnavailable` for I/O problems and
    /// `ErrorCode::ValidationFailed` for malformed content.
    fn load(&self) -> Result<StepCatalog, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Compile-time check that trait is object-safe
    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn CatalogSource) {}
}
