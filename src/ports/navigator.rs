//! Navigator port - Interface for issuing the final redirect.
//!
//! The quiz core only decides *where* to go; a browser bridge, a terminal
//! front-end, or a test double decides *how*.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::redirect::Destination;

/// Port for sending the player to a destination page.
///
/// Implementations may be invoked from a timer task, so they must be
/// `Send + Sync`. The redirect coordinator guarantees at most one successful
/// call per quiz run; implementations need not deduplicate.
#[async_trait]
pub trait Navigator: Send + Sync {
    /// Navigate to `destination`.
    ///
    /// Errors should use `ErrorCode::NavigationFailed`.
    async fn navigate(&self, destination: &Destination) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Compile-time check that trait is object-safe
    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn Navigator) {}
}
