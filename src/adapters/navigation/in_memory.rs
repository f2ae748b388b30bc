//! In-memory navigator implementation for testing.
//!
//! # Security Note
//!
//! This adapter is for **testing only**. It uses `.expect()` on lock
//! operations which will panic if locks are poisoned.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::redirect::Destination;
use crate::ports::Navigator;

/// Records every destination it is asked to visit.
///
/// # Example
///
/// ```ignore
/// let navigator = Arc::new(InMemoryNavigator::new());
/// coordinator_with(navigator.clone()).confirm().await?;
/// assert_eq!(navigator.visit_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct InMemoryNavigator {
    visits: RwLock<Vec<Destination>>,
    fail_next: AtomicBool,
}

impl InMemoryNavigator {
    /// Creates a navigator with no recorded visits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the next `navigate` call fail with `NavigationFailed`.
    pub fn fail_next(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }

    // === Test Helpers ===

    /// Returns all visited destinations in order.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn visits(&self) -> Vec<Destination> {
        self.visits
            .read()
            .expect("InMemoryNavigator: visits lock poisoned")
            .clone()
    }

    /// Returns the number of successful navigations.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn visit_count(&self) -> usize {
        self.visits
            .read()
            .expect("InMemoryNavigator: visits lock poisoned")
            .len()
    }

    /// Returns the most recent destination, if any.
    pub fn last_visit(&self) -> Option<Destination> {
        self.visits().pop()
    }
}

#[async_trait]
impl Navigator for InMemoryNavigator {
    async fn navigate(&self, destination: &Destination) -> Result<(), DomainError> {
        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err(DomainError::new(
                ErrorCode::NavigationFailed,
                format!("Simulated failure navigating to {}", destination),
            ));
        }

        self.visits
            .write()
            .map_err(|_| DomainError::new(ErrorCode::InternalError, "Navigator lock poisoned"))?
            .push(destination.clone());
        Ok(())
    }
}
