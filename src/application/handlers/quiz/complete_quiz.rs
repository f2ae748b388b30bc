//! CompleteQuizHandler - Turns a completed wizard into a one-shot redirect.
//!
//! The confirmation screen offers an explicit "show my combo" action and also
//! redirects on its own after a short delay. Both paths end up in
//! [`PendingRedirect::navigate`], which runs one attempt at a time and stops
//! once an attempt has succeeded.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use crate::config::RedirectConfig;
use crate::domain::foundation::{DomainError, WizardStatus};
use crate::domain::redirect::{Destination, DestinationResolver};
use crate::domain::wizard::{CompletionSummary, Wizard, WizardEvent};
use crate::ports::Navigator;

/// What caused a navigation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectTrigger {
    /// The user pressed the confirm button.
    Confirm,
    /// The auto-redirect delay elapsed.
    Timer,
}

/// Result of a navigation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// This attempt performed the redirect.
    Navigated {
        destination: Destination,
        trigger: RedirectTrigger,
    },
    /// Another attempt already performed the redirect; nothing was done.
    AlreadyNavigated { destination: Destination },
}

impl NavigationOutcome {
    pub fn destination(&self) -> &Destination {
        match self {
            NavigationOutcome::Navigated { destination, .. }
            | NavigationOutcome::AlreadyNavigated { destination } => destination,
        }
    }

    pub fn performed(&self) -> bool {
        matches!(self, NavigationOutcome::Navigated { .. })
    }
}

/// Error type for completing a quiz.
#[derive(Debug, Clone)]
pub enum CompleteQuizError {
    /// The wizard has not passed its last step yet.
    NotCompleted,
    /// Domain error (e.g., missing instrument answer, navigation failure).
    Domain(DomainError),
}

impl std::fmt::Display for CompleteQuizError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompleteQuizError::NotCompleted => write!(f, "Quiz is not completed yet"),
            CompleteQuizError::Domain(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for CompleteQuizError {}

impl From<DomainError> for CompleteQuizError {
    fn from(err: DomainError) -> Self {
        CompleteQuizError::Domain(err)
    }
}

/// Handler for completing quiz runs.
pub struct CompleteQuizHandler {
    navigator: Arc<dyn Navigator>,
    resolver: DestinationResolver,
    auto_redirect_delay: Duration,
}

impl CompleteQuizHandler {
    pub fn new(
        navigator: Arc<dyn Navigator>,
        resolver: DestinationResolver,
        auto_redirect_delay: Duration,
    ) -> Self {
        Self {
            navigator,
            resolver,
            auto_redirect_delay,
        }
    }

    pub fn from_config(navigator: Arc<dyn Navigator>, config: &RedirectConfig) -> Self {
        Self::new(navigator, config.resolver(), config.auto_redirect_delay())
    }

    /// Takes a completed wizard and prepares its redirect.
    ///
    /// The wizard moves into the returned [`PendingRedirect`]; its answers
    /// are dropped together with it once the redirect is done.
    pub fn handle(&self, wizard: Wizard) -> Result<PendingRedirect, CompleteQuizError> {
        if !wizard.state().is_completed() {
            return Err(CompleteQuizError::NotCompleted);
        }

        let destination = wizard.destination(&self.resolver)?;
        let summary = wizard.summary();

        tracing::info!(
            session_id = %wizard.session_id(),
            destination = %destination,
            "Quiz ready to redirect"
        );

        Ok(PendingRedirect {
            inner: Arc::new(PendingInner {
                destination,
                summary,
                navigator: Arc::clone(&self.navigator),
                auto_redirect_delay: self.auto_redirect_delay,
                navigated: AtomicBool::new(false),
                wizard: Mutex::new(wizard),
            }),
        })
    }
}

struct PendingInner {
    destination: Destination,
    summary: CompletionSummary,
    navigator: Arc<dyn Navigator>,
    auto_redirect_delay: Duration,
    /// Mirrors `wizard.status() == Navigated` for lock-free reads.
    navigated: AtomicBool,
    /// Held for the whole navigation attempt, so triggers run one at a time.
    wizard: Mutex<Wizard>,
}

/// A completed quiz waiting for its redirect.
///
/// Cheap to clone; clones share the same wizard and navigate at most once
/// between them.
#[derive(Clone)]
pub struct PendingRedirect {
    inner: Arc<PendingInner>,
}

impl std::fmt::Debug for PendingRedirect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingRedirect")
            .field("destination", &self.inner.destination)
            .field("navigated", &self.is_navigated())
            .finish()
    }
}

impl PendingRedirect {
    /// Where this run will be sent.
    pub fn destination(&self) -> &Destination {
        &self.inner.destination
    }

    /// Labels for the confirmation screen.
    pub fn summary(&self) -> &CompletionSummary {
        &self.inner.summary
    }

    pub fn auto_redirect_delay(&self) -> Duration {
        self.inner.auto_redirect_delay
    }

    /// Returns true once the redirect has been issued successfully.
    pub fn is_navigated(&self) -> bool {
        self.inner.navigated.load(Ordering::Acquire)
    }

    /// User-triggered redirect.
    pub async fn confirm(&self) -> Result<NavigationOutcome, CompleteQuizError> {
        self.navigate(RedirectTrigger::Confirm).await
    }

    /// Spawns the timer that redirects after the configured delay.
    ///
    /// If the user confirms first, the timer still fires but does nothing.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn schedule_auto_redirect(&self) -> JoinHandle<Result<NavigationOutcome, CompleteQuizError>> {
        let pending = self.clone();
        tokio::spawn(async move {
            tokio::time::sleep(pending.inner.auto_redirect_delay).await;
            pending.navigate(RedirectTrigger::Timer).await
        })
    }

    /// Performs the redirect unless another trigger already did.
    ///
    /// Attempts are serialized: a trigger arriving while another one is
    /// navigating waits for it. If that attempt failed, the waiting trigger
    /// tries again itself, so a failed confirm never swallows the timer.
    pub async fn navigate(
        &self,
        trigger: RedirectTrigger,
    ) -> Result<NavigationOutcome, CompleteQuizError> {
        let destination = self.inner.destination.clone();
        let mut wizard = self.inner.wizard.lock().await;

        if wizard.status() == WizardStatus::Navigated {
            tracing::debug!(?trigger, "Redirect already issued, ignoring trigger");
            return Ok(NavigationOutcome::AlreadyNavigated { destination });
        }

        if let Err(err) = self.inner.navigator.navigate(&destination).await {
            tracing::warn!(?trigger, destination = %destination, "Redirect failed: {}", err);
            return Err(err.into());
        }

        wizard.mark_navigated(&destination)?;
        self.inner.navigated.store(true, Ordering::Release);

        tracing::info!(
            session_id = %wizard.session_id(),
            ?trigger,
            destination = %destination,
            "Redirect issued"
        );

        Ok(NavigationOutcome::Navigated {
            destination,
            trigger,
        })
    }

    /// Drains the events recorded by the underlying wizard.
    pub async fn take_events(&self) -> Vec<WizardEvent> {
        self.inner.wizard.lock().await.take_events()
    }
}
