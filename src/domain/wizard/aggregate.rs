//! Wizard aggregate - The controller of one quiz run.
//!
//! A Wizard walks the catalog one step at a time, keeps exactly one answer per
//! step, and once the last step is answered exposes the redirect destination.
//! Each run is an owned value; any number of runs can share one catalog.

use std::sync::Arc;

use crate::domain::catalog::{ChoiceOption, OptionKey, Step, StepCatalog, StepId};
use crate::domain::foundation::{
    DomainError, ErrorCode, QuizSessionId, StateMachine, Timestamp, WizardStatus,
};
use crate::domain::redirect::{Destination, DestinationResolver};

use super::{AnswerSet, CompletionSummary, WizardEvent, WizardProgress, WizardState};

/// Message surfaced when the user tries to continue without choosing.
pub const MISSING_SELECTION_NOTICE: &str = "Escolha uma opção para continuar";

/// The Wizard aggregate root.
#[derive(Debug, Clone)]
pub struct Wizard {
    session_id: QuizSessionId,
    catalog: Arc<StepCatalog>,
    /// Always a valid catalog index; stays on the last step once completed.
    current_index: usize,
    status: WizardStatus,
    answers: AnswerSet,
    started_at: Timestamp,
    completed_at: Option<Timestamp>,
    domain_events: Vec<WizardEvent>,
}

impl Wizard {
    /// Starts a new run at the first step with no answers.
    pub fn new(catalog: Arc<StepCatalog>) -> Self {
        let session_id = QuizSessionId::new();
        let now = Timestamp::now();

        let mut wizard = Self {
            session_id,
            catalog,
            current_index: 0,
            status: WizardStatus::InProgress,
            answers: AnswerSet::new(),
            started_at: now,
            completed_at: None,
            domain_events: Vec::new(),
        };

        wizard.record_event(WizardEvent::Started {
            session_id,
            started_at: now,
        });

        tracing::debug!(session_id = %session_id, "Quiz started");

        wizard
    }

    // ───────────────────────────────────────────────────────────────
    // Accessors
    // ───────────────────────────────────────────────────────────────

    pub fn session_id(&self) -> QuizSessionId {
        self.session_id
    }

    pub fn catalog(&self) -> &StepCatalog {
        &self.catalog
    }

    pub fn status(&self) -> WizardStatus {
        self.status
    }

    /// Returns `AtStep(i)` while answering, `Completed` afterwards.
    pub fn state(&self) -> WizardState {
        if self.status.is_finished() {
            WizardState::Completed
        } else {
            WizardState::AtStep(self.current_index)
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// The step currently shown.
    pub fn current_step(&self) -> &Step {
        &self.catalog.steps()[self.current_index]
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn started_at(&self) -> Timestamp {
        self.started_at
    }

    pub fn completed_at(&self) -> Option<Timestamp> {
        self.completed_at
    }

    /// The option recorded for a step, so it can be highlighted again.
    pub fn selected_option(&self, step_id: &StepId) -> Option<&ChoiceOption> {
        let key = self.answers.get(step_id)?;
        self.catalog.step_by_id(step_id)?.option(key)
    }

    /// Returns true if `key` is the recorded answer for `step_id`.
    pub fn is_selected(&self, step_id: &StepId, key: &OptionKey) -> bool {
        self.answers.get(step_id) == Some(key)
    }

    pub fn progress(&self) -> WizardProgress {
        WizardProgress::new(
            self.current_index,
            self.catalog.step_count(),
            self.status.is_finished(),
        )
    }

    /// Labels for the confirmation screen.
    pub fn summary(&self) -> CompletionSummary {
        CompletionSummary::from_answers(&self.catalog, &self.answers)
    }

    /// Takes accumulated domain events, clearing the internal buffer.
    pub fn take_events(&mut self) -> Vec<WizardEvent> {
        std::mem::take(&mut self.domain_events)
    }

    // ───────────────────────────────────────────────────────────────
    // Transitions
    // ───────────────────────────────────────────────────────────────

    /// Records the answer for the current step.
    ///
    /// # Errors
    ///
    /// - `QuizCompleted` once the last step has been passed
    /// - `StepNotFound` if the catalog has no step `step_id`
    /// - `StaleStepMismatch` if `step_id` is another step than the current one
    /// - `OptionNotFound` if the current step does not offer `key`
    ///
    /// None of these change any state.
    pub fn select_option(&mut self, step_id: &StepId, key: &OptionKey) -> Result<(), DomainError> {
        self.ensure_in_progress()?;

        if self.catalog.index_of(step_id).is_none() {
            return Err(DomainError::new(
                ErrorCode::StepNotFound,
                format!("Catalog has no step '{}'", step_id),
            )
            .with_detail("step_id", step_id.as_str()));
        }

        let step = self.current_step();
        if step.id() != step_id {
            tracing::warn!(
                session_id = %self.session_id,
                expected = %step.id(),
                received = %step_id,
                "Ignoring selection for a step that is not current"
            );
            return Err(DomainError::new(
                ErrorCode::StaleStepMismatch,
                format!("Selection for '{}' while '{}' is current", step_id, step.id()),
            )
            .with_detail("expected", step.id().as_str())
            .with_detail("received", step_id.as_str()));
        }

        if !step.offers(key) {
            return Err(DomainError::new(
                ErrorCode::OptionNotFound,
                format!("Step '{}' has no option '{}'", step_id, key),
            ));
        }

        let replaced = self.answers.record(step_id.clone(), key.clone());

        tracing::debug!(
            session_id = %self.session_id,
            step = %step_id,
            option = %key,
            "Option selected"
        );

        self.record_event(WizardEvent::OptionSelected {
            session_id: self.session_id,
            step_id: step_id.clone(),
            option_key: key.clone(),
            replaced,
        });

        Ok(())
    }

    /// Moves to the next step, or completes the run from the last step.
    ///
    /// # Errors
    ///
    /// - `MissingSelection` if the current step has no answer yet
    /// - `QuizCompleted` if the run is already complete
    pub fn advance(&mut self) -> Result<WizardState, DomainError> {
        self.ensure_in_progress()?;

        let step_id = self.current_step().id().clone();
        if !self.answers.contains(&step_id) {
            tracing::debug!(
                session_id = %self.session_id,
                step = %step_id,
                "Advance refused without a selection"
            );
            return Err(DomainError::new(
                ErrorCode::MissingSelection,
                MISSING_SELECTION_NOTICE,
            )
            .with_detail("step_id", step_id.as_str()));
        }

        if self.catalog.is_last(self.current_index) {
            self.status = self.status.transition_to(WizardStatus::Completed)?;
            let now = Timestamp::now();
            self.completed_at = Some(now);

            tracing::info!(session_id = %self.session_id, "Quiz completed");

            self.record_event(WizardEvent::Completed {
                session_id: self.session_id,
                completed_at: now,
            });
        } else {
            let from = self.current_index;
            self.current_index += 1;

            self.record_event(WizardEvent::Advanced {
                session_id: self.session_id,
                from,
                to: self.current_index,
            });
        }

        Ok(self.state())
    }

    /// Moves back one step, keeping every recorded answer.
    ///
    /// At the first step this is a no-op.
    ///
    /// # Errors
    ///
    /// `InvalidStateTransition` once the run is complete; the back action is
    /// hidden on the confirmation screen.
    pub fn retreat(&mut self) -> Result<WizardState, DomainError> {
        if !self.status.is_mutable() {
            return Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                "Cannot go back from the confirmation screen",
            ));
        }

        if self.current_index == 0 {
            return Ok(self.state());
        }

        let from = self.current_index;
        self.current_index -= 1;

        self.record_event(WizardEvent::Retreated {
            session_id: self.session_id,
            from,
            to: self.current_index,
        });

        Ok(self.state())
    }

    // ───────────────────────────────────────────────────────────────
    // Redirect
    // ───────────────────────────────────────────────────────────────

    /// Computes where a completed run redirects to.
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` before the run is complete
    /// - any error from [`DestinationResolver::resolve`]
    pub fn destination(&self, resolver: &DestinationResolver) -> Result<Destination, DomainError> {
        if !self.status.is_finished() {
            return Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                "Destination is only available after the last step",
            ));
        }
        resolver.resolve(&self.catalog, &self.answers)
    }

    /// Marks the run as redirected. Terminal.
    pub fn mark_navigated(&mut self, destination: &Destination) -> Result<(), DomainError> {
        self.status = self.status.transition_to(WizardStatus::Navigated)?;

        self.record_event(WizardEvent::Navigated {
            session_id: self.session_id,
            destination: destination.as_str().to_string(),
        });

        Ok(())
    }

    fn ensure_in_progress(&self) -> Result<(), DomainError> {
        if !self.status.is_mutable() {
            return Err(DomainError::new(
                ErrorCode::QuizCompleted,
                "The quiz is already complete",
            ));
        }
        Ok(())
    }

    fn record_event(&mut self, event: WizardEvent) {
        self.domain_events.push(event);
    }
}
