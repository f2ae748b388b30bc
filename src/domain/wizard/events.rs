//! Wizard domain events.

use crate::domain::catalog::{OptionKey, StepId};
use crate::domain::foundation::{QuizSessionId, Timestamp};
use serde::{Deserialize, Serialize};

/// Events that can occur during a quiz run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WizardEvent {
    /// A new run started at the first step.
    Started {
        session_id: QuizSessionId,
        started_at: Timestamp,
    },

    /// An option was chosen for the current step.
    OptionSelected {
        session_id: QuizSessionId,
        step_id: StepId,
        option_key: OptionKey,
        replaced: Option<OptionKey>,
    },

    /// Moved forward one step.
    Advanced {
        session_id: QuizSessionId,
        from: usize,
        to: usize,
    },

    /// Moved back one step.
    Retreated {
        session_id: QuizSessionId,
        from: usize,
        to: usize,
    },

    /// The last step was answered.
    Completed {
        session_id: QuizSessionId,
        completed_at: Timestamp,
    },

    /// The redirect was issued.
    Navigated {
        session_id: QuizSessionId,
        destination: String,
    },
}
