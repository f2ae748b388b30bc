//! WizardStatus enum for tracking the lifecycle of a quiz run.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::StateMachine;

/// Lifecycle status of a quiz run.
///
/// A run answers questions while `InProgress`, shows its confirmation
/// screen while `Completed`, and ends once the redirect has been issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WizardStatus {
    #[default]
    InProgress,
    Completed,
    Navigated,
}

impl WizardStatus {
    /// Returns true while answers may still be changed.
    pub fn is_mutable(&self) -> bool {
        matches!(self, WizardStatus::InProgress)
    }

    /// Returns true once every step has been answered.
    pub fn is_finished(&self) -> bool {
        matches!(self, WizardStatus::Completed | WizardStatus::Navigated)
    }
}

impl StateMachine for WizardStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use WizardStatus::*;
        matches!((self, target), (InProgress, Completed) | (Completed, Navigated))
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use WizardStatus::*;
        match self {
            InProgress => vec![Completed],
            Completed => vec![Navigated],
            Navigated => vec![],
        }
    }
}

impl fmt::Display for WizardStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            WizardStatus::InProgress => "InProgress",
            WizardStatus::Completed => "Completed",
            WizardStatus::Navigated => "Navigated",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_in_progress() {
        assert_eq!(WizardStatus::default(), WizardStatus::InProgress);
    }

    #[test]
    fn only_in_progress_is_mutable() {
        assert!(WizardStatus::InProgress.is_mutable());
        assert!(!WizardStatus::Completed.is_mutable());
        assert!(!WizardStatus::Navigated.is_mutable());
    }

    #[test]
    fn is_finished_works_correctly() {
        assert!(!WizardStatus::InProgress.is_finished());
        assert!(WizardStatus::Completed.is_finished());
        assert!(WizardStatus::Navigated.is_finished());
    }

    #[test]
    fn in_progress_cannot_skip_to_navigated() {
        assert!(!WizardStatus::InProgress.can_transition_to(&WizardStatus::Navigated));
    }

    #[test]
    fn completed_cannot_go_back_to_in_progress() {
        assert!(!WizardStatus::Completed.can_transition_to(&WizardStatus::InProgress));
    }

    #[test]
    fn navigated_is_terminal() {
        assert!(WizardStatus::Navigated.is_terminal());
        assert!(WizardStatus::Navigated
            .transition_to(WizardStatus::Navigated)
            .is_err());
    }

    #[test]
    fn can_transition_to_is_consistent_with_valid_transitions() {
        for status in [
            WizardStatus::InProgress,
            WizardStatus::Completed,
            WizardStatus::Navigated,
        ] {
            for target in status.valid_transitions() {
                assert!(status.can_transition_to(&target));
            }
        }
    }

    #[test]
    fn serializes_to_snake_case_json() {
        assert_eq!(
            serde_json::to_string(&WizardStatus::InProgress).unwrap(),
            "\"in_progress\""
        );
        let status: WizardStatus = serde_json::from_str("\"navigated\"").unwrap();
        assert_eq!(status, WizardStatus::Navigated);
    }
}
