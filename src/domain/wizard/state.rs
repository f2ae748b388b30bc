//! WizardState - Where a quiz run currently stands.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of the wizard as seen by a presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "state", content = "index", rename_all = "snake_case")]
pub enum WizardState {
    /// Showing the step at this catalog index.
    AtStep(usize),
    /// Every step answered; the confirmation screen is showing.
    Completed,
}

impl WizardState {
    /// Returns the step index, or `None` once completed.
    pub fn step_index(&self) -> Option<usize> {
        match self {
            WizardState::AtStep(i) => Some(*i),
            WizardState::Completed => None,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, WizardState::Completed)
    }
}

impl fmt::Display for WizardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WizardState::AtStep(i) => write!(f, "AtStep({})", i),
            WizardState::Completed => write!(f, "Completed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_index_is_none_when_completed() {
        assert_eq!(WizardState::AtStep(2).step_index(), Some(2));
        assert_eq!(WizardState::Completed.step_index(), None);
    }

    #[test]
    fn serializes_with_tag() {
        assert_eq!(
            serde_json::to_value(WizardState::AtStep(1)).unwrap(),
            serde_json::json!({ "state": "at_step", "index": 1 })
        );
        assert_eq!(
            serde_json::to_value(WizardState::Completed).unwrap(),
            serde_json::json!({ "state": "completed" })
        );
    }
}
