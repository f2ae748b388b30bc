//! AnswerSet - One selected option key per step.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::catalog::{OptionKey, StepId};

/// Accumulated answers of one quiz run.
///
/// Holds at most one key per step id; recording again overwrites.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    selections: HashMap<StepId, OptionKey>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `key` for `step`, returning the key it replaced.
    pub fn record(&mut self, step: StepId, key: OptionKey) -> Option<OptionKey> {
        self.selections.insert(step, key)
    }

    pub fn get(&self, step: &StepId) -> Option<&OptionKey> {
        self.selections.get(step)
    }

    pub fn contains(&self, step: &StepId) -> bool {
        self.selections.contains_key(step)
    }

    pub fn len(&self) -> usize {
        self.selections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(id: &str) -> StepId {
        StepId::new(id).unwrap()
    }

    fn key(k: &str) -> OptionKey {
        OptionKey::new(k).unwrap()
    }

    #[test]
    fn new_answer_set_is_empty() {
        let answers = AnswerSet::new();
        assert!(answers.is_empty());
        assert!(!answers.contains(&step("instrument")));
    }

    #[test]
    fn record_overwrites_previous_key() {
        let mut answers = AnswerSet::new();
        assert_eq!(answers.record(step("genre"), key("pop")), None);
        assert_eq!(answers.record(step("genre"), key("jazz")), Some(key("pop")));

        assert_eq!(answers.len(), 1);
        assert_eq!(answers.get(&step("genre")), Some(&key("jazz")));
    }

    #[test]
    fn serializes_as_plain_map() {
        let mut answers = AnswerSet::new();
        answers.record(step("instrument"), key("piano"));
        let json = serde_json::to_value(&answers).unwrap();
        assert_eq!(json, serde_json::json!({ "instrument": "piano" }));
    }
}
