//! StepCatalog - The ordered, immutable list of quiz steps.
//!
//! All ordering questions (how many steps, which comes first, what is at a
//! given index) go through this type so the wizard never indexes raw vectors.

use std::collections::HashSet;

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

use super::{Step, StepId};

/// Ordered list of steps, fixed for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepCatalog {
    steps: Vec<Step>,
}

impl StepCatalog {
    /// Builds a catalog from steps in display order.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if no steps are given
    /// - `Duplicate` if two steps share an id
    pub fn new(steps: Vec<Step>) -> Result<Self, ValidationError> {
        if steps.is_empty() {
            return Err(ValidationError::empty_field("steps"));
        }

        let mut seen = HashSet::new();
        for step in &steps {
            if !seen.insert(step.id()) {
                return Err(ValidationError::duplicate("step_id", step.id().as_str()));
            }
        }

        Ok(Self { steps })
    }

    /// Number of steps. Never zero.
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Returns the step at `index`.
    ///
    /// # Errors
    ///
    /// `OutOfRange` if `index >= step_count()`.
    pub fn step_at(&self, index: usize) -> Result<&Step, DomainError> {
        self.steps.get(index).ok_or_else(|| {
            DomainError::new(
                ErrorCode::OutOfRange,
                format!(
                    "Step index {} is outside the catalog (0..{})",
                    index,
                    self.steps.len()
                ),
            )
            .with_detail("index", index.to_string())
        })
    }

    /// The step whose answer decides the redirect target.
    pub fn first_step(&self) -> &Step {
        &self.steps[0]
    }

    /// Returns the position of a step id.
    pub fn index_of(&self, id: &StepId) -> Option<usize> {
        self.steps.iter().position(|s| s.id() == id)
    }

    /// Looks up a step by id.
    pub fn step_by_id(&self, id: &StepId) -> Option<&Step> {
        self.steps.iter().find(|s| s.id() == id)
    }

    /// Returns true if `index` refers to the final step.
    pub fn is_last(&self, index: usize) -> bool {
        index + 1 == self.steps.len()
    }

    /// All steps in order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::ChoiceOption;

    fn step(id: &str, labels: &[&str]) -> Step {
        Step::new(
            StepId::new(id).unwrap(),
            format!("Pergunta {}", id),
            "",
            labels
                .iter()
                .map(|l| ChoiceOption::from_label(*l).unwrap())
                .collect(),
        )
        .unwrap()
    }

    fn two_step_catalog() -> StepCatalog {
        StepCatalog::new(vec![step("instrument", &["Piano"]), step("genre", &["Pop"])]).unwrap()
    }

    #[test]
    fn step_count_matches_input() {
        assert_eq!(two_step_catalog().step_count(), 2);
    }

    #[test]
    fn step_at_returns_steps_in_order() {
        let catalog = two_step_catalog();
        assert_eq!(catalog.step_at(0).unwrap().id().as_str(), "instrument");
        assert_eq!(catalog.step_at(1).unwrap().id().as_str(), "genre");
    }

    #[test]
    fn step_at_out_of_bounds_is_out_of_range() {
        let err = two_step_catalog().step_at(2).unwrap_err();
        assert_eq!(err.code, ErrorCode::OutOfRange);
        assert_eq!(err.details.get("index"), Some(&"2".to_string()));
    }

    #[test]
    fn empty_catalog_is_rejected() {
        assert_eq!(
            StepCatalog::new(vec![]).unwrap_err(),
            ValidationError::empty_field("steps")
        );
    }

    #[test]
    fn duplicate_step_ids_are_rejected() {
        let result = StepCatalog::new(vec![step("genre", &["Pop"]), step("genre", &["Jazz"])]);
        assert_eq!(
            result.unwrap_err(),
            ValidationError::duplicate("step_id", "genre")
        );
    }

    #[test]
    fn lookups_by_id() {
        let catalog = two_step_catalog();
        let genre = StepId::new("genre").unwrap();
        assert_eq!(catalog.index_of(&genre), Some(1));
        assert!(catalog.step_by_id(&genre).is_some());
        assert_eq!(catalog.index_of(&StepId::new("level").unwrap()), None);
    }

    #[test]
    fn first_and_last_positions() {
        let catalog = two_step_catalog();
        assert_eq!(catalog.first_step().id().as_str(), "instrument");
        assert!(!catalog.is_last(0));
        assert!(catalog.is_last(1));
    }
}
