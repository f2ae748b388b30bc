//! WizardProgress value object - Progress bar data for a quiz run.

use serde::Serialize;

/// A snapshot of how far a run has come.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WizardProgress {
    current_index: usize,
    step_count: usize,
    completed: bool,
}

impl WizardProgress {
    pub fn new(current_index: usize, step_count: usize, completed: bool) -> Self {
        Self {
            current_index,
            step_count,
            completed,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn step_count(&self) -> usize {
        self.step_count
    }

    /// 1-based step number for display ("step 2 of 3").
    pub fn step_number(&self) -> usize {
        (self.current_index + 1).min(self.step_count)
    }

    /// Percent of steps already passed, rounded to the nearest integer.
    ///
    /// The bar starts at 0 on the first step and only reaches 100 on the
    /// confirmation screen.
    pub fn percent(&self) -> u8 {
        if self.completed || self.step_count == 0 {
            return 100;
        }
        let scaled = self.current_index * 100;
        ((scaled + self.step_count / 2) / self.step_count).min(100) as u8
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_step_is_zero_percent() {
        assert_eq!(WizardProgress::new(0, 3, false).percent(), 0);
    }

    #[test]
    fn percent_rounds_to_nearest() {
        assert_eq!(WizardProgress::new(1, 3, false).percent(), 33);
        assert_eq!(WizardProgress::new(2, 3, false).percent(), 67);
    }

    #[test]
    fn completed_is_full() {
        assert_eq!(WizardProgress::new(2, 3, true).percent(), 100);
    }

    #[test]
    fn step_number_is_one_based() {
        assert_eq!(WizardProgress::new(0, 3, false).step_number(), 1);
        assert_eq!(WizardProgress::new(2, 3, false).step_number(), 3);
    }
}
