//! A single question of the quiz.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::domain::foundation::{slugify, ValidationError};

use super::{ChoiceOption, OptionKey};

/// Identifier of a step, unique across the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StepId(String);

impl StepId {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::empty_field("step_id"));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One screen of the quiz: a prompt plus mutually exclusive options.
///
/// Steps are validated on construction and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    id: StepId,
    title: String,
    subtitle: String,
    options: Vec<ChoiceOption>,
}

impl Step {
    /// Creates a step.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the title is blank or there are no options
    /// - `Duplicate` if two option keys share a slug
    pub fn new(
        id: StepId,
        title: impl Into<String>,
        subtitle: impl Into<String>,
        options: Vec<ChoiceOption>,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        if options.is_empty() {
            return Err(ValidationError::empty_field("options"));
        }

        let mut seen = HashSet::new();
        for option in &options {
            if !seen.insert(slugify(option.key().as_str())) {
                return Err(ValidationError::duplicate("option_key", option.key().as_str()));
            }
        }

        Ok(Self {
            id,
            title,
            subtitle: subtitle.into(),
            options,
        })
    }

    pub fn id(&self) -> &StepId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn subtitle(&self) -> &str {
        &self.subtitle
    }

    /// Options in display order.
    pub fn options(&self) -> &[ChoiceOption] {
        &self.options
    }

    /// Looks up an option by key.
    pub fn option(&self, key: &OptionKey) -> Option<&ChoiceOption> {
        self.options.iter().find(|o| o.key() == key)
    }

    /// Returns true if this step offers the given key.
    pub fn offers(&self, key: &OptionKey) -> bool {
        self.option(key).is_some()
    }
}
