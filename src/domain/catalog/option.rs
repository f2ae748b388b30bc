//! Selectable options and their stable keys.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{slugify, ValidationError};

/// Stable, URL-safe identifier of an option within a step.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionKey(String);

impl OptionKey {
    /// Creates a key from an explicit value.
    ///
    /// Hand-authored keys are accepted as given (they only need to be
    /// non-empty); use [`OptionKey::from_label`] to derive one.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::empty_field("option_key"));
        }
        Ok(Self(value))
    }

    /// Derives the key from a display label using the slug algorithm.
    pub fn from_label(label: &str) -> Result<Self, ValidationError> {
        let slug = slugify(label);
        if slug.is_empty() {
            return Err(ValidationError::invalid_format(
                "option_key",
                format!("label '{}' has no slug characters", label),
            ));
        }
        Ok(Self(slug))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for OptionKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// One selectable choice within a step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOption {
    key: OptionKey,
    label: String,
}

impl ChoiceOption {
    /// Creates an option whose key is the slug of its label.
    pub fn from_label(label: impl Into<String>) -> Result<Self, ValidationError> {
        let label = label.into();
        Self::validate_label(&label)?;
        let key = OptionKey::from_label(&label)?;
        Ok(Self { key, label })
    }

    /// Creates an option with an explicit key.
    pub fn with_key(key: OptionKey, label: impl Into<String>) -> Result<Self, ValidationError> {
        let label = label.into();
        Self::validate_label(&label)?;
        Ok(Self { key, label })
    }

    fn validate_label(label: &str) -> Result<(), ValidationError> {
        if label.trim().is_empty() {
            return Err(ValidationError::empty_field("option_label"));
        }
        Ok(())
    }

    pub fn key(&self) -> &OptionKey {
        &self.key
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_label_derives_slug_key() {
        let option = ChoiceOption::from_label("Sax Tenor").unwrap();
        assert_eq!(option.key().as_str(), "sax_tenor");
        assert_eq!(option.label(), "Sax Tenor");
    }

    #[test]
    fn same_label_always_yields_same_key() {
        let a = ChoiceOption::from_label("Violoncelo").unwrap();
        let b = ChoiceOption::from_label("Violoncelo").unwrap();
        assert_eq!(a.key(), b.key());
    }

    #[test]
    fn explicit_key_is_kept_verbatim() {
        let key = OptionKey::new("classico").unwrap();
        let option = ChoiceOption::with_key(key, "Clássico").unwrap();
        assert_eq!(option.key().as_str(), "classico");
        assert_eq!(option.label(), "Clássico");
    }

    #[test]
    fn empty_label_is_rejected() {
        assert_eq!(
            ChoiceOption::from_label("   ").unwrap_err(),
            ValidationError::empty_field("option_label")
        );
    }

    #[test]
    fn label_without_slug_characters_is_rejected() {
        assert!(matches!(
            OptionKey::from_label("!!!"),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn empty_key_is_rejected() {
        assert!(OptionKey::new("").is_err());
    }
}
