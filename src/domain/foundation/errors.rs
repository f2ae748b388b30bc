//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    #[error("Field '{field}' contains duplicate value '{value}'")]
    Duplicate { field: String, value: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField {
            field: field.into(),
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates a duplicate value validation error.
    pub fn duplicate(field: impl Into<String>, value: impl Into<String>) -> Self {
        ValidationError::Duplicate {
            field: field.into(),
            value: value.into(),
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,
    InvalidFormat,

    // Lookup errors
    OutOfRange,
    StepNotFound,
    OptionNotFound,

    // Wizard state errors
    MissingSelection,
    StaleStepMismatch,
    QuizCompleted,
    InvalidStateTransition,

    // Infrastructure errors
    CatalogUnavailable,
    NavigationFailed,
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::InvalidFormat => "INVALID_FORMAT",
            ErrorCode::OutOfRange => "OUT_OF_RANGE",
            ErrorCode::StepNotFound => "STEP_NOT_FOUND",
            ErrorCode::OptionNotFound => "OPTION_NOT_FOUND",
            ErrorCode::MissingSelection => "MISSING_SELECTION",
            ErrorCode::StaleStepMismatch => "STALE_STEP_MISMATCH",
            ErrorCode::QuizCompleted => "QUIZ_COMPLETED",
            ErrorCode::InvalidStateTransition => "INVALID_STATE_TRANSITION",
            ErrorCode::CatalogUnavailable => "CATALOG_UNAVAILABLE",
            ErrorCode::NavigationFailed => "NAVIGATION_FAILED",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }

    /// Returns true if the user can recover by retrying the interaction.
    ///
    /// Missing selections are re-prompted and stale selections are dropped;
    /// every other code points at a programming or configuration mistake.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self.code,
            ErrorCode::MissingSelection | ErrorCode::StaleStepMismatch
        )
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        DomainError::new(ErrorCode::ValidationFailed, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_empty_field_displays_correctly() {
        let err = ValidationError::empty_field("label");
        assert_eq!(format!("{}", err), "Field 'label' cannot be empty");
    }

    #[test]
    fn validation_error_duplicate_displays_correctly() {
        let err = ValidationError::duplicate("step_id", "genre");
        assert_eq!(
            format!("{}", err),
            "Field 'step_id' contains duplicate value 'genre'"
        );
    }

    #[test]
    fn domain_error_displays_code_and_message() {
        let err = DomainError::new(ErrorCode::MissingSelection, "Choose an option to continue");
        assert_eq!(
            format!("{}", err),
            "[MISSING_SELECTION] Choose an option to continue"
        );
    }

    #[test]
    fn domain_error_with_detail_adds_detail() {
        let err = DomainError::new(ErrorCode::StaleStepMismatch, "Stale selection")
            .with_detail("expected", "genre")
            .with_detail("received", "instrument");

        assert_eq!(err.details.get("expected"), Some(&"genre".to_string()));
        assert_eq!(err.details.get("received"), Some(&"instrument".to_string()));
    }

    #[test]
    fn recoverable_codes_are_user_facing_only() {
        assert!(DomainError::new(ErrorCode::MissingSelection, "").is_recoverable());
        assert!(DomainError::new(ErrorCode::StaleStepMismatch, "").is_recoverable());
        assert!(!DomainError::new(ErrorCode::OutOfRange, "").is_recoverable());
        assert!(!DomainError::new(ErrorCode::QuizCompleted, "").is_recoverable());
    }

    #[test]
    fn validation_error_converts_to_domain_error() {
        let err: DomainError = ValidationError::empty_field("title").into();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert!(err.message.contains("title"));
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::OutOfRange), "OUT_OF_RANGE");
        assert_eq!(format!("{}", ErrorCode::NavigationFailed), "NAVIGATION_FAILED");
    }
}
