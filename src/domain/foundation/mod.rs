//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the quiz domain.

mod errors;
mod ids;
mod slug;
mod state_machine;
mod timestamp;
mod wizard_status;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::QuizSessionId;
pub use slug::{is_slug, slugify};
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
pub use wizard_status::WizardStatus;
