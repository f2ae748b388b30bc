//! Application layer - Handlers that drive quiz runs.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;

pub use handlers::{
    CompleteQuizError, CompleteQuizHandler, NavigationOutcome, PendingRedirect, RedirectTrigger,
    StartQuizHandler,
};
