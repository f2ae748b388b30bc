//! Application handlers.

pub mod quiz;

pub use quiz::{
    CompleteQuizError, CompleteQuizHandler, NavigationOutcome, PendingRedirect, RedirectTrigger,
    StartQuizHandler,
};
