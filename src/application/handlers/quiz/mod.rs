//! Quiz command handlers.
//!
//! Starting a run hands out a fresh [`Wizard`](crate::domain::wizard::Wizard);
//! completing it turns the wizard into a [`PendingRedirect`].

mod complete_quiz;
mod start_quiz;

pub use complete_quiz::{
    CompleteQuizError, CompleteQuizHandler, NavigationOutcome, PendingRedirect, RedirectTrigger,
};
pub use start_quiz::StartQuizHandler;
