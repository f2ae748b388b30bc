//! Wizard module - Step sequencing and answer tracking for one quiz run.

mod aggregate;
mod answers;
mod events;
mod progress;
mod state;
mod summary;

pub use aggregate::{Wizard, MISSING_SELECTION_NOTICE};
pub use answers::AnswerSet;
pub use events::WizardEvent;
pub use progress::WizardProgress;
pub use state::WizardState;
pub use summary::{CompletionSummary, SummaryLine, FALLBACK_INSTRUMENT_LABEL};
