//! Catalog module - The fixed list of quiz steps and their options.
//!
//! Catalogs are built once at startup (from the built-in music quiz or from a
//! YAML file) and shared read-only between wizard instances.

mod music;
mod option;
mod step;
mod step_catalog;

pub use music::{music_catalog, INSTRUMENTS};
pub use option::{ChoiceOption, OptionKey};
pub use step::{Step, StepId};
pub use step_catalog::StepCatalog;
