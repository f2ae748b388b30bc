//! DestinationResolver - Builds the combo page path from the answers.
//!
//! Only the first catalog step (the instrument) picks the page. The other
//! answers personalize the confirmation text but never the route.

use crate::domain::catalog::StepCatalog;
use crate::domain::foundation::{slugify, DomainError, ErrorCode};
use crate::domain::wizard::AnswerSet;

use super::Destination;

/// Default location of the combo pages.
pub const DEFAULT_BASE_PATH: &str = "/combos/";

const PAGE_PREFIX: &str = "combo_";
const PAGE_SUFFIX: &str = ".html";

/// Turns an answer set into `<base_path>combo_<instrument>.html`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestinationResolver {
    base_path: String,
}

impl DestinationResolver {
    /// Creates a resolver. `base_path` is prepended verbatim.
    pub fn new(base_path: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Resolves the destination for a completed answer set.
    ///
    /// The recorded key is slugified again before use, so hand-authored
    /// catalog keys still produce a valid file name. Slug keys pass through
    /// unchanged.
    ///
    /// # Errors
    ///
    /// - `MissingSelection` if the first step has no answer
    /// - `InvalidFormat` if the key has no slug characters
    pub fn resolve(
        &self,
        catalog: &StepCatalog,
        answers: &AnswerSet,
    ) -> Result<Destination, DomainError> {
        let first = catalog.first_step();
        let key = answers.get(first.id()).ok_or_else(|| {
            DomainError::new(
                ErrorCode::MissingSelection,
                format!("No answer recorded for '{}'", first.id()),
            )
            .with_detail("step_id", first.id().as_str())
        })?;

        let slug = slugify(key.as_str());
        if slug.is_empty() {
            return Err(DomainError::new(
                ErrorCode::InvalidFormat,
                format!("Option key '{}' does not form a page name", key),
            ));
        }

        Ok(Destination::new(format!(
            "{}{}{}{}",
            self.base_path, PAGE_PREFIX, slug, PAGE_SUFFIX
        )))
    }
}

impl Default for DestinationResolver {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_PATH)
    }
}
