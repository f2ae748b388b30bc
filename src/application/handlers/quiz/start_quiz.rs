//! StartQuizHandler - Hands out wizards over one shared catalog.

use std::sync::Arc;

use crate::domain::catalog::StepCatalog;
use crate::domain::foundation::DomainError;
use crate::domain::wizard::Wizard;
use crate::ports::CatalogSource;

/// Loads the catalog once and starts independent quiz runs over it.
#[derive(Debug, Clone)]
pub struct StartQuizHandler {
    catalog: Arc<StepCatalog>,
}

impl StartQuizHandler {
    pub fn new(catalog: Arc<StepCatalog>) -> Self {
        Self { catalog }
    }

    /// Loads the catalog from `source`.
    pub fn from_source(source: &dyn CatalogSource) -> Result<Self, DomainError> {
        let catalog = source.load()?;
        tracing::info!(steps = catalog.step_count(), "Quiz catalog ready");
        Ok(Self::new(Arc::new(catalog)))
    }

    pub fn catalog(&self) -> &Arc<StepCatalog> {
        &self.catalog
    }

    /// Starts a new run at the first step.
    pub fn handle(&self) -> Wizard {
        Wizard::new(Arc::clone(&self.catalog))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::BuiltinCatalogSource;
    use crate::domain::catalog::{OptionKey, StepId};
    use crate::domain::foundation::ErrorCode;
    use crate::domain::wizard::WizardState;

    struct BrokenSource;

    impl CatalogSource for BrokenSource {
        fn load(&self) -> Result<StepCatalog, DomainError> {
            Err(DomainError::new(ErrorCode::CatalogUnavailable, "offline"))
        }
    }

    #[test]
    fn runs_are_independent() {
        let handler = StartQuizHandler::from_source(&BuiltinCatalogSource).unwrap();
        let mut first = handler.handle();
        let second = handler.handle();

        first
            .select_option(
                &StepId::new("instrument").unwrap(),
                &OptionKey::new("piano").unwrap(),
            )
            .unwrap();
        first.advance().unwrap();

        assert_eq!(first.state(), WizardState::AtStep(1));
        assert_eq!(second.state(), WizardState::AtStep(0));
        assert!(second.answers().is_empty());
        assert_ne!(first.session_id(), second.session_id());
    }

    #[test]
    fn runs_share_the_catalog() {
        let handler = StartQuizHandler::from_source(&BuiltinCatalogSource).unwrap();
        let _wizard = handler.handle();
        assert_eq!(Arc::strong_count(handler.catalog()), 2);
    }

    #[test]
    fn source_errors_propagate() {
        let err = StartQuizHandler::from_source(&BrokenSource).unwrap_err();
        assert_eq!(err.code, ErrorCode::CatalogUnavailable);
    }
}
