//! Catalog source backed by the compiled-in music quiz.

use crate::domain::catalog::{music_catalog, StepCatalog};
use crate::domain::foundation::DomainError;
use crate::ports::CatalogSource;

/// Supplies the built-in instrument / genre / level catalog.
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinCatalogSource;

impl CatalogSource for BuiltinCatalogSource {
    fn load(&self) -> Result<StepCatalog, DomainError> {
        Ok(music_catalog()?)
    }
}
