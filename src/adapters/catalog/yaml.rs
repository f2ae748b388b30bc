//! Catalog source that reads steps from a YAML file.
//!
//! # File format
//!
//! ```yaml
//! steps:
//!   - id: instrument
//!     title: Qual instrumento você toca?
//!     subtitle: Escolha o instrumento principal.
//!     options:
//!       - Flauta            # key derived from the label: "flauta"
//!       - Sax Alto          # "sax_alto"
//!   - id: level
//!     title: Nível de domínio
//!     options:
//!       - key: avancado     # explicit key
//!         label: Avançado
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::domain::catalog::{ChoiceOption, OptionKey, Step, StepCatalog, StepId};
use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};
use crate::ports::CatalogSource;

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    steps: Vec<StepDocument>,
}

#[derive(Debug, Deserialize)]
struct StepDocument {
    id: String,
    title: String,
    #[serde(default)]
    subtitle: String,
    options: Vec<OptionDocument>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OptionDocument {
    Label(String),
    Keyed {
        #[serde(default)]
        key: Option<String>,
        label: String,
    },
}

impl OptionDocument {
    fn into_option(self) -> Result<ChoiceOption, ValidationError> {
        match self {
            OptionDocument::Label(label) | OptionDocument::Keyed { key: None, label } => {
                ChoiceOption::from_label(label)
            }
            OptionDocument::Keyed {
                key: Some(key),
                label,
            } => ChoiceOption::with_key(OptionKey::new(key)?, label),
        }
    }
}

impl CatalogDocument {
    fn into_catalog(self) -> Result<StepCatalog, ValidationError> {
        let steps = self
            .steps
            .into_iter()
            .map(|doc| {
                let options = doc
                    .options
                    .into_iter()
                    .map(OptionDocument::into_option)
                    .collect::<Result<Vec<_>, _>>()?;
                Step::new(StepId::new(doc.id)?, doc.title, doc.subtitle, options)
            })
            .collect::<Result<Vec<_>, _>>()?;
        StepCatalog::new(steps)
    }
}

/// Loads the catalog from a YAML file on disk.
#[derive(Debug, Clone)]
pub struct YamlCatalogSource {
    path: PathBuf,
}

impl YamlCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parses a catalog from YAML text.
    pub fn parse(contents: &str) -> Result<StepCatalog, DomainError> {
        let document: CatalogDocument = serde_yaml::from_str(contents).map_err(|e| {
            DomainError::new(ErrorCode::InvalidFormat, format!("Invalid catalog YAML: {}", e))
        })?;
        Ok(document.into_catalog()?)
    }
}

impl CatalogSource for YamlCatalogSource {
    fn load(&self) -> Result<StepCatalog, DomainError> {
        let contents = std::fs::read_to_string(&self.path).map_err(|e| {
            tracing::error!(path = %self.path.display(), "Failed to read catalog: {}", e);
            DomainError::new(
                ErrorCode::CatalogUnavailable,
                format!("Cannot read catalog {}: {}", self.path.display(), e),
            )
        })?;

        let catalog = Self::parse(&contents)?;
        tracing::debug!(
            path = %self.path.display(),
            steps = catalog.step_count(),
            "Loaded catalog"
        );
        Ok(catalog)
    }
}
