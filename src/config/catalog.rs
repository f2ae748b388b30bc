//! Catalog configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;
use crate::adapters::{BuiltinCatalogSource, YamlCatalogSource};
use crate::ports::CatalogSource;

/// Where the step catalog is read from
#[derive(Debug, Clone, Deserialize, Default)]
pub struct CatalogConfig {
    /// Optional YAML catalog; the built-in music quiz is used when unset
    pub path: Option<PathBuf>,
}

impl CatalogConfig {
    /// Build the catalog source this configuration selects
    pub fn source(&self) -> Box<dyn CatalogSource> {
        match &self.path {
            Some(path) => Box::new(YamlCatalogSource::new(path.clone())),
            None => Box::new(BuiltinCatalogSource),
        }
    }

    /// Validate catalog configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(path) = &self.path {
            if !path.is_file() {
                return Err(ValidationError::CatalogFileNotFound(
                    path.display().to_string(),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_builtin_catalog() {
        let config = CatalogConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.source().load().unwrap().step_count(), 3);
    }

    #[test]
    fn test_validation_missing_file() {
        let config = CatalogConfig {
            path: Some(PathBuf::from("/nonexistent/catalog.yaml")),
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::CatalogFileNotFound(_))
        ));
    }

    #[test]
    fn test_existing_file_is_valid() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let config = CatalogConfig {
            path: Some(file.path().to_path_buf()),
        };
        assert!(config.validate().is_ok());
    }
}
