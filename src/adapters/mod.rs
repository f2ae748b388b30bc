//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the quiz to its surroundings:
//! - `catalog` - Catalog sources (built-in music quiz, YAML file)
//! - `navigation` - Navigators (tracing log, in-memory recorder)

pub mod catalog;
pub mod navigation;

pub use catalog::{BuiltinCatalogSource, YamlCatalogSource};
pub use navigation::{InMemoryNavigator, TracingNavigator};
