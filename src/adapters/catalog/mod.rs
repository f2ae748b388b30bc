//! Catalog source implementations.

mod builtin;
mod yaml;

pub use builtin::BuiltinCatalogSource;
pub use yaml::YamlCatalogSource;
