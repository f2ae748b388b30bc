//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the quiz domain and the outside world. Adapters implement these ports.
//!
//! - `Navigator` - Sends the player to a resolved destination
//! - `CatalogSource` - Supplies the step catalog at startup

mod catalog_source;
mod navigator;

pub use catalog_source::CatalogSource;
pub use navigator::Navigator;
