//! Navigator implementations.

mod in_memory;
mod tracing_navigator;

pub use in_memory::InMemoryNavigator;
pub use tracing_navigator::TracingNavigator;
