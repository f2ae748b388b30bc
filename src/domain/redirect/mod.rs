//! Redirect module - Where a completed quiz sends the player.

mod destination;
mod resolver;

pub use destination::Destination;
pub use resolver::{DestinationResolver, DEFAULT_BASE_PATH};
