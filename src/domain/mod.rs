//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (ids, slugs, status, errors)
//! - `catalog` - The ordered steps and options of the quiz
//! - `wizard` - One quiz run: selection, navigation, completion
//! - `redirect` - Destination derivation for completed runs

pub mod catalog;
pub mod foundation;
pub mod redirect;
pub mod wizard;
