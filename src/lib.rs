//! Combo Quiz - Instrument quiz that routes players to their combo page
//!
//! A three-step wizard (instrument, genre, level) collects one answer per
//! step and, once completed, redirects to `<base_path>combo_<instrument>.html`.
//!
//! ```no_run
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! use std::sync::Arc;
//! use combo_quiz::adapters::TracingNavigator;
//! use combo_quiz::application::{CompleteQuizHandler, StartQuizHandler};
//! use combo_quiz::config::AppConfig;
//!
//! let config = AppConfig::load()?;
//! let start = StartQuizHandler::from_source(config.catalog.source().as_ref())?;
//! let mut wizard = start.handle();
//! // ... select_option / advance driven by the front-end ...
//! # let _ = &mut wizard;
//! let complete = CompleteQuizHandler::from_config(Arc::new(TracingNavigator), &config.redirect);
//! let pending = complete.handle(wizard)?;
//! pending.schedule_auto_redirect();
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
