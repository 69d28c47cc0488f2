//! # tagsense-observability
//!
//! Structured JSON tracing and reporting of model health and degradation events.

pub mod health;
pub mod tracing_setup;

pub use health::{log_degradations, log_health};
pub use tracing_setup::{init_tracing, init_tracing_with_filter};
