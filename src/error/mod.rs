//! Error handling using `thiserror` and `anyhow`.
//!
//! Domain enums describe failures at the process boundary; the operational
//! layer adds context and reports errors through `tracing`.

pub mod domain;
pub mod operational;

pub use {
    domain::{CatalogError, CommandError},
    operational::{ErrorReporter, ResultExt, Severity},
};
