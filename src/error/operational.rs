//! Operational error context propagation with `anyhow`.
//!
//! Extension traits for attaching context to fallible calls, and a reporter
//! that logs errors through `tracing` and renders them for the console.

use std::{error::Error as StdError, fmt::Display};

use {
    anyhow::{Context, Error, Result as AnyhowResult},
    tracing::{debug, error, info, warn},
};

/// Extension trait for enhanced error context.
pub trait ResultExt<T, E> {
    /// Adds context to an error with a static string.
    fn add_context(self, context: &'static str) -> AnyhowResult<T>
    where
        E: StdError + Send + Sync + 'static;

    /// Adds context to an error with a formatted string.
    fn add_contextf(self, format: impl Display) -> AnyhowResult<T>
    where
        E: StdError + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    fn add_context(self, context: &'static str) -> AnyhowResult<T>
    where
        E: StdError + Send + Sync + 'static,
    {
        self.context(context)
    }

    fn add_contextf(self, format: impl Display) -> AnyhowResult<T>
    where
        E: StdError + Send + Sync + 'static,
    {
        self.with_context(|| format.to_string())
    }
}

/// Level at which an error is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Development diagnostics.
    Debug,
    /// Expected conditions worth noting, e.g. a user typo.
    Info,
    /// Recoverable failures.
    Warn,
    /// Failures that abort the current operation.
    Error,
}

/// Centralized error reporting and logging.
pub struct ErrorReporter;

impl ErrorReporter {
    /// Logs `error` with `context` at the given severity.
    pub fn report(severity: Severity, error: &Error, context: &str) {
        let message = Self::to_user_message(error);
        match severity {
            Severity::Debug => debug!(context = context, error = %message, "Operation failed"),
            Severity::Info => info!(context = context, error = %message, "Operation failed"),
            Severity::Warn => warn!(context = context, error = %message, "Operation failed"),
            Severity::Error => error!(context = context, error = %message, "Operation failed"),
        }
    }

    /// Reports a recoverable error.
    pub fn warn(error: &Error, context: &str) {
        Self::report(Severity::Warn, error, context);
    }

    /// Reports a non-recoverable error.
    pub fn error(error: &Error, context: &str) {
        Self::report(Severity::Error, error, context);
    }

    /// Renders the full cause chain, outermost context first.
    #[must_use]
    pub fn to_user_message(error: &Error) -> String {
        error
            .chain()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(": ")
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Error as IoError, ErrorKind::NotFound};

    use anyhow::anyhow;

    use crate::error::operational::{ErrorReporter, ResultExt, Severity};

    #[test]
    fn test_result_ext_with_context() {
        let result: Result<i32, IoError> = Err(IoError::new(NotFound, "no such file"));
        let error = result.add_context("Failed to load settings").unwrap_err();

        assert_eq!(error.to_string(), "Failed to load settings");
        assert_eq!(error.root_cause().to_string(), "no such file");
    }

    #[test]
    fn test_result_ext_with_contextf() {
        let result: Result<i32, IoError> = Err(IoError::new(NotFound, "no such file"));
        let error = result
            .add_contextf(format!("Failed to read {}", "page-3.json"))
            .unwrap_err();

        assert_eq!(error.to_string(), "Failed to read page-3.json");
    }

    #[test]
    fn test_user_message_includes_causes() {
        let result: Result<(), IoError> = Err(IoError::new(NotFound, "no such file"));
        let error = result.add_context("Failed to load collection").unwrap_err();

        assert_eq!(
            ErrorReporter::to_user_message(&error),
            "Failed to load collection: no such file"
        );
    }

    #[test]
    fn test_report_accepts_every_severity() {
        let error = anyhow!("Test error message");
        for severity in [
            Severity::Debug,
            Severity::Info,
            Severity::Warn,
            Severity::Error,
        ] {
            ErrorReporter::report(severity, &error, "test");
        }
        assert_eq!(ErrorReporter::to_user_message(&error), "Test error message");
    }
}
