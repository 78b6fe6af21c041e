//! Domain-specific error types using `thiserror`.
//!
//! The state layer itself cannot fail; errors only arise where catalog
//! payloads and settings cross the process boundary.

use std::{io::Error as IoError, path::PathBuf};

use {serde_json::Error as SerdeJsonError, thiserror::Error};

/// Catalog payload errors.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Failed to read a payload file.
    #[error("Failed to read catalog payload {path:?}: {source}")]
    ReadError {
        /// File that could not be read.
        path: PathBuf,
        /// Underlying I/O failure.
        source: IoError,
    },
    /// The payload is not a valid catalog response.
    #[error("Invalid catalog payload: {0}")]
    DecodeError(#[from] SerdeJsonError),
}

/// Console command errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    /// The input line held no command.
    #[error("Empty command")]
    Empty,
    /// The command word is not recognised.
    #[error("Unknown command: {0}")]
    Unknown(String),
    /// A required argument was not given.
    #[error("Missing argument for {command}: expected {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },
    /// The page argument is not an integer.
    #[error("Invalid page number: {0}")]
    InvalidPage(String),
}
