// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core error types for esme.
//!
//! Every failure while decoding a simulation file maps to one of these kinds.
//! None of them are retryable: a malformed file stays malformed.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur while reading a simulation result file.
#[derive(Debug, Clone, Error)]
pub enum SimError {
    /// The file does not exist.
    #[error("Simulation file not found: '{}'", path.display())]
    SourceNotFound {
        /// Path that was requested
        path: PathBuf,
    },

    /// The trailing magic number did not match.
    #[error("Invalid format: expected magic {expected:#018X}, found {found:#018X}")]
    InvalidFormat {
        /// Magic number the format requires
        expected: u64,
        /// Magic number actually present in the file
        found: u64,
    },

    /// Fewer bytes remain than a field requires.
    #[error(
        "Truncated stream: requested {requested} bytes at position {position}, but only {available} bytes available"
    )]
    TruncatedStream {
        /// Requested bytes
        requested: usize,
        /// Bytes left in the source (0 when unknown)
        available: usize,
        /// Stream position when the error occurred
        position: u64,
    },

    /// A length prefix or catalog count is outside the accepted bounds.
    #[error("Malformed length {length} at position {position} (limit: {limit})")]
    MalformedVarLength {
        /// Length that was decoded
        length: i128,
        /// Largest accepted length
        limit: usize,
        /// Stream position where the length was read
        position: u64,
    },

    /// Reader configuration could not be loaded.
    #[error("Invalid configuration: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// A value cannot be represented in the file format.
    #[error("{context} encode error: {message}")]
    Encode {
        /// What was being encoded
        context: String,
        /// Error message
        message: String,
    },

    /// Any other I/O failure.
    #[error("I/O error in {context}: {message}")]
    Io {
        /// Operation that failed
        context: String,
        /// Underlying error message
        message: String,
    },
}

impl SimError {
    /// Create a "source not found" error.
    pub fn source_not_found(path: impl AsRef<Path>) -> Self {
        SimError::SourceNotFound {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Create an invalid format (magic mismatch) error.
    pub fn invalid_format(expected: u64, found: u64) -> Self {
        SimError::InvalidFormat { expected, found }
    }

    /// Create a truncated stream error.
    pub fn truncated(requested: usize, available: usize, position: u64) -> Self {
        SimError::TruncatedStream {
            requested,
            available,
            position,
        }
    }

    /// Create a malformed length error.
    pub fn malformed_length(length: impl Into<i128>, limit: usize, position: u64) -> Self {
        SimError::MalformedVarLength {
            length: length.into(),
            limit,
            position,
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        SimError::Config {
            message: message.into(),
        }
    }

    /// Create an encode error.
    pub fn encode(context: impl Into<String>, message: impl Into<String>) -> Self {
        SimError::Encode {
            context: context.into(),
            message: message.into(),
        }
    }

    /// Create an I/O error with context.
    pub fn io(context: impl Into<String>, message: impl Into<String>) -> Self {
        SimError::Io {
            context: context.into(),
            message: message.into(),
        }
    }

    /// Whether this error means the file content is unusable, as opposed to
    /// the file being unreachable.
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            SimError::InvalidFormat { .. }
                | SimError::TruncatedStream { .. }
                | SimError::MalformedVarLength { .. }
        )
    }

    /// Get structured fields for logging.
    pub fn log_fields(&self) -> Vec<(&'static str, String)> {
        match self {
            SimError::SourceNotFound { path } => vec![("path", path.display().to_string())],
            SimError::InvalidFormat { expected, found } => vec![
                ("expected", format!("{expected:#018X}")),
                ("found", format!("{found:#018X}")),
            ],
            SimError::TruncatedStream {
                requested,
                available,
                position,
            } => vec![
                ("requested", requested.to_string()),
                ("available", available.to_string()),
                ("position", position.to_string()),
            ],
            SimError::MalformedVarLength {
                length,
                limit,
                position,
            } => vec![
                ("length", length.to_string()),
                ("limit", limit.to_string()),
                ("position", position.to_string()),
            ],
            SimError::Config { message } => vec![("message", message.clone())],
            SimError::Encode { context, message } | SimError::Io { context, message } => {
                vec![("context", context.clone()), ("message", message.clone())]
            }
        }
    }
}

impl From<std::io::Error> for SimError {
    fn from(err: std::io::Error) -> Self {
        SimError::io("IO", err.to_string())
    }
}

/// Result type for esme operations.
pub type Result<T> = std::result::Result<T, SimError>;
