//! Error types for the amalgam library.
//!
//! This module provides the error hierarchy for expansion runs, using
//! `thiserror` for ergonomic error handling. Every error is fatal to the run
//! that produced it; nothing is retried.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with an amalgam error.
///
/// # Examples
///
/// ```
/// use amalgam::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(3)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the amalgam library.
#[derive(Debug, Error)]
pub enum Error {
    /// An input file (root, include, or replacement header) could not be read.
    #[error("cannot read {}: {source}", path.display())]
    NotFound {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// An `#include` line is malformed.
    #[error("{}:{line}: malformed include: {reason}", path.display())]
    Parse {
        /// The file containing the malformed line.
        path: PathBuf,
        /// The 1-based line number.
        line: usize,
        /// What was wrong with the line.
        reason: String,
    },

    /// Writing to the output sink failed.
    #[error("output error: {0}")]
    Sink(#[source] std::io::Error),

    /// The output destination could not be opened.
    #[error("cannot open output {}: {source}", path.display())]
    SinkOpen {
        /// The destination that could not be opened.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A path could not be resolved.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },
}

impl Error {
    /// Check if error indicates an input file could not be read.
    ///
    /// # Examples
    ///
    /// ```
    /// use amalgam::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::NotFound {
    ///     path: PathBuf::from("missing.h"),
    ///     source: std::io::Error::from(std::io::ErrorKind::NotFound),
    /// };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if error is a malformed include directive.
    #[must_use]
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }

    /// Check if error came from the output side.
    #[must_use]
    pub fn is_sink(&self) -> bool {
        matches!(self, Self::Sink(_) | Self::SinkOpen { .. })
    }
}
