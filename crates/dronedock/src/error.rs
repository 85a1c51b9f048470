//! Error types for dronedock operations.
//!
//! This module provides the main error type [`DronedockError`] which wraps
//! the error conditions that can occur while converting an F3+C line into
//! a drone program.

use std::io;

use thiserror::Error;

use dronedock_parser::ParseError;

/// The main error type for dronedock operations.
///
/// The `Parse` variant keeps the offending source line alongside the
/// structured [`ParseError`] so callers can render a diagnostic with the
/// literal highlighted in context.
#[derive(Debug, Error)]
pub enum DronedockError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for DronedockError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

impl DronedockError {
    /// Create a new `Parse` error with the associated source line.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
