//! Error types for coordinate extraction.
//!
//! Extraction has exactly one fatal failure: a matched run of coordinate
//! characters that does not form a valid number, such as `1..5` or `--`.
//! A line without the marker pattern is not an error; [`extract_home`]
//! reports that as `Ok(None)`.
//!
//! [`extract_home`]: crate::extract_home

use thiserror::Error;

use crate::span::Span;

/// Fatal extraction failure: a matched coordinate literal is not a number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{literal}` is not a valid coordinate")]
pub struct ParseError {
    literal: String,
    span: Span,
}

impl ParseError {
    /// Create an error for the literal at `span` in the input line.
    pub(crate) fn invalid_literal(literal: impl Into<String>, span: Span) -> Self {
        Self {
            literal: literal.into(),
            span,
        }
    }

    /// The offending literal text.
    pub fn literal(&self) -> &str {
        &self.literal
    }

    /// Byte span of the literal within the input line.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Help text for interactive reporting.
    pub fn help(&self) -> &'static str {
        "coordinates are plain decimals such as 123.5, 64.0 or -45.2"
    }
}
