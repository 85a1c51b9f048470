//! Error adapter for converting DronedockError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error
//! types and miette's rich diagnostic formatting used in the CLI. The
//! parse error renders with the pasted line as source code and a label on
//! the offending literal; other errors render as plain reports.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use dronedock::DronedockError;
use dronedock_parser::{ParseError, Span};

/// Adapter pairing a [`ParseError`] with the line it came from.
pub struct ParseAdapter<'a> {
    /// The wrapped parse error
    err: &'a ParseError,
    /// Source line for displaying the snippet
    src: &'a str,
}

impl<'a> ParseAdapter<'a> {
    /// Create a new parse-error adapter.
    pub fn new(err: &'a ParseError, src: &'a str) -> Self {
        Self { err, src }
    }
}

impl fmt::Debug for ParseAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParseAdapter").field("err", &self.err).finish()
    }
}

impl fmt::Display for ParseAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.err, f)
    }
}

impl std::error::Error for ParseAdapter<'_> {}

impl MietteDiagnostic for ParseAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new("dronedock::parse"))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.err.help()))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let span = span_to_miette(self.err.span());
        let label = LabeledSpan::new_primary_with_span(Some("not a number".to_string()), span);
        Some(Box::new(std::iter::once(label)))
    }
}

/// Adapter for non-parse [`DronedockError`] variants.
///
/// These have no source location; they render as plain error reports.
pub struct ErrorAdapter<'a>(pub &'a DronedockError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            DronedockError::Io(_) => "dronedock::io",
            DronedockError::Parse { .. } => return None,
            DronedockError::Export(_) => "dronedock::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        None
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// A reportable error that can be rendered by miette.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A parse diagnostic with source location information.
    Parse(ParseAdapter<'a>),
    /// A simple error without source location.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Parse(p) => fmt::Display::fmt(p, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Parse(_) => None,
            Reportable::Error(e) => e.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Parse(p) => p.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Parse(p) => p.help(),
            Reportable::Error(e) => e.help(),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Reportable::Parse(p) => p.source_code(),
            Reportable::Error(e) => e.source_code(),
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Reportable::Parse(p) => p.labels(),
            Reportable::Error(e) => e.labels(),
        }
    }
}

/// Convert a parser [`Span`] to a miette [`SourceSpan`].
fn span_to_miette(span: Span) -> SourceSpan {
    SourceSpan::new(span.start().into(), span.len())
}

/// Convert a [`DronedockError`] into a list of reportable errors.
///
/// The `Parse` variant becomes a [`Reportable::Parse`] carrying the source
/// line; every other variant becomes a single plain [`Reportable::Error`].
pub fn to_reportables(err: &DronedockError) -> Vec<Reportable<'_>> {
    match err {
        DronedockError::Parse { err: parse_err, src } => {
            vec![Reportable::Parse(ParseAdapter::new(parse_err, src))]
        }
        _ => vec![Reportable::Error(ErrorAdapter(err))],
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    fn parse_error_for(line: &str) -> DronedockError {
        dronedock::parse_home(line).expect_err("line must carry a malformed literal")
    }

    #[test]
    fn parse_error_becomes_labeled_diagnostic() {
        let err = parse_error_for("tp @s 1..5 64 -45");

        let reportables = to_reportables(&err);
        assert_eq!(reportables.len(), 1);

        match &reportables[0] {
            Reportable::Parse(p) => {
                assert_eq!(p.to_string(), "`1..5` is not a valid coordinate");

                let labels: Vec<_> = p.labels().unwrap().collect();
                assert_eq!(labels.len(), 1);
                assert!(labels[0].primary());
                assert_eq!(labels[0].label(), Some("not a number"));

                assert!(p.source_code().is_some());
                assert!(p.help().is_some());
            }
            Reportable::Error(_) => panic!("Expected Parse"),
        }
    }

    #[test]
    fn label_points_at_the_literal() {
        let line = "tp @s 1..5 64 -45";
        let err = parse_error_for(line);

        let reportables = to_reportables(&err);
        let Reportable::Parse(p) = &reportables[0] else {
            panic!("Expected Parse");
        };

        let labels: Vec<_> = p.labels().unwrap().collect();
        let expected_offset = line.find("1..5").unwrap();
        assert_eq!(labels[0].offset(), expected_offset);
        assert_eq!(labels[0].len(), "1..5".len());
    }

    #[test]
    fn io_error_becomes_plain_report() {
        let err = DronedockError::Io(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));

        let reportables = to_reportables(&err);
        assert_eq!(reportables.len(), 1);

        match &reportables[0] {
            Reportable::Error(e) => {
                assert_eq!(e.to_string(), "I/O error: pipe closed");
                assert!(e.labels().is_none());
            }
            Reportable::Parse(_) => panic!("Expected Error"),
        }
    }
}
