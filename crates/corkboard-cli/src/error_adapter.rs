//! Error adapter for converting CorkboardError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI. Rejected board
//! files are rendered with a snippet of the offending JSON when the failure
//! carries a location.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use corkboard::{CorkboardError, ImportError};

/// Adapter for a rejected board file.
pub struct ImportAdapter<'a> {
    err: &'a ImportError,
    src: &'a str,
}

impl<'a> ImportAdapter<'a> {
    pub fn new(err: &'a ImportError, src: &'a str) -> Self {
        Self { err, src }
    }
}

impl fmt::Debug for ImportAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImportAdapter")
            .field("err", &self.err)
            .finish()
    }
}

impl fmt::Display for ImportAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.err, f)
    }
}

impl std::error::Error for ImportAdapter<'_> {}

impl MietteDiagnostic for ImportAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new("corkboard::import"))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(
            "a board file is a JSON array of panel records with unique ids",
        ))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let span = location_to_span(self.src, self.err.line()?, self.err.column()?);
        let label = LabeledSpan::new_primary_with_span(Some(self.err.message().to_string()), span);
        Some(Box::new(std::iter::once(label)))
    }
}

/// Adapter for [`CorkboardError`] variants without a source location.
pub struct ErrorAdapter<'a>(pub &'a CorkboardError);

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
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            CorkboardError::Io(_) => "corkboard::io",
            CorkboardError::Import { .. } => "corkboard::import",
            CorkboardError::Config(_) => "corkboard::config",
            CorkboardError::Export(_) => "corkboard::export",
        };
        Some(Box::new(code))
    }
}

/// A reportable error that can be rendered by miette.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A rejected board file with its source text.
    Import(ImportAdapter<'a>),
    /// A simple error without source location.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Import(i) => fmt::Display::fmt(i, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Import(_) => None,
            Reportable::Error(e) => std::error::Error::source(e),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Import(i) => i.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Import(i) => i.help(),
            Reportable::Error(e) => e.help(),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Reportable::Import(i) => i.source_code(),
            Reportable::Error(e) => e.source_code(),
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Reportable::Import(i) => i.labels(),
            Reportable::Error(e) => e.labels(),
        }
    }
}

/// Convert a 1-based line/column into a one-character [`SourceSpan`].
///
/// Positions past the end of `src` collapse to an empty span at the end.
fn location_to_span(src: &str, line: usize, column: usize) -> SourceSpan {
    let line_start: usize = src
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();
    let offset = (line_start + column.saturating_sub(1)).min(src.len());
    let len = usize::from(offset < src.len());
    SourceSpan::new(offset.into(), len)
}

/// Convert a [`CorkboardError`] into a reportable error.
pub fn to_reportable(err: &CorkboardError) -> Reportable<'_> {
    match err {
        CorkboardError::Import { err, src } => Reportable::Import(ImportAdapter::new(err, src)),
        _ => Reportable::Error(ErrorAdapter(err)),
    }
}
