//! Error types for Corkboard operations.
//!
//! This module provides the main error type [`CorkboardError`] which wraps
//! the failures that can surface from board files and configuration, and
//! [`ImportError`], the validation failure reported when a board file is
//! rejected.

use std::io;

use thiserror::Error;

/// The main error type for Corkboard operations.
///
/// Interaction operations never fail; a gesture outside its valid state is a
/// silent no-op. Only loading, saving and configuration produce errors.
///
/// The `Import` variant keeps the rejected source text next to the error so
/// that reporters can show a snippet around the offending location.
#[derive(Debug, Error)]
pub enum CorkboardError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Import { err: ImportError, src: String },

    #[error("Config error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(String),
}

impl CorkboardError {
    /// Create a new `Import` error with the rejected source text.
    pub fn new_import_error(err: ImportError, src: impl Into<String>) -> Self {
        Self::Import {
            err,
            src: src.into(),
        }
    }
}

/// A rejected board import.
///
/// Carries the 1-based line and column of the offending JSON when the
/// failure can be pinned to a location in the source text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid board file: {message}")]
pub struct ImportError {
    message: String,
    line: Option<usize>,
    column: Option<usize>,
}

impl ImportError {
    /// Creates an import error without location information.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            line: None,
            column: None,
        }
    }

    /// Attaches a 1-based source location.
    pub fn with_location(mut self, line: usize, column: usize) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn line(&self) -> Option<usize> {
        self.line
    }

    pub fn column(&self) -> Option<usize> {
        self.column
    }
}

impl From<serde_json::Error> for ImportError {
    fn from(err: serde_json::Error) -> Self {
        // serde_json reports line 0 when no position is known
        let line = err.line();
        let column = err.column();
        let mut message = err.to_string();

        if line == 0 {
            return Self::new(message);
        }

        // Drop the " at line X column Y" suffix; the location is kept separately
        if let Some(idx) = message.rfind(" at line ") {
            message.truncate(idx);
        }
        Self::new(message).with_location(line, column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_error_from_syntax_error_has_location() {
        let err = serde_json::from_str::<serde_json::Value>("[\n  {\"id\": }\n]").unwrap_err();
        let import_err = ImportError::from(err);

        assert_eq!(import_err.line(), Some(2));
        assert!(import_err.column().is_some());
        assert!(!import_err.message().contains(" at line "));
    }

    #[test]
    fn test_import_error_display() {
        let err = ImportError::new("duplicate panel id `panel-1`");
        assert_eq!(
            err.to_string(),
            "Invalid board file: duplicate panel id `panel-1`"
        );
        assert_eq!(err.line(), None);
    }

    #[test]
    fn test_corkboard_error_wraps_import() {
        let err = CorkboardError::new_import_error(ImportError::new("boom"), "[]");
        assert!(matches!(&err, CorkboardError::Import { src, .. } if src == "[]"));
        assert_eq!(err.to_string(), "Invalid board file: boom");
    }
}
