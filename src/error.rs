use std::path::PathBuf;
use thiserror::Error;

use crate::validation::ValidationReport;

/// The main error type for artboard operations.
///
/// Every failure is terminal: the first violation found in document order
/// aborts the parse of the whole document.
#[derive(Debug, Error)]
pub enum ArtboardError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse canvas document {path}: {message}")]
    CanvasParse { path: PathBuf, message: String },

    #[error("Failed to parse override document {path}: {source}")]
    OverridesParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A numeric, color or suffix value in a source document is malformed.
    #[error("Format error in {context}: {message}")]
    Format { context: String, message: String },

    /// A variant's required-children rule is violated.
    #[error("Structural error in '{element}': {rule}")]
    Structural { element: String, rule: String },

    /// An attribute value failed type conversion during resolution.
    #[error("Attribute error in '{element}': invalid {key} value '{value}': {message}")]
    Attribute {
        element: String,
        key: String,
        value: String,
        message: String,
    },

    #[error("Failed to parse IR JSON from {path}: {source}")]
    IrJsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write IR JSON to {path}: {source}")]
    IrJsonWrite {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Validation failed with {error_count} error(s) and {warning_count} warning(s)")]
    ValidationFailed {
        error_count: usize,
        warning_count: usize,
        report: ValidationReport,
    },

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

impl ArtboardError {
    /// Creates a structural error for the given element.
    pub fn structural(element: impl Into<String>, rule: impl Into<String>) -> Self {
        Self::Structural {
            element: element.into(),
            rule: rule.into(),
        }
    }

    /// Creates a format error with a short description of where it happened.
    pub fn format(context: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Format {
            context: context.into(),
            message: message.into(),
        }
    }
}
