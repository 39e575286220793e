//! Error types for the sales analytics engine
//!
//! Most pipeline failures are handled in place: malformed rows are dropped
//! during parsing, business-rule violations are counted and dropped during
//! validation, and failed catalog lookups become unmatched enrichments.
//! The variants here cover what remains - collaborator I/O and format
//! failures that a caller may want to surface or degrade from.

use thiserror::Error;

/// Main error type for the analytics pipeline
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// I/O error while reading input or writing output
    #[error("I/O error: {message}")]
    Io {
        /// Description of the underlying I/O failure
        message: String,
    },

    /// Failure while writing delimited output
    #[error("Delimited output error: {message}")]
    DelimitedOutput {
        /// Description of the writer failure
        message: String,
    },

    /// The catalog document could not be parsed
    #[error("Catalog parse error: {message}")]
    CatalogParse {
        /// Description of the JSON failure
        message: String,
    },

    /// Failure while rendering or persisting the report
    #[error("Report error: {message}")]
    Report {
        /// Description of the report failure
        message: String,
    },
}

impl From<std::io::Error> for AnalyticsError {
    fn from(error: std::io::Error) -> Self {
        AnalyticsError::Io {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for AnalyticsError {
    fn from(error: csv::Error) -> Self {
        AnalyticsError::DelimitedOutput {
            message: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for AnalyticsError {
    fn from(error: serde_json::Error) -> Self {
        AnalyticsError::CatalogParse {
            message: error.to_string(),
        }
    }
}

impl AnalyticsError {
    /// Create a Report error
    pub fn report(message: impl Into<String>) -> Self {
        AnalyticsError::Report {
            message: message.into(),
        }
    }
}
