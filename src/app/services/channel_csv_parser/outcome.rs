//! Parse outcome and warning structures for channel CSV processing
//!
//! This module provides the terminal result type of a parse and the typed
//! warning trail. Warnings record recoverable anomalies that narrowed or
//! corrected the dataset; they never imply failure, and a present dataset
//! with a non-empty warning log is a valid, usable result.

use serde::Serialize;

use crate::app::models::Dataset;
use crate::Error;

/// A recoverable anomaly recorded during parsing
///
/// Ordered by emission; each carries the line number of the offending input
/// line where one applies. Line numbers count every physical line, blank
/// ones included.
#[derive(Debug, Clone, PartialEq, thiserror::Error, Serialize)]
pub enum ParseWarning {
    /// Units line was shorter than the channel list and got right-padded
    #[error("units count ({actual}) doesn't match channels count ({expected}); missing units set to empty")]
    UnitsCountMismatch { expected: usize, actual: usize },

    /// A recognized keyword carried an unparseable value
    #[error("line {line}: invalid {keyword} value '{value}'")]
    InvalidMetadataValue {
        line: usize,
        keyword: String,
        value: String,
    },

    /// A data row had the wrong number of fields and was dropped
    #[error("line {line}: data row has {actual} values but {expected} channels expected; row dropped")]
    RowArityMismatch {
        line: usize,
        expected: usize,
        actual: usize,
    },

    /// A data row contained a non-blank, non-numeric field and was dropped
    #[error("line {line}: invalid numeric value '{value}' for channel '{channel}'; row dropped")]
    InvalidNumericValue {
        line: usize,
        channel: String,
        value: String,
    },
}

/// Terminal result of a parse
///
/// Every parse ends in one of these; `parse_file` and `parse_stream` never
/// return a raw error. Exactly one of `dataset` and `error` is present.
#[derive(Debug)]
pub struct ParseOutcome {
    /// The parsed dataset, present on success
    pub dataset: Option<Dataset>,

    /// The fatal condition, present on failure
    pub error: Option<Error>,

    /// Recoverable anomalies in emission order, populated on both paths
    pub warnings: Vec<ParseWarning>,
}

impl ParseOutcome {
    /// Successful outcome carrying a dataset
    pub fn success(dataset: Dataset, warnings: Vec<ParseWarning>) -> Self {
        Self {
            dataset: Some(dataset),
            error: None,
            warnings,
        }
    }

    /// Failed outcome carrying the fatal condition
    pub fn failure(error: Error, warnings: Vec<ParseWarning>) -> Self {
        Self {
            dataset: None,
            error: Some(error),
            warnings,
        }
    }

    /// True when a dataset was produced
    pub fn is_success(&self) -> bool {
        self.dataset.is_some()
    }

    /// Human-readable message for the fatal condition, if any
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(|e| e.to_string())
    }
}
