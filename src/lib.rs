//! daqcsv Library
//!
//! A Rust library for parsing multi-section channel CSV exports produced by
//! data-acquisition instruments into structured in-memory datasets.
//!
//! This library provides tools for:
//! - Parsing the three-section export format (channel names, units, keyword
//!   metadata, numeric data rows) with proper phase handling
//! - Reconciling channel/units/row counts with a recoverable warning trail
//! - Atomic row commits so a rejected row never leaves channels at unequal
//!   lengths
//! - Re-serializing datasets back to the line format for normalization
//! - Comprehensive error handling with cancellation support

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod channel_csv_parser;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Channel, Dataset, FileMetadata};
pub use app::services::channel_csv_parser::{ChannelCsvParser, ParseOutcome, ParseWarning};
pub use config::ReaderConfig;

/// Result type alias for the daqcsv library
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for channel CSV processing operations
///
/// These are the fatal conditions: when one is raised no dataset is produced.
/// Recoverable anomalies are modelled separately as [`ParseWarning`] and never
/// abort a parse.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// First line of the export is absent or blank
    #[error("file is empty or the header line is missing")]
    MissingHeader,

    /// Header line yielded no channel names
    #[error("no channels found in header line")]
    NoChannels,

    /// Second line of the export is absent or blank
    #[error("units line is missing")]
    MissingUnits,

    /// Input exhausted without a single committed data row
    #[error("no data rows found in file")]
    NoDataRows,

    /// Caller-driven abort via the cancellation token
    #[error("parsing cancelled at line {line}")]
    Cancelled { line: usize },

    /// Invalid CLI arguments or refused file operations
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// Post-parse validation failed (strict mode, format probe)
    #[error("validation error: {message}")]
    Validation { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create an I/O error with a simple message
    pub fn io_error(message: impl Into<String>) -> Self {
        let message_str = message.into();
        Self::Io {
            message: message_str.clone(),
            source: std::io::Error::new(std::io::ErrorKind::Other, message_str),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}
