//! Parser for multi-section channel CSV exports
//!
//! This module provides the parser for the comma-delimited export format
//! written by data-acquisition instruments: a channel-name line, a units
//! line, marker-prefixed keyword metadata lines, then numeric data rows.
//! Recoverable anomalies become an ordered warning trail; only structural
//! failures (missing mandatory lines, zero channels, zero rows, I/O) abort
//! a parse.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`parser`] - Phase orchestration and the public entry points
//! - [`line_source`] - Pull-based line reading with position tracking and
//!   cancellation
//! - [`header`] - Channel-name and units line parsing with count
//!   reconciliation
//! - [`keyword`] - Keyword metadata lines and the handler dispatch table
//! - [`row`] - Data rows with buffered, atomic commits
//! - [`outcome`] - Terminal outcome and warning structures
//! - [`serializer`] - Dataset back to the line format
//!
//! ## Usage
//!
//! ```rust
//! use daqcsv::ChannelCsvParser;
//!
//! # async fn example() {
//! let parser = ChannelCsvParser::new();
//! let outcome = parser
//!     .parse_stream("Force,Position\nN,mm\n\\TITLE = Run 4\n1.0,2.0\n".as_bytes())
//!     .await;
//!
//! let dataset = outcome.dataset.expect("well-formed export");
//! println!(
//!     "{} channels x {} samples",
//!     dataset.channel_count(),
//!     dataset.sample_count
//! );
//! # }
//! ```

pub mod header;
pub mod keyword;
pub mod line_source;
pub mod outcome;
pub mod parser;
pub mod row;
pub mod serializer;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use line_source::LineSource;
pub use outcome::{ParseOutcome, ParseWarning};
pub use parser::ChannelCsvParser;
pub use serializer::{serialize_dataset, write_dataset};
