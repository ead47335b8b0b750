//! Core channel CSV parser implementation
//!
//! This module provides the main parser orchestration, driving the header,
//! keyword, and data-row phases over a line source and assembling the
//! terminal outcome. Phase transitions are content-driven: the data phase
//! begins on the first non-blank line the keyword phase rejects.

use std::path::Path;

use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use super::header::{build_channels, parse_header_line, parse_units_line};
use super::keyword::apply_keyword_line;
use super::line_source::LineSource;
use super::outcome::{ParseOutcome, ParseWarning};
use super::row::{commit_row, parse_data_row, RowError};
use crate::app::models::{Dataset, FileMetadata};
use crate::constants::{is_blank, is_keyword_line, FORMAT_PROBE_LINES};
use crate::{Error, Result};

/// Parser for multi-section channel CSV exports
///
/// Stateless across invocations: the only field is the cancellation
/// capability, so a single parser value can serve concurrent parses from
/// multiple tasks without locking. Every entry point terminates in a
/// [`ParseOutcome`]; callers never see a raised error.
#[derive(Debug, Clone, Default)]
pub struct ChannelCsvParser {
    cancel: CancellationToken,
}

impl ChannelCsvParser {
    /// Create a parser that runs to completion
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser that aborts at the next line read once `cancel` fires
    pub fn with_cancellation(cancel: CancellationToken) -> Self {
        Self { cancel }
    }

    /// Parse an export file from disk
    ///
    /// A missing or unopenable path becomes a failed outcome with the
    /// wrapped I/O message. On success the outcome's dataset carries the
    /// source path.
    pub async fn parse_file(&self, path: &Path) -> ParseOutcome {
        info!("Parsing channel CSV file: {}", path.display());

        let file = match File::open(path).await {
            Ok(file) => file,
            Err(e) => {
                return ParseOutcome::failure(
                    Error::io(format!("failed to open {}", path.display()), e),
                    Vec::new(),
                );
            }
        };

        let mut outcome = self.parse_stream(file).await;
        if let Some(dataset) = outcome.dataset.as_mut() {
            dataset.source_file_path = Some(path.to_path_buf());
        }
        outcome
    }

    /// Parse an export from any byte stream
    ///
    /// This is the core entry point; `parse_file` delegates here. The
    /// stream is read line by line with no look-ahead, and is dropped
    /// before the call returns on every path.
    pub async fn parse_stream<R: AsyncRead + Unpin>(&self, reader: R) -> ParseOutcome {
        let mut warnings = Vec::new();
        let mut source = LineSource::new(reader, self.cancel.clone());

        match self.run_phases(&mut source, &mut warnings).await {
            Ok(dataset) => {
                info!(
                    "Parsed {} channels x {} samples with {} warnings",
                    dataset.channel_count(),
                    dataset.sample_count,
                    warnings.len()
                );
                ParseOutcome::success(dataset, warnings)
            }
            Err(error) => {
                warn!("Parse failed: {}", error);
                ParseOutcome::failure(error, warnings)
            }
        }
    }

    /// Cheap format probe, separate from full parsing
    ///
    /// Reads up to three lines and reports whether a header line, a units
    /// line, and at least one keyword line are present and non-blank. Any
    /// I/O failure or missing line yields false; this never errors.
    pub async fn validate_format(&self, path: &Path) -> bool {
        let file = match File::open(path).await {
            Ok(file) => file,
            Err(_) => return false,
        };
        let mut lines = BufReader::new(file).lines();

        for position in 0..FORMAT_PROBE_LINES {
            let line = match lines.next_line().await {
                Ok(Some(line)) => line,
                _ => return false,
            };
            if is_blank(&line) {
                return false;
            }
            // The third probe line must be keyword metadata, not data.
            if position == FORMAT_PROBE_LINES - 1 && !is_keyword_line(&line) {
                return false;
            }
        }

        true
    }

    /// Drive the three phases in order and assemble the dataset
    async fn run_phases<R: AsyncRead + Unpin>(
        &self,
        source: &mut LineSource<R>,
        warnings: &mut Vec<ParseWarning>,
    ) -> Result<Dataset> {
        // Phase 1: header and units lines.
        let header_line = source.next_line().await?.ok_or(Error::MissingHeader)?;
        if is_blank(&header_line) {
            return Err(Error::MissingHeader);
        }
        let names = parse_header_line(&header_line);
        if names.is_empty() {
            return Err(Error::NoChannels);
        }

        let units_line = source
            .next_line()
            .await?
            .filter(|line| !is_blank(line))
            .ok_or(Error::MissingUnits)?;
        let units = parse_units_line(&units_line);
        let mut channels = build_channels(names, &units, warnings);
        debug!("Parsed header: {} channels", channels.len());

        // Phase 2: keyword metadata. Ends at the first non-blank line that
        // carries no marker; that line is handed to the row phase unconsumed.
        let mut metadata = FileMetadata::default();
        let mut carried: Option<String> = None;

        while let Some(line) = source.next_line().await? {
            if is_blank(&line) {
                continue;
            }
            if !is_keyword_line(&line) {
                carried = Some(line);
                break;
            }
            if let Err(e) = apply_keyword_line(&line, &mut metadata) {
                warnings.push(ParseWarning::InvalidMetadataValue {
                    line: source.line_number(),
                    keyword: e.keyword,
                    value: e.value,
                });
            }
        }

        // Phase 3: data rows, starting with the carried-over line.
        let expected = channels.len();
        let mut sample_count = 0usize;
        let mut pending = carried;

        loop {
            let line = match pending.take() {
                Some(line) => line,
                None => match source.next_line().await? {
                    Some(line) => line,
                    None => break,
                },
            };
            if is_blank(&line) {
                continue;
            }

            match parse_data_row(&line, expected) {
                Ok(row) => {
                    commit_row(&mut channels, &row);
                    sample_count += 1;
                }
                Err(RowError::ArityMismatch { expected, actual }) => {
                    warnings.push(ParseWarning::RowArityMismatch {
                        line: source.line_number(),
                        expected,
                        actual,
                    });
                }
                Err(RowError::InvalidNumeric { column, value }) => {
                    warnings.push(ParseWarning::InvalidNumericValue {
                        line: source.line_number(),
                        channel: channels[column].name.clone(),
                        value,
                    });
                }
            }
        }

        if sample_count == 0 {
            return Err(Error::NoDataRows);
        }

        Ok(Dataset::new(channels, metadata, sample_count))
    }
}
