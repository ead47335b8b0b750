//! Data row parsing with atomic commit
//!
//! A row is parsed into a temporary buffer first and committed to the
//! channels only when every field is either numeric or legitimately blank.
//! A rejected row therefore contributes nothing to any channel, and all
//! channels stay the same length after every input line.

use crate::app::models::Channel;
use crate::constants::FIELD_DELIMITER;

/// Why a data row was rejected
#[derive(Debug, Clone, PartialEq)]
pub enum RowError {
    /// Field count differs from the channel count
    ArityMismatch { expected: usize, actual: usize },

    /// A field was non-blank but not a number; `column` indexes the channel
    InvalidNumeric { column: usize, value: String },
}

/// Parse one data line into a buffer of one value per channel
///
/// A blank field is a legitimate "no reading" marker and becomes NaN with
/// no warning. Numeric syntax is the host float grammar
/// (`str::parse::<f64>`), so scientific notation parses and localized
/// decimal separators do not.
pub fn parse_data_row(line: &str, channel_count: usize) -> Result<Vec<f64>, RowError> {
    let fields: Vec<&str> = line.split(FIELD_DELIMITER).map(str::trim).collect();

    if fields.len() != channel_count {
        return Err(RowError::ArityMismatch {
            expected: channel_count,
            actual: fields.len(),
        });
    }

    let mut row = Vec::with_capacity(channel_count);
    for (column, field) in fields.iter().enumerate() {
        if field.is_empty() {
            row.push(f64::NAN);
            continue;
        }

        match field.parse::<f64>() {
            Ok(value) => row.push(value),
            Err(_) => {
                return Err(RowError::InvalidNumeric {
                    column,
                    value: (*field).to_string(),
                });
            }
        }
    }

    Ok(row)
}

/// Append a fully parsed row to the channels, one value each
pub fn commit_row(channels: &mut [Channel], row: &[f64]) {
    for (channel, value) in channels.iter_mut().zip(row) {
        channel.values.push(*value);
    }
}
