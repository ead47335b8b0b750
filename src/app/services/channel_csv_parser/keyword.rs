//! Keyword metadata line parsing
//!
//! Keyword lines are marker-prefixed `\KEY = VALUE` facts between the units
//! line and the data rows. A small set of keywords has dedicated metadata
//! fields; everything else falls through to an open key/value bag.

use crate::app::models::FileMetadata;
use crate::constants::{keywords, KEYWORD_MARKER, KEYWORD_SEPARATOR};

/// A recognized keyword whose value could not be applied
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordError {
    pub keyword: String,
    pub value: String,
}

type KeywordHandler = fn(&mut FileMetadata, &str) -> Result<(), KeywordError>;

/// Dispatch table for keywords with dedicated fields
///
/// Adding a keyword means adding a row here; unmatched keys take the
/// extra-map path in [`apply_keyword_line`].
const KEYWORD_HANDLERS: &[(&str, KeywordHandler)] = &[
    (keywords::SAMPLE_RATE, set_sample_rate),
    (keywords::TITLE, set_title),
    (keywords::FILE_NAME, set_file_name),
];

fn set_sample_rate(metadata: &mut FileMetadata, value: &str) -> Result<(), KeywordError> {
    let rate = value.parse::<f64>().map_err(|_| KeywordError {
        keyword: keywords::SAMPLE_RATE.to_string(),
        value: value.to_string(),
    })?;
    metadata.sample_rate = Some(rate);
    Ok(())
}

fn set_title(metadata: &mut FileMetadata, value: &str) -> Result<(), KeywordError> {
    metadata.title = Some(value.to_string());
    Ok(())
}

fn set_file_name(metadata: &mut FileMetadata, value: &str) -> Result<(), KeywordError> {
    metadata.file_name = Some(value.to_string());
    Ok(())
}

/// Apply one marker-prefixed line to the metadata record
///
/// Leading markers are stripped, the content split on the first `=`.
/// Without a separator the whole content is stored as a bare flag in the
/// extra map. With one, the uppercased key dispatches through the handler
/// table, falling back to the extra map (last write wins). A handler
/// rejection leaves the record exactly as it was.
pub fn apply_keyword_line(line: &str, metadata: &mut FileMetadata) -> Result<(), KeywordError> {
    let content = line.trim_start_matches(KEYWORD_MARKER).trim();

    let Some((key, value)) = content.split_once(KEYWORD_SEPARATOR) else {
        metadata.extra.insert(content.to_uppercase(), String::new());
        return Ok(());
    };

    let key = key.trim().to_uppercase();
    let value = value.trim();

    match KEYWORD_HANDLERS.iter().find(|(name, _)| *name == key) {
        Some((_, handler)) => handler(metadata, value),
        None => {
            metadata.extra.insert(key, value.to_string());
            Ok(())
        }
    }
}
