//! Dataset serialization back to the line format
//!
//! The inverse of the parser, used by the `convert` command to write
//! normalized exports: units padded to the channel count, rejected rows
//! gone, keyword lines regenerated from the metadata record. Re-parsing the
//! output yields an equivalent dataset, with NaN samples surviving as blank
//! fields.

use std::path::Path;

use tracing::debug;

use crate::app::models::Dataset;
use crate::constants::{keywords, FIELD_DELIMITER, KEYWORD_MARKER};
use crate::{Error, Result};

/// Render a dataset to the multi-section line format
///
/// Extra keywords are emitted in sorted key order so output is stable
/// run-to-run. Note one format limitation: a dataset whose channels are all
/// unitless would render a blank units line, which the parser treats as
/// missing; exports with at least one unit round-trip losslessly.
pub fn serialize_dataset(dataset: &Dataset) -> String {
    let delimiter = FIELD_DELIMITER.to_string();
    let mut out = String::new();

    let names: Vec<&str> = dataset.channels.iter().map(|c| c.name.as_str()).collect();
    out.push_str(&names.join(&delimiter));
    out.push('\n');

    let units: Vec<&str> = dataset.channels.iter().map(|c| c.unit.as_str()).collect();
    out.push_str(&units.join(&delimiter));
    out.push('\n');

    if let Some(rate) = dataset.metadata.sample_rate {
        out.push_str(&keyword_line(keywords::SAMPLE_RATE, &rate.to_string()));
    }
    if let Some(title) = &dataset.metadata.title {
        out.push_str(&keyword_line(keywords::TITLE, title));
    }
    if let Some(file_name) = &dataset.metadata.file_name {
        out.push_str(&keyword_line(keywords::FILE_NAME, file_name));
    }

    let mut extras: Vec<(&String, &String)> = dataset.metadata.extra.iter().collect();
    extras.sort();
    for (key, value) in extras {
        if value.is_empty() {
            out.push_str(&format!("{}{}\n", KEYWORD_MARKER, key));
        } else {
            out.push_str(&keyword_line(key, value));
        }
    }

    for sample in 0..dataset.sample_count {
        let fields: Vec<String> = dataset
            .channels
            .iter()
            .map(|channel| match channel.values.get(sample) {
                Some(value) if value.is_nan() => String::new(),
                Some(value) => value.to_string(),
                None => String::new(),
            })
            .collect();
        out.push_str(&fields.join(&delimiter));
        out.push('\n');
    }

    out
}

/// Serialize a dataset and write it to disk
pub async fn write_dataset(dataset: &Dataset, path: &Path) -> Result<()> {
    let content = serialize_dataset(dataset);
    debug!(
        "Writing {} channels x {} samples to {}",
        dataset.channel_count(),
        dataset.sample_count,
        path.display()
    );

    tokio::fs::write(path, content)
        .await
        .map_err(|e| Error::io(format!("failed to write {}", path.display()), e))
}

fn keyword_line(key: &str, value: &str) -> String {
    format!("{}{} = {}\n", KEYWORD_MARKER, key, value)
}
