//! Data models for channel CSV exports
//!
//! This module contains the core data structures for representing parsed
//! acquisition data: named channels with ordered samples, the keyword
//! metadata record, and the complete dataset handed to consumers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

// =============================================================================
// Channel
// =============================================================================

/// A single data channel: one named series with a physical unit and one
/// floating-point value per sample
///
/// Channels are created once per header entry and only ever grow during row
/// parsing. A NaN value marks a sample where the instrument recorded no
/// reading (a blank field in the export).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Channel {
    /// Channel name from the header line
    pub name: String,

    /// Physical unit from the units line (empty when the units line was short)
    pub unit: String,

    /// Column index in the export, assigned at creation
    pub index: usize,

    /// Ordered sample values
    pub values: Vec<f64>,
}

impl Channel {
    /// Create an empty channel at the given header position
    pub fn new(name: impl Into<String>, unit: impl Into<String>, index: usize) -> Self {
        Self {
            name: name.into(),
            unit: unit.into(),
            index,
            values: Vec::new(),
        }
    }

    /// Number of samples recorded so far
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when no samples have been recorded
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over finite samples, skipping no-reading (NaN) markers
    ///
    /// Display consumers use this for axis ranges and summary statistics so
    /// missing readings don't poison the aggregates.
    pub fn finite(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied().filter(|v| v.is_finite())
    }
}

// =============================================================================
// File Metadata
// =============================================================================

/// Metadata extracted from the keyword lines of an export
///
/// Fields stay `None` when their keyword never appeared; absence is
/// distinguishable from a present-but-trivial value. Unrecognized keywords
/// land in `extra` with uppercased keys, last write winning.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct FileMetadata {
    /// Acquisition rate from `\SAMPLE RATE =`, in samples per second
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_rate: Option<f64>,

    /// Capture title from `\TITLE =`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Instrument-recorded file name from `\FILENAME =`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,

    /// All other keywords, keys uppercased
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub extra: HashMap<String, String>,
}

impl FileMetadata {
    /// True when no keyword populated any field
    pub fn is_empty(&self) -> bool {
        self.sample_rate.is_none()
            && self.title.is_none()
            && self.file_name.is_none()
            && self.extra.is_empty()
    }
}

// =============================================================================
// Dataset
// =============================================================================

/// Complete parsed dataset containing all channels and metadata
///
/// Invariant on successful parses: every channel holds exactly
/// `sample_count` values. Channel order matches header order and duplicate
/// names are preserved, not merged.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Dataset {
    /// Parsed channels in header order
    pub channels: Vec<Channel>,

    /// Keyword metadata record
    pub metadata: FileMetadata,

    /// Number of committed data rows
    pub sample_count: usize,

    /// When the parse completed
    pub loaded_at: DateTime<Utc>,

    /// Source path, stamped by `parse_file` only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_file_path: Option<PathBuf>,
}

impl Dataset {
    /// Assemble a dataset, stamping the load time
    pub fn new(channels: Vec<Channel>, metadata: FileMetadata, sample_count: usize) -> Self {
        Self {
            channels,
            metadata,
            sample_count,
            loaded_at: Utc::now(),
            source_file_path: None,
        }
    }

    /// Number of channels
    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    /// Look up a channel by name (first match when names repeat)
    pub fn channel(&self, name: &str) -> Option<&Channel> {
        self.channels.iter().find(|c| c.name == name)
    }
}
