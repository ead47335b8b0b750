//! Header and units line parsing
//!
//! The first two lines of an export carry the channel names and their units.
//! This module parses both grammars and reconciles their counts before any
//! channel is built.

use super::outcome::ParseWarning;
use crate::app::models::Channel;
use crate::constants::FIELD_DELIMITER;

/// Parse the header line into the ordered channel-name list
///
/// Fields are trimmed; empty fields are dropped, so a trailing comma does
/// not manufacture a nameless channel.
pub fn parse_header_line(line: &str) -> Vec<String> {
    line.split(FIELD_DELIMITER)
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse the units line into a positional unit list
///
/// Unlike the header, empty fields are KEPT: units align with channels by
/// position, and `V,,bar` means the middle channel is unitless.
pub fn parse_units_line(line: &str) -> Vec<String> {
    line.split(FIELD_DELIMITER)
        .map(|f| f.trim().to_string())
        .collect()
}

/// Build the channel list from reconciled names and units
///
/// A units list shorter than the channel list records one warning and the
/// missing positions get empty units. A longer units list is accepted
/// silently and the surplus entries are ignored; the asymmetry is
/// deliberate and pinned by tests.
pub fn build_channels(
    names: Vec<String>,
    units: &[String],
    warnings: &mut Vec<ParseWarning>,
) -> Vec<Channel> {
    if units.len() < names.len() {
        warnings.push(ParseWarning::UnitsCountMismatch {
            expected: names.len(),
            actual: units.len(),
        });
    }

    names
        .into_iter()
        .enumerate()
        .map(|(index, name)| {
            let unit = units.get(index).cloned().unwrap_or_default();
            Channel::new(name, unit, index)
        })
        .collect()
}
