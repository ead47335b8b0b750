//! Integration tests for the channel CSV parser over real files
//!
//! These tests drive the public API end-to-end: exports written to disk,
//! parsed through `parse_file`, probed with `validate_format`, and
//! round-tripped through the serializer.

use std::io::Write;

use daqcsv::app::services::channel_csv_parser::{serialize_dataset, write_dataset};
use daqcsv::{ChannelCsvParser, Dataset, ParseWarning};
use tempfile::TempDir;

/// Write an export into the directory and return its path
fn write_export(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    write!(file, "{}", content).unwrap();
    path
}

fn assert_equivalent(left: &Dataset, right: &Dataset) {
    assert_eq!(left.sample_count, right.sample_count);
    assert_eq!(left.metadata, right.metadata);
    assert_eq!(left.channel_count(), right.channel_count());
    for (a, b) in left.channels.iter().zip(&right.channels) {
        assert_eq!(a.name, b.name);
        assert_eq!(a.unit, b.unit);
        for (x, y) in a.values.iter().zip(&b.values) {
            assert!((x.is_nan() && y.is_nan()) || x == y);
        }
    }
}

#[tokio::test]
async fn test_parse_clean_export_from_disk() {
    let dir = TempDir::new().unwrap();
    let path = write_export(
        &dir,
        "capture.csv",
        "Force,Position,Temp\n\
         N,mm,C\n\
         \\SAMPLE RATE = 500\n\
         \\TITLE = Bracket fatigue 12\n\
         \\RIG = B\n\
         10.1,0.50,21.3\n\
         10.9,0.52,21.4\n\
         11.6,0.55,21.4\n\
         12.2,0.59,21.5\n",
    );

    let parser = ChannelCsvParser::new();
    let outcome = parser.parse_file(&path).await;

    assert!(outcome.is_success());
    assert!(outcome.warnings.is_empty());

    let dataset = outcome.dataset.unwrap();
    assert_eq!(dataset.channel_count(), 3);
    assert_eq!(dataset.sample_count, 4);
    assert_eq!(dataset.source_file_path.as_deref(), Some(path.as_path()));
    assert_eq!(dataset.metadata.sample_rate, Some(500.0));
    assert_eq!(dataset.metadata.title.as_deref(), Some("Bracket fatigue 12"));
    assert_eq!(dataset.metadata.extra.get("RIG").map(String::as_str), Some("B"));

    let force = dataset.channel("Force").unwrap();
    assert_eq!(force.values, vec![10.1, 10.9, 11.6, 12.2]);

    // Every channel honors the sample-count invariant.
    for channel in &dataset.channels {
        assert_eq!(channel.len(), dataset.sample_count);
    }
}

#[tokio::test]
async fn test_parse_degraded_export_keeps_usable_data() {
    // An export with every recoverable defect at once: the dataset survives
    // and the warning trail explains what was corrected.
    let dir = TempDir::new().unwrap();
    let path = write_export(
        &dir,
        "degraded.csv",
        "Load,Extension\n\
         kN\n\
         \\SAMPLE RATE = quick\n\
         \\TITLE = Damaged logger\n\
         \n\
         1.0,0.1\n\
         2.0\n\
         3.0,bad,5.0\n\
         4.0,x1\n\
         5.0,0.5\n\
         6.0,\n",
    );

    let parser = ChannelCsvParser::new();
    let outcome = parser.parse_file(&path).await;

    assert!(outcome.is_success());
    let dataset = outcome.dataset.unwrap();

    assert_eq!(dataset.sample_count, 3);
    assert_eq!(dataset.channel("Load").unwrap().values, vec![1.0, 5.0, 6.0]);
    let extension = dataset.channel("Extension").unwrap();
    assert_eq!(extension.unit, "");
    assert_eq!(extension.values[0], 0.1);
    assert_eq!(extension.values[1], 0.5);
    assert!(extension.values[2].is_nan());

    assert_eq!(outcome.warnings.len(), 5);
    assert!(matches!(
        outcome.warnings[0],
        ParseWarning::UnitsCountMismatch {
            expected: 2,
            actual: 1,
        }
    ));
    assert!(matches!(
        outcome.warnings[1],
        ParseWarning::InvalidMetadataValue { line: 3, .. }
    ));
    assert!(matches!(
        outcome.warnings[2],
        ParseWarning::RowArityMismatch { line: 7, actual: 1, .. }
    ));
    assert!(matches!(
        outcome.warnings[3],
        ParseWarning::RowArityMismatch { line: 8, actual: 3, .. }
    ));
    assert!(matches!(
        outcome.warnings[4],
        ParseWarning::InvalidNumericValue { line: 9, .. }
    ));
}

#[tokio::test]
async fn test_headerless_file_fails_without_dataset() {
    let dir = TempDir::new().unwrap();
    let path = write_export(&dir, "empty.csv", "");

    let parser = ChannelCsvParser::new();
    let outcome = parser.parse_file(&path).await;

    assert!(!outcome.is_success());
    assert!(outcome.dataset.is_none());
    assert_eq!(
        outcome.error_message().as_deref(),
        Some("file is empty or the header line is missing")
    );
}

#[tokio::test]
async fn test_missing_file_reports_wrapped_io_error() {
    let parser = ChannelCsvParser::new();
    let outcome = parser
        .parse_file(std::path::Path::new("/nonexistent/capture.csv"))
        .await;

    assert!(!outcome.is_success());
    let message = outcome.error_message().unwrap();
    assert!(message.contains("/nonexistent/capture.csv"), "{}", message);
}

#[tokio::test]
async fn test_validate_format_probe_on_disk() {
    let dir = TempDir::new().unwrap();
    let parser = ChannelCsvParser::new();

    let complete = write_export(
        &dir,
        "complete.csv",
        "A,B\nV,V\n\\TITLE = t\nanything at all\n",
    );
    let no_keywords = write_export(&dir, "bare.csv", "A,B\nV,V\n1.0,2.0\n");
    let two_lines = write_export(&dir, "short.csv", "A,B\nV,V\n");

    // The probe only checks the preamble, so later content is irrelevant.
    assert!(parser.validate_format(&complete).await);
    assert!(!parser.validate_format(&no_keywords).await);
    assert!(!parser.validate_format(&two_lines).await);
}

#[tokio::test]
async fn test_convert_style_round_trip_on_disk() {
    let dir = TempDir::new().unwrap();
    let source = write_export(
        &dir,
        "messy.csv",
        "Volt,Amp\n\
         V\n\
         \\TITLE = Supply sweep\n\
         \\PROBE = P7\n\
         1.00,0.10\n\
         not,numbers\n\
         2.00,\n",
    );

    let parser = ChannelCsvParser::new();
    let original = parser.parse_file(&source).await.dataset.unwrap();

    // Normalize to disk the way the convert command does.
    let normalized = dir.path().join("normalized.csv");
    write_dataset(&original, &normalized).await.unwrap();

    // The normalized file parses without a single warning.
    let outcome = parser.parse_file(&normalized).await;
    assert!(outcome.is_success());
    assert!(outcome.warnings.is_empty());
    assert_equivalent(&original, &outcome.dataset.unwrap());

    // And its text matches the in-memory serializer output.
    let written = std::fs::read_to_string(&normalized).unwrap();
    assert_eq!(written, serialize_dataset(&original));
}

#[tokio::test]
async fn test_concurrent_parses_share_one_parser() {
    // The parser is stateless across invocations; one value serves
    // concurrent parses of different inputs.
    let dir = TempDir::new().unwrap();
    let first = write_export(&dir, "a.csv", "A\nV\n\\TITLE = a\n1\n2\n");
    let second = write_export(&dir, "b.csv", "B\nV\n\\TITLE = b\n3\n4\n5\n");

    let parser = ChannelCsvParser::new();
    let (left, right) = tokio::join!(parser.parse_file(&first), parser.parse_file(&second));

    assert_eq!(left.dataset.unwrap().sample_count, 2);
    assert_eq!(right.dataset.unwrap().sample_count, 3);
}
