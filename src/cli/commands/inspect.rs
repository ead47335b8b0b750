//! Inspect command implementation
//!
//! Parses one export and reports channels, per-channel display statistics,
//! keyword metadata, and the warning trail, in human-readable or JSON form.

use std::path::Path;
use std::time::Instant;

use colored::Colorize;
use indicatif::HumanDuration;
use serde::Serialize;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use super::shared::{display_warnings, setup_logging, summarize_channel, ChannelSummary};
use crate::app::models::FileMetadata;
use crate::app::services::channel_csv_parser::{ChannelCsvParser, ParseOutcome};
use crate::cli::args::{InspectArgs, OutputFormat};
use crate::config::ReaderConfig;
use crate::{Error, Result};

/// Machine-readable inspect report
#[derive(Debug, Serialize)]
struct InspectReport {
    file: String,
    success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    sample_count: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<FileMetadata>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    channels: Vec<ChannelSummary>,

    warnings: Vec<String>,
}

impl InspectReport {
    fn from_outcome(path: &Path, outcome: &ParseOutcome) -> Self {
        let dataset = outcome.dataset.as_ref();
        Self {
            file: path.display().to_string(),
            success: outcome.is_success(),
            error: outcome.error_message(),
            sample_count: dataset.map(|d| d.sample_count),
            metadata: dataset.map(|d| d.metadata.clone()),
            channels: dataset
                .map(|d| d.channels.iter().map(summarize_channel).collect())
                .unwrap_or_default(),
            warnings: outcome.warnings.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Inspect command runner
pub async fn run_inspect(args: InspectArgs, cancel: CancellationToken) -> Result<()> {
    setup_logging(args.get_log_level(), args.quiet)?;
    args.validate()?;

    let config = ReaderConfig::default()
        .with_strict(args.strict)
        .with_max_displayed_warnings(args.max_warnings);
    debug!("Inspect configuration: {:?}", config);

    let start = Instant::now();
    let parser = ChannelCsvParser::with_cancellation(cancel);
    let mut outcome = parser.parse_file(&args.file).await;

    info!("Inspect finished in {:?}", start.elapsed());

    match args.output_format {
        OutputFormat::Json => {
            let report = InspectReport::from_outcome(&args.file, &outcome);
            let rendered = serde_json::to_string_pretty(&report)
                .map_err(|e| Error::configuration(format!("failed to render JSON report: {}", e)))?;
            println!("{}", rendered);
        }
        OutputFormat::Human => {
            print_human_report(&args.file, &outcome, &config, start);
        }
    }

    if let Some(error) = outcome.error.take() {
        return Err(error);
    }

    if config.strict && !outcome.warnings.is_empty() {
        return Err(Error::validation(format!(
            "strict mode: {} warning(s) recorded",
            outcome.warnings.len()
        )));
    }

    Ok(())
}

fn print_human_report(path: &Path, outcome: &ParseOutcome, config: &ReaderConfig, start: Instant) {
    println!("\n📋 Channel CSV Report");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("   • File: {}", path.display());

    let Some(dataset) = outcome.dataset.as_ref() else {
        if let Some(message) = outcome.error_message() {
            println!("   • Result: {}", format!("failed - {}", message).red());
        }
        display_warnings(&outcome.warnings, config.max_displayed_warnings);
        return;
    };

    println!("   • Result: {}", "parsed".green());
    println!("   • Channels: {}", dataset.channel_count());
    println!("   • Samples: {}", dataset.sample_count);
    println!("   • Loaded in: {}", HumanDuration(start.elapsed()));

    if !dataset.metadata.is_empty() {
        println!("\n🏷️  Metadata:");
        if let Some(title) = &dataset.metadata.title {
            println!("   • Title: {}", title);
        }
        if let Some(rate) = dataset.metadata.sample_rate {
            println!("   • Sample rate: {} Hz", rate);
        }
        if let Some(file_name) = &dataset.metadata.file_name {
            println!("   • File name: {}", file_name);
        }
        let mut extras: Vec<(&String, &String)> = dataset.metadata.extra.iter().collect();
        extras.sort();
        for (key, value) in extras {
            if value.is_empty() {
                println!("   • {}", key);
            } else {
                println!("   • {}: {}", key, value);
            }
        }
    }

    println!("\n📈 Channels:");
    for channel in &dataset.channels {
        let summary = summarize_channel(channel);
        let unit = if summary.unit.is_empty() {
            String::new()
        } else {
            format!(" [{}]", summary.unit)
        };

        match (summary.min, summary.max, summary.mean) {
            (Some(min), Some(max), Some(mean)) => {
                println!(
                    "   • {}{}: {} samples, min {:.4}, max {:.4}, mean {:.4}",
                    summary.name, unit, summary.samples, min, max, mean
                );
            }
            _ => {
                println!(
                    "   • {}{}: {} samples, all readings missing",
                    summary.name, unit, summary.samples
                );
            }
        }
        if summary.missing > 0 {
            println!("     ({} missing readings)", summary.missing);
        }
    }

    display_warnings(&outcome.warnings, config.max_displayed_warnings);
}
