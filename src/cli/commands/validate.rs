//! Validate command implementation
//!
//! Runs the cheap format probe over one or more files and reports a
//! per-file verdict. Exits non-zero when any file fails the probe.

use colored::Colorize;
use serde::Serialize;
use tracing::debug;

use super::shared::setup_logging;
use crate::app::services::channel_csv_parser::ChannelCsvParser;
use crate::cli::args::{OutputFormat, ValidateArgs};
use crate::{Error, Result};

/// Per-file probe verdict
#[derive(Debug, Serialize)]
struct FileVerdict {
    file: String,
    valid: bool,
}

/// Validate command runner
pub async fn run_validate(args: ValidateArgs) -> Result<()> {
    setup_logging(args.get_log_level(), false)?;

    let parser = ChannelCsvParser::new();
    let mut verdicts = Vec::with_capacity(args.files.len());

    for file in &args.files {
        let valid = parser.validate_format(file).await;
        debug!("Probed {}: valid={}", file.display(), valid);
        verdicts.push(FileVerdict {
            file: file.display().to_string(),
            valid,
        });
    }

    let invalid = verdicts.iter().filter(|v| !v.valid).count();

    match args.output_format {
        OutputFormat::Json => {
            let rendered = serde_json::to_string_pretty(&verdicts)
                .map_err(|e| Error::configuration(format!("failed to render JSON report: {}", e)))?;
            println!("{}", rendered);
        }
        OutputFormat::Human => {
            println!();
            for verdict in &verdicts {
                let mark = if verdict.valid {
                    "ok".green()
                } else {
                    "not a channel CSV export".red()
                };
                println!("   • {}: {}", verdict.file, mark);
            }
            println!(
                "\n{} of {} file(s) match the channel CSV format",
                verdicts.len() - invalid,
                verdicts.len()
            );
        }
    }

    if invalid > 0 {
        return Err(Error::validation(format!(
            "{} of {} file(s) failed format validation",
            invalid,
            verdicts.len()
        )));
    }

    Ok(())
}
