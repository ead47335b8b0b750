//! Convert command implementation
//!
//! Parses an export and writes it back out normalized: units padded to the
//! channel count, rejected rows gone, keyword lines regenerated in stable
//! order. The recoverable anomalies corrected away are logged as warnings.

use std::time::Instant;

use indicatif::HumanDuration;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use super::shared::setup_logging;
use crate::app::services::channel_csv_parser::{write_dataset, ChannelCsvParser};
use crate::cli::args::ConvertArgs;
use crate::config::ReaderConfig;
use crate::{Error, Result};

/// Convert command runner
pub async fn run_convert(args: ConvertArgs, cancel: CancellationToken) -> Result<()> {
    setup_logging(args.get_log_level(), args.quiet)?;
    args.validate()?;

    let config = ReaderConfig::default().with_force_overwrite(args.force);
    if args.output.exists() && !config.force_overwrite {
        return Err(Error::configuration(format!(
            "Output file already exists: {} (use --force to overwrite)",
            args.output.display()
        )));
    }

    let start = Instant::now();
    let parser = ChannelCsvParser::with_cancellation(cancel);
    let outcome = parser.parse_file(&args.input).await;

    if let Some(error) = outcome.error {
        return Err(error);
    }
    let Some(dataset) = outcome.dataset else {
        return Err(Error::validation("parse produced no dataset"));
    };

    for warning in &outcome.warnings {
        warn!("normalized away: {}", warning);
    }

    write_dataset(&dataset, &args.output).await?;
    info!(
        "Converted {} -> {}",
        args.input.display(),
        args.output.display()
    );

    if !args.quiet {
        println!("\n🎉 Conversion complete!");
        println!("   • Channels: {}", dataset.channel_count());
        println!("   • Samples: {}", dataset.sample_count);
        println!("   • Anomalies corrected: {}", outcome.warnings.len());
        println!("   • Output: {}", args.output.display());
        println!("   • Processing time: {}", HumanDuration(start.elapsed()));
    }

    Ok(())
}
