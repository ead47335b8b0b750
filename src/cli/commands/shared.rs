//! Shared helpers for daqcsv commands
//!
//! Logging setup and the reporting structures used by both human-readable
//! and JSON output paths.

use colored::Colorize;
use serde::Serialize;
use tracing::debug;

use crate::app::models::Channel;
use crate::app::services::channel_csv_parser::ParseWarning;
use crate::Result;

/// Set up structured logging to stderr
///
/// Respects `RUST_LOG` when set; otherwise filters to this crate at the
/// level derived from the command's verbosity flags.
pub fn setup_logging(log_level: &str, quiet: bool) -> Result<()> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("daqcsv={}", log_level)));

    if quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Display statistics for one channel, NaN samples excluded
#[derive(Debug, Clone, Serialize)]
pub struct ChannelSummary {
    pub name: String,
    pub unit: String,
    pub samples: usize,

    /// Samples recorded as no-reading (blank field in the export)
    pub missing: usize,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mean: Option<f64>,
}

/// Compute display statistics over a channel's finite samples
pub fn summarize_channel(channel: &Channel) -> ChannelSummary {
    let mut count = 0usize;
    let mut sum = 0.0;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;

    for value in channel.finite() {
        count += 1;
        sum += value;
        min = min.min(value);
        max = max.max(value);
    }

    let (min, max, mean) = if count > 0 {
        (Some(min), Some(max), Some(sum / count as f64))
    } else {
        (None, None, None)
    };

    ChannelSummary {
        name: channel.name.clone(),
        unit: channel.unit.clone(),
        samples: channel.len(),
        missing: channel.len() - count,
        min,
        max,
        mean,
    }
}

/// Print the warning trail, capped at `max` entries
pub fn display_warnings(warnings: &[ParseWarning], max: usize) {
    if warnings.is_empty() {
        return;
    }

    println!(
        "\n{}",
        format!("⚠️  Warnings recorded: {}", warnings.len()).yellow()
    );
    for warning in warnings.iter().take(max) {
        println!("   • {}", warning.to_string().yellow());
    }
    if warnings.len() > max {
        println!("   … and {} more (raise --max-warnings)", warnings.len() - max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_over_finite_samples() {
        let mut channel = Channel::new("Force", "N", 0);
        channel.values = vec![1.0, f64::NAN, 3.0];

        let summary = summarize_channel(&channel);

        assert_eq!(summary.samples, 3);
        assert_eq!(summary.missing, 1);
        assert_eq!(summary.min, Some(1.0));
        assert_eq!(summary.max, Some(3.0));
        assert_eq!(summary.mean, Some(2.0));
    }

    #[test]
    fn test_summary_of_all_missing_channel() {
        let mut channel = Channel::new("Force", "N", 0);
        channel.values = vec![f64::NAN, f64::NAN];

        let summary = summarize_channel(&channel);

        assert_eq!(summary.samples, 2);
        assert_eq!(summary.missing, 2);
        assert_eq!(summary.min, None);
        assert_eq!(summary.max, None);
        assert_eq!(summary.mean, None);
    }
}
