//! Command-line argument definitions for daqcsv
//!
//! This module defines the complete CLI interface using the clap derive API.

use crate::constants::DEFAULT_MAX_DISPLAYED_WARNINGS;
use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

/// CLI arguments for the daqcsv channel export tool
///
/// Parses multi-section channel CSV exports from data-acquisition
/// instruments into structured datasets for inspection, validation, and
/// normalization.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "daqcsv",
    version,
    about = "Inspect, validate and normalize channel CSV exports from data-acquisition instruments",
    long_about = "Parses the multi-section channel CSV export format (channel names, units, \
                  keyword metadata, numeric data rows) into structured datasets. Recoverable \
                  anomalies are reported as warnings without losing parsed data; structural \
                  problems fail with a clear message and line number."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for daqcsv
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Parse an export and report channels, metadata and warnings
    Inspect(InspectArgs),
    /// Parse an export and write it back out normalized
    Convert(ConvertArgs),
    /// Probe files for the channel CSV format without full parsing
    Validate(ValidateArgs),
}

/// Arguments for the inspect command
#[derive(Debug, Clone, Parser)]
pub struct InspectArgs {
    /// Channel CSV export to inspect
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Output format for the report
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for the report"
    )]
    pub output_format: OutputFormat,

    /// Exit non-zero when any warning was recorded
    ///
    /// The dataset report is still printed; strict mode only changes the
    /// exit status.
    #[arg(long = "strict", help = "Treat recorded warnings as a failure")]
    pub strict: bool,

    /// Maximum warnings to print in human-readable output
    #[arg(
        long = "max-warnings",
        value_name = "COUNT",
        default_value_t = DEFAULT_MAX_DISPLAYED_WARNINGS,
        help = "Maximum warnings shown in human output"
    )]
    pub max_warnings: usize,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the convert command
#[derive(Debug, Clone, Parser)]
pub struct ConvertArgs {
    /// Channel CSV export to read
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Path for the normalized export
    ///
    /// The output has units padded to the channel count, rejected rows
    /// dropped, and keyword lines regenerated in a stable order.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        help = "Path for the normalized export"
    )]
    pub output: PathBuf,

    /// Force overwrite of an existing output file
    #[arg(long = "force", help = "Force overwrite of an existing output file")]
    pub force: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the validate command
#[derive(Debug, Clone, Parser)]
pub struct ValidateArgs {
    /// Files to probe
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    /// Output format for the verdicts
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for the verdicts"
    )]
    pub output_format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Output format options for machine-readable results
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

/// Map `-v` counts to a log level, with quiet overriding
fn log_level(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// Require that a path exists and is a regular file
fn validate_input_file(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(Error::configuration(format!(
            "Input file does not exist: {}",
            path.display()
        )));
    }
    if !path.is_file() {
        return Err(Error::configuration(format!(
            "Input path is not a file: {}",
            path.display()
        )));
    }
    Ok(())
}

impl InspectArgs {
    /// Validate the inspect command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        validate_input_file(&self.file)
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose, self.quiet)
    }
}

impl ConvertArgs {
    /// Validate the convert command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        validate_input_file(&self.input)?;

        if let Some(parent) = self.output.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                return Err(Error::configuration(format!(
                    "Output directory does not exist: {}",
                    parent.display()
                )));
            }
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose, self.quiet)
    }
}

impl ValidateArgs {
    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_log_level_mapping() {
        assert_eq!(log_level(0, false), "warn");
        assert_eq!(log_level(1, false), "info");
        assert_eq!(log_level(2, false), "debug");
        assert_eq!(log_level(3, false), "trace");
        assert_eq!(log_level(9, false), "trace");
        assert_eq!(log_level(0, true), "error");
    }

    #[test]
    fn test_inspect_args_validation() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "A\nV\n\\TITLE = t\n1.0").unwrap();

        let args = InspectArgs {
            file: temp_file.path().to_path_buf(),
            output_format: OutputFormat::Human,
            strict: false,
            max_warnings: DEFAULT_MAX_DISPLAYED_WARNINGS,
            verbose: 0,
            quiet: false,
        };
        assert!(args.validate().is_ok());

        let mut missing = args.clone();
        missing.file = PathBuf::from("/nonexistent/run.csv");
        assert!(missing.validate().is_err());
    }

    #[test]
    fn test_convert_args_validation() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "A\nV\n\\TITLE = t\n1.0").unwrap();
        let temp_dir = tempfile::tempdir().unwrap();

        let args = ConvertArgs {
            input: temp_file.path().to_path_buf(),
            output: temp_dir.path().join("out.csv"),
            force: false,
            verbose: 0,
            quiet: false,
        };
        assert!(args.validate().is_ok());

        let mut bad_output = args.clone();
        bad_output.output = temp_dir.path().join("missing-dir").join("out.csv");
        assert!(bad_output.validate().is_err());

        let mut bad_input = args;
        bad_input.input = PathBuf::from("/nonexistent/run.csv");
        assert!(bad_input.validate().is_err());
    }

    #[test]
    fn test_command_parsing() {
        let args = Args::parse_from(["daqcsv", "inspect", "run.csv", "--strict"]);
        match args.get_command() {
            Commands::Inspect(inspect) => {
                assert_eq!(inspect.file, PathBuf::from("run.csv"));
                assert!(inspect.strict);
            }
            other => panic!("unexpected command: {:?}", other),
        }

        let args = Args::parse_from(["daqcsv", "convert", "in.csv", "-o", "out.csv", "--force"]);
        match args.get_command() {
            Commands::Convert(convert) => {
                assert!(convert.force);
                assert_eq!(convert.output, PathBuf::from("out.csv"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
