use clap::Parser;
use daqcsv::cli::{args::Args, commands};
use std::process;
use tokio_util::sync::CancellationToken;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    // Create async runtime and run the main command logic with signal handling
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(async {
        // Cancellation token checked by the parser at every line read
        let cancellation_token = CancellationToken::new();

        // Cancel in-flight parsing when Ctrl+C is received; the command then
        // finishes with the distinct cancelled outcome.
        let signal_token = cancellation_token.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                eprintln!("\nReceived CTRL+C, shutting down gracefully...");
                signal_token.cancel();
            }
        });

        commands::run(args, cancellation_token).await
    });

    match result {
        Ok(()) => {
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("daqcsv - Channel CSV Export Tool");
    println!("================================");
    println!();
    println!("Parse multi-section channel CSV exports from data-acquisition");
    println!("instruments into structured datasets for inspection and reuse.");
    println!();
    println!("USAGE:");
    println!("    daqcsv <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    inspect     Parse an export and report channels, metadata and warnings");
    println!("    convert     Parse an export and write it back out normalized");
    println!("    validate    Probe files for the channel CSV format");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Inspect an export:");
    println!("    daqcsv inspect capture.csv");
    println!();
    println!("    # Fail the pipeline when an export needed corrections:");
    println!("    daqcsv inspect capture.csv --strict");
    println!();
    println!("    # Normalize a messy export:");
    println!("    daqcsv convert capture.csv --output clean.csv");
    println!();
    println!("    # Probe a batch of files:");
    println!("    daqcsv validate exports/*.csv");
    println!();
    println!("For detailed help on any command, use:");
    println!("    daqcsv <COMMAND> --help");
}
