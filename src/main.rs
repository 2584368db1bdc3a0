//! Java Crash ID CLI
//!
//! Computes stable fingerprints for Android/JVM stack traces so that
//! duplicate crashes can be grouped together.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use java_crash_id::commands::{
    display_schema, display_version, execute_fingerprint, execute_inspect, validate_args,
    validate_report_file, FingerprintArgs,
};

/// Java Crash ID - fingerprints for Java stack traces
#[derive(Parser, Debug)]
#[command(name = "java-crash-id")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Fingerprint a stack trace
    Fingerprint {
        /// Trace file (reads stdin when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Print the raw canonical string instead of the SHA-1 digest
        #[arg(long)]
        raw: bool,

        /// Output path for a JSON crash report (optional)
        #[arg(short, long)]
        json: Option<PathBuf>,
    },

    /// Show how each line of a trace is classified
    Inspect {
        /// Trace file (reads stdin when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Validate a crash report JSON file
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so fingerprints on stdout stay pipeable
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Fingerprint { input, raw, json } => {
            let args = FingerprintArgs {
                input,
                raw,
                output_json: json,
            };

            validate_args(&args)?;
            execute_fingerprint(args)?;
        }

        Commands::Inspect { input } => {
            execute_inspect(input.as_deref())?;
        }

        Commands::Validate { file } => {
            validate_report_file(file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
