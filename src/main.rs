//! Task Trace Studio CLI
//!
//! Converts cooperative task scheduler logs (CSV) into Chrome trace
//! viewer JSON, inserting explicit events for implicit preemptions.

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use std::path::PathBuf;

use task_trace_studio::commands::{execute_convert, validate_args, ConvertArgs};
use task_trace_studio::utils::config::{DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_FILE};

/// Task Trace Studio - scheduler log to trace viewer JSON
#[derive(Parser, Debug)]
#[command(name = "task-trace")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Input CSV log file
    #[arg(default_value = DEFAULT_INPUT_FILE)]
    input: PathBuf,

    /// Output JSON trace file
    #[arg(default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    /// Reject phase flags other than "0"/"1" instead of reading them as End
    #[arg(long)]
    strict_phase: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Configuration is built once here and passed in explicitly
    let args = ConvertArgs {
        input: cli.input,
        output: cli.output,
        strict_phase: cli.strict_phase,
    };

    // Validate args first
    validate_args(&args)?;

    // Execute conversion
    execute_convert(args)?;

    Ok(())
}
