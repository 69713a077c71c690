//! Convert command implementation.
//!
//! The convert command:
//! 1. Reads the CSV scheduler log
//! 2. Expands implicit preemptions into explicit events
//! 3. Filters zero-duration intervals
//! 4. Maps events to trace viewer records
//! 5. Writes the JSON output file
//!
//! On a stack-consistency violation the pipeline aborts before the
//! output file is created, so a failed run never leaves partial output.

use crate::expander::{expand_preemptions, filter_zero_duration};
use crate::output::{to_trace_records, write_trace};
use crate::parser::read_log;
use crate::utils::config::{DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_FILE};
use anyhow::{Context, Result};
use log::{debug, info};
use std::path::PathBuf;

/// Arguments for the convert command
///
/// **Public** - constructed from CLI args in main.rs; an explicit
/// configuration value built once at startup, no ambient defaults.
#[derive(Debug, Clone)]
pub struct ConvertArgs {
    /// Path to the input CSV log
    pub input: PathBuf,

    /// Path for the output JSON trace
    pub output: PathBuf,

    /// Reject phase flags outside {"0","1"} instead of reading
    /// unknown values as End
    pub strict_phase: bool,
}

impl Default for ConvertArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT_FILE),
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            strict_phase: false,
        }
    }
}

/// Execute the convert command
///
/// **Public** - main entry point called from main.rs
///
/// # Arguments
/// * `args` - Convert command arguments
///
/// # Returns
/// Ok if conversion succeeds, Err with context if any step fails
///
/// # Errors
/// * Log read/parse errors
/// * Stack-consistency violations during expansion
/// * File write errors
pub fn execute_convert(args: ConvertArgs) -> Result<()> {
    info!("Converting log: {}", args.input.display());

    // Step 1: Read the raw log
    info!("Step 1/4: Reading scheduler log...");
    let raw_events = read_log(&args.input, args.strict_phase)
        .with_context(|| format!("Failed to read log {}", args.input.display()))?;

    debug!("Read {} raw events", raw_events.len());

    // Step 2: Expand preemptions. Aborting here means the output
    // file is never created.
    info!("Step 2/4: Expanding preemptions...");
    let expanded = expand_preemptions(&raw_events).context("Inconsistent scheduler log")?;

    debug!(
        "Expansion added {} synthetic events",
        expanded.len() - raw_events.len()
    );

    // Step 3: Filter zero-duration intervals
    info!("Step 3/4: Filtering zero-duration intervals...");
    let filtered = filter_zero_duration(expanded);

    // Step 4: Format and write
    info!("Step 4/4: Writing trace JSON...");
    let records = to_trace_records(&filtered);

    write_trace(&records, &args.output)
        .with_context(|| format!("Failed to write trace {}", args.output.display()))?;

    info!(
        "✓ Trace written to: {} ({} records)",
        args.output.display(),
        records.len()
    );

    Ok(())
}

/// Validate convert arguments
///
/// **Public** - can be called before execute_convert for early validation
///
/// # Returns
/// Ok if arguments are valid, Err with message if not
pub fn validate_args(args: &ConvertArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Input path cannot be empty");
    }

    if args.output.as_os_str().is_empty() {
        anyhow::bail!("Output path cannot be empty");
    }

    Ok(())
}
