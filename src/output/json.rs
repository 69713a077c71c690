//! JSON trace output writer.
//!
//! Writes the full ordered record sequence as one pretty-printed
//! JSON array, the format the Chrome trace viewer loads directly.

use crate::output::schema::TraceRecord;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Write trace records to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Arguments
/// * `records` - Ordered records to write
/// * `output_path` - Path to output JSON file
///
/// # Returns
/// Ok if file written successfully; an empty slice writes `[]`.
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_trace(
    records: &[TraceRecord],
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing trace to: {}", output_path.display());

    validate_output_path(output_path)?;

    // Create parent directories if needed
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, records).map_err(OutputError::SerializationFailed)?;

    info!("Trace written successfully ({} records)", records.len());

    Ok(())
}

/// Read trace records back from a JSON file
///
/// **Public** - useful for validation and testing
///
/// # Errors
/// * `OutputError::WriteFailed` - File read error (reusing WriteFailed for I/O)
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_trace(input_path: impl AsRef<Path>) -> Result<Vec<TraceRecord>, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading trace from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::WriteFailed)?;
    let records: Vec<TraceRecord> =
        serde_json::from_reader(file).map_err(OutputError::SerializationFailed)?;

    debug!("Trace loaded: {} records", records.len());

    Ok(records)
}

/// Validate that output path is writable
///
/// **Private** - internal validation
fn validate_output_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}
