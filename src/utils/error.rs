//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while parsing the CSV log
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to read log file: {0}")]
    ReadFailed(#[from] std::io::Error),

    #[error("Line {line}: expected 3 columns, found {found}")]
    WrongColumnCount { line: usize, found: usize },

    #[error("Line {line}: invalid task id '{value}'")]
    InvalidTaskId { line: usize, value: String },

    #[error("Line {line}: invalid timestamp '{value}'")]
    InvalidTimestamp { line: usize, value: String },

    #[error("Line {line}: phase flag '{value}' is not \"0\" or \"1\"")]
    InvalidPhaseFlag { line: usize, value: String },
}

/// Consistency violations detected during preemption expansion
///
/// Any of these aborts the run before the output file is created.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ExpandError {
    #[error(
        "ending task {task} is not the currently running task {running} (at timestamp {timestamp})"
    )]
    TaskMismatch {
        task: u64,
        running: u64,
        timestamp: i64,
    },

    #[error("task {task} ends at timestamp {timestamp} but no task is active")]
    EndWithoutActive { task: u64, timestamp: i64 },
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
