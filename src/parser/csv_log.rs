//! CSV scheduler log parser.
//!
//! The log is headerless, three columns per row:
//! `task_id, phase_flag, timestamp`. Phase flag "1" marks a Begin,
//! anything else marks an End (binary encoding from the logging
//! firmware). Malformed numeric fields fail the whole run; the
//! error names the offending line.

use crate::utils::config::{LOG_COLUMN_COUNT, PHASE_FLAG_BEGIN, PHASE_FLAG_END};
use crate::utils::error::ParseError;
use log::debug;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Event kind: a task starting/resuming or stopping/being suspended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Begin,
    End,
}

/// A single task event from the scheduler log
///
/// Used both for raw parsed rows and for the expanded stream that
/// includes synthetic preemption/resumption entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskEvent {
    /// Task identifier from the log
    pub task_id: u64,

    /// Begin or End
    pub phase: Phase,

    /// Timestamp in log ticks (milliseconds)
    pub timestamp: i64,
}

impl TaskEvent {
    /// Create a new event
    ///
    /// **Public** - constructor, mainly useful in tests
    pub fn new(task_id: u64, phase: Phase, timestamp: i64) -> Self {
        Self {
            task_id,
            phase,
            timestamp,
        }
    }
}

/// Read and parse a scheduler log file
///
/// **Public** - main entry point for parsing
///
/// # Arguments
/// * `path` - Path to the CSV log
/// * `strict_phase` - Reject phase flags outside {"0","1"} instead of
///   treating unknown values as End
///
/// # Returns
/// Events in file order; an empty file yields an empty vector.
///
/// # Errors
/// * `ParseError::ReadFailed` - File cannot be opened or read
/// * `ParseError::WrongColumnCount` - Row does not have 3 columns
/// * `ParseError::InvalidTaskId` / `InvalidTimestamp` - Non-integer field
/// * `ParseError::InvalidPhaseFlag` - Unknown flag in strict mode
pub fn read_log(path: impl AsRef<Path>, strict_phase: bool) -> Result<Vec<TaskEvent>, ParseError> {
    let path = path.as_ref();

    debug!("Reading scheduler log from: {}", path.display());

    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut events = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;

        // Trailing newline in the log produces one empty final line
        if line.trim().is_empty() {
            continue;
        }

        events.push(parse_row(&line, index + 1, strict_phase)?);
    }

    debug!("Parsed {} events from {}", events.len(), path.display());

    Ok(events)
}

/// Parse a single CSV row into a task event
///
/// **Private** - internal helper for read_log
///
/// `line_no` is 1-based, used only for error reporting.
fn parse_row(line: &str, line_no: usize, strict_phase: bool) -> Result<TaskEvent, ParseError> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();

    if fields.len() != LOG_COLUMN_COUNT {
        return Err(ParseError::WrongColumnCount {
            line: line_no,
            found: fields.len(),
        });
    }

    let task_id = fields[0]
        .parse::<u64>()
        .map_err(|_| ParseError::InvalidTaskId {
            line: line_no,
            value: fields[0].to_string(),
        })?;

    let phase = parse_phase_flag(fields[1], line_no, strict_phase)?;

    let timestamp = fields[2]
        .parse::<i64>()
        .map_err(|_| ParseError::InvalidTimestamp {
            line: line_no,
            value: fields[2].to_string(),
        })?;

    Ok(TaskEvent {
        task_id,
        phase,
        timestamp,
    })
}

/// Map a phase flag string to a Phase
///
/// **Private** - internal helper for parse_row
///
/// Default behavior mirrors the original logger encoding: "1" is
/// Begin, everything else is End. Strict mode rejects anything
/// outside {"0","1"}.
fn parse_phase_flag(flag: &str, line_no: usize, strict: bool) -> Result<Phase, ParseError> {
    if flag == PHASE_FLAG_BEGIN {
        return Ok(Phase::Begin);
    }

    if strict && flag != PHASE_FLAG_END {
        return Err(ParseError::InvalidPhaseFlag {
            line: line_no,
            value: flag.to_string(),
        });
    }

    Ok(Phase::End)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_log(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_parse_basic_log() {
        let file = write_log("1,1,0\n2,1,5\n2,0,10\n1,0,15\n");
        let events = read_log(file.path(), false).unwrap();

        assert_eq!(
            events,
            vec![
                TaskEvent::new(1, Phase::Begin, 0),
                TaskEvent::new(2, Phase::Begin, 5),
                TaskEvent::new(2, Phase::End, 10),
                TaskEvent::new(1, Phase::End, 15),
            ]
        );
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let file = write_log(" 4 , 1 , 100 \n");
        let events = read_log(file.path(), false).unwrap();

        assert_eq!(events, vec![TaskEvent::new(4, Phase::Begin, 100)]);
    }

    #[test]
    fn test_empty_file_is_valid() {
        let file = write_log("");
        let events = read_log(file.path(), false).unwrap();

        assert!(events.is_empty());
    }

    #[test]
    fn test_unknown_phase_flag_is_end_by_default() {
        let file = write_log("1,2,0\n");
        let events = read_log(file.path(), false).unwrap();

        assert_eq!(events[0].phase, Phase::End);
    }

    #[test]
    fn test_strict_mode_rejects_unknown_phase_flag() {
        let file = write_log("1,1,0\n1,banana,5\n");
        let err = read_log(file.path(), true).unwrap_err();

        match err {
            ParseError::InvalidPhaseFlag { line, value } => {
                assert_eq!(line, 2);
                assert_eq!(value, "banana");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_strict_mode_accepts_zero_and_one() {
        let file = write_log("1,1,0\n1,0,5\n");
        let events = read_log(file.path(), true).unwrap();

        assert_eq!(events[0].phase, Phase::Begin);
        assert_eq!(events[1].phase, Phase::End);
    }

    #[test]
    fn test_invalid_task_id_reports_line() {
        let file = write_log("1,1,0\nnope,0,5\n");
        let err = read_log(file.path(), false).unwrap_err();

        match err {
            ParseError::InvalidTaskId { line, value } => {
                assert_eq!(line, 2);
                assert_eq!(value, "nope");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_timestamp_reports_line() {
        let file = write_log("1,1,soon\n");
        let err = read_log(file.path(), false).unwrap_err();

        assert!(matches!(err, ParseError::InvalidTimestamp { line: 1, .. }));
    }

    #[test]
    fn test_wrong_column_count() {
        let file = write_log("1,1\n");
        let err = read_log(file.path(), false).unwrap_err();

        assert!(matches!(
            err,
            ParseError::WrongColumnCount { line: 1, found: 2 }
        ));
    }

    #[test]
    fn test_negative_timestamp_is_accepted() {
        let file = write_log("1,1,-5\n");
        let events = read_log(file.path(), false).unwrap();

        assert_eq!(events[0].timestamp, -5);
    }

    #[test]
    fn test_missing_file() {
        let err = read_log("/nonexistent/log.csv", false).unwrap_err();
        assert!(matches!(err, ParseError::ReadFailed(_)));
    }
}
