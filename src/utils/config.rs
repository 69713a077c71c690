//! Configuration and constants for the CLI.

/// Default input log path when no positional argument is given
pub const DEFAULT_INPUT_FILE: &str = "data.csv";

/// Default output trace path when no positional argument is given
pub const DEFAULT_OUTPUT_FILE: &str = "output.json";

// Scheduler log timestamps are in milliseconds; the Chrome trace
// viewer expects microseconds in the "ts" field.
// 1 log tick = 1,000 microseconds
pub const TICK_TO_MICROS_MULTIPLIER: i64 = 1_000;

/// Category string attached to every emitted trace record
pub const TRACE_CATEGORY: &str = "task";

/// Phase flag value that marks a Begin event in the CSV log
pub const PHASE_FLAG_BEGIN: &str = "1";

/// Phase flag value that marks an End event in the CSV log
pub const PHASE_FLAG_END: &str = "0";

/// Number of columns every log row must have
pub const LOG_COLUMN_COUNT: usize = 3;
