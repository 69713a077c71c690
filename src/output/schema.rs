//! Output JSON schema for the Chrome trace viewer.
//!
//! Each record is one entry of the Trace Event Format's duration
//! events: phase "B" opens an interval, "E" closes it. The viewer
//! groups records by pid/tid, so both are derived from the task id.

use crate::parser::{Phase, TaskEvent};
use crate::utils::config::{TICK_TO_MICROS_MULTIPLIER, TRACE_CATEGORY};
use serde::{Deserialize, Serialize};

/// One trace viewer event, written as a JSON object
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TraceRecord {
    /// Display name, "task{id}"
    pub name: String,

    /// Event category, always "task"
    pub cat: String,

    /// Phase: "B" (begin) or "E" (end)
    pub ph: String,

    /// Process id; the viewer shows one row group per pid
    pub pid: u64,

    /// Thread id, same "task{id}" label as the name
    pub tid: String,

    /// Timestamp in microseconds
    pub ts: i64,
}

impl TraceRecord {
    /// Build a record from a filtered task event
    ///
    /// **Public** - the formatting stage of the pipeline
    ///
    /// Timestamps are scaled from log ticks (milliseconds) to the
    /// microseconds the viewer expects.
    pub fn from_event(event: &TaskEvent) -> Self {
        let label = format!("task{}", event.task_id);

        Self {
            name: label.clone(),
            cat: TRACE_CATEGORY.to_string(),
            ph: match event.phase {
                Phase::Begin => "B".to_string(),
                Phase::End => "E".to_string(),
            },
            pid: event.task_id,
            tid: label,
            ts: event.timestamp * TICK_TO_MICROS_MULTIPLIER,
        }
    }
}

/// Map a filtered event sequence to output records, preserving order
///
/// **Public** - used by the convert command
pub fn to_trace_records(events: &[TaskEvent]) -> Vec<TraceRecord> {
    events.iter().map(TraceRecord::from_event).collect()
}
