//! Zero-duration interval filter.
//!
//! Expansion can leave a task apparently running for zero time: a
//! preemption immediately followed by resumption-then-reend at the
//! same timestamp. Those pairs render as clutter in the trace viewer,
//! so they are cancelled here. A greedy single pass is enough: only
//! an End that exactly matches the most recently kept Begin can
//! cancel it.

use crate::parser::{Phase, TaskEvent};
use log::debug;

/// Remove zero-duration Begin/End pairs and any trailing Begin
///
/// **Public** - runs after expand_preemptions
///
/// # Arguments
/// * `events` - Expanded event stream
///
/// # Returns
/// The filtered stream. Guaranteed never to end on a Begin: a final
/// dangling Begin (log ended mid-execution) is dropped.
pub fn filter_zero_duration(events: Vec<TaskEvent>) -> Vec<TaskEvent> {
    let mut filtered: Vec<TaskEvent> = Vec::with_capacity(events.len());
    let mut last_begin: Option<TaskEvent> = None;

    for event in events {
        match event.phase {
            Phase::Begin => {
                last_begin = Some(event);
                filtered.push(event);
            }

            Phase::End => {
                let cancels = last_begin
                    .map(|b| b.task_id == event.task_id && b.timestamp == event.timestamp)
                    .unwrap_or(false);

                if cancels {
                    // The interval ran for zero time; drop both halves
                    filtered.pop();
                    last_begin = None;
                } else {
                    filtered.push(event);
                }
            }
        }
    }

    // A log that stops mid-execution leaves an unterminated interval
    if let Some(last) = filtered.last() {
        if last.phase == Phase::Begin {
            debug!(
                "Dropping dangling Begin for task {} at timestamp {}",
                last.task_id, last.timestamp
            );
            filtered.pop();
        }
    }

    filtered
}
