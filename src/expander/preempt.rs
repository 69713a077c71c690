//! Preemption expansion.
//!
//! The raw log records only explicit task starts and ends on a single
//! logical CPU with LIFO preemption. A Begin while another task is
//! running implicitly suspends the running task; the suspended task
//! implicitly resumes when its preemptor ends. The trace viewer needs
//! every execution interval explicitly delimited, so this pass inserts
//! the missing End/Begin pairs.

use super::stack::ActiveStack;
use crate::parser::{Phase, TaskEvent};
use crate::utils::error::ExpandError;
use log::debug;

/// Expand a raw event stream into one with explicit preemption events
///
/// **Public** - main entry point for expansion
///
/// # Arguments
/// * `events` - Raw events in log order
///
/// # Returns
/// Expanded events; each preemption contributes one synthetic End at
/// the interruption timestamp and one synthetic Begin at the
/// resumption timestamp. A task left running at the end of the log is
/// not an error here; the dangling Begin is handled by the
/// zero-duration filter's post-pass.
///
/// # Errors
/// * `ExpandError::TaskMismatch` - An End names a task other than the
///   one currently executing
/// * `ExpandError::EndWithoutActive` - An End arrives while no task
///   is active
pub fn expand_preemptions(events: &[TaskEvent]) -> Result<Vec<TaskEvent>, ExpandError> {
    let mut active = ActiveStack::new();

    // Each preemption adds exactly two events, so this only
    // under-allocates on heavily nested logs.
    let mut expanded = Vec::with_capacity(events.len());

    for event in events {
        match event.phase {
            Phase::Begin => {
                // The running task, if any, is being preempted
                if let Some(running) = active.peek() {
                    expanded.push(TaskEvent::new(running, Phase::End, event.timestamp));
                }

                active.push(event.task_id);
                expanded.push(*event);
            }

            Phase::End => {
                let running = active.peek().ok_or(ExpandError::EndWithoutActive {
                    task: event.task_id,
                    timestamp: event.timestamp,
                })?;

                if event.task_id != running {
                    return Err(ExpandError::TaskMismatch {
                        task: event.task_id,
                        running,
                        timestamp: event.timestamp,
                    });
                }

                expanded.push(*event);
                active.pop();

                // The most recently preempted task resumes immediately
                if let Some(resumed) = active.peek() {
                    expanded.push(TaskEvent::new(resumed, Phase::Begin, event.timestamp));
                }
            }
        }
    }

    debug!(
        "Expanded {} raw events into {} ({} still active at end of log)",
        events.len(),
        expanded.len(),
        active.len()
    );

    Ok(expanded)
}
