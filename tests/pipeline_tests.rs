//! End-to-end pipeline tests: expansion, filtering, and formatting
//! chained together the way the convert command runs them.

use task_trace_studio::expander::{expand_preemptions, filter_zero_duration};
use task_trace_studio::output::to_trace_records;
use task_trace_studio::parser::{Phase, TaskEvent};

fn begin(task: u64, ts: i64) -> TaskEvent {
    TaskEvent::new(task, Phase::Begin, ts)
}

fn end(task: u64, ts: i64) -> TaskEvent {
    TaskEvent::new(task, Phase::End, ts)
}

fn run_pipeline(raw: &[TaskEvent]) -> Vec<TaskEvent> {
    let expanded = expand_preemptions(raw).unwrap();
    filter_zero_duration(expanded)
}

#[test]
fn test_simple_preemption_pipeline() {
    let raw = vec![begin(1, 0), begin(2, 5), end(2, 10), end(1, 15)];
    let filtered = run_pipeline(&raw);

    assert_eq!(
        filtered,
        vec![
            begin(1, 0),
            end(1, 5),
            begin(2, 5),
            end(2, 10),
            begin(1, 10),
            end(1, 15),
        ]
    );
}

#[test]
fn test_zero_duration_preemptor_disappears() {
    // Task 2 preempts task 1 and finishes at the same instant; the
    // final trace shows task 1 running uninterrupted.
    let raw = vec![begin(1, 0), begin(2, 5), end(2, 5), end(1, 15)];
    let filtered = run_pipeline(&raw);

    assert_eq!(filtered, vec![begin(1, 0), end(1, 5), begin(1, 5), end(1, 15)]);
}

#[test]
fn test_log_ending_mid_execution_never_ends_on_begin() {
    let raw = vec![begin(1, 0), begin(2, 5), end(2, 10)];
    let filtered = run_pipeline(&raw);

    assert_eq!(filtered.last().unwrap().phase, Phase::End);
    assert_eq!(
        filtered,
        vec![begin(1, 0), end(1, 5), begin(2, 5), end(2, 10)]
    );
}

#[test]
fn test_per_task_begin_end_counts_balance() {
    let raw = vec![
        begin(1, 0),
        begin(2, 2),
        begin(3, 4),
        end(3, 7),
        end(2, 9),
        begin(4, 11),
        end(4, 12),
        end(1, 20),
    ];
    let filtered = run_pipeline(&raw);

    for task in 1..=4u64 {
        let begins = filtered
            .iter()
            .filter(|e| e.task_id == task && e.phase == Phase::Begin)
            .count();
        let ends = filtered
            .iter()
            .filter(|e| e.task_id == task && e.phase == Phase::End)
            .count();
        assert_eq!(begins, ends, "task {} is unbalanced", task);
    }
}

#[test]
fn test_records_scale_timestamps_to_micros() {
    let raw = vec![begin(1, 3), end(1, 8)];
    let records = to_trace_records(&run_pipeline(&raw));

    assert_eq!(records[0].ts, 3000);
    assert_eq!(records[1].ts, 8000);
}

#[test]
fn test_empty_log_produces_empty_trace() {
    let records = to_trace_records(&run_pipeline(&[]));
    assert!(records.is_empty());
}
