//! Scheduler log parsing.
//!
//! This module handles:
//! - Reading the raw CSV log from disk
//! - Parsing rows into typed task events
//! - Enforcing the strict phase-flag variant when requested

pub mod csv_log;

// Re-export main types
pub use csv_log::{read_log, Phase, TaskEvent};
