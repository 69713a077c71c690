//! Trace output: schema definitions and JSON writer.

pub mod json;
pub mod schema;

// Re-export main types
pub use json::{read_trace, write_trace};
pub use schema::{to_trace_records, TraceRecord};
