//! Task Trace Studio
//!
//! Converts cooperative task scheduler logs (CSV start/end events)
//! into Chrome trace viewer JSON, making implicit preemption and
//! resumption explicit.
//!
//! This crate provides the core implementation for the
//! `task-trace` CLI tool.
//!
//! ## Getting Started
//!
//! Most users should install and use the CLI:
//!
//! ```bash
//! cargo install task-trace-studio
//! task-trace --help
//! ```

pub mod commands;
pub mod expander;
pub mod output;
pub mod parser;
pub mod utils;
