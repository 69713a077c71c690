//! Preemption expansion and interval cleanup.
//!
//! This module handles:
//! - Tracking the currently running task (LIFO stack)
//! - Inserting synthetic End/Begin pairs around preemptions
//! - Cancelling zero-duration intervals left behind by expansion

pub mod filter;
pub mod preempt;
pub mod stack;

// Re-export main entry points
pub use filter::filter_zero_duration;
pub use preempt::expand_preemptions;
pub use stack::ActiveStack;
