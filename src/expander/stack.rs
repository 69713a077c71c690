//! LIFO stack of active task ids.
//!
//! The scheduler model allows exactly one executing task at a time;
//! the top of the stack is the executing task, everything below is
//! preempted but resumable. Kept as an explicit abstraction so the
//! empty-stack precondition is visible at every call site.

/// Stack of currently-started-but-not-ended task ids
#[derive(Debug, Default, Clone)]
pub struct ActiveStack {
    tasks: Vec<u64>,
}

impl ActiveStack {
    /// Create an empty stack
    ///
    /// **Public** - constructor
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a newly started task; it becomes the executing task
    pub fn push(&mut self, task_id: u64) {
        self.tasks.push(task_id);
    }

    /// Pop the executing task, returning None when nothing is active
    pub fn pop(&mut self) -> Option<u64> {
        self.tasks.pop()
    }

    /// The currently executing task, if any
    pub fn peek(&self) -> Option<u64> {
        self.tasks.last().copied()
    }

    /// True when no task is active
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Number of active (executing + preempted) tasks
    pub fn len(&self) -> usize {
        self.tasks.len()
    }
}
