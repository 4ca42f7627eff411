use std::fmt;

/// Identifier assigned to a task when it is created.
///
/// Ids come from a per-store counter, so two tasks created in the same
/// instant still get distinct ids, and an id is never handed out twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single to-do item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Unique within the owning store
    pub id: TaskId,
    /// Trimmed, never empty
    pub text: String,
    /// Creation date, already formatted for display
    pub created_date: String,
    /// Completion flag
    pub done: bool,
}

impl Task {
    /// Create a new, not-done task. Callers are responsible for trimming
    /// and rejecting empty text; see `ops::task_ops::add_task`.
    pub fn new(id: TaskId, text: String, created_date: String) -> Self {
        Task {
            id,
            text,
            created_date,
            done: false,
        }
    }

    /// The character shown inside the checkbox `[ ]`
    pub fn checkbox_char(&self) -> char {
        if self.done { 'x' } else { ' ' }
    }
}
