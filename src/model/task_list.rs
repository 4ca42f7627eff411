use super::task::{Task, TaskId};

/// The task-domain half of the store: tasks newest-first plus the id counter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskList {
    /// Tasks in display order (newest first)
    pub tasks: Vec<Task>,
    /// Next id to hand out. Never decreases.
    pub next_id: u64,
}

impl Default for TaskList {
    fn default() -> Self {
        TaskList {
            tasks: Vec::new(),
            next_id: 1,
        }
    }
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve a fresh id
    pub fn allocate_id(&mut self) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Find a task by id
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Find a task by id (mutable)
    pub fn get_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    /// Position of a task in display order
    pub fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
