use chrono::NaiveDate;
use log::debug;

use super::filter::Filter;
use super::task::{Task, TaskId};
use super::task_list::TaskList;
use crate::ops::task_ops::{self, DEFAULT_DATE_FORMAT};

/// Presentational state: what the entry field holds and how the list is shown.
/// None of it affects task data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    /// Uncommitted text in the entry field (untrimmed)
    pub draft_text: String,
    pub filter: Filter,
    pub dark_mode: bool,
}

/// Session-scoped task state. Owned by the application; nothing about it is
/// global or persisted.
///
/// Every operation is total: empty task text and unknown ids are no-ops
/// rather than errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskStore {
    tasks: TaskList,
    ui: ViewState,
    date_format: String,
}

/// Borrowed snapshot of everything the presentation layer needs to draw
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreView<'a> {
    pub visible: Vec<&'a Task>,
    pub total: usize,
    pub remaining: usize,
    pub has_completed: bool,
    pub filter: Filter,
    pub draft_text: &'a str,
    pub dark_mode: bool,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskStore {
    /// Empty store with the default date format
    pub fn new() -> Self {
        Self::with_date_format(DEFAULT_DATE_FORMAT)
    }

    /// Empty store that formats creation dates with `date_format` (strftime)
    pub fn with_date_format(date_format: impl Into<String>) -> Self {
        TaskStore {
            tasks: TaskList::new(),
            ui: ViewState::default(),
            date_format: date_format.into(),
        }
    }

    // --- Task operations ---

    /// Add a task dated today. See [`TaskStore::add_task_on`].
    pub fn add_task(&mut self, text: &str) -> Option<TaskId> {
        self.add_task_on(text, task_ops::today())
    }

    /// Add a task created on `date`. Blank text is ignored and leaves the
    /// draft untouched; otherwise the task goes to the front and the draft
    /// is cleared.
    pub fn add_task_on(&mut self, text: &str, date: NaiveDate) -> Option<TaskId> {
        let id = task_ops::add_task(&mut self.tasks, text, date, &self.date_format)?;
        self.ui.draft_text.clear();
        Some(id)
    }

    /// Commit the current draft as a new task
    pub fn submit_draft(&mut self) -> Option<TaskId> {
        let draft = self.ui.draft_text.clone();
        self.add_task(&draft)
    }

    pub fn remove_task(&mut self, id: TaskId) -> Option<Task> {
        task_ops::remove_task(&mut self.tasks, id)
    }

    pub fn toggle_done(&mut self, id: TaskId) -> Option<bool> {
        task_ops::toggle_done(&mut self.tasks, id)
    }

    pub fn clear_completed(&mut self) -> usize {
        task_ops::clear_completed(&mut self.tasks)
    }

    // --- Presentation state ---

    pub fn set_filter(&mut self, filter: Filter) {
        if self.ui.filter != filter {
            debug!("event=set_filter filter={}", filter);
        }
        self.ui.filter = filter;
    }

    /// Replace the draft verbatim; trimming happens only when a task is added
    pub fn set_draft_text(&mut self, text: impl Into<String>) {
        self.ui.draft_text = text.into();
    }

    pub fn toggle_dark_mode(&mut self) {
        self.ui.dark_mode = !self.ui.dark_mode;
        debug!("event=toggle_dark_mode dark={}", self.ui.dark_mode);
    }

    // --- Derived ---

    /// Tasks under the current filter, newest first
    pub fn visible_tasks(&self) -> Vec<&Task> {
        task_ops::visible_tasks(&self.tasks.tasks, self.ui.filter)
    }

    pub fn remaining_count(&self) -> usize {
        task_ops::remaining_count(&self.tasks.tasks)
    }

    /// Whether "clear completed" has anything to do
    pub fn has_completed(&self) -> bool {
        task_ops::has_completed(&self.tasks.tasks)
    }

    pub fn view(&self) -> StoreView<'_> {
        StoreView {
            visible: self.visible_tasks(),
            total: self.tasks.len(),
            remaining: self.remaining_count(),
            has_completed: self.has_completed(),
            filter: self.ui.filter,
            draft_text: &self.ui.draft_text,
            dark_mode: self.ui.dark_mode,
        }
    }

    // --- Accessors ---

    /// All tasks regardless of filter, newest first
    pub fn tasks(&self) -> &[Task] {
        &self.tasks.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.get(id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn filter(&self) -> Filter {
        self.ui.filter
    }

    pub fn draft_text(&self) -> &str {
        &self.ui.draft_text
    }

    pub fn dark_mode(&self) -> bool {
        self.ui.dark_mode
    }

    pub fn date_format(&self) -> &str {
        &self.date_format
    }
}
