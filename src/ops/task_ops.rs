use std::fmt::Write;

use chrono::{Local, NaiveDate};
use log::debug;

use crate::model::filter::Filter;
use crate::model::task::{Task, TaskId};
use crate::model::task_list::TaskList;

/// Date format used when none is configured (`10/16/2026`)
pub const DEFAULT_DATE_FORMAT: &str = "%-m/%-d/%Y";

/// Today's date in local time
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Format a creation date. Falls back to ISO format if `format` contains an
/// invalid strftime item, so formatting never panics.
pub fn format_created_date(date: NaiveDate, format: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(format)).is_err() {
        return date.format("%Y-%m-%d").to_string();
    }
    out
}

// ---------------------------------------------------------------------------
// Mutations
// ---------------------------------------------------------------------------

/// Add a task to the front of the list.
///
/// `text` is trimmed; empty or whitespace-only text is ignored and `None`
/// is returned.
pub fn add_task(
    list: &mut TaskList,
    text: &str,
    created: NaiveDate,
    date_format: &str,
) -> Option<TaskId> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    let id = list.allocate_id();
    let task = Task::new(
        id,
        text.to_string(),
        format_created_date(created, date_format),
    );
    list.tasks.insert(0, task);
    debug!("event=task_add id={} count={}", id, list.len());
    Some(id)
}

/// Remove a task by id, returning it. Unknown ids are ignored.
pub fn remove_task(list: &mut TaskList, id: TaskId) -> Option<Task> {
    let idx = list.position(id)?;
    let task = list.tasks.remove(idx);
    debug!("event=task_remove id={} count={}", id, list.len());
    Some(task)
}

/// Flip a task's done flag, returning the new value. Unknown ids are ignored.
pub fn toggle_done(list: &mut TaskList, id: TaskId) -> Option<bool> {
    let task = list.get_mut(id)?;
    task.done = !task.done;
    debug!("event=task_toggle id={} done={}", id, task.done);
    Some(task.done)
}

/// Remove every done task, keeping the order of the rest. Returns how many
/// were removed.
pub fn clear_completed(list: &mut TaskList) -> usize {
    let before = list.len();
    list.tasks.retain(|t| !t.done);
    let removed = before - list.len();
    if removed > 0 {
        debug!("event=clear_completed removed={} count={}", removed, list.len());
    }
    removed
}

// ---------------------------------------------------------------------------
// Derived views
// ---------------------------------------------------------------------------

/// Tasks passing `filter`, in list order
pub fn visible_tasks(tasks: &[Task], filter: Filter) -> Vec<&Task> {
    tasks.iter().filter(|t| filter.matches(t)).collect()
}

/// Number of tasks not yet done
pub fn remaining_count(tasks: &[Task]) -> usize {
    tasks.iter().filter(|t| !t.done).count()
}

/// Whether any task is done
pub fn has_completed(tasks: &[Task]) -> bool {
    tasks.iter().any(|t| t.done)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 14).unwrap()
    }

    fn add(list: &mut TaskList, text: &str) -> TaskId {
        add_task(list, text, date(), DEFAULT_DATE_FORMAT).unwrap()
    }

    fn texts(tasks: &[&Task]) -> Vec<String> {
        tasks.iter().map(|t| t.text.clone()).collect()
    }

    #[test]
    fn test_format_created_date_default() {
        assert_eq!(format_created_date(date(), DEFAULT_DATE_FORMAT), "5/14/2025");
        assert_eq!(format_created_date(date(), "%Y-%m-%d"), "2025-05-14");
    }

    #[test]
    fn test_format_created_date_invalid_falls_back() {
        assert_eq!(format_created_date(date(), "%Q"), "2025-05-14");
    }

    #[test]
    fn test_add_task_trims_and_prepends() {
        let mut list = TaskList::new();
        let a = add(&mut list, "  first ");
        let b = add(&mut list, "second");
        assert_eq!(list.tasks[0].id, b);
        assert_eq!(list.tasks[1].id, a);
        assert_eq!(list.tasks[1].text, "first");
        assert_eq!(list.tasks[1].created_date, "5/14/2025");
        assert!(!list.tasks[0].done);
    }

    #[test]
    fn test_add_task_rejects_blank() {
        let mut list = TaskList::new();
        assert_eq!(add_task(&mut list, "", date(), DEFAULT_DATE_FORMAT), None);
        assert_eq!(add_task(&mut list, " \t\n", date(), DEFAULT_DATE_FORMAT), None);
        assert!(list.is_empty());
        // No id was consumed
        assert_eq!(list.next_id, 1);
    }

    #[test]
    fn test_ids_are_never_reused() {
        let mut list = TaskList::new();
        let a = add(&mut list, "a");
        remove_task(&mut list, a);
        let b = add(&mut list, "b");
        assert!(b > a);
    }

    #[test]
    fn test_remove_task() {
        let mut list = TaskList::new();
        let a = add(&mut list, "a");
        let b = add(&mut list, "b");
        let removed = remove_task(&mut list, a).unwrap();
        assert_eq!(removed.text, "a");
        assert_eq!(list.len(), 1);
        assert_eq!(list.tasks[0].id, b);
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let mut list = TaskList::new();
        add(&mut list, "a");
        let before = list.clone();
        assert_eq!(remove_task(&mut list, TaskId(99)), None);
        assert_eq!(list, before);
    }

    #[test]
    fn test_toggle_done_round_trip() {
        let mut list = TaskList::new();
        let a = add(&mut list, "a");
        assert_eq!(toggle_done(&mut list, a), Some(true));
        assert_eq!(toggle_done(&mut list, a), Some(false));
        assert_eq!(toggle_done(&mut list, TaskId(42)), None);
    }

    #[test]
    fn test_clear_completed_keeps_order() {
        let mut list = TaskList::new();
        let a = add(&mut list, "a");
        add(&mut list, "b");
        let c = add(&mut list, "c");
        add(&mut list, "d");
        toggle_done(&mut list, a);
        toggle_done(&mut list, c);

        assert_eq!(clear_completed(&mut list), 2);
        let all = visible_tasks(&list.tasks, Filter::All);
        assert_eq!(texts(&all), vec!["d", "b"]);
        assert!(!has_completed(&list.tasks));
        assert_eq!(clear_completed(&mut list), 0);
    }

    #[test]
    fn test_visible_tasks_and_counts() {
        let mut list = TaskList::new();
        let a = add(&mut list, "A");
        add(&mut list, "B");
        toggle_done(&mut list, a);

        assert_eq!(texts(&visible_tasks(&list.tasks, Filter::Active)), vec!["B"]);
        assert_eq!(
            texts(&visible_tasks(&list.tasks, Filter::Completed)),
            vec!["A"]
        );
        assert_eq!(
            texts(&visible_tasks(&list.tasks, Filter::All)),
            vec!["B", "A"]
        );
        assert_eq!(remaining_count(&list.tasks), 1);
        assert!(has_completed(&list.tasks));
    }
}
