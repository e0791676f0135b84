use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MAX_TITLE_LEN: usize = 120;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaskError {
    #[error("Task title can't be empty")]
    Empty,
    #[error("Task title is too long ({0} characters, max {max})", max = MAX_TITLE_LEN)]
    TooLong(usize),
    #[error("No task ids left")]
    Full,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub title: String,
    pub done: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl TaskFilter {
    pub fn all() -> [TaskFilter; 3] {
        [TaskFilter::All, TaskFilter::Active, TaskFilter::Completed]
    }

    pub fn label(&self) -> &'static str {
        match self {
            TaskFilter::All => "All",
            TaskFilter::Active => "Active",
            TaskFilter::Completed => "Completed",
        }
    }

    pub fn matches(&self, task: &Task) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Active => !task.done,
            TaskFilter::Completed => task.done,
        }
    }
}

/// Ordered task list, persisted as JSON in the browser.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskList {
    next_id: u32,
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, title: &str) -> Result<u32, TaskError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(TaskError::Empty);
        }
        let len = title.chars().count();
        if len > MAX_TITLE_LEN {
            return Err(TaskError::TooLong(len));
        }
        let id = self.next_id;
        self.next_id = id.checked_add(1).ok_or(TaskError::Full)?;
        self.tasks.push(Task {
            id,
            title: title.to_string(),
            done: false,
        });
        Ok(id)
    }

    /// Repairs a list restored from storage: duplicate ids get fresh ones and
    /// the counter moves past every id in use.
    pub fn normalize(&mut self) {
        let mut next = self
            .tasks
            .iter()
            .map(|t| t.id.saturating_add(1))
            .max()
            .unwrap_or_default()
            .max(self.next_id);
        let mut seen = HashSet::new();
        for task in &mut self.tasks {
            if !seen.insert(task.id) {
                task.id = next;
                next = next.saturating_add(1);
                seen.insert(task.id);
            }
        }
        self.next_id = next;
    }

    pub fn toggle(&mut self, id: u32) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.done = !task.done;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: u32) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() != before
    }

    pub fn clear_completed(&mut self) {
        self.tasks.retain(|t| !t.done);
    }

    pub fn remaining(&self) -> usize {
        self.tasks.iter().filter(|t| !t.done).count()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    pub fn filtered(&self, filter: TaskFilter) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|t| filter.matches(t))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_assigns_fresh_ids() {
        let mut list = TaskList::new();
        let a = list.add("Ship the portfolio").unwrap();
        let b = list.add("  Write a case study  ").unwrap();
        assert_ne!(a, b);
        assert_eq!(list.len(), 2);
        let titles = list.iter().map(|t| t.title.as_str()).collect::<Vec<_>>();
        assert_eq!(titles, vec!["Ship the portfolio", "Write a case study"]);

        // ids are never reused, even after removal
        assert!(list.remove(b));
        let c = list.add("Another").unwrap();
        assert_ne!(b, c);
    }

    #[test]
    fn test_add_rejects_bad_titles() {
        let mut list = TaskList::new();
        assert_eq!(list.add("   "), Err(TaskError::Empty));
        let long = "x".repeat(MAX_TITLE_LEN + 1);
        assert_eq!(list.add(&long), Err(TaskError::TooLong(MAX_TITLE_LEN + 1)));
        assert!(list.is_empty());
        assert!(list.add(&"y".repeat(MAX_TITLE_LEN)).is_ok());
    }

    #[test]
    fn test_toggle_and_remaining() {
        let mut list = TaskList::new();
        let a = list.add("a").unwrap();
        list.add("b").unwrap();
        assert_eq!(list.remaining(), 2);
        assert!(list.toggle(a));
        assert_eq!(list.remaining(), 1);
        assert!(list.toggle(a));
        assert_eq!(list.remaining(), 2);
        assert!(!list.toggle(99));
        assert!(!list.remove(99));
    }

    #[test]
    fn test_filters_and_clear_completed() {
        let mut list = TaskList::new();
        let a = list.add("a").unwrap();
        let b = list.add("b").unwrap();
        list.add("c").unwrap();
        list.toggle(a);
        list.toggle(b);

        assert_eq!(list.filtered(TaskFilter::All).len(), 3);
        assert_eq!(list.filtered(TaskFilter::Active).len(), 1);
        assert_eq!(list.filtered(TaskFilter::Completed).len(), 2);

        list.clear_completed();
        assert_eq!(list.len(), 1);
        assert_eq!(list.remaining(), 1);
    }

    #[test]
    fn test_serde_round_trip_keeps_id_counter() {
        let mut list = TaskList::new();
        list.add("a").unwrap();
        let json = serde_json::to_string(&list).unwrap();
        let mut restored: TaskList = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, list);
        assert_eq!(restored.add("b").unwrap(), 1);
    }

    #[test]
    fn test_normalize_repairs_stale_storage() {
        let json = r#"{"next_id":0,"tasks":[{"id":4,"title":"a","done":false},{"id":4,"title":"b","done":true},{"id":1,"title":"c","done":false}]}"#;
        let mut list: TaskList = serde_json::from_str(json).unwrap();
        list.normalize();

        let ids = list.iter().map(|t| t.id).collect::<Vec<_>>();
        assert_eq!(ids, vec![4, 5, 1]);
        assert_eq!(list.add("d").unwrap(), 6);

        // removing one task only ever removes that task
        assert!(list.remove(4));
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_normalize_keeps_valid_lists() {
        let mut list = TaskList::new();
        list.add("a").unwrap();
        let b = list.add("b").unwrap();
        list.remove(b);
        let before = list.clone();
        list.normalize();
        assert_eq!(list, before);
    }

    #[test]
    fn test_add_stops_at_id_limit() {
        let json = format!(
            r#"{{"next_id":0,"tasks":[{{"id":{},"title":"a","done":false}}]}}"#,
            u32::MAX - 1
        );
        let mut list: TaskList = serde_json::from_str(&json).unwrap();
        list.normalize();
        assert_eq!(list.add("b"), Err(TaskError::Full));
        assert_eq!(list.len(), 1);
    }
}
