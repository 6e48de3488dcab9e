//! Render Model
//!
//! Pure projection from task state to the rows the list view draws.
//! The view rebuilds every row from this on each change.

use crate::edit::EditState;
use crate::models::{Task, TaskId};

pub const ADD_CONTAINER_CLASS: &str = "add-container";
pub const ADDED_TASK_CLASS: &str = "added-task";
pub const INPUT_CLASS: &str = "input-task";
pub const INPUT_ID: &str = "input-task";
pub const ADD_ICON_CLASS: &str = "add-icon";
pub const LIST_CLASS: &str = "task-list";
pub const LIST_ID: &str = "task-list";
pub const CLEAR_BUTTON_CLASS: &str = "clear-button";
pub const ITEM_CLASS: &str = "task-item";
pub const GROUP_CLASS: &str = "task-group";
pub const CHECKBOX_CLASS: &str = "task-checkbox";
pub const COMPLETED_CLASS: &str = "completed";
pub const EDIT_INPUT_CLASS: &str = "edit-task-input";
pub const DELETE_CLASS: &str = "item-menu clickable";
pub const DELETE_TITLE: &str = "Delete task";
pub const REMAINING_CLASS: &str = "task-count";

/// One visual list item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    pub id: TaskId,
    pub index: usize,
    pub description: String,
    pub completed: bool,
    pub editing: bool,
}

impl TaskRow {
    /// Class for the description label
    pub fn label_class(&self) -> &'static str {
        if self.completed {
            COMPLETED_CLASS
        } else {
            ""
        }
    }
}

/// One row per task, in sequence order
pub fn task_rows(tasks: &[Task], edit: EditState) -> Vec<TaskRow> {
    tasks
        .iter()
        .map(|task| TaskRow {
            id: task.id,
            index: task.index,
            description: task.description.clone(),
            completed: task.completed,
            editing: edit.is_editing(task.id),
        })
        .collect()
}

/// Number of tasks not yet completed
pub fn remaining_count(tasks: &[Task]) -> usize {
    tasks.iter().filter(|task| !task.completed).count()
}

/// Footer text for the number of open tasks
pub fn remaining_label(remaining: usize) -> String {
    match remaining {
        1 => "1 task left".to_string(),
        n => format!("{} tasks left", n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_task(id: u64, description: &str, completed: bool, index: usize) -> Task {
        Task {
            id: TaskId(id),
            description: description.to_string(),
            completed,
            index,
        }
    }

    #[test]
    fn test_one_row_per_task_in_order() {
        let tasks = vec![
            make_task(10, "A", false, 1),
            make_task(11, "B", true, 2),
            make_task(12, "C", false, 3),
        ];

        let rows = task_rows(&tasks, EditState::Viewing);

        assert_eq!(rows.len(), 3);
        for (row, task) in rows.iter().zip(&tasks) {
            assert_eq!(row.id, task.id);
            assert_eq!(row.index, task.index);
            assert_eq!(row.description, task.description);
            assert_eq!(row.completed, task.completed);
            assert!(!row.editing);
        }
        assert_eq!(rows[1].label_class(), COMPLETED_CLASS);
        assert_eq!(rows[0].label_class(), "");
    }

    #[test]
    fn test_rows_are_idempotent() {
        let tasks = vec![make_task(1, "A", false, 1), make_task(2, "B", false, 2)];
        let edit = EditState::Editing(TaskId(2));
        assert_eq!(task_rows(&tasks, edit), task_rows(&tasks, edit));
    }

    #[test]
    fn test_only_edited_row_is_editing() {
        let tasks = vec![make_task(1, "A", false, 1), make_task(2, "B", false, 2)];
        let rows = task_rows(&tasks, EditState::Editing(TaskId(2)));
        assert!(!rows[0].editing);
        assert!(rows[1].editing);
    }

    #[test]
    fn test_empty_list_renders_no_rows() {
        assert!(task_rows(&[], EditState::Viewing).is_empty());
    }

    #[test]
    fn test_remaining_count_skips_completed() {
        let tasks = vec![make_task(1, "A", true, 1), make_task(2, "B", false, 2)];
        assert_eq!(remaining_count(&tasks), 1);
    }

    #[test]
    fn test_remaining_label() {
        assert_eq!(remaining_label(0), "0 tasks left");
        assert_eq!(remaining_label(1), "1 task left");
        assert_eq!(remaining_label(4), "4 tasks left");
    }
}
