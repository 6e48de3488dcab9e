//! Inline Edit State
//!
//! At most one task is in edit mode. Entering is synchronous in the
//! click handler; commits are matched against the active edit so that
//! Enter followed by the blur of the removed field only commits once.

use crate::models::TaskId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditState {
    /// Every label shown read-only
    #[default]
    Viewing,
    /// The label of this task is replaced by a focused text field
    Editing(TaskId),
}

/// Outcome of finishing an edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditCommit {
    /// Write the trimmed text to the task
    Apply { id: TaskId, text: String },
    /// Field was blank; keep the old description
    Abandon(TaskId),
    /// No matching edit in progress (already committed or replaced)
    Stale,
}

impl EditState {
    /// Enter edit mode for `id`, replacing any other edit in progress
    pub fn begin(&mut self, id: TaskId) {
        *self = EditState::Editing(id);
    }

    /// Finish the edit of `id` with the field's current value
    pub fn commit(&mut self, id: TaskId, raw: &str) -> EditCommit {
        if *self != EditState::Editing(id) {
            return EditCommit::Stale;
        }
        *self = EditState::Viewing;

        let text = raw.trim();
        if text.is_empty() {
            EditCommit::Abandon(id)
        } else {
            EditCommit::Apply { id, text: text.to_string() }
        }
    }

    pub fn is_editing(&self, id: TaskId) -> bool {
        *self == EditState::Editing(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_applies_trimmed_text() {
        let mut state = EditState::default();
        state.begin(TaskId(1));
        assert!(state.is_editing(TaskId(1)));

        let commit = state.commit(TaskId(1), "  renamed ");
        assert_eq!(commit, EditCommit::Apply { id: TaskId(1), text: "renamed".to_string() });
        assert_eq!(state, EditState::Viewing);
    }

    #[test]
    fn test_blank_commit_abandons() {
        let mut state = EditState::default();
        state.begin(TaskId(1));
        assert_eq!(state.commit(TaskId(1), "   "), EditCommit::Abandon(TaskId(1)));
        assert_eq!(state, EditState::Viewing);
    }

    #[test]
    fn test_second_commit_is_stale() {
        // Enter commits, then the detached field fires blur
        let mut state = EditState::default();
        state.begin(TaskId(1));
        state.commit(TaskId(1), "first");
        assert_eq!(state.commit(TaskId(1), "first"), EditCommit::Stale);
    }

    #[test]
    fn test_only_one_task_edits_at_a_time() {
        let mut state = EditState::default();
        state.begin(TaskId(1));
        state.begin(TaskId(2));

        assert!(!state.is_editing(TaskId(1)));
        assert!(state.is_editing(TaskId(2)));
        assert_eq!(state.commit(TaskId(1), "x"), EditCommit::Stale);
        assert!(state.is_editing(TaskId(2)));
    }
}
