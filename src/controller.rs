//! Interaction Controller
//!
//! Turns UI gestures into task list mutations. Every mutation is
//! followed by `refresh`, so the view never lags the persisted state.
//! An edit in progress is committed from its draft before any other
//! row action, so that action never races a blur-triggered rebuild.

use leptos::prelude::*;

use crate::edit::{EditCommit, EditState};
use crate::error::TaskError;
use crate::models::TaskId;
use crate::storage::{BrowserStorage, TaskStorage};
use crate::store::{store_set_tasks, WidgetState, WidgetStateStoreFields, WidgetStore};
use crate::task_list::TaskList;

/// Controller handle provided via context
pub struct TodoController<S: 'static = BrowserStorage> {
    list: StoredValue<TaskList<S>>,
    state: WidgetStore,
    /// Current text of the edit field, not reactive
    draft: StoredValue<String>,
}

impl<S> Clone for TodoController<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for TodoController<S> {}

impl<S> TodoController<S>
where
    S: TaskStorage + Send + Sync + 'static,
{
    pub fn new(list: TaskList<S>) -> Self {
        let state = WidgetStore::new(WidgetState::new(list.tasks().to_vec()));
        Self {
            list: StoredValue::new(list),
            state,
            draft: StoredValue::new(String::new()),
        }
    }

    /// Reactive snapshot for the view
    pub fn state(&self) -> WidgetStore {
        self.state
    }

    /// Add from the global input; blank text is rejected
    pub fn add(&self, text: &str) -> Result<(), TaskError> {
        let mut result = Ok(());
        self.list.update_value(|list| result = list.add(text).map(|_| ()));
        result?;
        self.refresh();
        Ok(())
    }

    pub fn set_completed(&self, id: TaskId, completed: bool) {
        self.settle_pending_edit();
        self.list.update_value(|list| list.set_completed(id, completed));
        self.refresh();
    }

    pub fn remove(&self, id: TaskId) {
        self.settle_pending_edit();
        self.list.update_value(|list| list.remove(id));
        self.refresh();
    }

    pub fn clear_completed(&self) {
        self.settle_pending_edit();
        self.list.update_value(|list| list.clear_completed());
        self.refresh();
    }

    /// Label activated: switch that task to its edit field
    pub fn begin_edit(&self, id: TaskId) {
        if self.settle_pending_edit() {
            self.refresh();
        }
        let current = self
            .list
            .with_value(|list| list.get(id).map(|task| task.description.clone()));
        let Some(current) = current else { return };

        self.draft.set_value(current);
        self.state.edit().write().begin(id);
    }

    /// Keystroke in the edit field
    pub fn update_draft(&self, text: String) {
        self.draft.set_value(text);
    }

    /// Enter or focus loss on the edit field of `id`
    pub fn commit_edit(&self, id: TaskId, raw: &str) {
        if self.settle_edit(id, raw) {
            self.refresh();
        }
    }

    /// Commit whatever edit is open using its draft; true if one was open
    fn settle_pending_edit(&self) -> bool {
        match self.state.edit().get_untracked() {
            EditState::Editing(id) => {
                let raw = self.draft.get_value();
                self.settle_edit(id, &raw)
            }
            EditState::Viewing => false,
        }
    }

    /// Apply a commit to the list without refreshing; false if stale
    fn settle_edit(&self, id: TaskId, raw: &str) -> bool {
        if !self.state.edit().get_untracked().is_editing(id) {
            return false;
        }
        let commit = self.state.edit().write().commit(id, raw);

        match commit {
            EditCommit::Apply { id, text } => {
                self.list.update_value(|list| {
                    list.edit_description(id, &text);
                });
            }
            EditCommit::Abandon(id) => {
                log::debug!("blank edit of task {} discarded", id);
            }
            EditCommit::Stale => return false,
        }
        true
    }

    /// Publish the current list to the view
    fn refresh(&self) {
        let tasks = self.list.with_value(|list| list.tasks().to_vec());
        store_set_tasks(&self.state, tasks);
    }
}

/// Get the controller from context
pub fn use_controller() -> TodoController {
    expect_context::<TodoController>()
}
