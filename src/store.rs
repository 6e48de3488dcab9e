//! Widget State Store
//!
//! Uses Leptos reactive_stores for the snapshot the view renders from.
//! The authoritative list lives in `TaskList`; this is refreshed from it
//! after every mutation.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::edit::EditState;
use crate::models::Task;

/// Render snapshot with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct WidgetState {
    /// Copy of the task sequence as last persisted
    pub tasks: Vec<Task>,
    /// Which task, if any, shows its edit field
    pub edit: EditState,
}

impl WidgetState {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self {
            tasks,
            edit: EditState::Viewing,
        }
    }
}

/// Type alias for the store
pub type WidgetStore = Store<WidgetState>;

/// Get the widget store from context
pub fn use_widget_store() -> WidgetStore {
    expect_context::<WidgetStore>()
}

/// Replace the task snapshot, triggering a full re-render
pub fn store_set_tasks(store: &WidgetStore, tasks: Vec<Task>) {
    *store.tasks().write() = tasks;
}
