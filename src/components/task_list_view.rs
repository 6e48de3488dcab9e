//! Task List View Component
//!
//! Rebuilds every item from the current snapshot whenever it changes.
//! No keyed diffing; list sizes here are small.

use leptos::prelude::*;

use crate::components::TaskItem;
use crate::render::{task_rows, LIST_CLASS, LIST_ID};
use crate::store::{use_widget_store, WidgetStateStoreFields};

#[component]
pub fn TaskListView() -> impl IntoView {
    let state = use_widget_store();

    let rows = move || state.tasks().with(|tasks| task_rows(tasks, state.edit().get()));

    view! {
        <ul class=LIST_CLASS id=LIST_ID>
            {move || {
                rows()
                    .into_iter()
                    .map(|row| view! { <TaskItem row=row /> })
                    .collect_view()
            }}
        </ul>
    }
}
