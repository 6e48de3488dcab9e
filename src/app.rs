//! Todo Widget App
//!
//! Scaffolding rendered into the mount point: input row, list, clear button.

use leptos::prelude::*;

use crate::components::{TaskInput, TaskListView};
use crate::config::WidgetConfig;
use crate::controller::use_controller;
use crate::render::{remaining_count, remaining_label, CLEAR_BUTTON_CLASS, REMAINING_CLASS};
use crate::store::{use_widget_store, WidgetStateStoreFields};

#[component]
pub fn TodoApp() -> impl IntoView {
    let config = expect_context::<WidgetConfig>();
    let controller = use_controller();
    let state = use_widget_store();

    let remaining = move || state.tasks().with(|tasks| remaining_count(tasks));

    view! {
        <TaskInput placeholder=config.placeholder />

        <TaskListView />

        <button
            type="button"
            class=CLEAR_BUTTON_CLASS
            on:mousedown=|ev| ev.prevent_default()
            on:click=move |_| controller.clear_completed()
        >
            {config.clear_label}
        </button>

        <p class=REMAINING_CLASS>{move || remaining_label(remaining())}</p>
    }
}
