//! Task Input Component
//!
//! Global text field; Enter adds a task.

use leptos::prelude::*;

use crate::controller::use_controller;
use crate::render::{ADDED_TASK_CLASS, ADD_CONTAINER_CLASS, ADD_ICON_CLASS, INPUT_CLASS, INPUT_ID};

#[component]
pub fn TaskInput(#[prop(into)] placeholder: String) -> impl IntoView {
    let controller = use_controller();

    let (new_text, set_new_text) = signal(String::new());

    let add_task = move |ev: web_sys::KeyboardEvent| {
        if ev.key() != "Enter" {
            return;
        }
        match controller.add(&new_text.get_untracked()) {
            Ok(()) => set_new_text.set(String::new()),
            Err(e) => log::warn!("task not added: {}", e),
        }
    };

    view! {
        <span class=ADD_CONTAINER_CLASS>
            <div class=ADDED_TASK_CLASS>
                <input
                    type="text"
                    id=INPUT_ID
                    class=INPUT_CLASS
                    placeholder=placeholder
                    prop:value=move || new_text.get()
                    on:input=move |ev| set_new_text.set(event_target_value(&ev))
                    on:keydown=add_task
                />
                <span class=ADD_ICON_CLASS>"↻"</span>
            </div>
        </span>
    }
}
