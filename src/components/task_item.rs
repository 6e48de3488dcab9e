//! Task Item Component
//!
//! One list entry: checkbox, label or edit field, delete affordance.
//! Row controls cancel `mousedown` so an open edit field keeps focus
//! until the click lands; the controller commits that edit first.

use leptos::prelude::*;

use crate::controller::use_controller;
use crate::models::TaskId;
use crate::render::{
    TaskRow, CHECKBOX_CLASS, DELETE_CLASS, DELETE_TITLE, EDIT_INPUT_CLASS, GROUP_CLASS, ITEM_CLASS,
};

/// A single task row
#[component]
pub fn TaskItem(row: TaskRow) -> impl IntoView {
    let controller = use_controller();

    let id = row.id;
    let label_class = row.label_class();

    let label = if row.editing {
        view! { <EditField id=id description=row.description /> }.into_any()
    } else {
        view! {
            <p
                class=label_class
                on:mousedown=keep_focus
                on:click=move |_| controller.begin_edit(id)
            >
                {row.description}
            </p>
        }
        .into_any()
    };

    view! {
        <li class=ITEM_CLASS data-index=row.index.to_string()>
            <span class=GROUP_CLASS>
                <input
                    type="checkbox"
                    class=CHECKBOX_CLASS
                    prop:checked=row.completed
                    on:mousedown=keep_focus
                    on:change=move |ev| controller.set_completed(id, event_target_checked(&ev))
                />
                {label}
            </span>
            <span
                class=DELETE_CLASS
                title=DELETE_TITLE
                on:mousedown=keep_focus
                on:click=move |_| controller.remove(id)
            >
                "🗑"
            </span>
        </li>
    }
}

fn keep_focus(ev: web_sys::MouseEvent) {
    ev.prevent_default();
}

/// Edit field shown in place of the label; Enter or blur commits
#[component]
fn EditField(id: TaskId, description: String) -> impl IntoView {
    let controller = use_controller();
    let input_ref = NodeRef::<leptos::html::Input>::new();

    // Grab focus once mounted
    Effect::new(move |_| {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    view! {
        <input
            type="text"
            class=EDIT_INPUT_CLASS
            node_ref=input_ref
            prop:value=description
            on:input=move |ev| controller.update_draft(event_target_value(&ev))
            on:keydown=move |ev| {
                if ev.key() == "Enter" {
                    controller.commit_edit(id, &event_target_value(&ev));
                }
            }
            on:blur=move |ev| controller.commit_edit(id, &event_target_value(&ev))
        />
    }
}
