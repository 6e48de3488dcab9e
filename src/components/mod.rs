//! UI Components
//!
//! Leptos components making up the widget.

mod task_input;
mod task_item;
mod task_list_view;

pub use task_input::TaskInput;
pub use task_item::TaskItem;
pub use task_list_view::TaskListView;
