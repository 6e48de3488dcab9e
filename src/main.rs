#![allow(warnings)]
//! Todo Widget Entry Point

mod app;
mod components;
mod config;
mod controller;
mod edit;
mod error;
mod logger;
mod models;
mod render;
mod storage;
mod store;
mod task_list;

use app::TodoApp;
use config::WidgetConfig;
use controller::TodoController;
use leptos::prelude::*;
use storage::BrowserStorage;
use task_list::TaskList;
use wasm_bindgen::JsCast;

fn main() {
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Info);

    let config = WidgetConfig::default();
    let mount = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(&config.mount_id));
    let config = match &mount {
        Some(element) => config.with_attributes(|name| element.get_attribute(name)),
        None => config,
    };
    let mount_id = config.mount_id.clone();

    let app = move || {
        // Wall-clock seed keeps ids unique across reloads
        let seed = js_sys::Date::now() as u64;
        let list = TaskList::load_seeded(BrowserStorage, config.storage_key.clone(), seed);
        let controller = TodoController::new(list);

        provide_context(controller.state());
        provide_context(controller);
        provide_context(config);

        view! { <TodoApp /> }
    };

    match mount.and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok()) {
        Some(element) => leptos::mount::mount_to(element, app).forget(),
        None => {
            log::warn!("mount point #{} not found, rendering into <body>", mount_id);
            leptos::mount::mount_to_body(app);
        }
    }
}
