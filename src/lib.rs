//! MetriLive admin dashboard.
//!
//! A single-page WASM application with an Elm-like loop: DOM events become
//! [`messages::Message`]s, reducers update [`state::AppState`] and return
//! [`messages::Command`]s, and the command executors perform the side
//! effects (HTTP, storage, toasts) before dispatching the results back.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Document;

#[macro_use]
mod macros;

pub mod authorization;
mod command_executors;
mod components;
mod constants;
mod dom_utils;
pub mod errors;
pub mod messages;
pub mod metrics;
pub mod models;
pub mod network;
mod pages;
mod reducers;
pub mod session;
pub mod state;
pub mod storage;
mod toast;
mod update;
pub mod utils;
mod views;

use crate::constants::{ID_APP_CONTAINER, ID_NAV_BAR, ID_PAGE_ROOT};
use crate::messages::Message;
use crate::state::dispatch_global_message;
use crate::storage::{current_hash_view, ActiveView};

/// `#app-container` with the navigation bar and the page root.  Pages
/// only ever touch `#page-root`.
fn build_layout(document: &Document) -> Result<(), JsValue> {
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?;

    let container = match document.get_element_by_id(ID_APP_CONTAINER) {
        Some(existing) => existing,
        None => {
            let el = document.create_element("div")?;
            el.set_id(ID_APP_CONTAINER);
            body.append_child(&el)?;
            el
        }
    };
    dom_utils::clear(&container);

    let nav = document.create_element("nav")?;
    nav.set_id(ID_NAV_BAR);
    container.append_child(&nav)?;

    let root = document.create_element("main")?;
    root.set_id(ID_PAGE_ROOT);
    container.append_child(&root)?;
    Ok(())
}

/// Back/forward buttons and hand-edited URLs.
fn listen_for_hash_changes() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let cb = Closure::wrap(Box::new(move |_e: web_sys::Event| {
        if let Some(view) = current_hash_view() {
            dispatch_global_message(Message::HashChanged(view));
        }
    }) as Box<dyn FnMut(_)>);
    window.add_event_listener_with_callback("hashchange", cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    // `init_api_config_js` may override this later from bootstrap code.
    network::init_api_config();

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    build_layout(&document)?;

    dispatch_global_message(Message::SessionRestored(storage::load_token()));
    listen_for_hash_changes()?;

    let initial = current_hash_view().unwrap_or(ActiveView::Home);
    debug_log!("Starting on {:?}", initial);
    dispatch_global_message(Message::Navigate(initial));
    Ok(())
}
