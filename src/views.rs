// src/views.rs
//
// Renders the navigation bar and the active view from the current state.
// Every render rebuilds `#page-root` from scratch.
//
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::components::nav_bar;
use crate::constants::ID_PAGE_ROOT;
use crate::dom_utils::clear;
use crate::pages;
use crate::state::{AppState, APP_STATE};
use crate::storage::ActiveView;

pub fn render_active_view() -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    APP_STATE.with(|state| render_view(&state.borrow(), &document))
}

pub fn render_view(state: &AppState, document: &Document) -> Result<(), JsValue> {
    nav_bar::render(document, state)?;

    let root = page_root(document)?;
    clear(&root);
    match &state.active_view {
        ActiveView::Login => pages::login::mount(document, &root, state),
        ActiveView::Home => pages::home::mount(document, &root, state),
        ActiveView::Download => pages::download::mount(document, &root, state),
        ActiveView::Comments => pages::comments::mount(document, &root, state),
        ActiveView::Facebook => pages::facebook::mount(document, &root, state),
        ActiveView::Users => pages::users::mount(document, &root, state),
        ActiveView::UserForm(_) => pages::user_form::mount(document, &root, state),
    }
}

pub fn page_root(document: &Document) -> Result<Element, JsValue> {
    document
        .get_element_by_id(ID_PAGE_ROOT)
        .ok_or_else(|| JsValue::from_str("page-root missing"))
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::constants::{ID_LOGIN_USERNAME, ID_NAV_BAR};
    use crate::models::{Role, User};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn document_with_layout() -> Document {
        let document = web_sys::window().unwrap().document().unwrap();
        for id in [ID_NAV_BAR, ID_PAGE_ROOT] {
            if document.get_element_by_id(id).is_none() {
                let el = document.create_element("div").unwrap();
                el.set_id(id);
                document.body().unwrap().append_child(&el).unwrap();
            }
        }
        document
    }

    #[wasm_bindgen_test]
    fn login_view_renders_without_nav() {
        let document = document_with_layout();
        let state = AppState::new();
        render_view(&state, &document).unwrap();

        assert!(document.get_element_by_id(ID_LOGIN_USERNAME).is_some());
        let nav = document.get_element_by_id(ID_NAV_BAR).unwrap();
        assert!(nav.class_list().contains(crate::constants::CSS_HIDDEN));
    }

    #[wasm_bindgen_test]
    fn staff_user_form_shows_access_denied() {
        let document = document_with_layout();
        let mut state = AppState::new();
        state.session.begin("tok".into());
        state.session.set_user(User {
            id: 9,
            username: "equipe".into(),
            email: "equipe@example.com".into(),
            role: Role::EquipeDeProducao,
            authorized_pages: None,
        });
        state.active_view = ActiveView::UserForm(None);
        render_view(&state, &document).unwrap();

        let text = page_root(&document).unwrap().text_content().unwrap_or_default();
        assert!(text.contains("Acesso negado"));
    }

    #[wasm_bindgen_test]
    fn comments_view_lists_saved_videos() {
        let document = document_with_layout();
        let mut state = AppState::new();
        state.session.begin("tok".into());
        state.viewer.videos = serde_json::from_value(serde_json::json!([
            { "id": "v1", "title": "Live de sábado" },
            { "id": "v2" }
        ]))
        .unwrap();
        state.active_view = ActiveView::Comments;
        render_view(&state, &document).unwrap();

        let select = document
            .get_element_by_id(crate::constants::ID_VIDEO_SELECT)
            .unwrap();
        // Placeholder plus one option per video.
        assert_eq!(select.child_element_count(), 3);
        assert!(select.text_content().unwrap_or_default().contains("Live de sábado"));
    }
}
