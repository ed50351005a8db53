//! Top navigation: view buttons on the left, greeting and logout on the right.
//! Hidden while nobody is logged in.

use wasm_bindgen::JsValue;
use web_sys::Document;

use crate::authorization::can_manage_users;
use crate::constants::{
    ATTR_DATA_TESTID, CSS_BTN_DANGER, CSS_NAV_BUTTON, CSS_NAV_BUTTON_ACTIVE, ID_NAV_BAR,
};
use crate::dom_utils::{append, button, clear, hide, show};
use crate::messages::Message;
use crate::state::AppState;
use crate::storage::ActiveView;

/// Whether the nav entry for `target` is highlighted.  The Usuários entry
/// stays active on the user form.
fn is_active(current: &ActiveView, target: &ActiveView) -> bool {
    match (current, target) {
        (ActiveView::UserForm(_), ActiveView::Users) => true,
        _ => current == target,
    }
}

pub fn render(document: &Document, state: &AppState) -> Result<(), JsValue> {
    let nav = document
        .get_element_by_id(ID_NAV_BAR)
        .ok_or_else(|| JsValue::from_str("nav-bar missing"))?;
    clear(&nav);

    if !state.session.is_authenticated() {
        hide(&nav);
        return Ok(());
    }
    show(&nav);

    let links = append(document, &nav, "div", "nav-links", "")?;
    let mut entries = vec![
        ("Início", ActiveView::Home),
        ("Baixar", ActiveView::Download),
        ("Visualizar", ActiveView::Comments),
        ("Facebook", ActiveView::Facebook),
    ];
    if can_manage_users(state.session.role()) {
        entries.push(("Usuários", ActiveView::Users));
    }
    for (label, view) in entries {
        let class = if is_active(&state.active_view, &view) {
            CSS_NAV_BUTTON_ACTIVE
        } else {
            CSS_NAV_BUTTON
        };
        let btn = button(document, label, class, Message::Navigate(view))?;
        links.append_child(&btn)?;
    }

    let account = append(document, &nav, "div", "nav-account", "")?;
    append(
        document,
        &account,
        "span",
        "nav-greeting",
        &format!("Olá, {}", state.session.username()),
    )?;
    let logout = button(document, "Sair", CSS_BTN_DANGER, Message::LogoutRequested)?;
    logout.set_attribute(ATTR_DATA_TESTID, "logout")?;
    account.append_child(&logout)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn users_tab_active_on_form() {
        assert!(is_active(&ActiveView::UserForm(Some(1)), &ActiveView::Users));
        assert!(is_active(&ActiveView::Home, &ActiveView::Home));
        assert!(!is_active(&ActiveView::Download, &ActiveView::Home));
    }
}
