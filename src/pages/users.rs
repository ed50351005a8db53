// src/pages/users.rs
//
// "Gerenciar Usuários": staff account list (ADMIN only).

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use crate::authorization::can_manage_users;
use crate::constants::{CSS_BTN_DANGER, CSS_BTN_LINK, CSS_BTN_PRIMARY, CSS_DATA_TABLE, CSS_LOADING};
use crate::dom_utils::{append, button};
use crate::messages::Message;
use crate::models::User;
use crate::state::AppState;
use crate::storage::ActiveView;

const COLUMNS: [&str; 5] = ["ID", "Nome", "Email", "Role", "Ações"];

pub fn mount(document: &Document, root: &Element, state: &AppState) -> Result<(), JsValue> {
    let role = state.session.role();
    // Role is unknown until the profile arrives after a restored session.
    if role.is_none() || state.users.loading {
        append(document, root, "p", CSS_LOADING, "Carregando...")?;
        return Ok(());
    }
    if !can_manage_users(role) {
        append(document, root, "p", "access-denied", "Acesso negado")?;
        return Ok(());
    }

    let header = append(document, root, "div", "page-header", "")?;
    append(document, &header, "h1", "page-title", "Gerenciar Usuários")?;
    let new_user = button(
        document,
        "Novo Usuário",
        CSS_BTN_PRIMARY,
        Message::Navigate(ActiveView::UserForm(None)),
    )?;
    header.append_child(&new_user)?;

    let table = append(document, root, "table", CSS_DATA_TABLE, "")?;
    let head_row = append(document, &append(document, &table, "thead", "", "")?, "tr", "", "")?;
    for column in COLUMNS {
        append(document, &head_row, "th", "", column)?;
    }

    let body = append(document, &table, "tbody", "", "")?;
    for user in &state.users.users {
        user_row(document, &body, user)?;
    }
    Ok(())
}

fn user_row(document: &Document, body: &Element, user: &User) -> Result<(), JsValue> {
    let row = append(document, body, "tr", "", "")?;
    append(document, &row, "td", "", &user.id.to_string())?;
    append(document, &row, "td", "", &user.username)?;
    append(document, &row, "td", "", &user.email)?;
    append(document, &row, "td", "", user.role.as_str())?;

    let actions = append(document, &row, "td", "row-actions", "")?;
    let edit = button(
        document,
        "Editar",
        CSS_BTN_LINK,
        Message::Navigate(ActiveView::UserForm(Some(user.id))),
    )?;
    actions.append_child(&edit)?;
    let delete = button(
        document,
        "Excluir",
        CSS_BTN_DANGER,
        Message::RequestUserDeletion(user.id),
    )?;
    actions.append_child(&delete)?;
    Ok(())
}
