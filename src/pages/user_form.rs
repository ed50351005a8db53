// src/pages/user_form.rs
//
// Create / edit a staff account.  Every field writes its draft into
// `UserFormState`; only the role select and the checklist re-render.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlSelectElement};

use crate::authorization::can_manage_users;
use crate::components::{banner, page_checklist};
use crate::constants::{CSS_BTN_PRIMARY, CSS_BTN_SECONDARY, CSS_FORM_ROW, CSS_LOADING};
use crate::dom_utils::{append, button, text_field};
use crate::messages::Message;
use crate::models::Role;
use crate::state::{dispatch_global_message, AppState, Banner, UserFormState};
use crate::storage::ActiveView;

const ID_USERNAME: &str = "user-form-username";
const ID_EMAIL: &str = "user-form-email";
const ID_PASSWORD: &str = "user-form-password";
const ID_ROLE: &str = "user-form-role";

pub fn mount(document: &Document, root: &Element, state: &AppState) -> Result<(), JsValue> {
    let role = state.session.role();
    if role.is_none() {
        append(document, root, "p", CSS_LOADING, "Carregando...")?;
        return Ok(());
    }
    if !can_manage_users(role) {
        append(document, root, "p", "access-denied", "Acesso negado")?;
        return Ok(());
    }

    let form = &state.user_form;
    let panel = append(document, root, "div", "panel narrow", "")?;
    append(document, &panel, "h1", "page-title", title(form))?;
    let error = form.error.as_deref().map(Banner::error);
    banner::render(document, &panel, error.as_ref())?;

    if form.loading {
        append(document, &panel, "p", CSS_LOADING, "Carregando...")?;
        return Ok(());
    }

    text_field(
        document,
        &panel,
        ID_USERNAME,
        "Nome de Usuário",
        "text",
        &form.username,
        Message::SetFormUsername,
    )?;
    text_field(
        document,
        &panel,
        ID_EMAIL,
        "Email",
        "email",
        &form.email,
        Message::SetFormEmail,
    )?;
    let password_label = if form.is_edit() {
        "Senha (Deixe em branco para manter a atual)"
    } else {
        "Senha"
    };
    text_field(
        document,
        &panel,
        ID_PASSWORD,
        password_label,
        "password",
        &form.password,
        Message::SetFormPassword,
    )?;

    role_select(document, &panel, form.role)?;
    page_checklist::render(
        document,
        &panel,
        &form.available_pages,
        form.role,
        &form.selected_page_ids,
    )?;

    let actions = append(document, &panel, "div", "form-actions", "")?;
    let cancel = button(
        document,
        "Cancelar",
        CSS_BTN_SECONDARY,
        Message::Navigate(ActiveView::Users),
    )?;
    actions.append_child(&cancel)?;
    let save = button(
        document,
        if form.saving { "Salvando..." } else { "Salvar" },
        CSS_BTN_PRIMARY,
        Message::SubmitUserForm,
    )?;
    save.set_disabled(!form.can_submit());
    actions.append_child(&save)?;
    Ok(())
}

fn title(form: &UserFormState) -> &'static str {
    if form.is_edit() {
        "Editar Usuário"
    } else {
        "Novo Usuário"
    }
}

fn role_select(document: &Document, parent: &Element, current: Role) -> Result<(), JsValue> {
    let row = append(document, parent, "div", CSS_FORM_ROW, "")?;
    append(document, &row, "label", "", "Função")?.set_attribute("for", ID_ROLE)?;

    let select: HtmlSelectElement = document.create_element("select")?.dyn_into()?;
    select.set_id(ID_ROLE);
    for role in Role::ALL {
        let option = document.create_element("option")?;
        option.set_attribute("value", role.as_str())?;
        option.set_text_content(Some(role.label()));
        select.append_child(&option)?;
    }
    select.set_value(current.as_str());

    let target = select.clone();
    let cb = Closure::wrap(Box::new(move |_e: web_sys::Event| {
        if let Some(role) = Role::parse(&target.value()) {
            dispatch_global_message(Message::SetFormRole(role));
        }
    }) as Box<dyn FnMut(_)>);
    select.add_event_listener_with_callback("change", cb.as_ref().unchecked_ref())?;
    cb.forget();

    row.append_child(&select)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_follows_mode() {
        assert_eq!(title(&UserFormState::for_create()), "Novo Usuário");
        assert_eq!(title(&UserFormState::for_edit(3)), "Editar Usuário");
    }
}
