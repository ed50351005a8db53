// src/pages/login.rs
//
// Login form.  The only view reachable without a session.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlButtonElement, HtmlInputElement};

use crate::constants::{
    ATTR_TYPE, BUTTON_TYPE_SUBMIT, CSS_BANNER_ERROR, CSS_BTN_PRIMARY, CSS_FORM_ROW,
    ID_LOGIN_PASSWORD, ID_LOGIN_USERNAME,
};
use crate::dom_utils::{append, input_value};
use crate::messages::Message;
use crate::state::{dispatch_global_message, AppState};

pub fn mount(document: &Document, root: &Element, state: &AppState) -> Result<(), JsValue> {
    let card = append(document, root, "div", "login-card", "")?;
    append(document, &card, "h1", "login-title", "MetriLive")?;
    append(document, &card, "p", "login-subtitle", "Acesse sua conta")?;

    if let Some(error) = &state.login.error {
        let el = append(document, &card, "div", CSS_BANNER_ERROR, error)?;
        el.set_attribute("role", "alert")?;
    }

    let form = append(document, &card, "form", "login-form", "")?;
    for (id, label, kind, autocomplete) in [
        (ID_LOGIN_USERNAME, "Usuário", "text", "username"),
        (ID_LOGIN_PASSWORD, "Senha", "password", "current-password"),
    ] {
        let row = append(document, &form, "div", CSS_FORM_ROW, "")?;
        append(document, &row, "label", "", label)?.set_attribute("for", id)?;
        let input: HtmlInputElement = document.create_element("input")?.dyn_into()?;
        input.set_id(id);
        input.set_attribute(ATTR_TYPE, kind)?;
        input.set_attribute("autocomplete", autocomplete)?;
        input.set_required(true);
        input.set_disabled(state.login.loading);
        row.append_child(&input)?;
    }

    let submit: HtmlButtonElement = document.create_element("button")?.dyn_into()?;
    submit.set_attribute(ATTR_TYPE, BUTTON_TYPE_SUBMIT)?;
    submit.set_class_name(CSS_BTN_PRIMARY);
    submit.set_disabled(state.login.loading);
    submit.set_text_content(Some(if state.login.loading {
        "Entrando..."
    } else {
        "Entrar"
    }));
    form.append_child(&submit)?;

    {
        let document = document.clone();
        let cb = Closure::wrap(Box::new(move |e: web_sys::Event| {
            e.prevent_default();
            dispatch_global_message(Message::LoginRequested {
                username: input_value(&document, ID_LOGIN_USERNAME),
                password: input_value(&document, ID_LOGIN_PASSWORD),
            });
        }) as Box<dyn FnMut(_)>);
        form.add_event_listener_with_callback("submit", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }

    if let Some(input) = document
        .get_element_by_id(ID_LOGIN_USERNAME)
        .and_then(|e| e.dyn_into::<HtmlInputElement>().ok())
    {
        let _ = input.focus();
    }
    Ok(())
}
