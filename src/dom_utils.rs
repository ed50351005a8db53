//! dom_utils.rs – thin helper layer for repetitive DOM operations.
//!
//! Every page builds its markup imperatively; these wrappers keep the
//! `create_element` / `set_class_name` / `append_child` noise down.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlButtonElement, HtmlInputElement};

use crate::constants::{ATTR_TYPE, BUTTON_TYPE_BUTTON, CSS_HIDDEN, CSS_VISIBLE};
use crate::messages::Message;
use crate::state::dispatch_global_message;

/// Remove the `hidden` class so the element becomes visible.
pub fn show(el: &Element) {
    let _ = el.class_list().remove_1(CSS_HIDDEN);
    let _ = el.class_list().add_1(CSS_VISIBLE);
}

/// Hide the element by toggling CSS classes.
pub fn hide(el: &Element) {
    let _ = el.class_list().remove_1(CSS_VISIBLE);
    let _ = el.class_list().add_1(CSS_HIDDEN);
}

/// Remove every child of `el`.
pub fn clear(el: &Element) {
    while let Some(child) = el.first_child() {
        let _ = el.remove_child(&child);
    }
}

/// `<tag class="...">text</tag>`.  Empty class or text are skipped.
pub fn el(document: &Document, tag: &str, class: &str, text: &str) -> Result<Element, JsValue> {
    let element = document.create_element(tag)?;
    if !class.is_empty() {
        element.set_class_name(class);
    }
    if !text.is_empty() {
        element.set_text_content(Some(text));
    }
    Ok(element)
}

/// Create an element and append it to `parent` in one go.
pub fn append(
    document: &Document,
    parent: &Element,
    tag: &str,
    class: &str,
    text: &str,
) -> Result<Element, JsValue> {
    let element = el(document, tag, class, text)?;
    parent.append_child(&element)?;
    Ok(element)
}

/// A `type="button"` button that dispatches `msg` on click.
pub fn button(
    document: &Document,
    label: &str,
    class: &str,
    msg: Message,
) -> Result<HtmlButtonElement, JsValue> {
    let btn: HtmlButtonElement = el(document, "button", class, label)?.dyn_into()?;
    btn.set_attribute(ATTR_TYPE, BUTTON_TYPE_BUTTON)?;
    on_click(&btn, msg);
    Ok(btn)
}

/// Dispatch `msg` every time `target` is clicked.
pub fn on_click(target: &Element, msg: Message) {
    let cb = Closure::wrap(Box::new(move |_e: web_sys::MouseEvent| {
        dispatch_global_message(msg.clone());
    }) as Box<dyn FnMut(_)>);
    let _ = target.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref());
    cb.forget();
}

/// Dispatch `to_msg(value)` on every `input` event of `input`.
pub fn on_input(input: &HtmlInputElement, to_msg: fn(String) -> Message) {
    let target = input.clone();
    let cb = Closure::wrap(Box::new(move |_e: web_sys::Event| {
        dispatch_global_message(to_msg(target.value()));
    }) as Box<dyn FnMut(_)>);
    let _ = input.add_event_listener_with_callback("input", cb.as_ref().unchecked_ref());
    cb.forget();
}

/// Labelled text input bound to `to_msg`.
pub fn text_field(
    document: &Document,
    parent: &Element,
    id: &str,
    label: &str,
    input_type: &str,
    value: &str,
    to_msg: fn(String) -> Message,
) -> Result<HtmlInputElement, JsValue> {
    let row = append(document, parent, "div", crate::constants::CSS_FORM_ROW, "")?;
    let lbl = append(document, &row, "label", "", label)?;
    lbl.set_attribute("for", id)?;

    let input: HtmlInputElement = document.create_element("input")?.dyn_into()?;
    input.set_id(id);
    input.set_attribute(ATTR_TYPE, input_type)?;
    input.set_value(value);
    on_input(&input, to_msg);
    row.append_child(&input)?;
    Ok(input)
}

/// Read the current value of the `<input>` with `id`, empty when missing.
pub fn input_value(document: &Document, id: &str) -> String {
    document
        .get_element_by_id(id)
        .and_then(|e| e.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
        .unwrap_or_default()
}
