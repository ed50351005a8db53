//! Facebook page checklist of the user form.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, HtmlInputElement};

use crate::authorization::{page_checked, page_selection_locked};
use crate::dom_utils::{append, on_click};
use crate::messages::Message;
use crate::models::{FacebookPage, Role};

pub const HINT_ADMIN: &str = "* Administradores têm acesso a todas as páginas automaticamente.";
pub const HINT_SELECT: &str = "* Selecione as páginas que este usuário poderá acessar.";

pub fn hint(role: Role) -> &'static str {
    if page_selection_locked(role) {
        HINT_ADMIN
    } else {
        HINT_SELECT
    }
}

/// Every available page with a checkbox.  For ADMIN all boxes are checked and
/// disabled.
pub fn render(
    document: &Document,
    parent: &Element,
    pages: &[FacebookPage],
    role: Role,
    selected: &[String],
) -> Result<(), JsValue> {
    let section = append(document, parent, "div", "page-checklist", "")?;
    append(
        document,
        &section,
        "label",
        "field-label",
        "Páginas do Facebook Associadas",
    )?;
    let list = append(document, &section, "div", "page-checklist-items", "")?;

    if pages.is_empty() {
        append(
            document,
            &list,
            "p",
            crate::constants::CSS_EMPTY_STATE,
            "Nenhuma página encontrada. Conecte o Facebook com uma conta Admin primeiro.",
        )?;
    }

    let locked = page_selection_locked(role);
    for page in pages {
        let row = append(document, &list, "label", "page-checklist-item", "")?;

        let checkbox: HtmlInputElement = document.create_element("input")?.dyn_into()?;
        checkbox.set_type("checkbox");
        checkbox.set_value(&page.id);
        checkbox.set_checked(page_checked(role, selected, &page.id));
        checkbox.set_disabled(locked);
        if !locked {
            on_click(&checkbox, Message::ToggleFormPage(page.id.clone()));
        }
        row.append_child(&checkbox)?;

        let class = if locked { "page-name muted" } else { "page-name" };
        append(
            document,
            &row,
            "span",
            class,
            &format!("{} (ID: {})", page.name, page.id),
        )?;
    }

    append(document, &section, "p", "hint", hint(role))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hint_follows_role() {
        assert_eq!(hint(Role::Admin), HINT_ADMIN);
        assert_eq!(hint(Role::GestorDeLives), HINT_SELECT);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn page(id: &str) -> FacebookPage {
        FacebookPage {
            id: id.into(),
            name: format!("Página {}", id),
            category: None,
            link: None,
        }
    }

    fn checkboxes(document: &Document, role: Role, selected: &[String]) -> Vec<HtmlInputElement> {
        let parent = document.create_element("div").unwrap();
        render(document, &parent, &[page("p1"), page("p2")], role, selected).unwrap();
        let nodes = parent.query_selector_all("input[type=checkbox]").unwrap();
        (0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .map(|n| n.dyn_into::<HtmlInputElement>().unwrap())
            .collect()
    }

    #[wasm_bindgen_test]
    fn admin_rows_are_checked_and_disabled() {
        let document = web_sys::window().unwrap().document().unwrap();
        let boxes = checkboxes(&document, Role::Admin, &[]);
        assert_eq!(boxes.len(), 2);
        assert!(boxes.iter().all(|b| b.checked() && b.disabled()));
    }

    #[wasm_bindgen_test]
    fn other_roles_reflect_selection() {
        let document = web_sys::window().unwrap().document().unwrap();
        let boxes = checkboxes(&document, Role::GestorDeLives, &["p2".to_string()]);
        assert_eq!(boxes.len(), 2);
        assert!(boxes.iter().all(|b| !b.disabled()));
        assert!(!boxes[0].checked());
        assert!(boxes[1].checked());
    }
}
