use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::constants::{CSS_BANNER_ERROR, CSS_BANNER_SUCCESS};
use crate::dom_utils::append;
use crate::state::{Banner, BannerKind};

/// Inline success / error box at the top of a view.
pub fn render(document: &Document, parent: &Element, banner: Option<&Banner>) -> Result<(), JsValue> {
    if let Some(banner) = banner {
        let class = match banner.kind {
            BannerKind::Success => CSS_BANNER_SUCCESS,
            BannerKind::Error => CSS_BANNER_ERROR,
        };
        let el = append(document, parent, "div", class, &banner.text)?;
        el.set_attribute("role", "status")?;
    }
    Ok(())
}
