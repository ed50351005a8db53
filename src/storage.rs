//! Browser persistence: the bearer token in `localStorage` and the active
//! view mirrored in `location.hash`.

use wasm_bindgen::JsValue;

use crate::constants::STORAGE_TOKEN_KEY;

/// Top-level views of the application.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActiveView {
    Login,
    Home,
    Download,
    Comments,
    Facebook,
    Users,
    /// `None` creates a new user, `Some(id)` edits an existing one.
    UserForm(Option<u64>),
}

impl ActiveView {
    /// Hash fragment for the view, e.g. `#/baixar`.
    pub fn to_hash(&self) -> String {
        match self {
            ActiveView::Login => "#/login".to_string(),
            ActiveView::Home => "#/".to_string(),
            ActiveView::Download => "#/baixar".to_string(),
            ActiveView::Comments => "#/visualizar".to_string(),
            ActiveView::Facebook => "#/facebook".to_string(),
            ActiveView::Users => "#/usuarios".to_string(),
            ActiveView::UserForm(None) => "#/usuarios/novo".to_string(),
            ActiveView::UserForm(Some(id)) => format!("#/usuarios/editar/{}", id),
        }
    }

    /// Inverse of [`ActiveView::to_hash`].  Unknown fragments land on Home.
    pub fn from_hash(hash: &str) -> ActiveView {
        let path = hash.trim_start_matches('#').trim_start_matches('/');
        let path = path.trim_end_matches('/');
        match path {
            "" => ActiveView::Home,
            "login" => ActiveView::Login,
            "baixar" => ActiveView::Download,
            "visualizar" => ActiveView::Comments,
            "facebook" => ActiveView::Facebook,
            "usuarios" => ActiveView::Users,
            "usuarios/novo" => ActiveView::UserForm(None),
            other => other
                .strip_prefix("usuarios/editar/")
                .and_then(|id| id.parse::<u64>().ok())
                .map(|id| ActiveView::UserForm(Some(id)))
                .unwrap_or(ActiveView::Home),
        }
    }

    /// Views reachable without a session.
    pub fn is_public(&self) -> bool {
        matches!(self, ActiveView::Login)
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

pub fn load_token() -> Option<String> {
    local_storage()
        .and_then(|s| s.get_item(STORAGE_TOKEN_KEY).ok().flatten())
        .filter(|t| !t.is_empty())
}

pub fn save_token(token: &str) -> Result<(), JsValue> {
    let storage = local_storage().ok_or_else(|| JsValue::from_str("localStorage unavailable"))?;
    storage.set_item(STORAGE_TOKEN_KEY, token)
}

/// Remove the persisted token.  Missing storage is not an error: there is
/// nothing to clear.
pub fn clear_token() {
    if let Some(storage) = local_storage() {
        if let Err(e) = storage.remove_item(STORAGE_TOKEN_KEY) {
            debug_log!("Failed to clear token: {:?}", e);
        }
    }
}

pub fn current_hash_view() -> Option<ActiveView> {
    let hash = web_sys::window()?.location().hash().ok()?;
    Some(ActiveView::from_hash(&hash))
}

/// Mirror the view into `location.hash` without triggering a reload.
pub fn push_hash(view: &ActiveView) {
    if let Some(window) = web_sys::window() {
        let target = view.to_hash();
        let location = window.location();
        if location.hash().ok().as_deref() != Some(target.as_str()) {
            let _ = location.set_hash(&target);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_round_trip() {
        let views = [
            ActiveView::Login,
            ActiveView::Home,
            ActiveView::Download,
            ActiveView::Comments,
            ActiveView::Facebook,
            ActiveView::Users,
            ActiveView::UserForm(None),
            ActiveView::UserForm(Some(12)),
        ];
        for v in views {
            assert_eq!(ActiveView::from_hash(&v.to_hash()), v);
        }
    }

    #[test]
    fn unknown_hash_goes_home() {
        assert_eq!(ActiveView::from_hash(""), ActiveView::Home);
        assert_eq!(ActiveView::from_hash("#/nada"), ActiveView::Home);
        assert_eq!(ActiveView::from_hash("#/usuarios/editar/x"), ActiveView::Home);
        assert_eq!(ActiveView::from_hash("#/baixar/"), ActiveView::Download);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn token_survives_reload_until_cleared() {
        save_token("abc").unwrap();
        assert_eq!(load_token().as_deref(), Some("abc"));
        clear_token();
        assert_eq!(load_token(), None);
    }
}
