pub mod api_client;
pub mod config;

pub use api_client::ApiClient;

use config::ApiConfig;
use lazy_static::lazy_static;
use std::sync::RwLock;
use wasm_bindgen::prelude::*;

lazy_static! {
    static ref API_CONFIG: RwLock<Option<ApiConfig>> = RwLock::new(None);
}

/// Initialize the API configuration from the compile-time `API_BASE_URL`.
pub fn init_api_config() {
    if let Ok(mut guard) = API_CONFIG.write() {
        *guard = Some(ApiConfig::new());
    }
}

/// Initialize the API configuration from a JS-provided URL.
/// This allows runtime configuration of the API endpoints.
#[wasm_bindgen]
pub fn init_api_config_js(api_base_url: &str) -> Result<(), JsValue> {
    crate::debug_log!("Initializing API config from JS: {}", api_base_url);
    let mut guard = API_CONFIG
        .write()
        .map_err(|_| JsValue::from_str("API config lock poisoned"))?;
    *guard = Some(ApiConfig::from_url(api_base_url));
    Ok(())
}

/// Full URL for an API path.  Missing config → same-origin.
pub(crate) fn api_url(path: &str) -> String {
    match API_CONFIG.read() {
        Ok(guard) => match guard.as_ref() {
            Some(cfg) => cfg.url(path),
            None => ApiConfig::default().url(path),
        },
        Err(_) => ApiConfig::default().url(path),
    }
}
