//! Error types shared by the HTTP layer and the form validators.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failure of a REST call.
///
/// Views never show these texts directly; they map every failure of an action
/// to one fixed message.  The variants exist so the session logic can tell a
/// rejected login or an expired token apart from everything else.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("invalid username or password")]
    Authentication,

    #[error("session expired")]
    SessionExpired,

    #[error("request failed with status {status}: {message}")]
    Http { status: u16, message: String },

    #[error("network error: {0}")]
    Network(String),

    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            ApiError::Authentication | ApiError::SessionExpired => Some(401),
            _ => None,
        }
    }
}

impl From<JsValue> for ApiError {
    fn from(value: JsValue) -> Self {
        ApiError::Network(
            value
                .as_string()
                .unwrap_or_else(|| format!("{:?}", value)),
        )
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

impl From<ApiError> for JsValue {
    fn from(err: ApiError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Client-side rejection of the user create/edit form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Informe o nome de usuário.")]
    MissingUsername,

    #[error("Informe o email.")]
    MissingEmail,

    #[error("Informe uma senha para o novo usuário.")]
    MissingPassword,

    #[error("Selecione pelo menos uma página do Facebook para este usuário.")]
    NoPagesSelected,
}
