use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, Headers, Request, RequestInit, RequestMode, Response};

use crate::errors::ApiError;
use crate::messages::Message;
use crate::models::{
    AuthResponse, Comment, DashboardMetric, FacebookPage, FacebookTokenRequest, LiveVideo,
    LoginRequest, User, UserCreateRequest, UserUpdateRequest, VideoUrlRequest,
};

/// Which credential a request carries.
#[derive(Clone, Copy, Debug)]
enum Auth<'a> {
    /// The token currently persisted in localStorage, if any.  A 401 on such
    /// a request ends the session.
    Session,
    /// A specific token: logout after local state is gone, and the profile
    /// fetch, whose outcome must be matched to the credential it was for.
    Token(&'a str),
    None,
}

/// A downloaded file, ready to hand to the browser.
pub struct Download {
    pub blob: Blob,
    pub content_disposition: Option<String>,
}

// REST API client for the MetriLive backend.
pub struct ApiClient;

impl ApiClient {
    fn url(path: &str) -> String {
        super::api_url(path)
    }

    /// Extract a readable message from an error body.  Spring answers with
    /// `{ "message": ... }`, some proxies with `{ "detail": ... }`.
    fn error_message(status_text: &str, body: &str) -> String {
        serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| {
                v.get("message")
                    .or_else(|| v.get("detail"))
                    .and_then(|m| m.as_str())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| status_text.to_string())
    }

    // -------------------------------------------------------------------
    // Authentication
    // -------------------------------------------------------------------

    /// Exchange username/password for a bearer token.  401/403 here means bad
    /// credentials, not an expired session.
    pub async fn authenticate(username: &str, password: &str) -> Result<String, ApiError> {
        let body = serde_json::to_string(&LoginRequest { username, password })?;
        let resp = Self::send(&Self::url("/auth/authenticate"), "POST", Some(&body), Auth::None)
            .await
            .map_err(|e| match e.status() {
                Some(401) | Some(403) => ApiError::Authentication,
                _ => e,
            })?;
        let out: AuthResponse = Self::read_json(resp).await?;
        Ok(out.token)
    }

    /// Tell the backend the token is no longer in use.
    pub async fn logout(token: &str) -> Result<(), ApiError> {
        Self::send(&Self::url("/auth/logout"), "POST", None, Auth::Token(token))
            .await
            .map(|_| ())
    }

    /// Fetch the profile (`/users/me`) that belongs to `token`.  A 401 here is
    /// reported to the caller instead of ending whatever session is current.
    pub async fn fetch_current_user(token: &str) -> Result<User, ApiError> {
        let resp = Self::send(&Self::url("/users/me"), "GET", None, Auth::Token(token)).await?;
        Self::read_json(resp).await
    }

    // -------------------------------------------------------------------
    // Users
    // -------------------------------------------------------------------

    pub async fn get_users() -> Result<Vec<User>, ApiError> {
        Self::get_json("/users").await
    }

    pub async fn get_user(user_id: u64) -> Result<User, ApiError> {
        Self::get_json(&format!("/users/{}", user_id)).await
    }

    pub async fn create_user(request: &UserCreateRequest) -> Result<User, ApiError> {
        Self::send_json("/users", "POST", request).await
    }

    pub async fn update_user(user_id: u64, request: &UserUpdateRequest) -> Result<User, ApiError> {
        Self::send_json(&format!("/users/{}", user_id), "PUT", request).await
    }

    pub async fn delete_user(user_id: u64) -> Result<(), ApiError> {
        let url = Self::url(&format!("/users/{}", user_id));
        Self::send(&url, "DELETE", None, Auth::Session).await.map(|_| ())
    }

    // -------------------------------------------------------------------
    // Facebook
    // -------------------------------------------------------------------

    pub async fn set_facebook_token(access_token: &str) -> Result<(), ApiError> {
        let body = serde_json::to_string(&FacebookTokenRequest { access_token })?;
        Self::send(&Self::url("/facebook/token"), "POST", Some(&body), Auth::Session)
            .await
            .map(|_| ())
    }

    pub async fn process_video_url(url: &str) -> Result<(), ApiError> {
        let body = serde_json::to_string(&VideoUrlRequest { url })?;
        Self::send(&Self::url("/facebook/process-url"), "POST", Some(&body), Auth::Session)
            .await
            .map(|_| ())
    }

    pub async fn get_pages() -> Result<Vec<FacebookPage>, ApiError> {
        Self::get_json("/facebook/pages").await
    }

    pub async fn get_live_videos(page_id: &str) -> Result<Vec<LiveVideo>, ApiError> {
        Self::get_json(&format!("/facebook/pages/{}/lives", encode_segment(page_id))).await
    }

    pub async fn get_comments(live_video_id: &str) -> Result<Vec<Comment>, ApiError> {
        Self::get_json(&format!(
            "/facebook/lives/{}/comments",
            encode_segment(live_video_id)
        ))
        .await
    }

    /// Videos already stored by the backend (comment viewer).
    pub async fn get_saved_videos() -> Result<Vec<LiveVideo>, ApiError> {
        Self::get_json("/facebook/videos").await
    }

    // -------------------------------------------------------------------
    // Dashboard
    // -------------------------------------------------------------------

    pub async fn get_metrics() -> Result<Vec<DashboardMetric>, ApiError> {
        Self::get_json("/dashboard/metrics").await
    }

    /// GET /dashboard/report – binary CSV.
    pub async fn download_report() -> Result<Download, ApiError> {
        let resp = Self::send(&Self::url("/dashboard/report"), "GET", None, Auth::Session).await?;
        let content_disposition = resp.headers().get("Content-Disposition").ok().flatten();
        let blob = JsFuture::from(resp.blob()?).await?;
        let blob: Blob = blob
            .dyn_into()
            .map_err(|_| ApiError::Decode("report body is not a Blob".into()))?;
        Ok(Download {
            blob,
            content_disposition,
        })
    }

    // -------------------------------------------------------------------
    // Plumbing
    // -------------------------------------------------------------------

    async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
        let resp = Self::send(&Self::url(path), "GET", None, Auth::Session).await?;
        Self::read_json(resp).await
    }

    async fn send_json<B: Serialize, T: DeserializeOwned>(
        path: &str,
        method: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let body = serde_json::to_string(body)?;
        let resp = Self::send(&Self::url(path), method, Some(&body), Auth::Session).await?;
        Self::read_json(resp).await
    }

    async fn read_text(resp: &Response) -> Result<String, ApiError> {
        let text = JsFuture::from(resp.text()?).await?;
        Ok(text.as_string().unwrap_or_default())
    }

    async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
        let text = Self::read_text(&resp).await?;
        Ok(serde_json::from_str(&text)?)
    }

    // Helper function to make fetch requests
    async fn send(
        url: &str,
        method: &str,
        body: Option<&str>,
        auth: Auth<'_>,
    ) -> Result<Response, ApiError> {
        // If the page is served over HTTPS but the URL is HTTP, upgrade it to
        // HTTPS so the browser does not block mixed content.
        let mut effective_url = url.to_string();
        if let Some(win) = web_sys::window() {
            if let Ok(protocol) = win.location().protocol() {
                if protocol == "https:" && effective_url.starts_with("http://") {
                    effective_url = effective_url.replacen("http://", "https://", 1);
                }
            }
        }

        let opts = RequestInit::new();
        opts.set_method(method);
        opts.set_mode(RequestMode::Cors);

        let headers = Headers::new()?;
        let bearer = match auth {
            Auth::Session => crate::utils::current_jwt(),
            Auth::Token(t) => Some(t.to_string()),
            Auth::None => None,
        };
        if let Some(token) = &bearer {
            headers.append("Authorization", &format!("Bearer {}", token))?;
        }

        if let Some(data) = body {
            opts.set_body(&JsValue::from_str(data));
            headers.append("Content-Type", "application/json")?;
        }
        opts.set_headers(&headers);

        let request = Request::new_with_str_and_init(&effective_url, &opts)?;
        let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".into()))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
        let resp: Response = resp_value
            .dyn_into()
            .map_err(|_| ApiError::Network("fetch did not return a Response".into()))?;

        if resp.ok() {
            return Ok(resp);
        }

        let status = resp.status();

        // 401 on a session request → token expired or revoked → logout.
        if let (401, Auth::Session, Some(token)) = (status, auth, bearer) {
            debug_log!("{} {} answered 401, ending session", method, url);
            crate::state::dispatch_global_message(Message::SessionExpired { token });
            return Err(ApiError::SessionExpired);
        }

        let body_text = Self::read_text(&resp).await.unwrap_or_default();
        Err(ApiError::Http {
            status,
            message: Self::error_message(&resp.status_text(), &body_text),
        })
    }
}

/// Percent-encode an id before placing it in a URL path.
fn encode_segment(segment: &str) -> String {
    String::from(js_sys::encode_uri_component(segment))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_prefers_backend_text() {
        assert_eq!(
            ApiClient::error_message("Bad Request", r#"{"message":"email em uso"}"#),
            "email em uso"
        );
        assert_eq!(
            ApiClient::error_message("Bad Request", r#"{"detail":"invalid"}"#),
            "invalid"
        );
        assert_eq!(ApiClient::error_message("Bad Request", "<html>"), "Bad Request");
    }
}
