//! Executors for the side effects reducers request.
//!
//! Network commands spawn a local future that calls [`ApiClient`] and
//! dispatches the outcome back as a message.  Nothing here mutates `AppState`
//! directly.

use wasm_bindgen::JsCast;

use crate::constants::DEFAULT_REPORT_FILENAME;
use crate::messages::{Command, Message};
use crate::metrics::attachment_filename;
use crate::network::api_client::{ApiClient, Download};
use crate::state::{dispatch_global_message, UserSubmission};

/// Browser-local effects: storage, location hash, toasts, dialogs.
pub fn execute_local_command(cmd: Command) {
    match cmd {
        Command::PushHash(view) => crate::storage::push_hash(&view),
        Command::PersistToken(token) => {
            if let Err(e) = crate::storage::save_token(&token) {
                error_log!("Failed to persist token: {:?}", e);
            }
        }
        Command::ClearToken => crate::storage::clear_token(),
        Command::Toast { kind, text } => crate::toast::show(&text, kind),
        Command::ConfirmDeleteUser(user_id) => {
            let confirmed = web_sys::window()
                .and_then(|w| {
                    w.confirm_with_message("Tem certeza que deseja excluir este usuário?")
                        .ok()
                })
                .unwrap_or(false);
            if confirmed {
                dispatch_global_message(Message::UserDeletionConfirmed(user_id));
            }
        }
        other => error_log!("Unexpected command in execute_local_command: {:?}", other),
    }
}

pub fn execute_session_command(cmd: Command) {
    match cmd {
        Command::Authenticate { username, password } => {
            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::authenticate(&username, &password).await {
                    Ok(token) => dispatch_global_message(Message::TokenIssued(token)),
                    Err(e) => dispatch_global_message(Message::LoginFailed(e)),
                }
            });
        }
        Command::FetchProfile { token } => {
            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::fetch_current_user(&token).await {
                    Ok(user) => dispatch_global_message(Message::ProfileLoaded { token, user }),
                    Err(error) => dispatch_global_message(Message::ProfileFailed { token, error }),
                }
            });
        }
        Command::NotifyLogout { token } => {
            wasm_bindgen_futures::spawn_local(async move {
                // Local state is already gone; the server call is best effort.
                if let Err(e) = ApiClient::logout(&token).await {
                    debug_log!("Server logout failed: {}", e);
                }
            });
        }
        other => error_log!("Unexpected command in execute_session_command: {:?}", other),
    }
}

pub fn execute_metrics_command(cmd: Command) {
    match cmd {
        Command::FetchMetrics => {
            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::get_metrics().await {
                    Ok(metrics) => {
                        debug_log!("Fetched {} metrics", metrics.len());
                        dispatch_global_message(Message::MetricsLoaded(metrics))
                    }
                    Err(e) => dispatch_global_message(Message::MetricsFailed(e)),
                }
            });
        }
        Command::DownloadReport => {
            wasm_bindgen_futures::spawn_local(async move {
                let result = match ApiClient::download_report().await {
                    Ok(download) => save_download(&download).map_err(crate::errors::ApiError::from),
                    Err(e) => Err(e),
                };
                match result {
                    Ok(()) => dispatch_global_message(Message::ReportDownloaded),
                    Err(e) => dispatch_global_message(Message::ReportFailed(e)),
                }
            });
        }
        other => error_log!("Unexpected command in execute_metrics_command: {:?}", other),
    }
}

/// Hand a downloaded blob to the browser through a temporary `<a download>`.
fn save_download(download: &Download) -> Result<(), wasm_bindgen::JsValue> {
    let filename = download
        .content_disposition
        .as_deref()
        .and_then(attachment_filename)
        .unwrap_or_else(|| DEFAULT_REPORT_FILENAME.to_string());

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| wasm_bindgen::JsValue::from_str("no document"))?;
    let body = document
        .body()
        .ok_or_else(|| wasm_bindgen::JsValue::from_str("no body"))?;

    let url = web_sys::Url::create_object_url_with_blob(&download.blob)?;
    let anchor: web_sys::HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(&filename);
    body.append_child(&anchor)?;
    anchor.click();
    anchor.remove();
    web_sys::Url::revoke_object_url(&url)?;
    debug_log!("Report saved as {}", filename);
    Ok(())
}

pub fn execute_facebook_command(cmd: Command) {
    match cmd {
        Command::FetchPages => {
            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::get_pages().await {
                    Ok(pages) => dispatch_global_message(Message::PagesLoaded(pages)),
                    Err(e) => dispatch_global_message(Message::PagesFailed(e)),
                }
            });
        }
        Command::FetchLiveVideos(page_id) => {
            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::get_live_videos(&page_id).await {
                    Ok(videos) => {
                        dispatch_global_message(Message::LiveVideosLoaded { page_id, videos })
                    }
                    Err(error) => {
                        dispatch_global_message(Message::LiveVideosFailed { page_id, error })
                    }
                }
            });
        }
        Command::FetchComments(video_id) => {
            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::get_comments(&video_id).await {
                    Ok(comments) => {
                        dispatch_global_message(Message::CommentsLoaded { video_id, comments })
                    }
                    Err(error) => {
                        dispatch_global_message(Message::CommentsFailed { video_id, error })
                    }
                }
            });
        }
        Command::SaveFacebookToken(token) => {
            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::set_facebook_token(&token).await {
                    Ok(()) => dispatch_global_message(Message::FacebookTokenSaved),
                    Err(e) => dispatch_global_message(Message::FacebookTokenFailed(e)),
                }
            });
        }
        Command::ProcessVideoUrl(url) => {
            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::process_video_url(&url).await {
                    Ok(()) => dispatch_global_message(Message::VideoUrlProcessed),
                    Err(e) => dispatch_global_message(Message::VideoUrlFailed(e)),
                }
            });
        }
        Command::FetchSavedVideos => {
            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::get_saved_videos().await {
                    Ok(videos) => dispatch_global_message(Message::SavedVideosLoaded(videos)),
                    Err(e) => dispatch_global_message(Message::SavedVideosFailed(e)),
                }
            });
        }
        Command::FetchSavedComments(video_id) => {
            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::get_comments(&video_id).await {
                    Ok(comments) => {
                        dispatch_global_message(Message::SavedCommentsLoaded { video_id, comments })
                    }
                    Err(error) => {
                        dispatch_global_message(Message::SavedCommentsFailed { video_id, error })
                    }
                }
            });
        }
        other => error_log!("Unexpected command in execute_facebook_command: {:?}", other),
    }
}

pub fn execute_user_command(cmd: Command) {
    match cmd {
        Command::FetchUsers => {
            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::get_users().await {
                    Ok(users) => dispatch_global_message(Message::UsersLoaded(users)),
                    Err(e) => dispatch_global_message(Message::UsersFailed(e)),
                }
            });
        }
        Command::FetchUser(user_id) => {
            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::get_user(user_id).await {
                    Ok(user) => dispatch_global_message(Message::UserFormUserLoaded(user)),
                    Err(e) => dispatch_global_message(Message::UserFormUserFailed(e)),
                }
            });
        }
        Command::FetchFormPages => {
            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::get_pages().await {
                    Ok(pages) => dispatch_global_message(Message::UserFormPagesLoaded(pages)),
                    Err(e) => dispatch_global_message(Message::UserFormPagesFailed(e)),
                }
            });
        }
        Command::DeleteUser(user_id) => {
            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::delete_user(user_id).await {
                    Ok(()) => dispatch_global_message(Message::UserDeleted(user_id)),
                    Err(error) => {
                        dispatch_global_message(Message::UserDeletionFailed { user_id, error })
                    }
                }
            });
        }
        Command::SaveUser(submission) => {
            wasm_bindgen_futures::spawn_local(async move {
                let result = match &submission {
                    UserSubmission::Create(request) => ApiClient::create_user(request).await,
                    UserSubmission::Update { user_id, request } => {
                        ApiClient::update_user(*user_id, request).await
                    }
                };
                match result {
                    Ok(user) => dispatch_global_message(Message::UserSaved(user)),
                    Err(e) => dispatch_global_message(Message::UserSaveFailed(e)),
                }
            });
        }
        other => error_log!("Unexpected command in execute_user_command: {:?}", other),
    }
}
