// src/messages.rs
//
// Everything that can happen in the UI, plus the side effects the reducers ask
// the executor to perform.
//
use crate::errors::ApiError;
use crate::models::{Comment, DashboardMetric, FacebookPage, LiveVideo, Role, User};
use crate::storage::ActiveView;
use crate::toast::ToastKind;

/// `Debug` is written by hand so credentials never reach the console.
#[derive(Clone)]
pub enum Message {
    // Navigation
    Navigate(ActiveView),
    /// The browser changed `location.hash` (back/forward, typed URL).
    HashChanged(ActiveView),

    // Session
    SessionRestored(Option<String>),
    LoginRequested { username: String, password: String },
    TokenIssued(String),
    LoginFailed(ApiError),
    /// Profile outcomes carry the token they were requested with; they only
    /// apply while that token is still the session's.
    ProfileLoaded { token: String, user: User },
    ProfileFailed { token: String, error: ApiError },
    LogoutRequested,
    /// A request sent with `token` came back 401.
    SessionExpired { token: String },

    // Home
    ToggleFaq(usize),

    // Metrics / report
    MetricsLoaded(Vec<DashboardMetric>),
    MetricsFailed(ApiError),
    /// Raw value of the `<input type="date">`, ISO or empty.
    SetReportDate(String),
    DownloadReport,
    ReportDownloaded,
    ReportFailed(ApiError),

    // Facebook drill-down
    LoadPages,
    PagesLoaded(Vec<FacebookPage>),
    PagesFailed(ApiError),
    SelectPage(String),
    LiveVideosLoaded { page_id: String, videos: Vec<LiveVideo> },
    LiveVideosFailed { page_id: String, error: ApiError },
    SelectLiveVideo(String),
    CommentsLoaded { video_id: String, comments: Vec<Comment> },
    CommentsFailed { video_id: String, error: ApiError },
    SetFacebookTokenDraft(String),
    SubmitFacebookToken,
    FacebookTokenSaved,
    FacebookTokenFailed(ApiError),
    SetVideoUrlDraft(String),
    SubmitVideoUrl,
    VideoUrlProcessed,
    VideoUrlFailed(ApiError),

    // Comment viewer
    SavedVideosLoaded(Vec<LiveVideo>),
    SavedVideosFailed(ApiError),
    SelectSavedVideo(String),
    SavedCommentsLoaded { video_id: String, comments: Vec<Comment> },
    SavedCommentsFailed { video_id: String, error: ApiError },
    SetCommentSearch(String),

    // User management
    UsersLoaded(Vec<User>),
    UsersFailed(ApiError),
    RequestUserDeletion(u64),
    UserDeletionConfirmed(u64),
    UserDeleted(u64),
    UserDeletionFailed { user_id: u64, error: ApiError },

    // User form
    UserFormUserLoaded(User),
    UserFormUserFailed(ApiError),
    UserFormPagesLoaded(Vec<FacebookPage>),
    UserFormPagesFailed(ApiError),
    SetFormUsername(String),
    SetFormEmail(String),
    SetFormPassword(String),
    SetFormRole(Role),
    ToggleFormPage(String),
    SubmitUserForm,
    UserSaved(User),
    UserSaveFailed(ApiError),
}

impl std::fmt::Debug for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const REDACTED: &str = "<redacted>";
        match self {
            Message::Navigate(view) => f.debug_tuple("Navigate").field(view).finish(),
            Message::HashChanged(view) => f.debug_tuple("HashChanged").field(view).finish(),
            Message::SessionRestored(token) => f
                .debug_tuple("SessionRestored")
                .field(&token.as_ref().map(|_| REDACTED))
                .finish(),
            Message::LoginRequested { username, .. } => f
                .debug_struct("LoginRequested")
                .field("username", username)
                .finish_non_exhaustive(),
            Message::TokenIssued(_) => f.debug_tuple("TokenIssued").field(&REDACTED).finish(),
            Message::LoginFailed(e) => f.debug_tuple("LoginFailed").field(e).finish(),
            Message::ProfileLoaded { user, .. } => f
                .debug_struct("ProfileLoaded")
                .field("user", &user.id)
                .finish_non_exhaustive(),
            Message::ProfileFailed { error, .. } => f
                .debug_struct("ProfileFailed")
                .field("error", error)
                .finish_non_exhaustive(),
            Message::LogoutRequested => f.write_str("LogoutRequested"),
            Message::SessionExpired { .. } => f.write_str("SessionExpired { .. }"),
            Message::ToggleFaq(i) => f.debug_tuple("ToggleFaq").field(i).finish(),
            Message::MetricsLoaded(m) => f.debug_tuple("MetricsLoaded").field(&m.len()).finish(),
            Message::MetricsFailed(e) => f.debug_tuple("MetricsFailed").field(e).finish(),
            Message::SetReportDate(d) => f.debug_tuple("SetReportDate").field(d).finish(),
            Message::DownloadReport => f.write_str("DownloadReport"),
            Message::ReportDownloaded => f.write_str("ReportDownloaded"),
            Message::ReportFailed(e) => f.debug_tuple("ReportFailed").field(e).finish(),
            Message::LoadPages => f.write_str("LoadPages"),
            Message::PagesLoaded(p) => f.debug_tuple("PagesLoaded").field(&p.len()).finish(),
            Message::PagesFailed(e) => f.debug_tuple("PagesFailed").field(e).finish(),
            Message::SelectPage(id) => f.debug_tuple("SelectPage").field(id).finish(),
            Message::LiveVideosLoaded { page_id, videos } => f
                .debug_struct("LiveVideosLoaded")
                .field("page_id", page_id)
                .field("videos", &videos.len())
                .finish(),
            Message::LiveVideosFailed { page_id, error } => f
                .debug_struct("LiveVideosFailed")
                .field("page_id", page_id)
                .field("error", error)
                .finish(),
            Message::SelectLiveVideo(id) => f.debug_tuple("SelectLiveVideo").field(id).finish(),
            Message::CommentsLoaded { video_id, comments } => f
                .debug_struct("CommentsLoaded")
                .field("video_id", video_id)
                .field("comments", &comments.len())
                .finish(),
            Message::CommentsFailed { video_id, error } => f
                .debug_struct("CommentsFailed")
                .field("video_id", video_id)
                .field("error", error)
                .finish(),
            Message::SetFacebookTokenDraft(_) => {
                f.debug_tuple("SetFacebookTokenDraft").field(&REDACTED).finish()
            }
            Message::SubmitFacebookToken => f.write_str("SubmitFacebookToken"),
            Message::FacebookTokenSaved => f.write_str("FacebookTokenSaved"),
            Message::FacebookTokenFailed(e) => f.debug_tuple("FacebookTokenFailed").field(e).finish(),
            Message::SetVideoUrlDraft(url) => f.debug_tuple("SetVideoUrlDraft").field(url).finish(),
            Message::SubmitVideoUrl => f.write_str("SubmitVideoUrl"),
            Message::VideoUrlProcessed => f.write_str("VideoUrlProcessed"),
            Message::VideoUrlFailed(e) => f.debug_tuple("VideoUrlFailed").field(e).finish(),
            Message::SavedVideosLoaded(v) => {
                f.debug_tuple("SavedVideosLoaded").field(&v.len()).finish()
            }
            Message::SavedVideosFailed(e) => f.debug_tuple("SavedVideosFailed").field(e).finish(),
            Message::SelectSavedVideo(id) => f.debug_tuple("SelectSavedVideo").field(id).finish(),
            Message::SavedCommentsLoaded { video_id, comments } => f
                .debug_struct("SavedCommentsLoaded")
                .field("video_id", video_id)
                .field("comments", &comments.len())
                .finish(),
            Message::SavedCommentsFailed { video_id, error } => f
                .debug_struct("SavedCommentsFailed")
                .field("video_id", video_id)
                .field("error", error)
                .finish(),
            Message::SetCommentSearch(t) => f.debug_tuple("SetCommentSearch").field(t).finish(),
            Message::UsersLoaded(u) => f.debug_tuple("UsersLoaded").field(&u.len()).finish(),
            Message::UsersFailed(e) => f.debug_tuple("UsersFailed").field(e).finish(),
            Message::RequestUserDeletion(id) => {
                f.debug_tuple("RequestUserDeletion").field(id).finish()
            }
            Message::UserDeletionConfirmed(id) => {
                f.debug_tuple("UserDeletionConfirmed").field(id).finish()
            }
            Message::UserDeleted(id) => f.debug_tuple("UserDeleted").field(id).finish(),
            Message::UserDeletionFailed { user_id, error } => f
                .debug_struct("UserDeletionFailed")
                .field("user_id", user_id)
                .field("error", error)
                .finish(),
            Message::UserFormUserLoaded(u) => f.debug_tuple("UserFormUserLoaded").field(&u.id).finish(),
            Message::UserFormUserFailed(e) => f.debug_tuple("UserFormUserFailed").field(e).finish(),
            Message::UserFormPagesLoaded(p) => {
                f.debug_tuple("UserFormPagesLoaded").field(&p.len()).finish()
            }
            Message::UserFormPagesFailed(e) => {
                f.debug_tuple("UserFormPagesFailed").field(e).finish()
            }
            Message::SetFormUsername(v) => f.debug_tuple("SetFormUsername").field(v).finish(),
            Message::SetFormEmail(v) => f.debug_tuple("SetFormEmail").field(v).finish(),
            Message::SetFormPassword(_) => f.debug_tuple("SetFormPassword").field(&REDACTED).finish(),
            Message::SetFormRole(r) => f.debug_tuple("SetFormRole").field(r).finish(),
            Message::ToggleFormPage(id) => f.debug_tuple("ToggleFormPage").field(id).finish(),
            Message::SubmitUserForm => f.write_str("SubmitUserForm"),
            Message::UserSaved(u) => f.debug_tuple("UserSaved").field(&u.id).finish(),
            Message::UserSaveFailed(e) => f.debug_tuple("UserSaveFailed").field(e).finish(),
        }
    }
}

/// Side effects requested by the reducers.  Executed by
/// [`crate::state::dispatch_global_message`] once the state borrow is gone.
pub enum Command {
    /// Execute a UI update function after state changes
    UpdateUI(Box<dyn FnOnce() + 'static>),

    /// Re-render the navigation bar and the active view from state.
    Render,

    /// Mirror the active view into `location.hash`.
    PushHash(ActiveView),

    // Session side effects
    PersistToken(String),
    ClearToken,
    /// Fire-and-forget `POST /auth/logout` with the token that was held.
    NotifyLogout { token: String },
    Authenticate { username: String, password: String },
    FetchProfile { token: String },

    // Metrics
    FetchMetrics,
    DownloadReport,

    // Facebook
    FetchPages,
    FetchLiveVideos(String),
    FetchComments(String),
    SaveFacebookToken(String),
    ProcessVideoUrl(String),

    // Comment viewer
    FetchSavedVideos,
    FetchSavedComments(String),

    // Users
    FetchUsers,
    FetchUser(u64),
    FetchFormPages,
    ConfirmDeleteUser(u64),
    DeleteUser(u64),
    SaveUser(crate::state::UserSubmission),

    Toast { kind: ToastKind, text: String },
}

impl std::fmt::Debug for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::UpdateUI(_) => f.write_str("UpdateUI(<closure>)"),
            Command::Render => f.write_str("Render"),
            Command::PushHash(view) => f.debug_tuple("PushHash").field(view).finish(),
            Command::PersistToken(_) => f.write_str("PersistToken(<redacted>)"),
            Command::ClearToken => f.write_str("ClearToken"),
            Command::NotifyLogout { .. } => f.write_str("NotifyLogout { .. }"),
            Command::Authenticate { username, .. } => f
                .debug_struct("Authenticate")
                .field("username", username)
                .finish_non_exhaustive(),
            Command::FetchProfile { .. } => f.write_str("FetchProfile { .. }"),
            Command::FetchMetrics => f.write_str("FetchMetrics"),
            Command::DownloadReport => f.write_str("DownloadReport"),
            Command::FetchPages => f.write_str("FetchPages"),
            Command::FetchLiveVideos(id) => f.debug_tuple("FetchLiveVideos").field(id).finish(),
            Command::FetchComments(id) => f.debug_tuple("FetchComments").field(id).finish(),
            Command::SaveFacebookToken(_) => f.write_str("SaveFacebookToken(<redacted>)"),
            Command::ProcessVideoUrl(url) => f.debug_tuple("ProcessVideoUrl").field(url).finish(),
            Command::FetchSavedVideos => f.write_str("FetchSavedVideos"),
            Command::FetchSavedComments(id) => {
                f.debug_tuple("FetchSavedComments").field(id).finish()
            }
            Command::FetchUsers => f.write_str("FetchUsers"),
            Command::FetchUser(id) => f.debug_tuple("FetchUser").field(id).finish(),
            Command::FetchFormPages => f.write_str("FetchFormPages"),
            Command::ConfirmDeleteUser(id) => f.debug_tuple("ConfirmDeleteUser").field(id).finish(),
            Command::DeleteUser(id) => f.debug_tuple("DeleteUser").field(id).finish(),
            Command::SaveUser(s) => f.debug_tuple("SaveUser").field(&s.user_id()).finish(),
            Command::Toast { kind, text } => f
                .debug_struct("Toast")
                .field("kind", kind)
                .field("text", text)
                .finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_hides_credentials() {
        let rendered = [
            format!(
                "{:?}",
                Message::LoginRequested {
                    username: "ana".into(),
                    password: "segredo123".into(),
                }
            ),
            format!("{:?}", Message::TokenIssued("eyJsecret".into())),
            format!("{:?}", Message::SessionRestored(Some("eyJsecret".into()))),
            format!("{:?}", Message::SetFormPassword("segredo123".into())),
            format!("{:?}", Message::SetFacebookTokenDraft("EAAsecret".into())),
            format!(
                "{:?}",
                Message::SessionExpired {
                    token: "eyJsecret".into()
                }
            ),
            format!("{:?}", Command::PersistToken("eyJsecret".into())),
            format!(
                "{:?}",
                Command::FetchProfile {
                    token: "eyJsecret".into()
                }
            ),
        ];
        for line in &rendered {
            assert!(!line.contains("segredo123"), "{}", line);
            assert!(!line.contains("secret"), "{}", line);
        }
        assert!(rendered[0].contains("ana"));
    }
}
