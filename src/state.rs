// src/state.rs
//
// Application state.  One `AppState` lives in a thread-local; reducers mutate
// it through `update::update`, side effects run afterwards from the returned
// commands.
//
use std::cell::RefCell;

use crate::authorization::{can_submit_user_form, validate_page_selection};
use crate::errors::FormError;
use crate::messages::{Command, Message};
use crate::metrics::filter_by_date;
use crate::models::{
    Comment, DashboardMetric, FacebookPage, LiveVideo, Role, User, UserCreateRequest,
    UserUpdateRequest,
};
use crate::session::Session;
use crate::storage::ActiveView;
use crate::utils::contains_ignore_case;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

/// Inline status message shown at the top of a view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub text: String,
}

impl Banner {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Error,
            text: text.into(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct LoginState {
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Clone, Debug)]
pub struct HomeState {
    /// Index of the expanded FAQ entry.  At most one is open.
    pub faq_open: Option<usize>,
}

impl Default for HomeState {
    fn default() -> Self {
        Self { faq_open: Some(0) }
    }
}

impl HomeState {
    pub fn toggle_faq(&mut self, index: usize) {
        self.faq_open = if self.faq_open == Some(index) {
            None
        } else {
            Some(index)
        };
    }
}

#[derive(Clone, Debug, Default)]
pub struct MetricsState {
    pub metrics: Vec<DashboardMetric>,
    pub loading: bool,
    /// Selected date in display format (`DD/MM/YYYY`), `None` shows all.
    pub filter_date: Option<String>,
    pub downloading: bool,
}

impl MetricsState {
    pub fn visible(&self) -> Vec<&DashboardMetric> {
        filter_by_date(&self.metrics, self.filter_date.as_deref())
    }
}

/// Pages → live videos → comments.
///
/// Changing the selection at one level clears everything below it.  Results
/// arriving for a level are only applied if they still belong to the current
/// selection, so a slow response for a page the user already left is dropped.
#[derive(Clone, Debug, Default)]
pub struct FacebookState {
    pub pages: Vec<FacebookPage>,
    pub selected_page: Option<String>,
    pub videos: Vec<LiveVideo>,
    pub selected_video: Option<String>,
    pub comments: Vec<Comment>,

    pub pages_loading: bool,
    pub videos_loading: bool,
    pub comments_loading: bool,

    pub token_draft: String,
    pub token_saving: bool,
    pub url_draft: String,
    pub url_processing: bool,

    pub banner: Option<Banner>,
}

impl FacebookState {
    /// Drop every selection and every loaded level.
    pub fn reset_drill_down(&mut self) {
        self.pages.clear();
        self.selected_page = None;
        self.clear_videos();
    }

    fn clear_videos(&mut self) {
        self.videos.clear();
        self.selected_video = None;
        self.videos_loading = false;
        self.clear_comments();
    }

    fn clear_comments(&mut self) {
        self.comments.clear();
        self.comments_loading = false;
    }

    pub fn begin_load_pages(&mut self) {
        self.pages_loading = true;
        self.banner = None;
    }

    /// A fresh page list replaces the whole drill-down.
    pub fn apply_pages(&mut self, pages: Vec<FacebookPage>) {
        self.reset_drill_down();
        self.pages = pages;
        self.pages_loading = false;
    }

    pub fn select_page(&mut self, page_id: &str) {
        self.clear_videos();
        self.selected_page = Some(page_id.to_string());
        self.videos_loading = true;
    }

    /// Returns false when the response belongs to a page that is no longer
    /// selected.
    pub fn apply_videos(&mut self, page_id: &str, videos: Vec<LiveVideo>) -> bool {
        if self.selected_page.as_deref() != Some(page_id) {
            return false;
        }
        self.videos = videos;
        self.videos_loading = false;
        true
    }

    pub fn videos_failed(&mut self, page_id: &str) -> bool {
        if self.selected_page.as_deref() != Some(page_id) {
            return false;
        }
        self.videos_loading = false;
        true
    }

    pub fn select_video(&mut self, video_id: &str) {
        self.clear_comments();
        self.selected_video = Some(video_id.to_string());
        self.comments_loading = true;
    }

    pub fn apply_comments(&mut self, video_id: &str, comments: Vec<Comment>) -> bool {
        if self.selected_video.as_deref() != Some(video_id) {
            return false;
        }
        self.comments = comments;
        self.comments_loading = false;
        true
    }

    pub fn comments_failed(&mut self, video_id: &str) -> bool {
        if self.selected_video.as_deref() != Some(video_id) {
            return false;
        }
        self.comments_loading = false;
        true
    }

    pub fn selected_page(&self) -> Option<&FacebookPage> {
        let id = self.selected_page.as_deref()?;
        self.pages.iter().find(|p| p.id == id)
    }
}

/// Saved videos and their comments ("Visualizar").
#[derive(Clone, Debug, Default)]
pub struct CommentViewerState {
    pub videos: Vec<LiveVideo>,
    pub selected_video: Option<String>,
    pub comments: Vec<Comment>,
    pub search: String,
    pub videos_loading: bool,
    pub comments_loading: bool,
}

impl CommentViewerState {
    /// Comments whose text or author contains the search term.
    pub fn filtered(&self) -> Vec<&Comment> {
        let term = self.search.trim();
        if term.is_empty() {
            return self.comments.iter().collect();
        }
        self.comments
            .iter()
            .filter(|c| {
                contains_ignore_case(&c.message, term)
                    || c.author_name().map_or(false, |n| contains_ignore_case(n, term))
            })
            .collect()
    }
}

#[derive(Clone, Debug, Default)]
pub struct UsersState {
    pub users: Vec<User>,
    pub loading: bool,
}

/// What the user form sends when submitted.
#[derive(Clone, Debug, PartialEq)]
pub enum UserSubmission {
    Create(UserCreateRequest),
    Update {
        user_id: u64,
        request: UserUpdateRequest,
    },
}

impl UserSubmission {
    pub fn user_id(&self) -> Option<u64> {
        match self {
            UserSubmission::Create(_) => None,
            UserSubmission::Update { user_id, .. } => Some(*user_id),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct UserFormState {
    /// `Some(id)` when editing an existing account.
    pub editing: Option<u64>,
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub selected_page_ids: Vec<String>,
    pub available_pages: Vec<FacebookPage>,
    pub loading: bool,
    pub saving: bool,
    pub error: Option<String>,
}

impl UserFormState {
    pub fn for_create() -> Self {
        Self::default()
    }

    pub fn for_edit(user_id: u64) -> Self {
        Self {
            editing: Some(user_id),
            loading: true,
            ..Self::default()
        }
    }

    pub fn is_edit(&self) -> bool {
        self.editing.is_some()
    }

    /// Fill the form from the stored account.  The password stays blank so
    /// that an untouched field keeps the current one.
    pub fn load_user(&mut self, user: &User) {
        self.username = user.username.clone();
        self.email = user.email.clone();
        self.password.clear();
        self.role = user.role;
        self.selected_page_ids = user.authorized_page_ids();
        self.loading = false;
    }

    pub fn validate(&self) -> Result<(), FormError> {
        if self.username.trim().is_empty() {
            return Err(FormError::MissingUsername);
        }
        if self.email.trim().is_empty() {
            return Err(FormError::MissingEmail);
        }
        if !self.is_edit() && self.password.is_empty() {
            return Err(FormError::MissingPassword);
        }
        validate_page_selection(self.role, &self.selected_page_ids)
    }

    /// Mirrors the enabled state of the save button.
    pub fn can_submit(&self) -> bool {
        can_submit_user_form(
            self.role,
            &self.selected_page_ids,
            self.saving || self.loading,
        )
    }

    pub fn submission(&self) -> Result<UserSubmission, FormError> {
        self.validate()?;
        let username = self.username.trim().to_string();
        let email = self.email.trim().to_string();
        Ok(match self.editing {
            None => UserSubmission::Create(UserCreateRequest {
                username,
                email,
                password: self.password.clone(),
                role: self.role,
                authorized_page_ids: self.selected_page_ids.clone(),
            }),
            Some(user_id) => UserSubmission::Update {
                user_id,
                request: UserUpdateRequest {
                    username: Some(username),
                    email: Some(email),
                    password: Some(self.password.clone()).filter(|p| !p.is_empty()),
                    role: Some(self.role),
                    authorized_page_ids: Some(self.selected_page_ids.clone()),
                },
            },
        })
    }
}

// Store global application state
#[derive(Clone, Debug)]
pub struct AppState {
    pub session: Session,
    pub active_view: ActiveView,
    pub login: LoginState,
    pub home: HomeState,
    pub metrics: MetricsState,
    pub facebook: FacebookState,
    pub viewer: CommentViewerState,
    pub users: UsersState,
    pub user_form: UserFormState,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            session: Session::default(),
            active_view: ActiveView::Login,
            login: LoginState::default(),
            home: HomeState::default(),
            metrics: MetricsState::default(),
            facebook: FacebookState::default(),
            viewer: CommentViewerState::default(),
            users: UsersState::default(),
            user_form: UserFormState::default(),
        }
    }

    /// Forget everything loaded on behalf of the previous session.  The
    /// session itself must already be cleared.
    pub fn reset_after_logout(&mut self) {
        let session = std::mem::take(&mut self.session);
        *self = AppState {
            session,
            ..AppState::new()
        };
    }

    pub fn dispatch(&mut self, msg: Message) -> Vec<Command> {
        crate::update::update(self, msg)
    }
}

// We use thread_local to store our app state
thread_local! {
    pub static APP_STATE: RefCell<AppState> = RefCell::new(AppState::new());
}

/// Run `msg` through the reducers, then execute the resulting commands once
/// the state borrow has been released.
pub fn dispatch_global_message(msg: Message) {
    // 1. Perform state updates and collect commands
    let commands = APP_STATE.with(|state| match state.try_borrow_mut() {
        Ok(mut state) => Some(state.dispatch(msg)),
        Err(_) => {
            // Dispatched while a render holds the state.  Retry on the next
            // tick instead of panicking.
            debug_log!("State busy, deferring {:?}", msg);
            wasm_bindgen_futures::spawn_local(async move { dispatch_global_message(msg) });
            None
        }
    });

    // 2. Execute commands after state borrow is dropped
    for cmd in commands.into_iter().flatten() {
        match cmd {
            Command::UpdateUI(ui_fn) => ui_fn(),
            Command::Render => {
                if let Err(e) = crate::views::render_active_view() {
                    error_log!("Failed to render view: {:?}", e);
                }
            }
            cmd @ (Command::PushHash(_)
            | Command::PersistToken(_)
            | Command::ClearToken
            | Command::Toast { .. }
            | Command::ConfirmDeleteUser(_)) => crate::command_executors::execute_local_command(cmd),
            cmd @ (Command::NotifyLogout { .. }
            | Command::Authenticate { .. }
            | Command::FetchProfile { .. }) => crate::command_executors::execute_session_command(cmd),
            cmd @ (Command::FetchMetrics | Command::DownloadReport) => {
                crate::command_executors::execute_metrics_command(cmd)
            }
            cmd @ (Command::FetchPages
            | Command::FetchLiveVideos(_)
            | Command::FetchComments(_)
            | Command::SaveFacebookToken(_)
            | Command::ProcessVideoUrl(_)
            | Command::FetchSavedVideos
            | Command::FetchSavedComments(_)) => {
                crate::command_executors::execute_facebook_command(cmd)
            }
            cmd @ (Command::FetchUsers
            | Command::FetchUser(_)
            | Command::FetchFormPages
            | Command::DeleteUser(_)
            | Command::SaveUser(_)) => crate::command_executors::execute_user_command(cmd),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(id: &str) -> FacebookPage {
        FacebookPage {
            id: id.into(),
            name: id.to_uppercase(),
            category: None,
            link: None,
        }
    }

    fn video(id: &str) -> LiveVideo {
        serde_json::from_value(serde_json::json!({ "id": id })).unwrap()
    }

    fn comment(id: &str, message: &str, author: &str) -> Comment {
        serde_json::from_value(serde_json::json!({
            "id": id, "message": message, "fromName": author
        }))
        .unwrap()
    }

    #[test]
    fn faq_keeps_at_most_one_open() {
        let mut home = HomeState::default();
        assert_eq!(home.faq_open, Some(0));
        home.toggle_faq(2);
        assert_eq!(home.faq_open, Some(2));
        home.toggle_faq(2);
        assert_eq!(home.faq_open, None);
    }

    #[test]
    fn selecting_another_page_clears_deeper_levels() {
        let mut fb = FacebookState::default();
        fb.apply_pages(vec![page("a"), page("b")]);

        fb.select_page("a");
        assert!(fb.apply_videos("a", vec![video("v1")]));
        fb.select_video("v1");
        assert!(fb.apply_comments("v1", vec![comment("c1", "oi", "Ana")]));

        fb.select_page("b");
        assert_eq!(fb.selected_page.as_deref(), Some("b"));
        assert!(fb.videos.is_empty());
        assert!(fb.selected_video.is_none());
        assert!(fb.comments.is_empty());
        assert!(fb.videos_loading);
        assert!(!fb.comments_loading);
    }

    #[test]
    fn late_videos_for_previous_page_are_dropped() {
        let mut fb = FacebookState::default();
        fb.apply_pages(vec![page("a"), page("b")]);
        fb.select_page("a");
        fb.select_page("b");

        assert!(!fb.apply_videos("a", vec![video("va")]));
        assert!(fb.videos.is_empty());
        assert!(fb.videos_loading);

        assert!(fb.apply_videos("b", vec![video("vb")]));
        assert_eq!(fb.videos.len(), 1);
        assert!(!fb.videos_loading);
    }

    #[test]
    fn reloading_pages_resets_everything() {
        let mut fb = FacebookState::default();
        fb.apply_pages(vec![page("a")]);
        fb.select_page("a");
        fb.apply_videos("a", vec![video("v")]);
        fb.select_video("v");

        fb.apply_pages(vec![page("z")]);
        assert_eq!(fb.pages.len(), 1);
        assert!(fb.selected_page.is_none());
        assert!(fb.selected_video.is_none());
        assert!(fb.videos.is_empty());
    }

    #[test]
    fn comment_search_matches_text_or_author() {
        let viewer = CommentViewerState {
            comments: vec![
                comment("1", "Que live boa", "Maria"),
                comment("2", "Amei", "João Live"),
                comment("3", "Top", "Pedro"),
            ],
            search: "LIVE".into(),
            ..Default::default()
        };
        let ids: Vec<&str> = viewer.filtered().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn edit_submission_omits_blank_password() {
        let mut form = UserFormState::for_edit(5);
        form.load_user(&User {
            id: 5,
            username: "ana".into(),
            email: "ana@example.com".into(),
            role: Role::GestorDeLives,
            authorized_pages: Some(vec![page("p1")]),
        });
        assert!(form.can_submit());

        match form.submission().unwrap() {
            UserSubmission::Update { user_id, request } => {
                assert_eq!(user_id, 5);
                assert_eq!(request.password, None);
                assert_eq!(request.authorized_page_ids, Some(vec!["p1".to_string()]));
            }
            other => panic!("unexpected submission {:?}", other),
        }
    }

    #[test]
    fn create_requires_password_and_pages() {
        let mut form = UserFormState::for_create();
        assert_eq!(form.role, Role::EquipeDeProducao);
        form.username = "novo".into();
        form.email = "novo@example.com".into();
        assert_eq!(form.validate(), Err(FormError::MissingPassword));

        form.password = "segredo".into();
        assert_eq!(form.validate(), Err(FormError::NoPagesSelected));
        assert!(!form.can_submit());

        form.role = Role::Admin;
        assert!(matches!(form.submission(), Ok(UserSubmission::Create(_))));
    }
}
