//! Session reducer: login, profile resolution and every way a session ends.

use crate::errors::ApiError;
use crate::messages::{Command, Message};
use crate::reducers::navigation::{enter_view, navigate};
use crate::session::Session;
use crate::state::AppState;
use crate::storage::ActiveView;
use crate::toast::ToastKind;

const LOGIN_MISSING_FIELDS: &str = "Informe usuário e senha.";
const LOGIN_INVALID: &str = "Usuário ou senha inválidos.";
const LOGIN_FAILED: &str = "Erro ao conectar com o servidor. Tente novamente.";
const SESSION_EXPIRED: &str = "Sua sessão expirou. Faça login novamente.";

pub fn update(state: &mut AppState, msg: &Message, commands: &mut Vec<Command>) -> bool {
    match msg {
        Message::SessionRestored(token) => {
            state.session = Session::restore(token.clone());
            if let Some(token) = state.session.token() {
                commands.push(Command::FetchProfile {
                    token: token.to_string(),
                });
            }
            true
        }
        Message::LoginRequested { username, password } => {
            let username = username.trim();
            if username.is_empty() || password.is_empty() {
                state.login.error = Some(LOGIN_MISSING_FIELDS.to_string());
            } else if !state.login.loading {
                state.login.loading = true;
                state.login.error = None;
                commands.push(Command::Authenticate {
                    username: username.to_string(),
                    password: password.clone(),
                });
            }
            commands.push(Command::Render);
            true
        }
        Message::TokenIssued(token) => {
            state.login.loading = false;
            if token.is_empty() {
                state.login.error = Some(LOGIN_FAILED.to_string());
                commands.push(Command::Render);
                return true;
            }
            state.session.begin(token.clone());
            commands.push(Command::PersistToken(token.clone()));
            commands.push(Command::FetchProfile {
                token: token.clone(),
            });
            navigate(state, ActiveView::Home, commands);
            true
        }
        Message::LoginFailed(error) => {
            state.login.loading = false;
            state.login.error = Some(
                match error {
                    ApiError::Authentication => LOGIN_INVALID,
                    _ => LOGIN_FAILED,
                }
                .to_string(),
            );
            commands.push(Command::Render);
            true
        }
        Message::ProfileLoaded { token, user } => {
            if !state.session.holds(token) {
                debug_log!("Ignoring profile for a credential no longer held");
                return true;
            }
            if state.session.set_user(user.clone()) {
                debug_log!("Signed in as {} ({})", user.username, user.role);
                // Role-gated views could not load before the role was known.
                if matches!(state.active_view, ActiveView::Users | ActiveView::UserForm(_)) {
                    enter_view(state, commands);
                }
                commands.push(Command::Render);
            }
            true
        }
        Message::ProfileFailed { token, error } => {
            error_log!("Failed to fetch profile: {}", error);
            // Only the failure of the credential still held invalidates it.
            if state.session.holds(token) {
                end_session(state, commands, true);
            }
            true
        }
        Message::LogoutRequested => {
            end_session(state, commands, true);
            true
        }
        Message::SessionExpired { token } => {
            // Parallel requests can all come back 401; only the first counts,
            // and never for a credential that was already replaced.
            if state.session.holds(token) {
                end_session(state, commands, false);
                commands.push(Command::Toast {
                    kind: ToastKind::Info,
                    text: SESSION_EXPIRED.to_string(),
                });
            }
            true
        }
        _ => false,
    }
}

/// Clear credential, profile and everything loaded for them, then return to
/// the login view.  With `notify_backend` the old token is sent to
/// `/auth/logout`; that call runs detached and its outcome is ignored.
fn end_session(state: &mut AppState, commands: &mut Vec<Command>, notify_backend: bool) {
    let token = state.session.clear();
    state.reset_after_logout();
    commands.push(Command::ClearToken);
    if let (true, Some(token)) = (notify_backend, token) {
        commands.push(Command::NotifyLogout { token });
    }
    navigate(state, ActiveView::Login, commands);
}
