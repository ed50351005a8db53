//! Navigation reducer: view switching, route guarding and the per-view data
//! loads that happen when a view is entered.

use crate::authorization::can_manage_users;
use crate::messages::{Command, Message};
use crate::session::Session;
use crate::state::{
    AppState, CommentViewerState, FacebookState, HomeState, LoginState, MetricsState,
    UserFormState, UsersState,
};
use crate::storage::ActiveView;

pub fn update(state: &mut AppState, msg: &Message, commands: &mut Vec<Command>) -> bool {
    match msg {
        Message::Navigate(view) => {
            navigate(state, view.clone(), commands);
            true
        }
        Message::HashChanged(view) => {
            // Our own `PushHash` echoes back as a hashchange event.
            if *view != state.active_view {
                navigate(state, view.clone(), commands);
            }
            true
        }
        Message::ToggleFaq(index) => {
            state.home.toggle_faq(*index);
            commands.push(Command::Render);
            true
        }
        _ => false,
    }
}

/// The view actually shown for `requested`: only the login view is reachable
/// without a session, and a logged-in user has no business on it.
pub fn guard(session: &Session, requested: ActiveView) -> ActiveView {
    match (session.is_authenticated(), requested.is_public()) {
        (false, false) => ActiveView::Login,
        (true, true) => ActiveView::Home,
        (_, _) => requested,
    }
}

pub(crate) fn navigate(state: &mut AppState, requested: ActiveView, commands: &mut Vec<Command>) {
    let view = guard(&state.session, requested);
    state.active_view = view.clone();
    enter_view(state, commands);
    commands.push(Command::PushHash(view));
    commands.push(Command::Render);
}

/// Reset the state of the active view and start its loads.  Every visit
/// fetches again.
pub(crate) fn enter_view(state: &mut AppState, commands: &mut Vec<Command>) {
    match state.active_view.clone() {
        ActiveView::Login => state.login = LoginState::default(),
        ActiveView::Home => state.home = HomeState::default(),
        ActiveView::Download => {
            state.metrics = MetricsState {
                loading: true,
                ..MetricsState::default()
            };
            commands.push(Command::FetchMetrics);
        }
        ActiveView::Comments => {
            state.viewer = CommentViewerState {
                videos_loading: true,
                ..CommentViewerState::default()
            };
            commands.push(Command::FetchSavedVideos);
        }
        ActiveView::Facebook => state.facebook = FacebookState::default(),
        ActiveView::Users => {
            if can_manage_users(state.session.role()) {
                state.users = UsersState {
                    loading: true,
                    ..UsersState::default()
                };
                commands.push(Command::FetchUsers);
            }
        }
        ActiveView::UserForm(user_id) => {
            if can_manage_users(state.session.role()) {
                state.user_form = match user_id {
                    Some(id) => UserFormState::for_edit(id),
                    None => UserFormState::for_create(),
                };
                commands.push(Command::FetchFormPages);
                if let Some(id) = user_id {
                    commands.push(Command::FetchUser(id));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use crate::reducers::test_support::{has, user};

    fn logged_in(role: Role) -> AppState {
        let mut state = AppState::new();
        state.session.begin("tok".into());
        state.session.set_user(user(1, role, &["p1"]));
        state
    }

    #[test]
    fn anonymous_users_only_reach_login() {
        let mut state = AppState::new();
        let commands = state.dispatch(Message::Navigate(ActiveView::Facebook));
        assert_eq!(state.active_view, ActiveView::Login);
        assert!(has(&commands, |c| matches!(c, Command::PushHash(ActiveView::Login))));
    }

    #[test]
    fn authenticated_login_route_goes_home() {
        let session = Session::restore(Some("tok".into()));
        assert_eq!(guard(&session, ActiveView::Login), ActiveView::Home);
        assert_eq!(guard(&session, ActiveView::Download), ActiveView::Download);
    }

    #[test]
    fn entering_download_fetches_metrics() {
        let mut state = logged_in(Role::GestorDeLives);
        state.metrics.filter_date = Some("01/02/2024".into());
        let commands = state.dispatch(Message::Navigate(ActiveView::Download));
        assert!(state.metrics.loading);
        assert!(state.metrics.filter_date.is_none());
        assert!(has(&commands, |c| matches!(c, Command::FetchMetrics)));
    }

    #[test]
    fn user_views_load_only_for_admin() {
        let mut staff = logged_in(Role::EquipeDeProducao);
        let commands = staff.dispatch(Message::Navigate(ActiveView::Users));
        assert_eq!(staff.active_view, ActiveView::Users);
        assert!(!has(&commands, |c| matches!(c, Command::FetchUsers)));

        let mut admin = logged_in(Role::Admin);
        let commands = admin.dispatch(Message::Navigate(ActiveView::UserForm(Some(9))));
        assert!(has(&commands, |c| matches!(c, Command::FetchFormPages)));
        assert!(has(&commands, |c| matches!(c, Command::FetchUser(9))));
        assert_eq!(admin.user_form.editing, Some(9));
    }

    #[test]
    fn echoed_hash_change_is_ignored() {
        let mut state = logged_in(Role::Admin);
        state.dispatch(Message::Navigate(ActiveView::Download));
        let commands = state.dispatch(Message::HashChanged(ActiveView::Download));
        assert!(commands.is_empty());
    }
}
