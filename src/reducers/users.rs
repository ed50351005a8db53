//! User management: account list, deletion and the create/edit form.

use crate::authorization::{can_manage_users, page_selection_locked, toggle_page};
use crate::messages::{Command, Message};
use crate::reducers::navigation::navigate;
use crate::state::AppState;
use crate::storage::ActiveView;
use crate::toast::ToastKind;

pub fn update(state: &mut AppState, msg: &Message, commands: &mut Vec<Command>) -> bool {
    match msg {
        Message::UsersLoaded(users) => {
            state.users.users = users.clone();
            state.users.loading = false;
            commands.push(Command::Render);
            true
        }
        Message::UsersFailed(error) => {
            error_log!("Error loading users: {}", error);
            state.users.loading = false;
            commands.push(Command::Toast {
                kind: ToastKind::Error,
                text: "Erro ao carregar usuários.".to_string(),
            });
            commands.push(Command::Render);
            true
        }
        Message::RequestUserDeletion(user_id) => {
            if can_manage_users(state.session.role()) {
                commands.push(Command::ConfirmDeleteUser(*user_id));
            }
            true
        }
        Message::UserDeletionConfirmed(user_id) => {
            commands.push(Command::DeleteUser(*user_id));
            true
        }
        Message::UserDeleted(user_id) => {
            state.users.users.retain(|u| u.id != *user_id);
            commands.push(Command::Render);
            true
        }
        Message::UserDeletionFailed { user_id, error } => {
            error_log!("Error deleting user {}: {}", user_id, error);
            commands.push(Command::Toast {
                kind: ToastKind::Error,
                text: "Erro ao excluir usuário".to_string(),
            });
            true
        }

        // ---------------------------------------------------------------
        // Form
        // ---------------------------------------------------------------
        Message::UserFormUserLoaded(user) => {
            if state.user_form.editing == Some(user.id) {
                state.user_form.load_user(user);
                commands.push(Command::Render);
            } else {
                debug_log!("Ignoring user {} loaded for a closed form", user.id);
            }
            true
        }
        Message::UserFormUserFailed(error) => {
            error_log!("Error loading user: {}", error);
            state.user_form.loading = false;
            state.user_form.error = Some("Erro ao carregar usuário".to_string());
            commands.push(Command::Render);
            true
        }
        Message::UserFormPagesLoaded(pages) => {
            state.user_form.available_pages = pages.clone();
            commands.push(Command::Render);
            true
        }
        Message::UserFormPagesFailed(error) => {
            error_log!("Error loading pages: {}", error);
            state.user_form.error = Some(
                "Erro ao carregar páginas do Facebook. Certifique-se de que o Admin conectou uma conta."
                    .to_string(),
            );
            commands.push(Command::Render);
            true
        }
        Message::SetFormUsername(value) => {
            state.user_form.username = value.clone();
            true
        }
        Message::SetFormEmail(value) => {
            state.user_form.email = value.clone();
            true
        }
        Message::SetFormPassword(value) => {
            state.user_form.password = value.clone();
            true
        }
        Message::SetFormRole(role) => {
            state.user_form.role = *role;
            commands.push(Command::Render);
            true
        }
        Message::ToggleFormPage(page_id) => {
            let form = &mut state.user_form;
            if !page_selection_locked(form.role) {
                toggle_page(&mut form.selected_page_ids, page_id);
                commands.push(Command::Render);
            }
            true
        }
        Message::SubmitUserForm => {
            let form = &mut state.user_form;
            if form.saving {
                return true;
            }
            form.error = None;
            match form.submission() {
                Ok(submission) => {
                    form.saving = true;
                    commands.push(Command::SaveUser(submission));
                }
                Err(e) => form.error = Some(e.to_string()),
            }
            commands.push(Command::Render);
            true
        }
        Message::UserSaved(user) => {
            debug_log!("Saved user {}", user.id);
            state.user_form.saving = false;
            navigate(state, ActiveView::Users, commands);
            true
        }
        Message::UserSaveFailed(error) => {
            error_log!("Error saving user: {}", error);
            state.user_form.saving = false;
            state.user_form.error = Some("Erro ao salvar usuário".to_string());
            commands.push(Command::Render);
            true
        }
        _ => false,
    }
}
