//! Facebook integration view: token and video-URL forms plus the
//! pages → lives → comments drill-down.

use crate::authorization::can_configure_facebook_token;
use crate::messages::{Command, Message};
use crate::state::{AppState, Banner};

pub fn update(state: &mut AppState, msg: &Message, commands: &mut Vec<Command>) -> bool {
    let fb = &mut state.facebook;
    match msg {
        Message::LoadPages => {
            fb.begin_load_pages();
            commands.push(Command::FetchPages);
            commands.push(Command::Render);
            true
        }
        Message::PagesLoaded(pages) => {
            debug_log!("Loaded {} Facebook pages", pages.len());
            fb.apply_pages(pages.clone());
            commands.push(Command::Render);
            true
        }
        Message::PagesFailed(error) => {
            error_log!("Failed to load pages: {}", error);
            fb.pages_loading = false;
            fb.banner = Some(Banner::error(
                "Erro ao carregar páginas. Verifique se o token está válido.",
            ));
            commands.push(Command::Render);
            true
        }
        Message::SelectPage(page_id) => {
            fb.select_page(page_id);
            commands.push(Command::FetchLiveVideos(page_id.clone()));
            commands.push(Command::Render);
            true
        }
        Message::LiveVideosLoaded { page_id, videos } => {
            if fb.apply_videos(page_id, videos.clone()) {
                commands.push(Command::Render);
            } else {
                debug_log!("Dropping stale lives for page {}", page_id);
            }
            true
        }
        Message::LiveVideosFailed { page_id, error } => {
            error_log!("Failed to load lives of page {}: {}", page_id, error);
            if fb.videos_failed(page_id) {
                let name = fb
                    .selected_page()
                    .map(|p| p.name.clone())
                    .unwrap_or_else(|| page_id.clone());
                fb.banner = Some(Banner::error(format!(
                    "Erro ao carregar vídeos da página {}.",
                    name
                )));
                commands.push(Command::Render);
            }
            true
        }
        Message::SelectLiveVideo(video_id) => {
            fb.select_video(video_id);
            commands.push(Command::FetchComments(video_id.clone()));
            commands.push(Command::Render);
            true
        }
        Message::CommentsLoaded { video_id, comments } => {
            if fb.apply_comments(video_id, comments.clone()) {
                commands.push(Command::Render);
            } else {
                debug_log!("Dropping stale comments for live {}", video_id);
            }
            true
        }
        Message::CommentsFailed { video_id, error } => {
            error_log!("Failed to load comments of live {}: {}", video_id, error);
            if fb.comments_failed(video_id) {
                fb.banner = Some(Banner::error("Erro ao carregar comentários."));
                commands.push(Command::Render);
            }
            true
        }

        // Forms.  Drafts are kept in state so a re-render does not wipe
        // what the user typed; they do not trigger a render themselves.
        Message::SetFacebookTokenDraft(value) => {
            fb.token_draft = value.clone();
            true
        }
        Message::SubmitFacebookToken => {
            let token = fb.token_draft.trim().to_string();
            if !can_configure_facebook_token(state.session.role()) || token.is_empty() {
                return true;
            }
            if !fb.token_saving {
                fb.token_saving = true;
                fb.banner = None;
                commands.push(Command::SaveFacebookToken(token));
                commands.push(Command::Render);
            }
            true
        }
        Message::FacebookTokenSaved => {
            fb.token_saving = false;
            fb.token_draft.clear();
            fb.banner = Some(Banner::success("Token salvo com sucesso!"));
            commands.push(Command::Render);
            true
        }
        Message::FacebookTokenFailed(error) => {
            error_log!("Failed to save Facebook token: {}", error);
            fb.token_saving = false;
            fb.banner = Some(Banner::error("Erro ao salvar token."));
            commands.push(Command::Render);
            true
        }
        Message::SetVideoUrlDraft(value) => {
            fb.url_draft = value.clone();
            true
        }
        Message::SubmitVideoUrl => {
            let url = fb.url_draft.trim().to_string();
            if !url.is_empty() && !fb.url_processing {
                fb.url_processing = true;
                fb.banner = None;
                commands.push(Command::ProcessVideoUrl(url));
                commands.push(Command::Render);
            }
            true
        }
        Message::VideoUrlProcessed => {
            fb.url_processing = false;
            fb.url_draft.clear();
            fb.banner = Some(Banner::success("URL enviada para processamento!"));
            commands.push(Command::Render);
            true
        }
        Message::VideoUrlFailed(error) => {
            error_log!("Failed to process video URL: {}", error);
            fb.url_processing = false;
            fb.banner = Some(Banner::error("Erro ao processar URL."));
            commands.push(Command::Render);
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ApiError;
    use crate::models::{LiveVideo, Role};
    use crate::reducers::test_support::{has, page, user};
    use crate::state::BannerKind;

    fn video(id: &str) -> LiveVideo {
        serde_json::from_value(serde_json::json!({ "id": id, "title": id })).unwrap()
    }

    fn with_role(role: Role) -> AppState {
        let mut state = AppState::new();
        state.session.begin("tok".into());
        state.session.set_user(user(1, role, &["a"]));
        state
    }

    #[test]
    fn page_a_then_page_b_resets_video_and_comments() {
        let mut state = with_role(Role::GestorDeLives);
        state.dispatch(Message::PagesLoaded(vec![page("a"), page("b")]));
        state.dispatch(Message::SelectPage("a".into()));
        state.dispatch(Message::LiveVideosLoaded {
            page_id: "a".into(),
            videos: vec![video("v1")],
        });
        state.dispatch(Message::SelectLiveVideo("v1".into()));

        let commands = state.dispatch(Message::SelectPage("b".into()));
        assert!(state.facebook.selected_video.is_none());
        assert!(state.facebook.comments.is_empty());
        assert!(state.facebook.videos.is_empty());
        assert!(has(&commands, |c| matches!(c, Command::FetchLiveVideos(id) if id == "b")));

        // The comments for v1 arrive late and are dropped.
        let commands = state.dispatch(Message::CommentsLoaded {
            video_id: "v1".into(),
            comments: Vec::new(),
        });
        assert!(commands.is_empty());
        assert!(!state.facebook.comments_loading);
    }

    #[test]
    fn page_load_failure_sets_banner() {
        let mut state = with_role(Role::Admin);
        state.dispatch(Message::LoadPages);
        assert!(state.facebook.pages_loading);
        state.dispatch(Message::PagesFailed(ApiError::Network("x".into())));
        assert!(!state.facebook.pages_loading);
        assert_eq!(
            state.facebook.banner.as_ref().map(|b| b.kind),
            Some(BannerKind::Error)
        );
    }

    #[test]
    fn video_failure_names_the_page() {
        let mut state = with_role(Role::Admin);
        state.dispatch(Message::PagesLoaded(vec![page("a")]));
        state.dispatch(Message::SelectPage("a".into()));
        state.dispatch(Message::LiveVideosFailed {
            page_id: "a".into(),
            error: ApiError::Network("x".into()),
        });
        assert_eq!(
            state.facebook.banner.as_ref().map(|b| b.text.as_str()),
            Some("Erro ao carregar vídeos da página Página a.")
        );
    }

    #[test]
    fn only_admin_can_submit_token() {
        let mut staff = with_role(Role::EquipeDeProducao);
        staff.dispatch(Message::SetFacebookTokenDraft("EAAB".into()));
        let commands = staff.dispatch(Message::SubmitFacebookToken);
        assert!(commands.is_empty());

        let mut admin = with_role(Role::Admin);
        admin.dispatch(Message::SetFacebookTokenDraft(" EAAB ".into()));
        let commands = admin.dispatch(Message::SubmitFacebookToken);
        assert!(has(&commands, |c| matches!(c, Command::SaveFacebookToken(t) if t == "EAAB")));

        admin.dispatch(Message::FacebookTokenSaved);
        assert!(admin.facebook.token_draft.is_empty());
        assert_eq!(
            admin.facebook.banner,
            Some(Banner::success("Token salvo com sucesso!"))
        );
    }

    #[test]
    fn video_url_round() {
        let mut state = with_role(Role::GestorDeLives);
        assert!(state.dispatch(Message::SubmitVideoUrl).is_empty());

        state.dispatch(Message::SetVideoUrlDraft("https://www.facebook.com/x/videos/1".into()));
        let commands = state.dispatch(Message::SubmitVideoUrl);
        assert!(has(&commands, |c| matches!(c, Command::ProcessVideoUrl(_))));
        state.dispatch(Message::VideoUrlFailed(ApiError::Network("x".into())));
        assert_eq!(state.facebook.banner, Some(Banner::error("Erro ao processar URL.")));
        // Draft survives a failure so the user can retry.
        assert!(!state.facebook.url_draft.is_empty());
    }
}
