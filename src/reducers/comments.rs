//! Comment viewer ("Visualizar"): saved videos, their comments and the
//! search box.

use crate::messages::{Command, Message};
use crate::state::AppState;
use crate::toast::ToastKind;

pub fn update(state: &mut AppState, msg: &Message, commands: &mut Vec<Command>) -> bool {
    let viewer = &mut state.viewer;
    match msg {
        Message::SavedVideosLoaded(videos) => {
            viewer.videos = videos.clone();
            viewer.videos_loading = false;
            // Open the first video unless the user already picked one.
            if viewer.selected_video.is_none() {
                if let Some(first) = viewer.videos.first() {
                    let id = first.id.clone();
                    viewer.selected_video = Some(id.clone());
                    viewer.comments.clear();
                    viewer.comments_loading = true;
                    commands.push(Command::FetchSavedComments(id));
                }
            }
            commands.push(Command::Render);
            true
        }
        Message::SavedVideosFailed(error) => {
            error_log!("Erro ao carregar vídeos: {}", error);
            viewer.videos_loading = false;
            commands.push(Command::Toast {
                kind: ToastKind::Error,
                text: "Erro ao carregar vídeos.".to_string(),
            });
            commands.push(Command::Render);
            true
        }
        Message::SelectSavedVideo(video_id) => {
            viewer.comments.clear();
            if video_id.is_empty() {
                viewer.selected_video = None;
                viewer.comments_loading = false;
            } else {
                viewer.selected_video = Some(video_id.clone());
                viewer.comments_loading = true;
                commands.push(Command::FetchSavedComments(video_id.clone()));
            }
            commands.push(Command::Render);
            true
        }
        Message::SavedCommentsLoaded { video_id, comments } => {
            if viewer.selected_video.as_deref() == Some(video_id.as_str()) {
                viewer.comments = comments.clone();
                viewer.comments_loading = false;
                commands.push(Command::Render);
            } else {
                debug_log!("Dropping stale comments for video {}", video_id);
            }
            true
        }
        Message::SavedCommentsFailed { video_id, error } => {
            error_log!("Erro ao carregar comentários: {}", error);
            if viewer.selected_video.as_deref() == Some(video_id.as_str()) {
                viewer.comments.clear();
                viewer.comments_loading = false;
                commands.push(Command::Toast {
                    kind: ToastKind::Error,
                    text: "Erro ao carregar comentários.".to_string(),
                });
                commands.push(Command::Render);
            }
            true
        }
        Message::SetCommentSearch(term) => {
            viewer.search = term.clone();
            // Only the list changes; re-rendering the whole view would steal
            // focus from the search box.
            commands.push(Command::UpdateUI(Box::new(|| {
                if let Err(e) = crate::pages::comments::refresh_comment_list() {
                    error_log!("Failed to refresh comment list: {:?}", e);
                }
            })));
            true
        }
        _ => false,
    }
}
