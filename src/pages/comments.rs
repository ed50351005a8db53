// src/pages/comments.rs
//
// "Visualizar": pick a saved video and browse its comments.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement, HtmlSelectElement};

use crate::constants::{ATTR_TYPE, CSS_EMPTY_STATE, CSS_LOADING, ID_COMMENT_SEARCH, ID_VIDEO_SELECT};
use crate::dom_utils::{append, clear, on_input};
use crate::messages::Message;
use crate::metrics::{format_timestamp, format_timestamp_date};
use crate::models::{Comment, LiveVideo};
use crate::state::{dispatch_global_message, AppState, CommentViewerState, APP_STATE};
use crate::utils::{avatar_class, initials};

const COMMENT_LIST_ID: &str = "comment-list";

pub fn mount(document: &Document, root: &Element, state: &AppState) -> Result<(), JsValue> {
    let viewer = &state.viewer;

    let picker = append(document, root, "div", "card", "")?;
    let label = append(document, &picker, "label", "field-label", "Selecione o Vídeo:")?;
    label.set_attribute("for", ID_VIDEO_SELECT)?;
    if viewer.videos_loading {
        append(document, &picker, "p", CSS_LOADING, "Carregando vídeos...")?;
    } else {
        let select = video_select(document, viewer)?;
        picker.append_child(&select)?;
    }

    let search_box = append(document, root, "div", "search-box", "")?;
    let search: HtmlInputElement = document.create_element("input")?.dyn_into()?;
    search.set_id(ID_COMMENT_SEARCH);
    search.set_attribute(ATTR_TYPE, "search")?;
    search.set_placeholder("Buscar comentários...");
    search.set_value(&viewer.search);
    on_input(&search, Message::SetCommentSearch);
    search_box.append_child(&search)?;

    let list = append(document, root, "div", "comment-grid", "")?;
    list.set_id(COMMENT_LIST_ID);
    render_comment_list(document, &list, viewer)
}

fn video_select(document: &Document, viewer: &CommentViewerState) -> Result<HtmlSelectElement, JsValue> {
    let select: HtmlSelectElement = document.create_element("select")?.dyn_into()?;
    select.set_id(ID_VIDEO_SELECT);

    let placeholder = document.create_element("option")?;
    placeholder.set_attribute("value", "")?;
    placeholder.set_attribute("disabled", "")?;
    placeholder.set_text_content(Some("Selecione um vídeo..."));
    select.append_child(&placeholder)?;

    for video in &viewer.videos {
        let option = document.create_element("option")?;
        option.set_attribute("value", &video.id)?;
        option.set_text_content(Some(&video_label(video)));
        select.append_child(&option)?;
    }
    select.set_value(viewer.selected_video.as_deref().unwrap_or(""));

    let target = select.clone();
    let cb = Closure::wrap(Box::new(move |_e: web_sys::Event| {
        dispatch_global_message(Message::SelectSavedVideo(target.value()));
    }) as Box<dyn FnMut(_)>);
    select.add_event_listener_with_callback("change", cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(select)
}

fn video_label(video: &LiveVideo) -> String {
    let title = match video.title.as_deref() {
        Some(t) if !t.trim().is_empty() => t,
        _ => "Vídeo sem título",
    };
    match video.creation_time.as_ref().and_then(format_timestamp_date) {
        Some(date) => format!("{} - {}", title, date),
        None => title.to_string(),
    }
}

/// Re-render only the comment cards, leaving the search input (and its
/// focus) alone.
pub fn refresh_comment_list() -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let Some(list) = document.get_element_by_id(COMMENT_LIST_ID) else {
        return Ok(());
    };
    clear(&list);
    APP_STATE.with(|state| render_comment_list(&document, &list, &state.borrow().viewer))
}

fn render_comment_list(
    document: &Document,
    list: &Element,
    viewer: &CommentViewerState,
) -> Result<(), JsValue> {
    if viewer.comments_loading {
        append(document, list, "div", CSS_LOADING, "Carregando comentários...")?;
        return Ok(());
    }
    let comments = viewer.filtered();
    if comments.is_empty() {
        append(
            document,
            list,
            "div",
            CSS_EMPTY_STATE,
            "Nenhum comentário encontrado para este vídeo.",
        )?;
        return Ok(());
    }
    for comment in comments {
        render_comment(document, list, comment)?;
    }
    Ok(())
}

fn render_comment(document: &Document, list: &Element, comment: &Comment) -> Result<(), JsValue> {
    let card = append(document, list, "div", "comment-card", "")?;
    let name = comment.author_name();

    append(
        document,
        &card,
        "div",
        &format!("avatar {}", avatar_class(name.unwrap_or("A"))),
        &initials(name.unwrap_or("Anônimo")),
    )?;

    let body = append(document, &card, "div", "comment-body", "")?;
    append(
        document,
        &body,
        "h3",
        "comment-author",
        name.unwrap_or("Usuário do Facebook"),
    )?;
    append(document, &body, "p", "comment-message", &comment.message)?;
    if let Some(when) = comment.created_time.as_ref().and_then(format_timestamp) {
        append(document, &body, "span", "comment-time", &when)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untitled_video_label() {
        let video: LiveVideo = serde_json::from_value(serde_json::json!({
            "id": "1", "title": "  "
        }))
        .unwrap();
        assert_eq!(video_label(&video), "Vídeo sem título");
    }
}
