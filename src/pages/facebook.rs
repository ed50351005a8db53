// src/pages/facebook.rs
//
// "Facebook": access token (ADMIN), video URL submission and the
// pages → lives → comments drill-down.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlButtonElement, HtmlInputElement};

use crate::authorization::{can_configure_facebook_token, visible_pages};
use crate::components::banner;
use crate::constants::{
    ATTR_TYPE, BUTTON_TYPE_SUBMIT, CSS_BTN_LINK, CSS_BTN_PRIMARY, CSS_BTN_SECONDARY, CSS_CARD,
    CSS_CARD_SELECTED, CSS_EMPTY_STATE, CSS_FORM_ROW, CSS_LOADING, ID_FB_ACCESS_TOKEN,
    ID_FB_VIDEO_URL,
};
use crate::dom_utils::{append, button, on_click, on_input};
use crate::messages::Message;
use crate::metrics::format_timestamp;
use crate::models::{FacebookPage, LiveVideo, User};
use crate::state::{dispatch_global_message, AppState, FacebookState};

pub fn mount(document: &Document, root: &Element, state: &AppState) -> Result<(), JsValue> {
    let fb = &state.facebook;
    append(document, root, "h1", "page-title", "Integração com Facebook")?;
    banner::render(document, root, fb.banner.as_ref())?;

    let forms = append(document, root, "div", "grid-2", "")?;
    if can_configure_facebook_token(state.session.role()) {
        single_field_form(
            document,
            &forms,
            SingleFieldForm {
                title: "Configurar Token de Acesso",
                label: "Access Token",
                input_id: ID_FB_ACCESS_TOKEN,
                placeholder: "Cole seu token aqui...",
                value: &fb.token_draft,
                busy: fb.token_saving,
                idle_label: "Salvar Token",
                busy_label: "Salvando...",
                on_input: Message::SetFacebookTokenDraft,
                on_submit: Message::SubmitFacebookToken,
            },
        )?;
    }
    single_field_form(
        document,
        &forms,
        SingleFieldForm {
            title: "Processar URL de Vídeo",
            label: "URL do Vídeo",
            input_id: ID_FB_VIDEO_URL,
            placeholder: "https://www.facebook.com/...",
            value: &fb.url_draft,
            busy: fb.url_processing,
            idle_label: "Processar URL",
            busy_label: "Processando...",
            on_input: Message::SetVideoUrlDraft,
            on_submit: Message::SubmitVideoUrl,
        },
    )?;

    render_pages(document, root, fb, state.session.user())
}

struct SingleFieldForm<'a> {
    title: &'a str,
    label: &'a str,
    input_id: &'a str,
    placeholder: &'a str,
    value: &'a str,
    busy: bool,
    idle_label: &'a str,
    busy_label: &'a str,
    on_input: fn(String) -> Message,
    on_submit: Message,
}

fn single_field_form(document: &Document, parent: &Element, field: SingleFieldForm<'_>) -> Result<(), JsValue> {
    let card = append(document, parent, "div", "panel", "")?;
    append(document, &card, "h2", "section-title", field.title)?;

    let form = append(document, &card, "form", "", "")?;
    let row = append(document, &form, "div", CSS_FORM_ROW, "")?;
    append(document, &row, "label", "", field.label)?.set_attribute("for", field.input_id)?;

    let input: HtmlInputElement = document.create_element("input")?.dyn_into()?;
    input.set_id(field.input_id);
    input.set_attribute(ATTR_TYPE, "text")?;
    input.set_placeholder(field.placeholder);
    input.set_required(true);
    input.set_value(field.value);
    on_input(&input, field.on_input);
    row.append_child(&input)?;

    let submit: HtmlButtonElement = document.create_element("button")?.dyn_into()?;
    submit.set_attribute(ATTR_TYPE, BUTTON_TYPE_SUBMIT)?;
    submit.set_class_name(CSS_BTN_PRIMARY);
    submit.set_disabled(field.busy);
    submit.set_text_content(Some(if field.busy { field.busy_label } else { field.idle_label }));
    form.append_child(&submit)?;

    let msg = field.on_submit;
    let cb = Closure::wrap(Box::new(move |e: web_sys::Event| {
        e.prevent_default();
        dispatch_global_message(msg.clone());
    }) as Box<dyn FnMut(_)>);
    form.add_event_listener_with_callback("submit", cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

fn render_pages(
    document: &Document,
    root: &Element,
    fb: &FacebookState,
    user: Option<&User>,
) -> Result<(), JsValue> {
    let panel = append(document, root, "div", "panel", "")?;
    let header = append(document, &panel, "div", "panel-header", "")?;
    append(document, &header, "h2", "section-title", "Minhas Páginas")?;
    let load = button(
        document,
        if fb.pages_loading { "Carregando..." } else { "Carregar Páginas" },
        CSS_BTN_SECONDARY,
        Message::LoadPages,
    )?;
    load.set_disabled(fb.pages_loading);
    header.append_child(&load)?;

    // Non-admins only get the pages they are authorized for.
    let pages: Vec<&FacebookPage> = match user {
        Some(user) if user.authorized_pages.is_some() => visible_pages(user, &fb.pages),
        _ => fb.pages.iter().collect(),
    };
    if pages.is_empty() {
        if !fb.pages_loading {
            append(
                document,
                &panel,
                "p",
                CSS_EMPTY_STATE,
                "Nenhuma página carregada. Configure o token e clique em \"Carregar Páginas\".",
            )?;
        }
        return Ok(());
    }

    let grid = append(document, &panel, "div", "grid-3", "")?;
    for page in pages {
        let selected = fb.selected_page.as_deref() == Some(page.id.as_str());
        let card = append(
            document,
            &grid,
            "div",
            if selected { CSS_CARD_SELECTED } else { CSS_CARD },
            "",
        )?;
        append(document, &card, "h3", "card-title", &page.name)?;
        append(document, &card, "p", "card-meta", &format!("ID: {}", page.id))?;
        if let Some(category) = &page.category {
            append(document, &card, "p", "card-meta small", category)?;
        }
        on_click(&card, Message::SelectPage(page.id.clone()));
    }

    if let Some(page) = fb.selected_page() {
        let section = append(document, &panel, "div", "drill-down", "")?;
        append(
            document,
            &section,
            "h3",
            "section-title",
            &format!("Vídeos de {}", page.name),
        )?;
        render_videos(document, &section, fb)?;
    }
    Ok(())
}

fn render_videos(document: &Document, section: &Element, fb: &FacebookState) -> Result<(), JsValue> {
    if fb.videos_loading {
        append(document, section, "p", CSS_LOADING, "Carregando vídeos...")?;
        return Ok(());
    }
    if fb.videos.is_empty() {
        append(
            document,
            section,
            "p",
            CSS_EMPTY_STATE,
            "Nenhum vídeo encontrado nesta página.",
        )?;
        return Ok(());
    }

    for video in &fb.videos {
        let item = append(document, section, "div", "video-item", "")?;
        let head = append(document, &item, "div", "video-head", "")?;
        let info = append(document, &head, "div", "", "")?;
        append(document, &info, "h4", "video-title", video.display_title())?;
        if let Some(description) = &video.description {
            append(document, &info, "p", "video-description", description)?;
        }
        append(document, &info, "p", "card-meta small", &video_meta(video))?;

        let btn = button(
            document,
            "Ver Comentários",
            CSS_BTN_LINK,
            Message::SelectLiveVideo(video.id.clone()),
        )?;
        head.append_child(&btn)?;

        if fb.selected_video.as_deref() == Some(video.id.as_str()) {
            render_comments(document, &item, fb)?;
        }
    }
    Ok(())
}

fn video_meta(video: &LiveVideo) -> String {
    let created = video
        .creation_time
        .as_ref()
        .and_then(format_timestamp)
        .unwrap_or_else(|| "N/A".to_string());
    format!(
        "Criado em: {} | Status: {}",
        created,
        video.status.as_deref().unwrap_or("")
    )
}

fn render_comments(document: &Document, item: &Element, fb: &FacebookState) -> Result<(), JsValue> {
    let box_el = append(document, item, "div", "video-comments", "")?;
    append(document, &box_el, "h5", "", "Comentários Recentes")?;
    if fb.comments_loading {
        append(document, &box_el, "p", CSS_LOADING, "Carregando comentários...")?;
        return Ok(());
    }
    if fb.comments.is_empty() {
        append(document, &box_el, "p", CSS_EMPTY_STATE, "Nenhum comentário encontrado.")?;
        return Ok(());
    }
    let list = append(document, &box_el, "ul", "", "")?;
    for comment in &fb.comments {
        let li = append(document, &list, "li", "comment-line", "")?;
        append(
            document,
            &li,
            "strong",
            "",
            &format!("{}: ", comment.author_name().unwrap_or("Usuário")),
        )?;
        append(document, &li, "span", "", &comment.message)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn video_meta_without_creation_time() {
        let video: LiveVideo = serde_json::from_value(serde_json::json!({
            "id": "v", "status": "LIVE"
        }))
        .unwrap();
        assert_eq!(video_meta(&video), "Criado em: N/A | Status: LIVE");
    }
}
