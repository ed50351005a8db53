// src/pages/home.rs
//
// Landing page: greeting and FAQ accordion.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::dom_utils::{append, on_click};
use crate::messages::Message;
use crate::state::AppState;

pub const FAQ: [(&str, &str); 4] = [
    (
        "Como posso baixar as planilhas?",
        "Para baixar as planilhas, você pode clicar no menu superior na aba \"Baixar\" e selecionar a data. Após buscar, clique no botão direito para realizar o download",
    ),
    (
        "Como posso visualizar os comentários de forma detalhada?",
        "Na aba \"Visualizar\", você pode ver todos os comentários das lives de forma detalhada, com informações sobre quem comentou e quando.",
    ),
    (
        "Em quanto tempo é atualizado?",
        "As métricas são atualizadas em tempo real conforme os dados são coletados do Facebook.",
    ),
    (
        "Qual a diferença de baixar o excel e visualizar os comentários individuais?",
        "Ao baixar o Excel, você obtém um relatório completo com todas as métricas agregadas. Ao visualizar os comentários individuais, você vê cada comentário separadamente com mais detalhes.",
    ),
];

pub fn mount(document: &Document, root: &Element, state: &AppState) -> Result<(), JsValue> {
    append(
        document,
        root,
        "h1",
        "page-title centered",
        &format!("Bem-vindo {}", state.session.username()),
    )?;
    append(
        document,
        root,
        "div",
        "notice",
        "Este aplicativo foi desenvolvido para facilitar a busca de métricas.",
    )?;

    let list = append(document, root, "div", "faq", "")?;
    for (index, (question, answer)) in FAQ.iter().enumerate() {
        let open = state.home.faq_open == Some(index);
        let item = append(
            document,
            &list,
            "div",
            if open { "faq-item open" } else { "faq-item" },
            "",
        )?;
        let header = append(document, &item, "div", "faq-question", "")?;
        append(document, &header, "h3", "", question)?;
        append(document, &header, "span", "faq-chevron", if open { "▲" } else { "▼" })?;
        header.set_attribute("aria-expanded", if open { "true" } else { "false" })?;
        on_click(&header, Message::ToggleFaq(index));

        if open {
            append(document, &item, "div", "faq-answer", answer)?;
        }
    }
    Ok(())
}
