// src/pages/download.rs
//
// "Baixar": metrics table with a date filter and the CSV report download.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement};

use crate::constants::{
    ATTR_TYPE, CSS_BTN_PRIMARY, CSS_BTN_SECONDARY, CSS_DATA_TABLE, CSS_EMPTY_STATE, CSS_LOADING,
    ID_REPORT_DATE,
};
use crate::dom_utils::{append, button, on_input};
use crate::messages::Message;
use crate::metrics::{display_to_iso, format_count};
use crate::state::AppState;

pub fn mount(document: &Document, root: &Element, state: &AppState) -> Result<(), JsValue> {
    let metrics = &state.metrics;

    let filter = append(document, root, "div", "date-filter", "")?;
    let label = append(document, &filter, "h2", "section-title", "Selecione a data")?;
    label.set_id("report-date-label");

    let controls = append(document, &filter, "div", "date-filter-controls", "")?;
    let input: HtmlInputElement = document.create_element("input")?.dyn_into()?;
    input.set_id(ID_REPORT_DATE);
    input.set_attribute(ATTR_TYPE, "date")?;
    input.set_attribute("aria-labelledby", "report-date-label")?;
    input.set_value(
        &metrics
            .filter_date
            .as_deref()
            .and_then(display_to_iso)
            .unwrap_or_default(),
    );
    on_input(&input, Message::SetReportDate);
    controls.append_child(&input)?;

    let clear = button(
        document,
        "Limpar",
        CSS_BTN_SECONDARY,
        Message::SetReportDate(String::new()),
    )?;
    controls.append_child(&clear)?;

    if metrics.loading {
        append(document, root, "div", CSS_LOADING, "Carregando...")?;
        return Ok(());
    }

    let table = append(document, root, "table", CSS_DATA_TABLE, "")?;
    let head = append(document, &table, "thead", "", "")?;
    let head_row = append(document, &head, "tr", "", "")?;
    for title in ["Data", "Visualizações", "Descrição", ""] {
        append(document, &head_row, "th", "", title)?;
    }

    let body = append(document, &table, "tbody", "", "")?;
    let visible = metrics.visible();
    if visible.is_empty() {
        let row = append(document, &body, "tr", "", "")?;
        let cell = append(document, &row, "td", CSS_EMPTY_STATE, "Nenhuma métrica encontrada")?;
        cell.set_attribute("colspan", "4")?;
        return Ok(());
    }

    for metric in visible {
        let row = append(document, &body, "tr", "", "")?;
        append(document, &row, "td", "", &metric.display_date())?;
        append(document, &row, "td", "", &format_count(metric.total_views))?;
        append(document, &row, "td", "", &metric.kind)?;
        let action = append(document, &row, "td", "", "")?;
        let btn = button(
            document,
            if metrics.downloading { "Baixando..." } else { "Baixar" },
            CSS_BTN_PRIMARY,
            Message::DownloadReport,
        )?;
        btn.set_disabled(metrics.downloading);
        action.append_child(&btn)?;
    }
    Ok(())
}
