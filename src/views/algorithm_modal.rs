// ============================================================================
// ALGORITHM MODAL VIEW - Información del algoritmo (GET /api/info_algoritmo)
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, ElementBuilder};
use crate::models::algorithm::format_thousands;
use crate::models::AlgorithmInfo;
use crate::state::{AlgorithmModal, AppState};
use crate::utils::i18n::{t, Language};
use crate::views::AppActions;

fn labeled(label: &str, value: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("p")?
        .child(ElementBuilder::new("strong")?.text(&format!("{}: ", label)).build())?
        .child(ElementBuilder::new("span")?.text(value).build())?
        .build())
}

fn section(title: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?
        .class("modal-section")
        .child(ElementBuilder::new("h6")?.text(title).build())?
        .build())
}

fn render_loaded(info: &AlgorithmInfo, lang: Language) -> Result<Element, JsValue> {
    let body = ElementBuilder::new("div")?.class("algorithm-info").build();

    let title = ElementBuilder::new("h5")?.text(&info.algorithm).build();
    append_child(&body, &title)?;

    append_child(&body, &labeled(&t("complexidade_temporal", lang), &info.time_complexity)?)?;
    append_child(&body, &labeled(&t("complexidade_espacial", lang), &info.space_complexity)?)?;
    append_child(&body, &labeled(&t("tipo_grafo", lang), &info.graph_type)?)?;
    append_child(&body, &labeled(&t("aplicacao", lang), &info.application)?)?;

    let stats = section(&t("estatisticas", lang))?;
    append_child(&stats, &labeled(&t("total_nos", lang), &format_thousands(info.total_nodes))?)?;
    append_child(&stats, &labeled(&t("total_arestas", lang), &format_thousands(info.total_edges))?)?;
    append_child(&stats, &labeled(&t("arestas_randomizadas", lang), &format_thousands(info.randomized_edges))?)?;
    let randomized = if info.randomization_active { t("sim", lang) } else { t("nao", lang) };
    append_child(&stats, &labeled(&t("randomizacao_ativa", lang), &randomized)?)?;
    append_child(&stats, &labeled(&t("idioma", lang), &info.language)?)?;
    append_child(&body, &stats)?;

    if !info.features.is_empty() {
        let features = section(&t("caracteristicas", lang))?;
        let list = ElementBuilder::new("ul")?.build();
        for feature in &info.features {
            append_child(&list, &ElementBuilder::new("li")?.text(feature).build())?;
        }
        append_child(&features, &list)?;
        append_child(&body, &features)?;
    }

    let about = section(&t("sobre_algoritmo", lang))?;
    append_child(&about, &ElementBuilder::new("p")?.text(&t("sobre_algoritmo_texto", lang)).build())?;
    append_child(&body, &about)?;

    if info.randomization_active {
        let note = section(&t("randomizacao", lang))?;
        append_child(&note, &ElementBuilder::new("p")?.text(&t("randomizacao_texto", lang)).build())?;
        append_child(&body, &note)?;
    }

    Ok(body)
}

/// Contenido del modal según su estado. `None` cuando está oculto
pub fn render_algorithm_modal_body(state: &AppState) -> Result<Option<Element>, JsValue> {
    let lang = state.language();
    let body = match state.algorithm_modal() {
        AlgorithmModal::Hidden => return Ok(None),
        AlgorithmModal::Loading => ElementBuilder::new("div")?
            .class("modal-loading")
            .child(ElementBuilder::new("div")?.class("spinner").build())?
            .child(ElementBuilder::new("p")?.text(&t("carregando_info", lang)).build())?
            .build(),
        AlgorithmModal::Loaded(info) => render_loaded(&info, lang)?,
        AlgorithmModal::Failed(message) => ElementBuilder::new("div")?
            .class("modal-error")
            .child(ElementBuilder::new("h5")?.text(&t("erro", lang)).build())?
            .child(ElementBuilder::new("p")?.text(&message).build())?
            .build(),
    };
    Ok(Some(body))
}

/// Contenedor del modal (oculto hasta que se pida la información)
pub fn render_algorithm_modal(state: &AppState, actions: &AppActions) -> Result<Element, JsValue> {
    let lang = state.language();

    let close_icon = {
        let close = actions.close_algorithm_modal.clone();
        ElementBuilder::new("button")?
            .class("modal-close")
            .attr("type", "button")?
            .attr("aria-label", &t("fechar", lang))?
            .html("&times;")
            .on_click(move |_e| close())?
            .build()
    };

    let header = ElementBuilder::new("div")?
        .class("modal-header")
        .child(ElementBuilder::new("h5")?.text(&t("info_algoritmo", lang)).build())?
        .child(close_icon)?
        .build();

    let content = ElementBuilder::new("div")?
        .id("algorithm-modal-content")?
        .class("modal-body")
        .build();
    if let Some(body) = render_algorithm_modal_body(state)? {
        append_child(&content, &body)?;
    }

    let footer = {
        let close = actions.close_algorithm_modal.clone();
        ElementBuilder::new("div")?
            .class("modal-footer")
            .child(
                ElementBuilder::new("button")?
                    .class("btn-secondary")
                    .attr("type", "button")?
                    .text(&t("fechar", lang))
                    .on_click(move |_e| close())?
                    .build(),
            )?
            .build()
    };

    let dialog = ElementBuilder::new("div")?
        .class("modal-dialog")
        .child(header)?
        .child(content)?
        .child(footer)?
        .build();

    let visible = state.algorithm_modal() != AlgorithmModal::Hidden;
    Ok(ElementBuilder::new("div")?
        .id("algorithm-modal")?
        .class("modal-overlay")
        .class_if("active", visible)?
        .child(dialog)?
        .build())
}
