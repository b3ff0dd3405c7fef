// ============================================================================
// SEARCH PANEL VIEW - Input de búsqueda + estado de origen/destino
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, input_value, on_enter, on_input, ElementBuilder};
use crate::state::{AppState, Endpoint};
use crate::utils::i18n::t;
use crate::views::AppActions;

/// Id del <input> de búsqueda de un extremo
pub fn search_input_id(endpoint: Endpoint) -> String {
    format!("{}-search", endpoint.as_str())
}

/// Id de la etiqueta de estado de un extremo
pub fn status_id(endpoint: Endpoint) -> String {
    format!("{}-status", endpoint.as_str())
}

/// Texto de estado ("Origem definida" / "Não selecionada")
pub fn status_text(state: &AppState, endpoint: Endpoint) -> String {
    let lang = state.language();
    let key = match (endpoint, state.selection.get(endpoint).is_some()) {
        (Endpoint::Origin, true) => "origem_definida_status",
        (Endpoint::Origin, false) => "origem_nao_selecionada",
        (Endpoint::Destination, true) => "destino_definido_status",
        (Endpoint::Destination, false) => "destino_nao_selecionado",
    };
    t(key, lang)
}

pub fn render_search_panel(state: &AppState, endpoint: Endpoint, actions: &AppActions) -> Result<Element, JsValue> {
    let lang = state.language();
    let placeholder_key = match endpoint {
        Endpoint::Origin => "buscar_origem_placeholder",
        Endpoint::Destination => "buscar_destino_placeholder",
    };

    let panel = ElementBuilder::new("div")?
        .class(&format!("search-panel search-panel--{}", endpoint.as_str()))
        .build();

    let title = ElementBuilder::new("label")?
        .class("search-title")
        .attr("for", &search_input_id(endpoint))?
        .text(&t(endpoint.title_key(), lang))
        .build();

    let input = ElementBuilder::new("input")?
        .id(&search_input_id(endpoint))?
        .class("search-input")
        .attr("type", "text")?
        .attr("placeholder", &t(placeholder_key, lang))?
        .attr("value", &state.selection.input(endpoint))?
        .build();

    {
        let search_input = actions.search_input.clone();
        let input_el = input.clone();
        on_input(&input, move |_e| {
            if let Some(value) = input_value(&input_el) {
                search_input(endpoint, value);
            }
        })?;
    }
    {
        let search = actions.search.clone();
        on_enter(&input, move || search(endpoint))?;
    }

    let button = {
        let search = actions.search.clone();
        ElementBuilder::new("button")?
            .class("btn-search")
            .attr("type", "button")?
            .text(&t("buscar", lang))
            .on_click(move |_e| search(endpoint))?
            .build()
    };

    let row = ElementBuilder::new("div")?
        .class("search-row")
        .child(input)?
        .child(button)?
        .build();

    let status = ElementBuilder::new("small")?
        .id(&status_id(endpoint))?
        .class("search-status")
        .class_if("search-status--set", state.selection.get(endpoint).is_some())?
        .text(&status_text(state, endpoint))
        .build();

    append_child(&panel, &title)?;
    append_child(&panel, &row)?;
    append_child(&panel, &status)?;
    Ok(panel)
}
