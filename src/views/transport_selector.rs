// ============================================================================
// TRANSPORT SELECTOR VIEW - Carro / Caminhada / Bicicleta
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, ElementBuilder};
use crate::models::TransportMode;
use crate::state::AppState;
use crate::utils::i18n::t;
use crate::views::AppActions;

pub fn render_transport_selector(state: &AppState, actions: &AppActions) -> Result<Element, JsValue> {
    let lang = state.language();
    let active = state.routes.active_mode();

    let container = ElementBuilder::new("div")?
        .id("transport-selector")?
        .class("transport-selector")
        .build();

    let title = ElementBuilder::new("h6")?
        .class("section-title")
        .text(&t("modo_transporte", lang))
        .build();
    append_child(&container, &title)?;

    let row = ElementBuilder::new("div")?
        .class("transport-row")
        .build();

    for mode in TransportMode::ALL {
        let select_mode = actions.select_mode.clone();
        let card = ElementBuilder::new("button")?
            .class("transport-card")
            .class_if("active", mode == active)?
            .attr("type", "button")?
            .attr("data-mode", mode.as_str())?
            .text(&t(mode.title_key(), lang))
            .on_click(move |_e| select_mode(mode))?
            .build();
        append_child(&row, &card)?;
    }

    append_child(&container, &row)?;
    Ok(container)
}
