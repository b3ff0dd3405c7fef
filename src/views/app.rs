// ============================================================================
// APP VIEW - Layout principal (sidebar + mapa)
// ============================================================================
// Solo construye el DOM a partir del estado. Las partes que cambian tienen id
// propio para que dom::incremental las actualice sin re-render completo.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, set_visible, ElementBuilder};
use crate::state::{AppState, Endpoint};
use crate::utils::constants::MAP_CONTAINER_ID;
use crate::utils::i18n::t;
use crate::views::{
    render_algorithm_modal, render_notification, render_route_cards, render_route_details,
    render_search_panel, render_transport_selector, AppActions,
};

fn action_button(id: &str, class: &str, label: &str, action: std::rc::Rc<dyn Fn()>) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("button")?
        .id(id)?
        .class(class)
        .attr("type", "button")?
        .text(label)
        .on_click(move |_e| action())?
        .build())
}

/// Renderizar la aplicación completa
pub fn render_app(state: &AppState, actions: &AppActions) -> Result<Element, JsValue> {
    let lang = state.language();

    let container = ElementBuilder::new("div")?
        .class("app-container")
        .build();

    // ------------------------------------------------------------------------
    // Sidebar
    // ------------------------------------------------------------------------
    let sidebar = ElementBuilder::new("aside")?
        .class("sidebar")
        .build();

    let header = ElementBuilder::new("header")?
        .class("sidebar-header")
        .child(ElementBuilder::new("h1")?.text(&t("app_title", lang)).build())?
        .child(ElementBuilder::new("p")?.class("subtitle").text(&t("app_subtitle", lang)).build())?
        .build();
    append_child(&sidebar, &header)?;

    append_child(&sidebar, &render_search_panel(state, Endpoint::Origin, actions)?)?;
    append_child(&sidebar, &render_search_panel(state, Endpoint::Destination, actions)?)?;
    append_child(&sidebar, &render_transport_selector(state, actions)?)?;

    let buttons = ElementBuilder::new("div")?
        .class("action-buttons")
        .child(action_button("btn-calculate", "btn-primary", &t("calcular_rota", lang), actions.calculate.clone())?)?
        .child(action_button("btn-sample", "btn-secondary", &t("rota_exemplo", lang), actions.sample_route.clone())?)?
        .child(action_button("btn-clear", "btn-secondary", &t("limpar", lang), actions.reset.clone())?)?
        .child(action_button("btn-algorithm", "btn-link", &t("info_algoritmo", lang), actions.open_algorithm_info.clone())?)?
        .build();
    append_child(&sidebar, &buttons)?;

    let loading = ElementBuilder::new("div")?
        .id("loading")?
        .class("loading")
        .child(ElementBuilder::new("div")?.class("spinner").build())?
        .child(ElementBuilder::new("span")?.text(&t("calculando", lang)).build())?
        .build();
    set_visible(&loading, state.is_loading())?;
    append_child(&sidebar, &loading)?;

    // Información de la ruta mostrada
    let route_info = ElementBuilder::new("div")?
        .id("route-info")?
        .class("route-info")
        .build();
    let details = render_route_details(state)?;
    set_visible(&route_info, details.is_some())?;
    if let Some(details) = details {
        append_child(&route_info, &details)?;
    }
    append_child(&sidebar, &route_info)?;

    // Comparación por modo
    let comparison = ElementBuilder::new("div")?
        .id("route-comparison")?
        .class("route-comparison")
        .child(ElementBuilder::new("h6")?.class("section-title").text(&t("comparacao_rotas", lang)).build())?
        .build();
    let cards_root = ElementBuilder::new("div")?
        .id("route-cards")?
        .class("route-cards")
        .build();
    let cards = render_route_cards(state, actions)?;
    set_visible(&comparison, !cards.is_empty())?;
    for card in &cards {
        append_child(&cards_root, card)?;
    }
    append_child(&comparison, &cards_root)?;
    append_child(&sidebar, &comparison)?;

    append_child(&container, &sidebar)?;

    // ------------------------------------------------------------------------
    // Mapa (Leaflet se monta dentro; nunca se re-crea)
    // ------------------------------------------------------------------------
    let map = ElementBuilder::new("div")?
        .id(MAP_CONTAINER_ID)?
        .class("map-container")
        .build();
    append_child(&container, &map)?;

    // ------------------------------------------------------------------------
    // Overlays
    // ------------------------------------------------------------------------
    let notification_root = ElementBuilder::new("div")?
        .id("notification-root")?
        .class("notification-root")
        .build();
    if let Some(notification) = state.current_notification() {
        append_child(&notification_root, &render_notification(&notification, actions)?)?;
    }
    append_child(&container, &notification_root)?;

    append_child(&container, &render_algorithm_modal(state, actions)?)?;

    Ok(container)
}
