// ============================================================================
// ROUTE INFO VIEW - Panel con los datos de la ruta mostrada
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, ElementBuilder};
use crate::state::{AppState, Endpoint};
use crate::utils::i18n::t;

/// Celda "icono + etiqueta / valor"
fn info_cell(icon: &str, label: &str, value: &str) -> Result<Element, JsValue> {
    let icon = ElementBuilder::new("i")?.class(icon).build();
    let label = ElementBuilder::new("small")?
        .child(icon)?
        .child(ElementBuilder::new("span")?.text(&format!(" {}", label)).build())?
        .build();
    let value = ElementBuilder::new("strong")?.text(value).build();

    Ok(ElementBuilder::new("div")?
        .class("route-info-cell")
        .child(label)?
        .child(value)?
        .build())
}

/// Detalles de la ruta mostrada. `None` si no hay ruta dibujada
pub fn render_route_details(state: &AppState) -> Result<Option<Element>, JsValue> {
    let lang = state.language();
    let Some(route) = state.routes.displayed_route() else {
        return Ok(None);
    };

    let name_of = |endpoint: Endpoint| {
        state
            .selection
            .get(endpoint)
            .map(|c| c.display_name())
            .unwrap_or_default()
    };

    let details = ElementBuilder::new("div")?
        .id("route-details")?
        .class("route-details")
        .build();

    let endpoints = ElementBuilder::new("div")?
        .class("route-info-row")
        .child(info_cell("fas fa-map-marker-alt text-success", &t("origem", lang), &name_of(Endpoint::Origin))?)?
        .child(info_cell("fas fa-map-marker-alt text-danger", &t("destino", lang), &name_of(Endpoint::Destination))?)?
        .build();

    let metrics = ElementBuilder::new("div")?
        .class("route-info-row")
        .child(info_cell("fas fa-ruler text-info", &t("distancia", lang), &route.distance_label())?)?
        .child(info_cell("fas fa-route text-primary", &t("pontos", lang), &route.node_count.to_string())?)?
        .child(info_cell("fas fa-clock", &t(route.mode.title_key(), lang), &route.estimated_time())?)?
        .build();

    let footer = ElementBuilder::new("div")?
        .class("route-info-footer")
        .text(&format!("{}: Dijkstra", t("algoritmo", lang)))
        .build();

    append_child(&details, &endpoints)?;
    append_child(&details, &ElementBuilder::new("hr")?.build())?;
    append_child(&details, &metrics)?;
    append_child(&details, &ElementBuilder::new("hr")?.build())?;
    append_child(&details, &footer)?;
    Ok(Some(details))
}
