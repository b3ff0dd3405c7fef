// ============================================================================
// ROUTE CARDS VIEW - Comparación de rutas por modo de transporte
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::ElementBuilder;
use crate::models::RouteResult;
use crate::state::AppState;
use crate::utils::i18n::t;
use crate::views::AppActions;

fn render_route_card(route: &RouteResult, active: bool, state: &AppState, actions: &AppActions) -> Result<Element, JsValue> {
    let lang = state.language();
    let mode = route.mode;

    let header = ElementBuilder::new("div")?
        .class("route-card-header")
        .child(ElementBuilder::new("h6")?.text(&t(mode.title_key(), lang)).build())?
        .child(
            ElementBuilder::new("span")?
                .class("route-time")
                .text(&route.estimated_time())
                .build(),
        )?
        .build();

    let body = ElementBuilder::new("div")?
        .class("route-card-body")
        .child(
            ElementBuilder::new("p")?
                .html("<i class=\"fas fa-ruler\"></i> ")
                .child(ElementBuilder::new("span")?.text(&route.distance_label()).build())?
                .build(),
        )?
        .child(
            ElementBuilder::new("p")?
                .html("<i class=\"fas fa-route\"></i> ")
                .child(
                    ElementBuilder::new("span")?
                        .text(&format!("{} {}", route.node_count, t("pontos", lang).to_lowercase()))
                        .build(),
                )?
                .build(),
        )?
        .build();

    let select_mode = actions.select_mode.clone();
    Ok(ElementBuilder::new("div")?
        .class("route-card")
        .class_if("active", active)?
        .attr("data-mode", mode.as_str())?
        .child(header)?
        .child(body)?
        .on_click(move |_e| select_mode(mode))?
        .build())
}

/// Una tarjeta por modo cacheado, en orden fijo; la del modo activo resaltada
pub fn render_route_cards(state: &AppState, actions: &AppActions) -> Result<Vec<Element>, JsValue> {
    let active = state.routes.active_mode();
    state
        .routes
        .cached_routes()
        .iter()
        .map(|route| render_route_card(route, route.mode == active, state, actions))
        .collect()
}
