// ============================================================================
// INCREMENTAL DOM UPDATES - Actualización incremental del DOM (estilo vanilla JS)
// ============================================================================
// Solo actualiza elementos específicos que cambiaron, sin re-renderizar todo.
// El contenedor #map nunca se toca: Leaflet vive dentro.
// ============================================================================

use wasm_bindgen::prelude::*;
use gloo_timers::callback::Timeout;
use crate::config::CONFIG;
use crate::dom::{
    append_child, clear_children, get_attribute, get_element_by_id, query_selector_all,
    set_input_value, set_text_content, set_visible, toggle_class,
};
use crate::models::TransportMode;
use crate::state::{AlgorithmModal, AppState, Endpoint};
use crate::views::{
    render_algorithm_modal_body, render_notification, render_route_cards, render_route_details,
    search_input_id, status_id, status_text, AppActions,
};

/// Inputs de búsqueda y etiquetas de estado de origen/destino
pub fn update_selection(state: &AppState) -> Result<(), JsValue> {
    for endpoint in [Endpoint::Origin, Endpoint::Destination] {
        if let Some(input) = get_element_by_id(&search_input_id(endpoint)) {
            set_input_value(&input, &state.selection.input(endpoint))?;
        }
        if let Some(status) = get_element_by_id(&status_id(endpoint)) {
            set_text_content(&status, &status_text(state, endpoint));
            toggle_class(&status, "search-status--set", state.selection.get(endpoint).is_some())?;
        }
    }
    Ok(())
}

/// Clase "active" en el botón del modo seleccionado
pub fn update_transport_mode(state: &AppState) -> Result<(), JsValue> {
    let active = state.routes.active_mode();
    for button in query_selector_all(".transport-card")? {
        let is_active = get_attribute(&button, "data-mode")
            .and_then(|mode| TransportMode::parse(&mode))
            .map(|mode| mode == active)
            .unwrap_or(false);
        toggle_class(&button, "active", is_active)?;
    }
    Ok(())
}

/// Panel con los detalles de la ruta mostrada (oculto si no hay ruta)
pub fn update_route_info(state: &AppState) -> Result<(), JsValue> {
    let Some(container) = get_element_by_id("route-info") else {
        log::warn!("⚠️ #route-info não encontrado");
        return Ok(());
    };

    clear_children(&container);
    match render_route_details(state)? {
        Some(details) => {
            append_child(&container, &details)?;
            set_visible(&container, true)
        }
        None => set_visible(&container, false),
    }
}

/// Re-construir las tarjetas de comparación
pub fn update_route_cards(state: &AppState, actions: &AppActions) -> Result<(), JsValue> {
    let Some(container) = get_element_by_id("route-cards") else {
        log::warn!("⚠️ #route-cards não encontrado");
        return Ok(());
    };

    let cards = render_route_cards(state, actions)?;
    clear_children(&container);
    for card in &cards {
        append_child(&container, card)?;
    }

    if let Some(section) = get_element_by_id("route-comparison") {
        set_visible(&section, !cards.is_empty())?;
    }
    Ok(())
}

/// Mostrar / ocultar el indicador de carga
pub fn update_loading(state: &AppState) -> Result<(), JsValue> {
    if let Some(loading) = get_element_by_id("loading") {
        set_visible(&loading, state.is_loading())?;
    }
    Ok(())
}

/// Pintar la notificación actual y programar su cierre automático
pub fn update_notification(state: &AppState, actions: &AppActions) -> Result<(), JsValue> {
    let Some(root) = get_element_by_id("notification-root") else {
        return Ok(());
    };

    clear_children(&root);
    let Some(notification) = state.current_notification() else {
        return Ok(());
    };

    append_child(&root, &render_notification(&notification, actions)?)?;

    // Solo cierra si sigue siendo la misma notificación
    let id = notification.id;
    let dismiss = actions.dismiss_notification.clone();
    Timeout::new(CONFIG.ui_config.notification_timeout_ms, move || {
        dismiss(id);
    })
    .forget();
    Ok(())
}

/// Visibilidad y contenido del modal del algoritmo
pub fn update_algorithm_modal(state: &AppState) -> Result<(), JsValue> {
    let Some(modal) = get_element_by_id("algorithm-modal") else {
        return Err(JsValue::from_str("Modal not found, needs full render"));
    };

    let visible = state.algorithm_modal() != AlgorithmModal::Hidden;
    toggle_class(&modal, "active", visible)?;

    if let Some(content) = get_element_by_id("algorithm-modal-content") {
        clear_children(&content);
        if let Some(body) = render_algorithm_modal_body(state)? {
            append_child(&content, &body)?;
        }
    }
    Ok(())
}
