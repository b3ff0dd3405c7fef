// ============================================================================
// LEAFLET FFI - Foreign Function Interface para JavaScript
// ============================================================================
// Solo wrappers para funciones JS (static/map_bridge.js) - Sin estado, sin lógica
// ============================================================================

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = initLeafletMap)]
    pub fn init_leaflet_map(
        container_id: &str,
        lat: f64,
        lng: f64,
        zoom: f64,
        tile_url: &str,
        attribution: &str,
    ) -> bool;

    /// Registra el callback de click sobre el mapa: `(lat, lng)`
    #[wasm_bindgen(js_name = onLeafletMapClick)]
    pub fn on_leaflet_map_click(callback: &Closure<dyn FnMut(f64, f64)>);

    /// `kind` = "origin" | "destination"
    #[wasm_bindgen(js_name = setEndpointMarker)]
    pub fn set_endpoint_marker(kind: &str, lat: f64, lng: f64, popup_html: &str);

    #[wasm_bindgen(js_name = removeEndpointMarker)]
    pub fn remove_endpoint_marker(kind: &str);

    /// `path_json` = `[[lat, lng], ...]`; ajusta la vista a marcadores + ruta
    #[wasm_bindgen(js_name = drawRoutePath)]
    pub fn draw_route_path(path_json: &str, popup_html: &str, color: &str, weight: u32, padding: f64);

    #[wasm_bindgen(js_name = clearRoutePath)]
    pub fn clear_route_path();

    #[wasm_bindgen(js_name = setMapView)]
    pub fn set_map_view(lat: f64, lng: f64, zoom: f64);

    #[wasm_bindgen(js_name = addReferencePoints)]
    pub fn add_reference_points(points_json: &str);
}
