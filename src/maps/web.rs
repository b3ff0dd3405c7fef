use std::cell::Cell;
use crate::config::{MapConfig, CONFIG};
use crate::models::{Coordinate, ReferencePoint, RouteResult};
use crate::state::Endpoint;
use crate::utils::constants::ROUTE_BOUNDS_PADDING;
use crate::utils::i18n::Language;
use crate::utils::leaflet_ffi;
use crate::viewmodels::MapViewModel;
use super::{validate_coordinate, MapError, MapRenderer};

/// Renderizador de mapas para web usando Leaflet (vía static/map_bridge.js)
pub struct LeafletMap {
    is_ready: Cell<bool>,
}

impl LeafletMap {
    pub fn new() -> Self {
        Self {
            is_ready: Cell::new(false),
        }
    }

    fn ensure_ready(&self) -> Result<(), MapError> {
        if self.is_ready.get() {
            Ok(())
        } else {
            Err(MapError::NotReady)
        }
    }
}

impl Default for LeafletMap {
    fn default() -> Self {
        Self::new()
    }
}

impl MapRenderer for LeafletMap {
    fn initialize(&self, container_id: &str, config: &MapConfig) -> Result<(), MapError> {
        log::info!("🗺️ Inicializando Leaflet em #{}...", container_id);
        let created = leaflet_ffi::init_leaflet_map(
            container_id,
            config.default_center_lat,
            config.default_center_lng,
            config.default_zoom,
            &config.tile_url,
            &config.tile_attribution,
        );
        if !created {
            return Err(MapError::Unknown(format!("container #{} not found", container_id)));
        }
        self.is_ready.set(true);
        log::info!("✅ Mapa web inicializado correctamente");
        Ok(())
    }

    fn show_endpoint(&self, endpoint: Endpoint, coordinate: &Coordinate, popup_html: &str) -> Result<(), MapError> {
        self.ensure_ready()?;
        validate_coordinate(coordinate)?;
        log::info!(
            "📍 Marcador {} em ({}, {})",
            endpoint.as_str(),
            coordinate.lat,
            coordinate.lng
        );
        leaflet_ffi::set_endpoint_marker(endpoint.as_str(), coordinate.lat, coordinate.lng, popup_html);
        Ok(())
    }

    fn clear_endpoint(&self, endpoint: Endpoint) -> Result<(), MapError> {
        self.ensure_ready()?;
        leaflet_ffi::remove_endpoint_marker(endpoint.as_str());
        Ok(())
    }

    fn draw_route(&self, route: &RouteResult, popup_html: &str) -> Result<(), MapError> {
        self.ensure_ready()?;
        let path_json = MapViewModel::path_json(route)?;
        log::info!(
            "🛣️ Desenhando rota {} com {} coordenadas",
            route.mode.as_str(),
            route.path.len()
        );
        leaflet_ffi::draw_route_path(
            &path_json,
            popup_html,
            &CONFIG.ui_config.route_line_color,
            CONFIG.ui_config.route_line_width,
            ROUTE_BOUNDS_PADDING,
        );
        Ok(())
    }

    fn clear_route(&self) -> Result<(), MapError> {
        self.ensure_ready()?;
        leaflet_ffi::clear_route_path();
        Ok(())
    }

    fn set_center(&self, coordinate: &Coordinate, zoom: f64) -> Result<(), MapError> {
        self.ensure_ready()?;
        validate_coordinate(coordinate)?;
        log::info!("🎯 Centrando mapa en ({}, {}) con zoom {}", coordinate.lat, coordinate.lng, zoom);
        leaflet_ffi::set_map_view(coordinate.lat, coordinate.lng, zoom);
        Ok(())
    }

    fn add_reference_points(&self, points: &[ReferencePoint], lang: Language) -> Result<(), MapError> {
        self.ensure_ready()?;
        let points_json = MapViewModel::reference_points_json(points, lang)?;
        leaflet_ffi::add_reference_points(&points_json);
        log::info!("📍 {} pontos de referência no mapa", points.len());
        Ok(())
    }
}
