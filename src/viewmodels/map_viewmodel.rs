// ============================================================================
// MAP VIEWMODEL - Preparación de datos para el mapa
// ============================================================================
// SOLO lógica de preparación de datos - Sin estado
// ============================================================================

use serde::Serialize;
use crate::maps::MapError;
use crate::models::{Coordinate, ReferencePoint, RouteResult};
use crate::state::Endpoint;
use crate::utils::escape_html;
use crate::utils::i18n::{t, Language};

/// Punto de referencia tal como lo consume addReferencePoints()
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct MapReferencePoint {
    pub index: usize,
    pub name: String,
    pub description: String,
    pub coords: [f64; 2], // [lat, lng]
    pub icon: &'static str,
    pub color: &'static str,
    pub select_label: String,
}

/// ViewModel del mapa - SOLO lógica de presentación
pub struct MapViewModel;

impl MapViewModel {
    /// Popup del marcador de origen/destino
    pub fn endpoint_popup_html(endpoint: Endpoint, coordinate: &Coordinate, lang: Language) -> String {
        let detail = match &coordinate.name {
            Some(name) if !name.trim().is_empty() => escape_html(name),
            _ => t("clique_opcoes", lang),
        };
        format!("<b>{}</b><br>{}", t(endpoint.title_key(), lang), detail)
    }

    /// Popup de la polilínea: origen, destino, distancia, nodos y algoritmo
    pub fn route_popup_html(
        route: &RouteResult,
        origin: &Coordinate,
        destination: &Coordinate,
        lang: Language,
    ) -> String {
        format!(
            concat!(
                "<div class=\"route-popup\">",
                "<h6><i class=\"fas fa-route\"></i> {}</h6>",
                "<p><b>{}:</b> {}</p>",
                "<p><b>{}:</b> {}</p>",
                "<p><b>{}:</b> {}</p>",
                "<p><b>{}:</b> {}</p>",
                "<p><b>{}:</b> Dijkstra</p>",
                "</div>"
            ),
            t("rota_calculada", lang),
            t("origem", lang),
            escape_html(&origin.display_name()),
            t("destino", lang),
            escape_html(&destination.display_name()),
            t("distancia", lang),
            route.distance_label(),
            t("pontos", lang),
            route.node_count,
            t("algoritmo", lang),
        )
    }

    /// `[[lat, lng], ...]`
    pub fn path_json(route: &RouteResult) -> Result<String, MapError> {
        serde_json::to_string(&route.path_pairs()).map_err(|e| MapError::Serialization(e.to_string()))
    }

    pub fn prepare_reference_points(points: &[ReferencePoint], lang: Language) -> Vec<MapReferencePoint> {
        points
            .iter()
            .enumerate()
            .map(|(index, point)| MapReferencePoint {
                index,
                name: point.name.clone(),
                description: point.description.clone(),
                coords: [point.lat, point.lng],
                icon: point.kind.icon_class(),
                color: point.kind.color(),
                select_label: t("selecionar", lang),
            })
            .collect()
    }

    pub fn reference_points_json(points: &[ReferencePoint], lang: Language) -> Result<String, MapError> {
        let prepared = Self::prepare_reference_points(points, lang);
        serde_json::to_string(&prepared).map_err(|e| MapError::Serialization(e.to_string()))
    }
}
