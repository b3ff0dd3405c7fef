use crate::config::MapConfig;
use crate::models::{Coordinate, ReferencePoint, RouteResult};
use crate::state::Endpoint;
use crate::utils::i18n::Language;

/// Trait común para renderizadores de mapas.
/// Los métodos toman `&self`: el estado de las capas vive en el lado JS.
pub trait MapRenderer {
    /// Crear el mapa, la capa de tiles y centrar en la vista por defecto
    fn initialize(&self, container_id: &str, config: &MapConfig) -> Result<(), MapError>;

    /// Colocar (o mover) el marcador de origen/destino
    fn show_endpoint(&self, endpoint: Endpoint, coordinate: &Coordinate, popup_html: &str) -> Result<(), MapError>;

    fn clear_endpoint(&self, endpoint: Endpoint) -> Result<(), MapError>;

    /// Dibujar la polilínea de la ruta y ajustar la vista a marcadores + ruta
    fn draw_route(&self, route: &RouteResult, popup_html: &str) -> Result<(), MapError>;

    fn clear_route(&self) -> Result<(), MapError>;

    /// Centrar el mapa en una ubicación específica
    fn set_center(&self, coordinate: &Coordinate, zoom: f64) -> Result<(), MapError>;

    /// Dibujar los puntos de referencia (el índice de cada punto es su posición).
    /// Reemplaza los que ya estuvieran en el mapa.
    fn add_reference_points(&self, points: &[ReferencePoint], lang: Language) -> Result<(), MapError>;
}

/// Error del mapa
#[derive(Debug, Clone, PartialEq)]
pub enum MapError {
    NotReady,
    InvalidCoordinates,
    Serialization(String),
    Unknown(String),
}

impl std::fmt::Display for MapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MapError::NotReady => write!(f, "Map is not ready"),
            MapError::InvalidCoordinates => write!(f, "Invalid coordinates"),
            MapError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
            MapError::Unknown(msg) => write!(f, "Unknown error: {}", msg),
        }
    }
}

impl std::error::Error for MapError {}

/// Lat/lng finitos y dentro de rango
pub fn validate_coordinate(coordinate: &Coordinate) -> Result<(), MapError> {
    let valid = coordinate.lat.is_finite()
        && coordinate.lng.is_finite()
        && (-90.0..=90.0).contains(&coordinate.lat)
        && (-180.0..=180.0).contains(&coordinate.lng);
    if valid {
        Ok(())
    } else {
        Err(MapError::InvalidCoordinates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range_coordinates() {
        assert!(validate_coordinate(&Coordinate::new(-22.9189, -42.8194)).is_ok());
        assert_eq!(
            validate_coordinate(&Coordinate::new(f64::NAN, -42.8)),
            Err(MapError::InvalidCoordinates)
        );
        assert_eq!(
            validate_coordinate(&Coordinate::new(-22.9, 190.0)),
            Err(MapError::InvalidCoordinates)
        );
    }
}
