// Módulo de mapas: trait común + implementación web (Leaflet)

pub mod web;

// Traits comunes para todas las plataformas
pub mod traits;

pub use traits::{validate_coordinate, MapError, MapRenderer};
pub use web::LeafletMap;
