use serde::{Deserialize, Serialize};

/// Punto geográfico con nombre opcional (resuelto por geocoding)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng, name: None }
    }

    pub fn named(lat: f64, lng: f64, name: impl Into<String>) -> Self {
        Self {
            lat,
            lng,
            name: Some(name.into()),
        }
    }

    /// Mismo punto, ignorando el nombre
    pub fn same_position(&self, other: &Coordinate) -> bool {
        self.lat == other.lat && self.lng == other.lng
    }

    /// Par [lat, lng] tal como lo espera Leaflet
    pub fn as_pair(&self) -> [f64; 2] {
        [self.lat, self.lng]
    }

    /// Query de reverse geocoding aceptada por /api/buscar_endereco
    pub fn reverse_query(&self) -> String {
        format!("{}, {}", self.lat, self.lng)
    }

    /// Nombre para mostrar; sin nombre se muestran las coordenadas
    pub fn display_name(&self) -> String {
        match &self.name {
            Some(name) if !name.trim().is_empty() => name.clone(),
            _ => format!("{:.5}, {:.5}", self.lat, self.lng),
        }
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from(pair: [f64; 2]) -> Self {
        Coordinate::new(pair[0], pair[1])
    }
}
