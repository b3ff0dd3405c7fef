use serde::{Deserialize, Serialize};
use crate::models::coordinate::Coordinate;
use crate::models::transport::TransportMode;

/// Body de POST /api/calcular_rota
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteRequest {
    #[serde(rename = "origem_lat")]
    pub origin_lat: f64,
    #[serde(rename = "origem_lng")]
    pub origin_lng: f64,
    #[serde(rename = "destino_lat")]
    pub destination_lat: f64,
    #[serde(rename = "destino_lng")]
    pub destination_lng: f64,
    #[serde(rename = "modo")]
    pub mode: TransportMode,
}

impl RouteRequest {
    pub fn new(origin: &Coordinate, destination: &Coordinate, mode: TransportMode) -> Self {
        Self {
            origin_lat: origin.lat,
            origin_lng: origin.lng,
            destination_lat: destination.lat,
            destination_lng: destination.lng,
            mode,
        }
    }
}

/// Respuesta de POST /api/calcular_rota
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteResponse {
    #[serde(rename = "sucesso", default)]
    pub success: bool,
    #[serde(rename = "caminho", default)]
    pub path: Vec<[f64; 2]>,
    #[serde(rename = "distancia", default)]
    pub distance_m: f64,
    #[serde(default)]
    pub nos_count: usize,
    #[serde(rename = "modo", default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<TransportMode>,
    #[serde(rename = "mensagem", default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(rename = "erro", default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RouteResponse {
    /// Mensaje de fallo del servidor (mensagem tiene prioridad sobre erro)
    pub fn failure_message(&self) -> Option<&str> {
        self.message
            .as_deref()
            .or(self.error.as_deref())
            .filter(|m| !m.trim().is_empty())
    }

    /// Convertir a resultado de dominio. `Err` lleva el mensaje del servidor si lo hay
    pub fn into_result(self, requested: TransportMode) -> Result<RouteResult, Option<String>> {
        if !self.success {
            return Err(self.failure_message().map(|m| m.to_string()));
        }
        Ok(RouteResult {
            path: self.path.into_iter().map(Coordinate::from).collect(),
            distance_m: self.distance_m,
            node_count: self.nos_count,
            mode: self.mode.unwrap_or(requested),
        })
    }
}

/// Ruta calculada para un modo de transporte
#[derive(Debug, Clone, PartialEq)]
pub struct RouteResult {
    pub path: Vec<Coordinate>,
    pub distance_m: f64,
    pub node_count: usize,
    pub mode: TransportMode,
}

impl RouteResult {
    pub fn distance_km(&self) -> f64 {
        self.distance_m / 1000.0
    }

    /// "X.Y km"
    pub fn distance_label(&self) -> String {
        format!("{:.1} km", self.distance_km())
    }

    pub fn estimated_time(&self) -> String {
        self.mode.estimated_time(self.distance_m)
    }

    /// Camino como `[[lat, lng], ...]` para el puente de Leaflet
    pub fn path_pairs(&self) -> Vec<[f64; 2]> {
        self.path.iter().map(Coordinate::as_pair).collect()
    }
}
