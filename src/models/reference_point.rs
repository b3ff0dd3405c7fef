use serde::{Deserialize, Serialize};
use crate::models::coordinate::Coordinate;

/// Categoría de un punto turístico
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferencePointKind {
    Praia,
    Lagoa,
    Centro,
    #[serde(other)]
    Outro,
}

impl ReferencePointKind {
    /// Clase Font Awesome del icono
    pub fn icon_class(&self) -> &'static str {
        match self {
            ReferencePointKind::Praia => "fas fa-umbrella-beach",
            ReferencePointKind::Lagoa => "fas fa-water",
            ReferencePointKind::Centro => "fas fa-city",
            ReferencePointKind::Outro => "fas fa-map-marker-alt",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            ReferencePointKind::Praia => "#00BCD4",
            ReferencePointKind::Lagoa => "#4CAF50",
            ReferencePointKind::Centro => "#FF9800",
            ReferencePointKind::Outro => "#2196F3",
        }
    }
}

/// Punto de referencia (inmutable durante la sesión)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferencePoint {
    #[serde(rename = "nome")]
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(rename = "tipo")]
    pub kind: ReferencePointKind,
    #[serde(rename = "descricao", default)]
    pub description: String,
}

impl ReferencePoint {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::named(self.lat, self.lng, self.name.clone())
    }
}

/// Respuesta de GET /api/pontos_turisticos
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferencePointsResponse {
    #[serde(rename = "sucesso", default)]
    pub success: bool,
    #[serde(rename = "pontos", default)]
    pub points: Vec<ReferencePoint>,
    #[serde(rename = "mensagem", default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_server_points_and_unknown_kinds() {
        let body = r#"{"sucesso": true, "pontos": [
            {"nome": "Praia de Maricá", "lat": -22.9189, "lng": -42.8194, "tipo": "praia", "descricao": "Principal praia da cidade"},
            {"nome": "Mirante", "lat": -22.95, "lng": -42.9, "tipo": "mirante", "descricao": ""}
        ]}"#;
        let response: ReferencePointsResponse = serde_json::from_str(body).unwrap();
        assert!(response.success);
        assert_eq!(response.points[0].kind, ReferencePointKind::Praia);
        assert_eq!(response.points[1].kind, ReferencePointKind::Outro);
        assert_eq!(response.points[1].kind.icon_class(), "fas fa-map-marker-alt");

        let coord = response.points[0].coordinate();
        assert_eq!(coord.name.as_deref(), Some("Praia de Maricá"));
    }
}
