use serde::{Deserialize, Serialize};
use crate::models::coordinate::Coordinate;

/// Body de POST /api/buscar_endereco (texto libre o "lat, lng")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub lat: f64,
    pub lng: f64,
    #[serde(rename = "nome", default)]
    pub name: Option<String>,
}

impl SearchResult {
    pub fn to_coordinate(&self) -> Coordinate {
        Coordinate {
            lat: self.lat,
            lng: self.lng,
            name: self.name.clone().filter(|n| !n.trim().is_empty()),
        }
    }
}

/// Respuesta de POST /api/buscar_endereco
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(rename = "sucesso", default)]
    pub success: bool,
    #[serde(rename = "resultados", default)]
    pub results: Vec<SearchResult>,
    #[serde(rename = "mensagem", default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl SearchResponse {
    /// Primer resultado utilizable (solo si sucesso = true)
    pub fn first_result(&self) -> Option<&SearchResult> {
        if self.success {
            self.results.first()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_result_requires_success() {
        let body = r#"{"sucesso": true, "resultados": [
            {"nome": "Praça Orlando de Barros Pimentel, Centro, Maricá", "lat": -22.918, "lng": -42.819},
            {"nome": "Outro", "lat": 0.0, "lng": 0.0}
        ]}"#;
        let response: SearchResponse = serde_json::from_str(body).unwrap();
        let first = response.first_result().unwrap().to_coordinate();
        assert_eq!(first.lat, -22.918);
        assert_eq!(first.name.as_deref(), Some("Praça Orlando de Barros Pimentel, Centro, Maricá"));
    }

    #[test]
    fn failure_and_error_shapes_yield_nothing() {
        let not_found: SearchResponse =
            serde_json::from_str(r#"{"sucesso": false, "mensagem": "Endereço não encontrado em Maricá"}"#).unwrap();
        assert!(not_found.first_result().is_none());

        // El servidor responde {"error": ...} cuando falta la query
        let missing_query: SearchResponse = serde_json::from_str(r#"{"error": "Query não fornecida"}"#).unwrap();
        assert!(missing_query.first_result().is_none());

        let empty: SearchResponse = serde_json::from_str(r#"{"sucesso": true, "resultados": []}"#).unwrap();
        assert!(empty.first_result().is_none());
    }

    #[test]
    fn blank_names_are_dropped() {
        let result = SearchResult { lat: 1.0, lng: 2.0, name: Some(" ".to_string()) };
        assert_eq!(result.to_coordinate().name, None);
    }
}
